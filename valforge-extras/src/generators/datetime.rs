//! DateTime generators anchored to the present (std::time only)
//!
//! The engine's built-in timestamps span from the epoch to a far-future
//! bound; these generators keep them near the current moment instead.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use valforge::{CustomGenerator, Opaque, Shape, Value};

const TEN_YEARS_SECS: u64 = 10 * 365 * 24 * 60 * 60;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Generator for timestamps within the last ten years
#[derive(Debug, Clone)]
pub struct RecentTimestampGenerator {
    min_secs: u64,
    max_secs: u64,
}

impl RecentTimestampGenerator {
    /// Create a timestamp generator spanning the last ten years up to now
    pub fn new() -> Self {
        let now = now_secs();
        Self {
            min_secs: now.saturating_sub(TEN_YEARS_SECS),
            max_secs: now,
        }
    }
}

impl Default for RecentTimestampGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomGenerator for RecentTimestampGenerator {
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        if !matches!(shape, Shape::Opaque(Opaque::Timestamp)) {
            return None;
        }
        let secs = rng.gen_range(self.min_secs..=self.max_secs);
        Some(Value::Timestamp(UNIX_EPOCH + Duration::from_secs(secs)))
    }
}

/// Generator for timestamps within the next ten years
#[derive(Debug, Clone)]
pub struct FutureTimestampGenerator {
    min_secs: u64,
    max_secs: u64,
}

impl FutureTimestampGenerator {
    /// Create a timestamp generator spanning now to ten years from now
    pub fn new() -> Self {
        let now = now_secs();
        Self {
            min_secs: now,
            max_secs: now + TEN_YEARS_SECS,
        }
    }
}

impl Default for FutureTimestampGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomGenerator for FutureTimestampGenerator {
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        if !matches!(shape, Shape::Opaque(Opaque::Timestamp)) {
            return None;
        }
        let secs = rng.gen_range(self.min_secs..=self.max_secs);
        Some(Value::Timestamp(UNIX_EPOCH + Duration::from_secs(secs)))
    }
}
