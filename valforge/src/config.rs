//! Configuration for the generation engine.
//!
//! A [`GeneratorConfig`] is built once — via [`GeneratorConfig::default`] or
//! the validating [`GeneratorConfig::new`] — optionally adjusted, and then
//! treated as read-only for the duration of any generation call. There is no
//! process-wide default; callers own their configuration explicitly.

use std::fmt;
use std::time::SystemTime;

use rand::Rng;

use crate::generator::GeneratorRegistry;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `max_length` is below `min_length`
    InvalidLengthBounds { min: usize, max: usize },
    /// Nil probability outside [0, 100]
    InvalidNilProbability(u32),
    /// `max_time` precedes `min_time`
    InvalidTimeBounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLengthBounds { min, max } => {
                write!(
                    f,
                    "Invalid length bounds: max_length {} < min_length {}",
                    max, min
                )
            }
            ConfigError::InvalidNilProbability(p) => {
                write!(f, "Invalid nil probability: {} (must be <= 100)", p)
            }
            ConfigError::InvalidTimeBounds => {
                write!(f, "Invalid time bounds (max_time precedes min_time)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Knobs controlling the generation engine.
#[derive(Debug)]
pub struct GeneratorConfig {
    /// Maximum recursive descent count. 0 = unlimited.
    pub depth: usize,
    /// Total size budget consumed across a whole generation call. 0 = unlimited.
    pub size: usize,
    /// Minimum length of arrays, sequences, and maps. Default 0.
    pub min_length: usize,
    /// Maximum length of arrays, sequences, and maps. Default 100.
    pub max_length: usize,
    /// Maximum generated string length. Default 100.
    pub max_string_length: usize,
    /// Probability that a pointer resolves to absent: 0 = never, 100 = always.
    /// Default 10.
    pub nil_probability: u32,
    /// Lower bound for generated timestamps. `None` means the epoch.
    pub min_time: Option<SystemTime>,
    /// Upper bound for generated timestamps. `None` means a fixed far-future
    /// bound (2100-01-01T00:00:00Z).
    pub max_time: Option<SystemTime>,
    /// Custom per-shape generators, consulted before structural generation.
    pub generators: GeneratorRegistry,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth: 0,
            size: 0,
            min_length: 0,
            max_length: 100,
            max_string_length: 100,
            nil_probability: 10,
            min_time: None,
            max_time: None,
            generators: GeneratorRegistry::new(),
        }
    }
}

impl Clone for GeneratorConfig {
    fn clone(&self) -> Self {
        Self {
            depth: self.depth,
            size: self.size,
            min_length: self.min_length,
            max_length: self.max_length,
            max_string_length: self.max_string_length,
            nil_probability: self.nil_probability,
            min_time: self.min_time,
            max_time: self.max_time,
            // Custom generators are trait objects and cannot be cloned;
            // a cloned config starts with an empty registry.
            generators: GeneratorRegistry::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with validation. Timestamps bounds and the
    /// registry start at their defaults and can be set on the returned value.
    pub fn new(
        depth: usize,
        size: usize,
        min_length: usize,
        max_length: usize,
        max_string_length: usize,
        nil_probability: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            depth,
            size,
            min_length,
            max_length,
            max_string_length,
            nil_probability,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_length < self.min_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.nil_probability > 100 {
            return Err(ConfigError::InvalidNilProbability(self.nil_probability));
        }
        if let (Some(min), Some(max)) = (self.min_time, self.max_time) {
            if max < min {
                return Err(ConfigError::InvalidTimeBounds);
            }
        }
        Ok(())
    }

    /// Decide whether a pointer must be absent given the remaining budgets.
    ///
    /// Budget exhaustion always forces absence; otherwise a uniform draw in
    /// [0, 100) is compared against `nil_probability`.
    pub fn must_be_nil(&self, rng: &mut dyn rand::RngCore, depth: i64, size: i64) -> bool {
        if depth <= 0 || size <= 0 {
            return true;
        }
        rng.gen_range(0..100) < self.nil_probability
    }

    /// Draw a collection length under the remaining budgets.
    ///
    /// Exhausted budgets yield 0. The configured minimum takes precedence
    /// over size pressure: a collection is never shrunk below `min_length`
    /// even when that exceeds the remaining budget. Above the minimum the
    /// draw is clamped to the remaining size only when a finite total budget
    /// is configured.
    pub fn length(&self, rng: &mut dyn rand::RngCore, depth: i64, size: i64) -> usize {
        if depth <= 0 || size <= 0 {
            return 0;
        }
        if self.min_length as i64 > size {
            return self.min_length;
        }
        let span = self.max_length.saturating_sub(self.min_length);
        let l = self.min_length + rng.gen_range(0..=span);
        if l as i64 > size && self.size != 0 {
            size as usize
        } else {
            l
        }
    }
}
