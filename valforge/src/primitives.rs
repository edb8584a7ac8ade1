//! Primitive draw helpers.
//!
//! All engine randomness flows through these functions, so two runs with the
//! same seed draw identical sequences.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::shape::IntWidth;

/// Default upper bound for generated timestamps when none is configured:
/// 2100-01-01T00:00:00Z as seconds since the epoch.
pub const FAR_FUTURE_SECS: u64 = 4_102_444_800;

/// Random integer taking half the range of an `i64`.
///
/// A 63-bit draw shifted down by 2^62 — deliberately not the full 64-bit
/// range, so narrowed widths still see both signs and wraparound-adjacent
/// magnitudes without always saturating the extremes.
pub fn rand_int64(rng: &mut dyn rand::RngCore) -> i64 {
    ((rng.next_u64() >> 1) as i64) - (1 << 62)
}

/// Random float covering the full magnitude range of an `f32`, sign-randomized.
pub fn rand_float32(rng: &mut dyn rand::RngCore) -> f32 {
    let mut f = rng.r#gen::<f64>() * f32::MAX as f64;
    if rng.r#gen::<bool>() {
        f = -f;
    }
    f as f32
}

/// Random float covering the full magnitude range of an `f64`, sign-randomized.
pub fn rand_float64(rng: &mut dyn rand::RngCore) -> f64 {
    let mut f = rng.r#gen::<f64>() * f64::MAX;
    if rng.r#gen::<bool>() {
        f = -f;
    }
    f
}

/// Random string of up to `max_len` code points drawn from [0, 0x10FFFF].
///
/// Rust strings cannot hold surrogate code points; a draw landing in the
/// surrogate gap is replaced by the nearest valid scalar (U+D7FF below it,
/// U+E000 above it). Non-character code points are kept as drawn.
pub fn rand_string(rng: &mut dyn rand::RngCore, max_len: usize) -> String {
    let num_chars = rng.gen_range(0..=max_len);
    (0..num_chars)
        .map(|_| {
            let cp = rng.gen_range(0..=0x10FFFFu32);
            char::from_u32(cp).unwrap_or(if cp < 0xDC00 { '\u{D7FF}' } else { '\u{E000}' })
        })
        .collect()
}

/// Random timestamp with whole-second resolution in `[min, max]`.
///
/// `None` bounds resolve to the epoch and to [`FAR_FUTURE_SECS`]. Bounds
/// before the epoch clamp to it.
pub fn rand_time(
    rng: &mut dyn rand::RngCore,
    min: Option<SystemTime>,
    max: Option<SystemTime>,
) -> SystemTime {
    let min_secs = min.map_or(0, secs_since_epoch);
    let max_secs = max.map_or(FAR_FUTURE_SECS, secs_since_epoch).max(min_secs);
    UNIX_EPOCH + Duration::from_secs(rng.gen_range(min_secs..=max_secs))
}

/// Random duration of up to one day, with nanosecond resolution.
pub fn rand_duration(rng: &mut dyn rand::RngCore) -> Duration {
    let secs = rng.gen_range(0..=86_400u64);
    let nanos = rng.gen_range(0..1_000_000_000u32);
    Duration::new(secs, nanos)
}

fn secs_since_epoch(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
}

/// Narrow a raw draw to a signed width, stored sign-extended.
pub fn narrow_int(v: i64, width: IntWidth) -> i64 {
    match width {
        IntWidth::W8 => v as i8 as i64,
        IntWidth::W16 => v as i16 as i64,
        IntWidth::W32 => v as i32 as i64,
        IntWidth::W64 => v,
    }
}

/// Narrow a raw draw to an unsigned width, stored zero-extended.
pub fn narrow_uint(v: u64, width: IntWidth) -> u64 {
    match width {
        IntWidth::W8 => v as u8 as u64,
        IntWidth::W16 => v as u16 as u64,
        IntWidth::W32 => v as u32 as u64,
        IntWidth::W64 => v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_seeded_rng;

    #[test]
    fn test_rand_int64_range() {
        let mut rng = create_seeded_rng(1);
        for _ in 0..1000 {
            let v = rand_int64(&mut rng);
            assert!(v >= -(1 << 62));
            assert!(v < (1 << 62));
        }
    }

    #[test]
    fn test_rand_int64_hits_both_signs() {
        let mut rng = create_seeded_rng(2);
        let draws: Vec<i64> = (0..200).map(|_| rand_int64(&mut rng)).collect();
        assert!(draws.iter().any(|&v| v < 0));
        assert!(draws.iter().any(|&v| v > 0));
    }

    #[test]
    fn test_rand_floats_finite_and_signed() {
        let mut rng = create_seeded_rng(3);
        let mut seen_negative = false;
        let mut seen_positive = false;
        for _ in 0..200 {
            let f = rand_float64(&mut rng);
            assert!(f.is_finite());
            seen_negative |= f < 0.0;
            seen_positive |= f > 0.0;

            let g = rand_float32(&mut rng);
            assert!(g.is_finite());
        }
        assert!(seen_negative && seen_positive);
    }

    #[test]
    fn test_rand_string_length_bound() {
        let mut rng = create_seeded_rng(4);
        for _ in 0..100 {
            let s = rand_string(&mut rng, 16);
            assert!(s.chars().count() <= 16);
        }
        assert_eq!(rand_string(&mut rng, 0), "");
    }

    #[test]
    fn test_rand_time_bounds() {
        let mut rng = create_seeded_rng(5);
        let min = UNIX_EPOCH + Duration::from_secs(1_000);
        let max = UNIX_EPOCH + Duration::from_secs(2_000);
        for _ in 0..200 {
            let t = rand_time(&mut rng, Some(min), Some(max));
            assert!(t >= min && t <= max);
        }
    }

    #[test]
    fn test_rand_time_default_bounds() {
        let mut rng = create_seeded_rng(6);
        let far_future = UNIX_EPOCH + Duration::from_secs(FAR_FUTURE_SECS);
        for _ in 0..100 {
            let t = rand_time(&mut rng, None, None);
            assert!(t >= UNIX_EPOCH && t <= far_future);
        }
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(narrow_int(0x1FF, IntWidth::W8), -1);
        assert_eq!(narrow_int(0x1FF, IntWidth::W16), 0x1FF);
        assert_eq!(narrow_uint(0x1FF, IntWidth::W8), 0xFF);
        assert_eq!(narrow_uint(u64::MAX, IntWidth::W32), u32::MAX as u64);
    }

    #[test]
    fn test_determinism() {
        let mut a = create_seeded_rng(42);
        let mut b = create_seeded_rng(42);
        for _ in 0..50 {
            assert_eq!(rand_int64(&mut a), rand_int64(&mut b));
        }
        assert_eq!(rand_string(&mut a, 32), rand_string(&mut b, 32));
    }
}
