//! String-to-value coercion.
//!
//! A flat dispatch on the target shape's kind: integers accept base prefixes
//! (`0x`, `0o`, `0b`) and are range-checked against the declared width,
//! booleans use the classic vocabulary (`1 t T TRUE true True` and their
//! false counterparts), durations use unit-suffixed components
//! (`22h49m22s0ms`), timestamps are RFC 3339. Pointers wrap the coerced
//! target. No other shape has a textual form.

use std::time::{Duration, SystemTime};

use crate::error::CoerceError;
use crate::shape::{IntWidth, Opaque, Shape};
use crate::value::Value;

/// Coerce `src` into a value of `shape`.
pub fn from_str(shape: &Shape, src: &str) -> Result<Value, CoerceError> {
    match shape {
        Shape::Bool => parse_bool(src).map(Value::Bool),
        Shape::Int(w) => parse_int(src, *w).map(|v| Value::Int(*w, v)),
        Shape::Uint(w) => parse_uint(src, *w).map(|v| Value::Uint(*w, v)),
        Shape::Float32 => src
            .parse::<f32>()
            .map(Value::F32)
            .map_err(|_| CoerceError::InvalidNumber { input: src.into() }),
        Shape::Float64 => src
            .parse::<f64>()
            .map(Value::F64)
            .map_err(|_| CoerceError::InvalidNumber { input: src.into() }),
        Shape::Str => Ok(Value::Str(src.to_string())),
        Shape::Pointer(inner) => {
            from_str(inner, src).map(|v| Value::Pointer(Some(Box::new(v))))
        }
        Shape::Opaque(Opaque::Duration) => parse_duration(src).map(Value::Duration),
        Shape::Opaque(Opaque::Timestamp) => parse_timestamp(src).map(Value::Timestamp),
        other => Err(CoerceError::UnsupportedShape {
            shape: other.clone(),
        }),
    }
}

/// Split an optional base prefix off an unsigned digit string.
fn split_radix(s: &str) -> (u32, &str) {
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (2, rest)
    } else {
        (10, s)
    }
}

fn parse_int(src: &str, width: IntWidth) -> Result<i64, CoerceError> {
    let (negative, rest) = match src.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, src.strip_prefix('+').unwrap_or(src)),
    };
    let (radix, digits) = split_radix(rest);
    let magnitude = u64::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => CoerceError::OutOfRange {
            input: src.into(),
            bits: width.bits(),
            signed: true,
        },
        _ => CoerceError::InvalidNumber { input: src.into() },
    })?;

    let value = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    let bits = width.bits();
    let min = -(1i128 << (bits - 1));
    let max = (1i128 << (bits - 1)) - 1;
    if value < min || value > max {
        return Err(CoerceError::OutOfRange {
            input: src.into(),
            bits,
            signed: true,
        });
    }
    Ok(value as i64)
}

fn parse_uint(src: &str, width: IntWidth) -> Result<u64, CoerceError> {
    if src.starts_with('-') {
        return Err(CoerceError::InvalidNumber { input: src.into() });
    }
    let (radix, digits) = split_radix(src.strip_prefix('+').unwrap_or(src));
    let value = u64::from_str_radix(digits, radix)
        .map_err(|e| match e.kind() {
            std::num::IntErrorKind::PosOverflow => CoerceError::OutOfRange {
                input: src.into(),
                bits: width.bits(),
                signed: false,
            },
            _ => CoerceError::InvalidNumber { input: src.into() },
        })?;

    let bits = width.bits();
    if bits < 64 && value > (1u64 << bits) - 1 {
        return Err(CoerceError::OutOfRange {
            input: src.into(),
            bits,
            signed: false,
        });
    }
    Ok(value)
}

fn parse_bool(src: &str) -> Result<bool, CoerceError> {
    match src {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoerceError::InvalidBool { input: src.into() }),
    }
}

/// Parse a unit-suffixed duration: one or more `<decimal><unit>` components
/// where unit is `h`, `m`, `s`, `ms`, `us`, `µs`, or `ns`. A bare `"0"` is
/// the zero duration. Negative durations are not representable.
fn parse_duration(src: &str) -> Result<Duration, CoerceError> {
    let err = || CoerceError::InvalidDuration { input: src.into() };

    let mut s = src;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(err());
    }

    let mut total_secs = 0.0f64;
    while !s.is_empty() {
        let digits_end = s
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .ok_or_else(err)?;
        if digits_end == 0 {
            return Err(err());
        }
        let number: f64 = s[..digits_end].parse().map_err(|_| err())?;
        s = &s[digits_end..];

        let (factor, rest) = if let Some(rest) = s.strip_prefix("ns") {
            (1e-9, rest)
        } else if let Some(rest) = s.strip_prefix("us").or_else(|| s.strip_prefix("µs")) {
            (1e-6, rest)
        } else if let Some(rest) = s.strip_prefix("ms") {
            (1e-3, rest)
        } else if let Some(rest) = s.strip_prefix('s') {
            (1.0, rest)
        } else if let Some(rest) = s.strip_prefix('m') {
            (60.0, rest)
        } else if let Some(rest) = s.strip_prefix('h') {
            (3600.0, rest)
        } else {
            return Err(err());
        };
        total_secs += number * factor;
        s = rest;
    }

    if negative && total_secs > 0.0 {
        return Err(err());
    }
    if !total_secs.is_finite() || total_secs >= u64::MAX as f64 {
        return Err(err());
    }
    Ok(Duration::from_secs_f64(total_secs))
}

fn parse_timestamp(src: &str) -> Result<SystemTime, CoerceError> {
    chrono::DateTime::parse_from_rfc3339(src)
        .map(SystemTime::from)
        .map_err(|_| CoerceError::InvalidTimestamp { input: src.into() })
}
