//! The recursive budgeted generation engine.
//!
//! [`generate`] walks a [`Shape`] and produces one randomly populated
//! [`Value`] of it, spending a depth budget and a size budget as it descends.
//! Both budgets decrement on every recursive step, including the outermost
//! one, and the remaining size is split across composite children so total
//! output volume stays bounded no matter how the shape nests.
//!
//! Resolution order at every step:
//! 1. A registered custom generator (exact shape, then wildcard) pre-empts
//!    everything and is not budgeted further — the callback owns its own
//!    termination.
//! 2. Opaque shapes are synthesized directly without structural recursion.
//! 3. Structural dispatch on the shape kind.
//!
//! Failure is a plain `None`: no diagnostics, no retries, no partial values.
//! The first failure anywhere in a composite aborts the whole call.

use crate::config::GeneratorConfig;
use crate::primitives::{
    narrow_int, narrow_uint, rand_duration, rand_float32, rand_float64, rand_int64, rand_string,
    rand_time,
};
use crate::shape::{Opaque, Shape};
use crate::value::{MapValue, Value};

use rand::Rng;

/// Fixed size allowance handed to each non-composite struct field, so wide
/// scalar sections of a struct cannot starve its nested fields of budget.
const SCALAR_FIELD_ALLOWANCE: i64 = 2;

/// Generate one value of `shape`.
///
/// Unconfigured (zero) depth and size bounds are treated as effectively
/// unlimited, not as zero capacity. Returns `None` when no value can be
/// produced for this shape under this configuration — an expected outcome
/// the caller must check, not an exceptional one.
pub fn generate(
    shape: &Shape,
    rng: &mut dyn rand::RngCore,
    config: &GeneratorConfig,
) -> Option<Value> {
    let size = if config.size == 0 {
        i64::MAX
    } else {
        config.size as i64
    };
    let depth = if config.depth == 0 {
        i64::MAX
    } else {
        config.depth as i64
    };
    generate_value(shape, rng, config, depth, size)
}

fn generate_value(
    shape: &Shape,
    rng: &mut dyn rand::RngCore,
    config: &GeneratorConfig,
    depth: i64,
    size: i64,
) -> Option<Value> {
    // Every invocation pays one unit of both budgets.
    let depth = depth - 1;
    let size = size - 1;

    if let Some(custom) = config.generators.lookup(shape) {
        return custom.generate(shape, rng);
    }

    match shape {
        Shape::Bool => Some(Value::Bool(rng.r#gen())),
        Shape::Int(w) => Some(Value::Int(*w, narrow_int(rand_int64(rng), *w))),
        Shape::Uint(w) => Some(Value::Uint(*w, narrow_uint(rand_int64(rng) as u64, *w))),
        Shape::Float32 => Some(Value::F32(rand_float32(rng))),
        Shape::Float64 => Some(Value::F64(rand_float64(rng))),
        Shape::Complex64 => {
            let re = rand_float32(rng);
            let im = rand_float32(rng);
            Some(Value::Complex64(re, im))
        }
        Shape::Complex128 => {
            let re = rand_float64(rng);
            let im = rand_float64(rng);
            Some(Value::Complex128(re, im))
        }
        Shape::Str => Some(Value::Str(rand_string(rng, config.max_string_length))),
        Shape::Pointer(elem) => {
            if config.must_be_nil(rng, depth, size) {
                Some(Value::Pointer(None))
            } else {
                // One extra unit is charged for the indirection itself.
                let inner = generate_value(elem, rng, config, depth, size - 1)?;
                Some(Value::Pointer(Some(Box::new(inner))))
            }
        }
        Shape::Array(n, elem) => {
            let mut items = Vec::with_capacity(*n);
            if *n > 0 {
                // Each element gets its own slice of the budget rather than
                // depleting a shared running total.
                let share = element_share(size, *n);
                for _ in 0..*n {
                    items.push(generate_value(elem, rng, config, depth, share)?);
                }
            }
            Some(Value::Array(items))
        }
        Shape::Seq(elem) => {
            let n = config.length(rng, depth, size);
            let mut items = Vec::with_capacity(n);
            if n > 0 {
                let share = element_share(size, n);
                for _ in 0..n {
                    items.push(generate_value(elem, rng, config, depth, share)?);
                }
            }
            Some(Value::Seq(items))
        }
        Shape::Map(key, value) => {
            let n = config.length(rng, depth, size);
            let mut map = MapValue::new();
            if n > 0 {
                let share = element_share(size, n);
                for _ in 0..n {
                    let k = generate_value(key, rng, config, depth, share)?;
                    let v = generate_value(value, rng, config, depth, share)?;
                    // Equal keys coalesce; the map may end up smaller than n.
                    map.insert(k, v);
                }
            }
            Some(Value::Map(map))
        }
        Shape::Struct(fields) => {
            let composites = fields
                .iter()
                .filter(|f| !f.skip && f.shape.is_composite())
                .count() as i64;
            let scalars = fields
                .iter()
                .filter(|f| !f.skip && !f.shape.is_composite())
                .count() as i64;

            // Scalar fields draw from a fixed allowance; what the budget has
            // left after them is divided among the composite fields.
            let mut share = size - scalars;
            if share > 0 && composites > 0 {
                share = (share / composites).max(1);
            } else {
                share = 1;
            }

            let mut out = Vec::with_capacity(fields.len());
            for field in fields {
                let value = if field.skip {
                    Value::zero(&field.shape)
                } else if field.shape.is_composite() {
                    generate_value(&field.shape, rng, config, depth, share)?
                } else {
                    generate_value(&field.shape, rng, config, depth, SCALAR_FIELD_ALLOWANCE)?
                };
                out.push((field.name.clone(), value));
            }
            Some(Value::Struct(out))
        }
        Shape::Opaque(Opaque::Timestamp) => Some(Value::Timestamp(rand_time(
            rng,
            config.min_time,
            config.max_time,
        ))),
        Shape::Opaque(Opaque::Duration) => Some(Value::Duration(rand_duration(rng))),
        // An opaque the engine cannot synthesize and nobody registered.
        Shape::Opaque(Opaque::Custom(_)) => None,
    }
}

fn element_share(size: i64, n: usize) -> i64 {
    (size / n as i64).max(1)
}
