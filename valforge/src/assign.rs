//! Value-to-value assignment: a thin convertibility check plus copy.
//!
//! Pointers are dereferenced on both sides. A string source is coerced into
//! the destination's recovered shape. Numeric kinds convert freely between
//! each other with cast semantics (truncation toward zero, width narrowing).
//! Everything else copies only between matching kinds, with recovered shapes
//! checked where they are derivable.

use crate::coerce;
use crate::error::AssignError;
use crate::primitives::{narrow_int, narrow_uint};
use crate::value::Value;

enum Num {
    I(i64),
    U(u64),
    F(f64),
}

fn numeric_of(value: &Value) -> Option<Num> {
    match value {
        Value::Int(_, v) => Some(Num::I(*v)),
        Value::Uint(_, v) => Some(Num::U(*v)),
        Value::F32(v) => Some(Num::F(*v as f64)),
        Value::F64(v) => Some(Num::F(*v)),
        _ => None,
    }
}

/// Assign `src` to `dst`, converting where the kinds allow it.
pub fn assign(dst: &mut Value, src: &Value) -> Result<(), AssignError> {
    // Dereference a non-absent source pointer.
    if let Value::Pointer(Some(inner)) = src {
        return assign(dst, inner);
    }

    // An absent source pointer clears a pointer destination.
    if matches!(src, Value::Pointer(None)) {
        if matches!(dst, Value::Pointer(_)) {
            *dst = Value::Pointer(None);
            return Ok(());
        }
        return Err(AssignError::NotConvertible {
            from: src.kind_name(),
            to: dst.kind_name(),
        });
    }

    // Assign through a non-absent destination pointer.
    if let Value::Pointer(Some(inner)) = dst {
        return assign(inner, src);
    }

    // A string source is coerced into the destination's shape, unless the
    // destination is itself a string.
    if let Value::Str(s) = src {
        if !matches!(dst, Value::Str(_)) {
            let shape = dst.shape().ok_or(AssignError::UnresolvedShape)?;
            *dst = coerce::from_str(&shape, s)?;
            return Ok(());
        }
    }

    let not_convertible = AssignError::NotConvertible {
        from: src.kind_name(),
        to: dst.kind_name(),
    };

    // Numeric cross-conversion with cast semantics.
    if let Some(num) = numeric_of(src) {
        match dst {
            Value::Int(w, slot) => {
                let raw = match num {
                    Num::I(v) => v,
                    Num::U(v) => v as i64,
                    Num::F(v) => v as i64,
                };
                *slot = narrow_int(raw, *w);
                return Ok(());
            }
            Value::Uint(w, slot) => {
                let raw = match num {
                    Num::I(v) => v as u64,
                    Num::U(v) => v,
                    Num::F(v) => v as u64,
                };
                *slot = narrow_uint(raw, *w);
                return Ok(());
            }
            Value::F32(slot) => {
                *slot = match num {
                    Num::I(v) => v as f32,
                    Num::U(v) => v as f32,
                    Num::F(v) => v as f32,
                };
                return Ok(());
            }
            Value::F64(slot) => {
                *slot = match num {
                    Num::I(v) => v as f64,
                    Num::U(v) => v as f64,
                    Num::F(v) => v,
                };
                return Ok(());
            }
            _ => return Err(not_convertible),
        }
    }

    // Composites copy only when their shapes agree; an unresolvable side
    // (empty collection) falls back to a same-kind copy.
    let same_kind_composite = matches!(
        (&*dst, src),
        (Value::Array(_), Value::Array(_))
            | (Value::Seq(_), Value::Seq(_))
            | (Value::Map(_), Value::Map(_))
            | (Value::Struct(_), Value::Struct(_))
    );
    if same_kind_composite {
        return match (dst.shape(), src.shape()) {
            (Some(a), Some(b)) if a != b => Err(not_convertible),
            _ => {
                *dst = src.clone();
                Ok(())
            }
        };
    }

    match (&mut *dst, src) {
        (Value::Bool(d), Value::Bool(s)) => {
            *d = *s;
            Ok(())
        }
        (Value::Str(d), Value::Str(s)) => {
            *d = s.clone();
            Ok(())
        }
        (Value::Complex64(dre, dim), Value::Complex64(sre, sim)) => {
            *dre = *sre;
            *dim = *sim;
            Ok(())
        }
        (Value::Complex128(dre, dim), Value::Complex128(sre, sim)) => {
            *dre = *sre;
            *dim = *sim;
            Ok(())
        }
        (Value::Complex64(dre, dim), Value::Complex128(sre, sim)) => {
            *dre = *sre as f32;
            *dim = *sim as f32;
            Ok(())
        }
        (Value::Complex128(dre, dim), Value::Complex64(sre, sim)) => {
            *dre = *sre as f64;
            *dim = *sim as f64;
            Ok(())
        }
        (Value::Timestamp(d), Value::Timestamp(s)) => {
            *d = *s;
            Ok(())
        }
        (Value::Duration(d), Value::Duration(s)) => {
            *d = *s;
            Ok(())
        }
        _ => Err(not_convertible),
    }
}
