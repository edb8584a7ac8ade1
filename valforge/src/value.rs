//! Dynamically-typed values produced by the engine.
//!
//! A [`Value`] carries one variant per [`Shape`] kind. Values are freshly
//! constructed per generation call and owned exclusively by the caller;
//! composites never share children.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::shape::{Field, IntWidth, Opaque, Shape};

/// An associative collection with overwrite-on-equal-key insertion.
///
/// Backed by an association list rather than a hash map: generated keys may
/// contain floats, so no `Eq + Hash` bound can be imposed on them. Duplicate
/// keys silently coalesce, so the effective cardinality may be less than the
/// number of insertions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing the value of an equal existing key.
    pub fn insert(&mut self, key: Value, value: Value) {
        for (k, v) in &mut self.entries {
            if *k == key {
                *v = value;
                return;
            }
        }
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }
}

/// A dynamically-typed instance of some [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Signed integer narrowed to its width, stored sign-extended.
    Int(IntWidth, i64),
    /// Unsigned integer narrowed to its width, stored zero-extended.
    Uint(IntWidth, u64),
    F32(f32),
    F64(f64),
    /// Real and imaginary `f32` components.
    Complex64(f32, f32),
    /// Real and imaginary `f64` components.
    Complex128(f64, f64),
    Str(String),
    Pointer(Option<Box<Value>>),
    Array(Vec<Value>),
    Seq(Vec<Value>),
    Map(MapValue),
    /// Fields in declaration order.
    Struct(Vec<(String, Value)>),
    Timestamp(SystemTime),
    Duration(Duration),
}

impl Value {
    /// The zero value for a shape: false, 0, empty string, absent pointer,
    /// zero-filled array, empty sequence/map, zero-filled struct, the epoch,
    /// the zero duration. A custom opaque has no intrinsic zero; its nil
    /// form is the absent pointer.
    pub fn zero(shape: &Shape) -> Value {
        match shape {
            Shape::Bool => Value::Bool(false),
            Shape::Int(w) => Value::Int(*w, 0),
            Shape::Uint(w) => Value::Uint(*w, 0),
            Shape::Float32 => Value::F32(0.0),
            Shape::Float64 => Value::F64(0.0),
            Shape::Complex64 => Value::Complex64(0.0, 0.0),
            Shape::Complex128 => Value::Complex128(0.0, 0.0),
            Shape::Str => Value::Str(String::new()),
            Shape::Pointer(_) => Value::Pointer(None),
            Shape::Array(n, elem) => Value::Array((0..*n).map(|_| Value::zero(elem)).collect()),
            Shape::Seq(_) => Value::Seq(Vec::new()),
            Shape::Map(..) => Value::Map(MapValue::new()),
            Shape::Struct(fields) => Value::Struct(
                fields
                    .iter()
                    .map(|f| (f.name.clone(), Value::zero(&f.shape)))
                    .collect(),
            ),
            Shape::Opaque(Opaque::Timestamp) => Value::Timestamp(UNIX_EPOCH),
            Shape::Opaque(Opaque::Duration) => Value::Duration(Duration::ZERO),
            Shape::Opaque(Opaque::Custom(_)) => Value::Pointer(None),
        }
    }

    /// Zero this value in place, keeping its kind and widths.
    pub fn clear(&mut self) {
        match self {
            Value::Bool(b) => *b = false,
            Value::Int(_, v) => *v = 0,
            Value::Uint(_, v) => *v = 0,
            Value::F32(v) => *v = 0.0,
            Value::F64(v) => *v = 0.0,
            Value::Complex64(re, im) => {
                *re = 0.0;
                *im = 0.0;
            }
            Value::Complex128(re, im) => {
                *re = 0.0;
                *im = 0.0;
            }
            Value::Str(s) => s.clear(),
            Value::Pointer(p) => *p = None,
            Value::Array(items) => {
                for item in items {
                    item.clear();
                }
            }
            Value::Seq(items) => items.clear(),
            Value::Map(m) => *m = MapValue::new(),
            Value::Struct(fields) => {
                for (_, v) in fields {
                    v.clear();
                }
            }
            Value::Timestamp(t) => *t = UNIX_EPOCH,
            Value::Duration(d) => *d = Duration::ZERO,
        }
    }

    /// Short name of this value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(..) => "int",
            Value::Uint(..) => "uint",
            Value::F32(_) => "float32",
            Value::F64(_) => "float64",
            Value::Complex64(..) => "complex64",
            Value::Complex128(..) => "complex128",
            Value::Str(_) => "string",
            Value::Pointer(_) => "pointer",
            Value::Array(_) => "array",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
            Value::Timestamp(_) => "timestamp",
            Value::Duration(_) => "duration",
        }
    }

    /// Recover the shape of this value where it is derivable.
    ///
    /// Absent pointers and empty collections carry no element shape, so
    /// recovery returns `None` for them (and for anything containing them).
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Value::Bool(_) => Some(Shape::Bool),
            Value::Int(w, _) => Some(Shape::Int(*w)),
            Value::Uint(w, _) => Some(Shape::Uint(*w)),
            Value::F32(_) => Some(Shape::Float32),
            Value::F64(_) => Some(Shape::Float64),
            Value::Complex64(..) => Some(Shape::Complex64),
            Value::Complex128(..) => Some(Shape::Complex128),
            Value::Str(_) => Some(Shape::Str),
            Value::Pointer(Some(inner)) => inner.shape().map(Shape::pointer),
            Value::Pointer(None) => None,
            Value::Array(items) => {
                let elem = items.first()?.shape()?;
                Some(Shape::array(items.len(), elem))
            }
            Value::Seq(items) => {
                let elem = items.first()?.shape()?;
                Some(Shape::seq(elem))
            }
            Value::Map(m) => {
                let (k, v) = m.entries().first()?;
                Some(Shape::map(k.shape()?, v.shape()?))
            }
            Value::Struct(fields) => {
                let fields = fields
                    .iter()
                    .map(|(name, v)| v.shape().map(|s| Field::new(name.clone(), s)))
                    .collect::<Option<Vec<_>>>()?;
                Some(Shape::Struct(fields))
            }
            Value::Timestamp(_) => Some(Shape::Opaque(Opaque::Timestamp)),
            Value::Duration(_) => Some(Shape::Opaque(Opaque::Duration)),
        }
    }

    /// Structural conformance check against a shape.
    ///
    /// Absent pointers conform to any pointer shape; anything conforms to a
    /// custom opaque (whatever its registered generator produced).
    pub fn conforms_to(&self, shape: &Shape) -> bool {
        match (self, shape) {
            (Value::Bool(_), Shape::Bool) => true,
            (Value::Int(vw, _), Shape::Int(sw)) => vw == sw,
            (Value::Uint(vw, _), Shape::Uint(sw)) => vw == sw,
            (Value::F32(_), Shape::Float32) => true,
            (Value::F64(_), Shape::Float64) => true,
            (Value::Complex64(..), Shape::Complex64) => true,
            (Value::Complex128(..), Shape::Complex128) => true,
            (Value::Str(_), Shape::Str) => true,
            (Value::Pointer(None), Shape::Pointer(_)) => true,
            (Value::Pointer(Some(inner)), Shape::Pointer(elem)) => inner.conforms_to(elem),
            (Value::Array(items), Shape::Array(n, elem)) => {
                items.len() == *n && items.iter().all(|v| v.conforms_to(elem))
            }
            (Value::Seq(items), Shape::Seq(elem)) => items.iter().all(|v| v.conforms_to(elem)),
            (Value::Map(m), Shape::Map(key, value)) => m
                .entries()
                .iter()
                .all(|(k, v)| k.conforms_to(key) && v.conforms_to(value)),
            (Value::Struct(values), Shape::Struct(fields)) => {
                values.len() == fields.len()
                    && values
                        .iter()
                        .zip(fields)
                        .all(|((name, v), f)| *name == f.name && v.conforms_to(&f.shape))
            }
            (Value::Timestamp(_), Shape::Opaque(Opaque::Timestamp)) => true,
            (Value::Duration(_), Shape::Opaque(Opaque::Duration)) => true,
            (_, Shape::Opaque(Opaque::Custom(_))) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Compact single-line rendering, used for map-key labels in traversal
    /// paths: `[1 2 3]` for collections, `{a b}` for structs, `&v` / `<nil>`
    /// for pointers, `map[k:v]` for maps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(_, v) => write!(f, "{}", v),
            Value::Uint(_, v) => write!(f, "{}", v),
            Value::F32(v) => write!(f, "{}", v),
            Value::F64(v) => write!(f, "{}", v),
            Value::Complex64(re, im) => write!(f, "({}{:+}i)", re, im),
            Value::Complex128(re, im) => write!(f, "({}{:+}i)", re, im),
            Value::Str(s) => write!(f, "{}", s),
            Value::Pointer(None) => write!(f, "<nil>"),
            Value::Pointer(Some(inner)) => write!(f, "&{}", inner),
            Value::Array(items) | Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "map[")?;
                for (i, (k, v)) in m.entries().iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}:{}", k, v)?;
                }
                write!(f, "]")
            }
            Value::Struct(fields) => {
                write!(f, "{{")?;
                for (i, (_, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "}}")
            }
            Value::Timestamp(t) => match t.duration_since(UNIX_EPOCH) {
                Ok(d) => write!(f, "@{}", d.as_secs()),
                Err(e) => write!(f, "@-{}", e.duration().as_secs()),
            },
            Value::Duration(d) => write!(f, "{:?}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_insert_overwrites_equal_key() {
        let mut m = MapValue::new();
        m.insert(Value::Str("a".into()), Value::Bool(false));
        m.insert(Value::Str("b".into()), Value::Bool(false));
        m.insert(Value::Str("a".into()), Value::Bool(true));

        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&Value::Str("a".into())), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_zero_values() {
        let shape = Shape::Struct(vec![
            Field::new("flag", Shape::Bool),
            Field::new("items", Shape::seq(Shape::Str)),
            Field::new("fixed", Shape::array(2, Shape::Int(IntWidth::W8))),
            Field::new("link", Shape::pointer(Shape::Str)),
        ]);
        let zero = Value::zero(&shape);
        assert_eq!(
            zero,
            Value::Struct(vec![
                ("flag".into(), Value::Bool(false)),
                ("items".into(), Value::Seq(vec![])),
                (
                    "fixed".into(),
                    Value::Array(vec![
                        Value::Int(IntWidth::W8, 0),
                        Value::Int(IntWidth::W8, 0)
                    ])
                ),
                ("link".into(), Value::Pointer(None)),
            ])
        );
        assert!(zero.conforms_to(&shape));
    }

    #[test]
    fn test_clear_in_place() {
        let mut v = Value::Int(IntWidth::W32, 10);
        v.clear();
        assert_eq!(v, Value::Int(IntWidth::W32, 0));

        let mut p = Value::Pointer(Some(Box::new(Value::Bool(true))));
        p.clear();
        assert_eq!(p, Value::Pointer(None));

        let mut s = Value::Str("Mu".into());
        s.clear();
        assert_eq!(s, Value::Str(String::new()));

        let mut st = Value::Struct(vec![
            ("a".into(), Value::Uint(IntWidth::W64, 9)),
            ("b".into(), Value::Seq(vec![Value::Bool(true)])),
        ]);
        st.clear();
        assert_eq!(
            st,
            Value::Struct(vec![
                ("a".into(), Value::Uint(IntWidth::W64, 0)),
                ("b".into(), Value::Seq(vec![])),
            ])
        );
    }

    #[test]
    fn test_shape_recovery() {
        let v = Value::Seq(vec![Value::Int(IntWidth::W16, 4)]);
        assert_eq!(v.shape(), Some(Shape::seq(Shape::Int(IntWidth::W16))));

        // Empty collections and absent pointers are unresolvable.
        assert_eq!(Value::Seq(vec![]).shape(), None);
        assert_eq!(Value::Pointer(None).shape(), None);

        let s = Value::Struct(vec![("x".into(), Value::F64(1.5))]);
        assert_eq!(
            s.shape(),
            Some(Shape::Struct(vec![Field::new("x", Shape::Float64)]))
        );
    }

    #[test]
    fn test_conformance_mismatches() {
        assert!(!Value::Bool(true).conforms_to(&Shape::Str));
        assert!(!Value::Int(IntWidth::W8, 1).conforms_to(&Shape::Int(IntWidth::W16)));
        assert!(
            !Value::Array(vec![Value::Bool(true)]).conforms_to(&Shape::array(2, Shape::Bool))
        );
        // Any value conforms to a custom opaque.
        assert!(Value::Str("id".into()).conforms_to(&Shape::Opaque(Opaque::Custom("id".into()))));
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Pointer(None).to_string(), "<nil>");
        assert_eq!(
            Value::Seq(vec![Value::Int(IntWidth::W8, 1), Value::Int(IntWidth::W8, 2)])
                .to_string(),
            "[1 2]"
        );
        assert_eq!(Value::Complex64(1.0, -2.0).to_string(), "(1-2i)");

        let mut m = MapValue::new();
        m.insert(Value::Str("k".into()), Value::Uint(IntWidth::W8, 7));
        assert_eq!(Value::Map(m).to_string(), "map[k:7]");

        let s = Value::Struct(vec![
            ("a".into(), Value::Int(IntWidth::W64, 3)),
            ("b".into(), Value::Str("x".into())),
        ]);
        assert_eq!(s.to_string(), "{3 x}");
    }
}
