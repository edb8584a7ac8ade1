//! Constrained numeric generators
//!
//! Bounded integers for registry shapes whose full-width draws are too wild:
//! dice rolls, ports, percentages, quantities.

use num_traits::{PrimInt, ToPrimitive};
use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use valforge::{CustomGenerator, Shape, Value, narrow_int, narrow_uint};

/// Generator producing integers within `[min, max]` for signed and unsigned
/// integer shapes of any width.
///
/// The drawn value is narrowed to the target shape's width, so bounds wider
/// than the shape wrap like a cast.
#[derive(Debug, Clone)]
pub struct BoundedIntGenerator<T> {
    min: T,
    max: T,
}

impl<T> BoundedIntGenerator<T>
where
    T: PrimInt + SampleUniform,
{
    /// Create a new bounded integer generator
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Bounds for a percentage value (0..=100)
    pub fn percentage() -> Self {
        Self {
            min: T::zero(),
            max: T::from(100).unwrap_or_else(T::max_value),
        }
    }
}

impl<T> CustomGenerator for BoundedIntGenerator<T>
where
    T: PrimInt + ToPrimitive + SampleUniform + Send + Sync + 'static,
{
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        let drawn = rng.gen_range(self.min..=self.max);
        match shape {
            Shape::Int(w) => Some(Value::Int(*w, narrow_int(drawn.to_i64()?, *w))),
            Shape::Uint(w) => Some(Value::Uint(*w, narrow_uint(drawn.to_u64()?, *w))),
            _ => None,
        }
    }
}
