//! Custom generator infrastructure and the per-shape registry.
//!
//! A registered [`CustomGenerator`] fully pre-empts structural generation for
//! its shape: the engine hands over the shape and the random source and
//! returns whatever the generator produces, without further budgeting. The
//! registry resolves an exact shape match first, then a wildcard fallback.

use std::collections::HashMap;
use std::fmt;

use crate::shape::Shape;
use crate::value::Value;

/// A caller-supplied generator that replaces structural generation for a
/// shape. `None` means the generator could not produce a value; the engine
/// propagates that as its own failure.
pub trait CustomGenerator: Send + Sync {
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value>;
}

impl<F> CustomGenerator for F
where
    F: Fn(&Shape, &mut dyn rand::RngCore) -> Option<Value> + Send + Sync,
{
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        self(shape, rng)
    }
}

/// Registry of custom generators keyed by shape, with an optional wildcard
/// entry that matches any shape.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<Shape, Box<dyn CustomGenerator>>,
    fallback: Option<Box<dyn CustomGenerator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            generators: HashMap::new(),
            fallback: None,
        }
    }

    /// Register a generator for a specific shape, replacing any previous one
    pub fn register<G: CustomGenerator + 'static>(&mut self, shape: Shape, generator: G) {
        self.generators.insert(shape, Box::new(generator));
    }

    /// Register the wildcard generator consulted when no exact match exists
    pub fn register_fallback<G: CustomGenerator + 'static>(&mut self, generator: G) {
        self.fallback = Some(Box::new(generator));
    }

    /// Resolve a generator: exact shape match first, then the wildcard
    pub fn lookup(&self, shape: &Shape) -> Option<&dyn CustomGenerator> {
        self.generators
            .get(shape)
            .or(self.fallback.as_ref())
            .map(|g| g.as_ref())
    }

    /// Check whether an exact entry is registered for a shape
    pub fn contains(&self, shape: &Shape) -> bool {
        self.generators.contains_key(shape)
    }

    /// Remove the exact entry for a shape
    pub fn remove(&mut self, shape: &Shape) -> bool {
        self.generators.remove(shape).is_some()
    }

    /// Remove the wildcard entry
    pub fn remove_fallback(&mut self) -> bool {
        self.fallback.take().is_some()
    }

    /// Number of exact entries (the wildcard is not counted)
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// True when there are no exact entries and no wildcard
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty() && self.fallback.is_none()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("exact", &self.generators.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// A generator that always produces the same value
#[derive(Debug, Clone)]
pub struct ConstantGenerator {
    value: Value,
}

impl ConstantGenerator {
    /// Create a new constant generator
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl CustomGenerator for ConstantGenerator {
    fn generate(&self, _shape: &Shape, _rng: &mut dyn rand::RngCore) -> Option<Value> {
        Some(self.value.clone())
    }
}
