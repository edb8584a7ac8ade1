//! # Valforge - Budgeted Random Value Generation
//!
//! Valforge produces structurally valid, randomly populated instances of
//! arbitrary runtime type shapes — nested structs, maps, sequences, arrays,
//! pointers, primitives, and opaque types — under caller-supplied depth and
//! size budgets, so generation terminates and stays bounded no matter how a
//! shape nests or references itself.
//!
//! ## Quick Start
//!
//! ```rust
//! use valforge::{GeneratorConfig, IntWidth, Shape, generate};
//! use valforge::rng::create_seeded_rng;
//!
//! let mut config = GeneratorConfig::default();
//! config.depth = 10;
//! config.size = 1000;
//!
//! let shape = Shape::seq(Shape::Int(IntWidth::W64));
//! let mut rng = create_seeded_rng(42);
//!
//! let value = generate(&shape, &mut rng, &config).unwrap();
//! assert!(value.conforms_to(&shape));
//! ```
//!
//! All randomness is drawn through the supplied `rand::RngCore`, so a fixed
//! seed reproduces a failure exactly. Custom generators registered in
//! [`GeneratorConfig::generators`] pre-empt structural generation for their
//! shape; a wildcard entry catches everything else.
//!
//! Alongside the engine, the crate carries the utilities that usually travel
//! with one: string-to-value coercion ([`coerce`]), value assignment with a
//! convertibility check ([`assign`]), and a path-building visitor over value
//! trees ([`traverse`]).

// Public modules
pub mod assign;
pub mod coerce;
pub mod config;
pub mod error;
pub mod generate;
pub mod generator;
pub mod primitives;
pub mod rng;
pub mod shape;
pub mod traverse;
pub mod value;

// Re-export the main public API
pub use assign::assign;
pub use config::{ConfigError, GeneratorConfig};
pub use error::{AssignError, CoerceError};
pub use generate::generate;
pub use generator::{ConstantGenerator, CustomGenerator, GeneratorRegistry};
pub use primitives::*;
pub use rng::{DefaultRngProvider, RngManager, RngProvider, create_rng, create_seeded_rng};
pub use shape::{Field, IntWidth, Opaque, Shape};
pub use traverse::{traverse, traverse_fields};
pub use value::{MapValue, Value};
