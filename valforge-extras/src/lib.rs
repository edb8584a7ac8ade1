//! # Valforge Extras
//!
//! Ready-made custom generators for the valforge registry.
//!
//! This crate provides registry generators for:
//! - **Numeric**: bounded integers, percentages
//! - **Text**: printable ASCII and alphanumeric strings
//! - **DateTime**: recent and future timestamps
//!
//! All generators use **std library only** (plus `rand`, which you already
//! have from `valforge`).
//!
//! ## Quick Start
//!
//! ```rust
//! use valforge::{generate, GeneratorConfig, IntWidth, Shape, Value};
//! use valforge::rng::create_seeded_rng;
//! use valforge_extras::prelude::*;
//!
//! let mut config = GeneratorConfig::default();
//! config
//!     .generators
//!     .register(Shape::Str, AsciiStringGenerator::new(1, 16));
//! config
//!     .generators
//!     .register(Shape::Uint(IntWidth::W8), BoundedIntGenerator::new(1u8, 6u8));
//!
//! let mut rng = create_seeded_rng(3);
//! match generate(&Shape::Uint(IntWidth::W8), &mut rng, &config).unwrap() {
//!     Value::Uint(_, roll) => assert!((1..=6).contains(&roll)),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod generators;

/// Convenient re-exports of all extra generators
pub mod prelude {
    pub use crate::generators::datetime::{FutureTimestampGenerator, RecentTimestampGenerator};
    pub use crate::generators::numeric::BoundedIntGenerator;
    pub use crate::generators::text::{AlphanumericGenerator, AsciiStringGenerator};
}
