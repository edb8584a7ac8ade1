//! Text generators for constrained alphabets
//!
//! The engine's own strings roam the whole code-point space, which is the
//! right default for robustness testing and the wrong one for anything that
//! ends up in a log line or a filename. These generators keep strings inside
//! familiar alphabets.

use rand::Rng;
use valforge::{CustomGenerator, Shape, Value};

/// Generator for printable ASCII strings (0x20..=0x7E)
#[derive(Debug, Clone)]
pub struct AsciiStringGenerator {
    min_len: usize,
    max_len: usize,
}

impl AsciiStringGenerator {
    /// Create a new ASCII string generator with length bounds
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }
}

impl CustomGenerator for AsciiStringGenerator {
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        if !matches!(shape, Shape::Str) {
            return None;
        }
        let len = rng.gen_range(self.min_len..=self.max_len);
        let s: String = (0..len)
            .map(|_| rng.gen_range(0x20u8..=0x7E) as char)
            .collect();
        Some(Value::Str(s))
    }
}

/// Generator for alphanumeric strings (a-z, A-Z, 0-9)
#[derive(Debug, Clone)]
pub struct AlphanumericGenerator {
    min_len: usize,
    max_len: usize,
}

impl AlphanumericGenerator {
    /// Create a new alphanumeric generator with length bounds
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    fn generate_char(&self, rng: &mut dyn rand::RngCore) -> char {
        let all = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        all[rng.gen_range(0..all.len())] as char
    }
}

impl CustomGenerator for AlphanumericGenerator {
    fn generate(&self, shape: &Shape, rng: &mut dyn rand::RngCore) -> Option<Value> {
        if !matches!(shape, Shape::Str) {
            return None;
        }
        let len = rng.gen_range(self.min_len..=self.max_len);
        Some(Value::Str((0..len).map(|_| self.generate_char(rng)).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use valforge::rng::create_seeded_rng;
    use valforge::{generate, GeneratorConfig};

    #[test]
    fn test_ascii_strings_are_printable() {
        let mut config = GeneratorConfig::default();
        config
            .generators
            .register(Shape::Str, AsciiStringGenerator::new(1, 20));

        let mut rng = create_seeded_rng(1);
        for _ in 0..100 {
            match generate(&Shape::Str, &mut rng, &config).unwrap() {
                Value::Str(s) => {
                    assert!((1..=20).contains(&s.len()));
                    assert!(s.chars().all(|c| (' '..='~').contains(&c)));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_alphanumeric_strings() {
        let generator = AlphanumericGenerator::new(5, 8);
        let mut rng = create_seeded_rng(2);
        for _ in 0..100 {
            match generator.generate(&Shape::Str, &mut rng).unwrap() {
                Value::Str(s) => {
                    assert!((5..=8).contains(&s.len()));
                    assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_non_string_shape_fails() {
        let generator = AsciiStringGenerator::new(0, 4);
        let mut rng = create_seeded_rng(3);
        assert!(generator.generate(&Shape::Bool, &mut rng).is_none());
    }
}
