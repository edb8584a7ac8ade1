//! Extra registry generators for common data patterns
//!
//! This module provides generators for:
//! - Numeric values with bounds (dice rolls, ports, percentages)
//! - Text in constrained alphabets (ASCII, alphanumeric)
//! - DateTime values anchored to the present (recent, future)

pub mod datetime;
pub mod numeric;
pub mod text;
