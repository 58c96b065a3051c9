//! Public library API for reading decoded JSON without repetitive type checks.

/// JSON classification, navigation, coercion, and decode helpers.
pub mod json;
