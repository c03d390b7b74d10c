//! Plain objects and JSON helpers for the kata exercises.
//!
//! - [`Rectangle`] with a fixed `area` method
//! - [`to_json`] / [`from_json`] for any serde type
//! - [`Rectangle::from_json`], which reads a plain [`RectangleRecord`] first
//!   and then builds the rectangle from its fields

/// Errors raised by the JSON helpers.
pub mod error;
/// Generic JSON (de)serialization.
pub mod json;
/// The `Rectangle` type and its JSON record.
pub mod rectangle;

pub use error::ObjectsError;
pub use json::{from_json, to_json};
pub use rectangle::{Rectangle, RectangleRecord};
