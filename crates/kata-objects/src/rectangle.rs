use serde::{Deserialize, Serialize};
use serde_json::Value;

use kata_common::warning::warn_once;

use crate::error::ObjectsError;

/// Field names [`RectangleRecord`] reads; anything else is ignored.
const RECORD_FIELDS: [&str; 2] = ["width", "height"];

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// The plain data a [`Rectangle`] is read from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectangleRecord {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Read a rectangle from a JSON object such as `{"width":10,"height":20}`.
    ///
    /// Unknown fields are ignored with a one-time warning.
    ///
    /// # Errors
    ///
    /// - [`ObjectsError::NotAnObject`] if the top-level value is not an object.
    /// - [`ObjectsError::Json`] if the text is malformed, or `width`/`height`
    ///   are missing or not numbers.
    pub fn from_json(json: &str) -> Result<Self, ObjectsError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(fields) = &value else {
            return Err(ObjectsError::NotAnObject(json_kind(&value)));
        };

        for name in fields.keys() {
            if !RECORD_FIELDS.contains(&name.as_str()) {
                warn_once("Objects", &format!("ignoring unknown rectangle field '{name}'"));
            }
        }

        let record = RectangleRecord::deserialize(value)?;
        Ok(Self::from(record))
    }
}

impl From<RectangleRecord> for Rectangle {
    fn from(record: RectangleRecord) -> Self {
        Self::new(record.width, record.height)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
