//! A rectangle value type and JSON helpers for arbitrary serde shapes.

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors from the JSON helpers.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The text was not valid JSON for the requested shape, or the value
    /// could not be represented as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An axis-aligned rectangle.
///
/// Serializing a rectangle with a NaN or infinite side fails, since JSON
/// has no representation for those values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    #[serde(serialize_with = "serialize_finite")]
    pub width: f64,
    /// Vertical extent.
    #[serde(serialize_with = "serialize_finite")]
    pub height: f64,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
fn serialize_finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!("non-finite size {value}")))
    }
}

impl Rectangle {
    /// Create a rectangle from its width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width times height.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Serialize any value to its JSON text.
///
/// # Errors
///
/// Returns [`ShapeError::Json`] if the value cannot be represented as JSON
/// (for example a map with non-string keys, or a [`Rectangle`] with a
/// non-finite side).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ShapeError> {
    Ok(serde_json::to_string(value)?)
}

/// Build a value of shape `T` from JSON text.
///
/// Fields the shape does not declare are ignored; missing fields are an
/// error.
///
/// # Errors
///
/// Returns [`ShapeError::Json`] if the text is not valid JSON or does not
/// fit `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ShapeError> {
    Ok(serde_json::from_str(json)?)
}
