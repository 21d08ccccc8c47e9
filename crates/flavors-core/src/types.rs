//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty or contained only whitespace.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated flavor text.
///
/// Flavor texts are never empty or whitespace-only. The inner string is kept
/// exactly as given: no trimming, no case folding, no Unicode normalization.
/// Two flavor texts are the same flavor only if they are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FlavorText(String);

impl FlavorText {
    /// Creates a new flavor text after validation.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "flavor text",
            });
        }
        Ok(Self(text))
    }

    /// Returns the flavor text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FlavorText {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FlavorText {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FlavorText> for String {
    fn from(text: FlavorText) -> Self {
        text.0
    }
}

impl fmt::Display for FlavorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlavorText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
