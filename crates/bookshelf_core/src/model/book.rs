//! Book domain model.
//!
//! # Responsibility
//! - Define the fixed-shape record persisted in the library file.
//! - Coerce loosely typed publication year input into a validated integer.
//!
//! # Invariants
//! - Every `Book` carries all five attributes; there are no partial records.
//! - `year` is a non-negative integer.
//! - Unknown keys in persisted records are rejected at load time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One catalog entry.
///
/// Field order matches the persisted JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Removal key, compared case-insensitively.
    pub title: String,
    pub author: String,
    /// Publication year.
    pub year: u32,
    pub genre: String,
    /// Whether the owner has read this book.
    pub read: bool,
}

impl Book {
    /// Builds a record from free-form input, coercing `year`.
    ///
    /// # Errors
    /// - Returns [`BookValidationError`] when `year` cannot be coerced.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<YearInput>,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Self, BookValidationError> {
        let year = year.into().coerce()?;
        Ok(Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        })
    }

    /// Human-readable read status used by presentation layers.
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}

/// Raw publication year as received from a form or command line.
#[derive(Debug, Clone, PartialEq)]
pub enum YearInput {
    Integer(i64),
    /// Truncated toward zero on coercion.
    Number(f64),
    /// Parsed as integer first, then as decimal number.
    Text(String),
}

impl YearInput {
    /// Converts the raw input into a validated year.
    ///
    /// # Errors
    /// - `EmptyYear` for blank text.
    /// - `NonNumericYear` for text that is not a number, or non-finite floats.
    /// - `NegativeYear` when the value is below zero after truncation.
    /// - `YearOutOfRange` when the value does not fit `u32`.
    pub fn coerce(&self) -> Result<u32, BookValidationError> {
        match self {
            Self::Integer(value) => integer_to_year(*value, &value.to_string()),
            Self::Number(value) => number_to_year(*value, &value.to_string()),
            Self::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(BookValidationError::EmptyYear);
                }
                if let Ok(value) = trimmed.parse::<i64>() {
                    return integer_to_year(value, trimmed);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) => number_to_year(value, trimmed),
                    Err(_) => Err(BookValidationError::NonNumericYear(trimmed.to_string())),
                }
            }
        }
    }
}

impl From<i64> for YearInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for YearInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for YearInput {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for YearInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for YearInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for YearInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Validation error raised while building a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyYear,
    NonNumericYear(String),
    NegativeYear(String),
    YearOutOfRange(String),
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyYear => write!(f, "publication year is empty"),
            Self::NonNumericYear(raw) => write!(f, "publication year `{raw}` is not a number"),
            Self::NegativeYear(raw) => write!(f, "publication year `{raw}` is negative"),
            Self::YearOutOfRange(raw) => write!(f, "publication year `{raw}` is out of range"),
        }
    }
}

impl Error for BookValidationError {}

fn integer_to_year(value: i64, raw: &str) -> Result<u32, BookValidationError> {
    if value < 0 {
        return Err(BookValidationError::NegativeYear(raw.to_string()));
    }
    u32::try_from(value).map_err(|_| BookValidationError::YearOutOfRange(raw.to_string()))
}

fn number_to_year(value: f64, raw: &str) -> Result<u32, BookValidationError> {
    if !value.is_finite() {
        return Err(BookValidationError::NonNumericYear(raw.to_string()));
    }
    let truncated = value.trunc();
    // -0.5 truncates to -0.0, which is a valid zero year.
    if truncated < 0.0 {
        return Err(BookValidationError::NegativeYear(raw.to_string()));
    }
    if truncated > f64::from(u32::MAX) {
        return Err(BookValidationError::YearOutOfRange(raw.to_string()));
    }
    Ok(truncated as u32)
}
