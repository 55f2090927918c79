//! Field validation shared by entity data types.

use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;
use smallvec::SmallVec;
use thiserror::Error;

/// A single failing field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("{field} must have at most {max} decimal places")]
    TooManyDecimalPlaces { field: &'static str, max: u32 },

    #[error("{field} must be less than {limit}")]
    TooLarge {
        field: &'static str,
        limit: Decimal,
    },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
}

impl FieldError {
    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::NotPositive { field }
            | Self::Negative { field }
            | Self::TooManyDecimalPlaces { field, .. }
            | Self::TooLarge { field, .. }
            | Self::InvalidEmail { field } => field,
        }
    }
}

/// Every constraint violated by one input, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
pub struct ValidationErrors(SmallVec<[FieldError; 2]>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Check a text length, counted in characters.
    pub(crate) fn check_length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        max: Option<usize>,
    ) {
        let length = value.chars().count();

        if length < min {
            self.push(FieldError::TooShort { field, min });
        } else if let Some(max) = max
            && length > max
        {
            self.push(FieldError::TooLong { field, max });
        }
    }

    pub(crate) fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        let mut errors = Self::default();

        errors.push(error);

        errors
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }

            Display::fmt(error, f)?;
        }

        Ok(())
    }
}
