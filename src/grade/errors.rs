#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, fmt};

use itertools::Itertools;
use serde::Serialize;

/// A field of the grade entry form. Ordered the way the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Student name.
    Name,
    /// Work grade.
    Work,
    /// Activity grade.
    Activity,
    /// Exam grade.
    Exam,
}

impl Field {
    /// The three grade fields, in form order.
    pub const GRADES: [Field; 3] = [Field::Work, Field::Activity, Field::Exam];

    /// Key used when errors are reported as a mapping.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Work => "work",
            Field::Activity => "activity",
            Field::Exam => "exam",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a single form field was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name was empty after trimming.
    #[error("a name is required")]
    MissingName,
    /// The grade was left blank.
    #[error("a grade is required")]
    MissingGrade,
    /// The grade is not a number at all.
    #[error("`{0}` is not a number")]
    NotANumber(String),
    /// The grade is a number but has a fractional part.
    #[error("`{0}` is not a whole number")]
    NotInteger(String),
    /// The grade is a whole number outside the accepted range.
    #[error("`{raw}` is outside the range {min} to {max}")]
    OutOfRange {
        /// The text as entered, trimmed.
        raw: String,
        /// Lowest accepted grade.
        min: i32,
        /// Highest accepted grade.
        max: i32,
    },
}

/// Every rejected field of one submission, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    /// An empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Whether `field` was rejected.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rejected fields and their errors, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Returns `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(field, error)| format!("{field}: {error}"))
                .join("; ")
        )
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type IntoIter = std::collections::btree_map::IntoIter<Field, FieldError>;
    type Item = (Field, FieldError);

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
