#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Input validation and weighted average computation.
pub mod calculator;
/// Field-level validation errors.
pub mod errors;
/// Raw form input.
pub mod form;

pub use calculator::{parse_grade, round_half_up, validate_and_compute, weighted_points};
pub use errors::{Field, FieldError, FieldErrors};
pub use form::GradeForm;
