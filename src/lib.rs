//! # calcmedias
//!
//! Records per-student assessment scores for a single session, computes a
//! weighted final average, and classifies each result for display.
//!
//! The flow for every submission is the same: raw text from a
//! [`grade::GradeForm`] is validated and turned into a
//! [`types::StudentRecordInput`], a [`store::RecordStore`] gives it an
//! identifier and puts it at the top of the list, and [`present`] turns the
//! list into something a terminal can show.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// One-shot command handlers behind the CLI
pub mod commands;
/// Runtime settings and the grading scale
pub mod config;
/// Fixed grading constants and labels
pub mod constants;
/// Validation and weighted average computation
pub mod grade;
/// Classification and rendering for the terminal
pub mod present;
/// A single user session tying the pieces together
pub mod session;
/// Interactive line-oriented front end
pub mod shell;
/// In-memory record list
pub mod store;
/// Record and identifier types
pub mod types;

pub use config::{GradeBounds, GradeWeights, GradingConfig, StatusThresholds};
pub use grade::{Field, FieldError, FieldErrors, GradeForm, validate_and_compute};
pub use present::{PassStatus, classify};
pub use session::Session;
pub use store::RecordStore;
pub use types::{StudentId, StudentRecord, StudentRecordInput};
