#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Everything between the grading core and the terminal: status
//! classification, user-facing messages, and table rendering.

/// User-facing validation messages.
pub mod messages;
/// Pass/warning/fail classification.
pub mod status;
/// Terminal table and JSON rendering.
pub mod table;

pub use messages::{field_label, field_message, field_messages, render_errors};
pub use status::{PassStatus, Trend, classify, classify_average};
pub use table::{count_label, render_json, render_record_json, render_records, status_of};
