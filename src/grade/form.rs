#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bon::Builder;

use super::{calculator::validate_and_compute, errors::FieldErrors};
use crate::{config::GradingConfig, types::StudentRecordInput};

/// Raw, untrusted text as typed into the entry form.
///
/// Nothing here has been checked; [`GradeForm::validate`] is the only way to
/// turn it into a [`StudentRecordInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct GradeForm {
    /// Student name.
    #[builder(default)]
    pub name:     String,
    /// Work grade.
    #[builder(default)]
    pub work:     String,
    /// Activity grade.
    #[builder(default)]
    pub activity: String,
    /// Exam grade.
    #[builder(default)]
    pub exam:     String,
}

impl GradeForm {
    /// Validates every field and computes the final average.
    pub fn validate(&self, config: &GradingConfig) -> Result<StudentRecordInput, FieldErrors> {
        validate_and_compute(
            &self.name,
            &self.work,
            &self.activity,
            &self.exam,
            config.weights(),
            config.bounds(),
        )
    }
}
