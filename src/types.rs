#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

impl StudentId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The first eight hex digits, enough to tell records apart on screen.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StudentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// A validated set of grades with its computed average, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecordInput {
    /// Trimmed, non-empty student name.
    name:            String,
    /// Work grade.
    work_grade:      i32,
    /// Activity grade.
    activity_grade:  i32,
    /// Exam grade.
    exam_grade:      i32,
    /// Weighted sum in hundredths of a grade point.
    #[serde(skip)]
    weighted_points: i64,
    /// Weighted sum rounded half-up.
    final_average:   i32,
}

impl StudentRecordInput {
    /// Assembles an input from already validated parts.
    pub(crate) fn new(
        name: String,
        work_grade: i32,
        activity_grade: i32,
        exam_grade: i32,
        weighted_points: i64,
        final_average: i32,
    ) -> Self {
        Self {
            name,
            work_grade,
            activity_grade,
            exam_grade,
            weighted_points,
            final_average,
        }
    }

    /// Student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Work grade.
    pub fn work_grade(&self) -> i32 {
        self.work_grade
    }

    /// Activity grade.
    pub fn activity_grade(&self) -> i32 {
        self.activity_grade
    }

    /// Exam grade.
    pub fn exam_grade(&self) -> i32 {
        self.exam_grade
    }

    /// Unrounded weighted sum.
    pub fn weighted_sum(&self) -> f64 {
        self.weighted_points as f64 / 100.0
    }

    /// Rounded final average.
    pub fn final_average(&self) -> i32 {
        self.final_average
    }
}

/// One student's stored grades plus computed final average.
///
/// Records are immutable once created; the only way to get rid of one is
/// `RecordStore::remove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Identifier assigned by the store.
    id:             StudentId,
    /// Student name.
    name:           String,
    /// Work grade.
    work_grade:     i32,
    /// Activity grade.
    activity_grade: i32,
    /// Exam grade.
    exam_grade:     i32,
    /// Derived final average.
    final_average:  i32,
}

impl StudentRecord {
    /// Attaches an identifier to a validated input.
    pub(crate) fn new(id: StudentId, input: StudentRecordInput) -> Self {
        Self {
            id,
            name: input.name,
            work_grade: input.work_grade,
            activity_grade: input.activity_grade,
            exam_grade: input.exam_grade,
            final_average: input.final_average,
        }
    }

    /// Identifier of this record.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Student name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Work grade.
    pub fn work_grade(&self) -> i32 {
        self.work_grade
    }

    /// Activity grade.
    pub fn activity_grade(&self) -> i32 {
        self.activity_grade
    }

    /// Exam grade.
    pub fn exam_grade(&self) -> i32 {
        self.exam_grade
    }

    /// Final average.
    pub fn final_average(&self) -> i32 {
        self.final_average
    }
}
