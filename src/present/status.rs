#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use serde::Serialize;

use crate::{config::StatusThresholds, types::StudentRecord};

/// How a final average compares with the maximum grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PassStatus {
    /// At least 70% of the maximum grade.
    Strong,
    /// At least 50% of the maximum grade.
    Borderline,
    /// Below 50% of the maximum grade.
    Weak,
}

impl PassStatus {
    /// English name of the status.
    pub fn label(&self) -> &'static str {
        match self {
            PassStatus::Strong => "Strong",
            PassStatus::Borderline => "Borderline",
            PassStatus::Weak => "Weak",
        }
    }

    /// Whether the status counts as a pass. Only `Weak` does not.
    pub fn is_passing(&self) -> bool {
        !matches!(self, PassStatus::Weak)
    }

    /// Direction of the arrow drawn next to the average.
    pub fn trend(&self) -> Trend {
        if self.is_passing() { Trend::Up } else { Trend::Down }
    }
}

impl fmt::Display for PassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Arrow shown next to a final average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    /// Passing.
    Up,
    /// Failing.
    Down,
}

impl Trend {
    /// Symbol drawn in the terminal.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

/// Classifies a record against `max_grade` with the standard 70% / 50%
/// cut-offs.
pub fn classify(record: &StudentRecord, max_grade: i32) -> PassStatus {
    classify_average(record.final_average(), max_grade, StatusThresholds::default())
}

/// Classifies a bare average. A non-positive `max_grade` leaves nothing to
/// compare against and yields `Weak`.
pub fn classify_average(
    final_average: i32,
    max_grade: i32,
    thresholds: StatusThresholds,
) -> PassStatus {
    if max_grade <= 0 {
        return PassStatus::Weak;
    }

    // average / max >= pct / 100, kept in integers.
    let scaled = i64::from(final_average) * 100;
    let max = i64::from(max_grade);
    if scaled >= i64::from(thresholds.strong()) * max {
        PassStatus::Strong
    } else if scaled >= i64::from(thresholds.borderline()) * max {
        PassStatus::Borderline
    } else {
        PassStatus::Weak
    }
}
