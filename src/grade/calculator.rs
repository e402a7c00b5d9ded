#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::errors::{Field, FieldError, FieldErrors};
use crate::{
    config::{GradeBounds, GradeWeights},
    constants::WEIGHT_TOTAL,
    types::StudentRecordInput,
};

/// Validates a submission and, if every field is acceptable, computes the
/// weighted final average.
///
/// Each field is checked independently so that all problems can be shown at
/// once. No average is computed unless every field passes.
///
/// * `name`: student name, trimmed before use
/// * `work_raw`, `activity_raw`, `exam_raw`: grade text as entered
/// * `weights`: weight of each assessment
/// * `bounds`: accepted grade range
pub fn validate_and_compute(
    name: &str,
    work_raw: &str,
    activity_raw: &str,
    exam_raw: &str,
    weights: GradeWeights,
    bounds: GradeBounds,
) -> Result<StudentRecordInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, FieldError::MissingName);
    }

    let mut grades = [0i32; 3];
    for ((field, raw), slot) in Field::GRADES
        .into_iter()
        .zip([work_raw, activity_raw, exam_raw])
        .zip(grades.iter_mut())
    {
        match parse_grade(raw, bounds) {
            Ok(value) => *slot = value,
            Err(e) => errors.insert(field, e),
        }
    }

    errors.into_result()?;

    let [work, activity, exam] = grades;
    let points = weighted_points(work, activity, exam, weights);
    // In range: the weights are non-negative and add up to a whole.
    let final_average = round_half_up(points) as i32;

    Ok(StudentRecordInput::new(name.to_string(), work, activity, exam, points, final_average))
}

/// Parses one grade field into a whole number within `bounds`.
///
/// Surrounding whitespace is ignored, and whitespace-only input counts as
/// blank. Any number notation `f64` understands is accepted as long as it
/// denotes a whole number, so `"7.0"` and `"1e1"` are fine.
pub fn parse_grade(raw: &str, bounds: GradeBounds) -> Result<i32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::MissingGrade);
    }

    let value: f64 = raw
        .parse()
        .map_err(|_| FieldError::NotANumber(raw.to_string()))?;
    if value.is_nan() {
        return Err(FieldError::NotANumber(raw.to_string()));
    }
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FieldError::NotInteger(raw.to_string()));
    }
    if value < f64::from(bounds.min()) || value > f64::from(bounds.max()) {
        return Err(FieldError::OutOfRange {
            raw: raw.to_string(),
            min: bounds.min(),
            max: bounds.max(),
        });
    }

    Ok(value as i32)
}

/// Weighted sum of the three grades, in hundredths of a grade point.
pub fn weighted_points(work: i32, activity: i32, exam: i32, weights: GradeWeights) -> i64 {
    i64::from(work) * i64::from(weights.work())
        + i64::from(activity) * i64::from(weights.activity())
        + i64::from(exam) * i64::from(weights.exam())
}

/// Rounds a value given in hundredths to the nearest whole number, with ties
/// going toward positive infinity (`550 -> 6`, `450 -> 5`, `-250 -> -2`).
pub fn round_half_up(points: i64) -> i64 {
    let whole = i64::from(WEIGHT_TOTAL);
    (points + whole / 2).div_euclid(whole)
}
