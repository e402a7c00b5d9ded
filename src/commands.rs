#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    config::GradingConfig,
    grade::GradeForm,
    present::{field_messages, render_errors, render_record_json, render_records},
    store::RecordStore,
};

/// Validates one form and writes the outcome: the record to `out`, or the
/// field errors to `err` (to `out` as a JSON object when `json` is set).
///
/// Returns whether the form was valid; the caller decides the exit status.
pub fn calc<O, E>(
    form: &GradeForm,
    config: &GradingConfig,
    json: bool,
    out: &mut O,
    err: &mut E,
) -> Result<bool>
where
    O: Write,
    E: Write,
{
    let input = match form.validate(config) {
        Ok(input) => input,
        Err(errors) => {
            tracing::debug!("Rejected {}: {errors}", form.name.trim());
            if json {
                let json = serde_json::to_string_pretty(&serde_json::json!({
                    "errors": field_messages(&errors)
                }))
                .context("Could not serialize errors")?;
                writeln!(out, "{json}")?;
            } else {
                writeln!(err, "{}", render_errors(&errors))?;
            }
            return Ok(false);
        }
    };

    let weighted_sum = input.weighted_sum();
    let mut store = RecordStore::new();
    let record = store.add(input);

    if json {
        let json = render_record_json(record, config).context("Could not serialize record")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", render_records(store.list(), config))?;
        writeln!(out, "Soma ponderada: {weighted_sum:.2}")?;
    }
    Ok(true)
}

/// Weights as fractions of one.
#[derive(Serialize)]
struct Fractions {
    /// Work weight.
    work:     f64,
    /// Activity weight.
    activity: f64,
    /// Exam weight.
    exam:     f64,
}

/// What `info` prints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Info<'a> {
    /// The configuration as stored.
    #[serde(flatten)]
    config:           &'a GradingConfig,
    /// The same weights as fractions.
    weight_fractions: Fractions,
}

/// Pretty-printed JSON description of `config`, including the weights as
/// fractions.
pub fn info_json(config: &GradingConfig) -> Result<String> {
    let (work, activity, exam) = config.weights().as_fractions();
    serde_json::to_string_pretty(&Info {
        config,
        weight_fractions: Fractions {
            work,
            activity,
            exam,
        },
    })
    .context("Could not serialize grading configuration")
}
