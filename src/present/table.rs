#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use colored::Colorize;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::status::{PassStatus, classify_average};
use crate::{
    config::{self, GradingConfig},
    constants::labels,
    types::StudentRecord,
};

#[derive(Tabled)]
/// A row of the results table
struct RecordRow {
    #[tabled(rename = "#")]
    /// * `position`: 1-based position, usable with `remove`
    position:      usize,
    #[tabled(rename = "Id")]
    /// * `id`: shortened identifier
    id:            String,
    #[tabled(rename = "Nome do Aluno")]
    /// * `name`: student name
    name:          String,
    #[tabled(rename = "Trabalho (40%)")]
    /// * `work`: work grade
    work:          i32,
    #[tabled(rename = "Atividades (30%)")]
    /// * `activity`: activity grade
    activity:      i32,
    #[tabled(rename = "Prova (30%)")]
    /// * `exam`: exam grade
    exam:          i32,
    #[tabled(rename = "Média Final")]
    /// * `final_average`: average with trend arrow, colored by status
    final_average: String,
}

/// Paints `text` in the color associated with `status`, unless colors are
/// turned off in the process settings.
fn paint(text: String, status: PassStatus) -> String {
    if !config::get().color() {
        return text;
    }
    match status {
        PassStatus::Strong => text.green().bold().to_string(),
        PassStatus::Borderline => text.yellow().bold().to_string(),
        PassStatus::Weak => text.red().bold().to_string(),
    }
}

/// Status of `record` under `config`.
pub fn status_of(record: &StudentRecord, config: &GradingConfig) -> PassStatus {
    classify_average(record.final_average(), config.bounds().max(), config.thresholds())
}

/// "1 Aluno", "3 Alunos".
pub fn count_label(count: usize) -> String {
    let noun = if count == 1 { labels::STUDENT } else { labels::STUDENTS };
    format!("{count} {noun}")
}

/// Renders the records as a table, or the empty-state notice when there are
/// none.
pub fn render_records<'a, I>(records: I, config: &GradingConfig) -> String
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let rows: Vec<RecordRow> = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let status = status_of(record, config);
            RecordRow {
                position:      index + 1,
                id:            record.id().short(),
                name:          record.name().to_string(),
                work:          record.work_grade(),
                activity:      record.activity_grade(),
                exam:          record.exam_grade(),
                final_average: paint(
                    format!("{} {}", record.final_average(), status.trend().symbol()),
                    status,
                ),
            }
        })
        .collect();

    if rows.is_empty() {
        return format!("{}\n{}", labels::EMPTY_TITLE.bold(), labels::EMPTY_HINT);
    }

    let count = rows.len();
    Table::new(rows)
        .with(Panel::header(labels::RESULTS_TITLE))
        .with(Panel::footer(count_label(count)))
        .with(Modify::new(Rows::new(1..)).with(Width::wrap(32).keep_words(true)))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// A record as exported to JSON, with its status alongside.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordView<'a> {
    /// The record itself.
    #[serde(flatten)]
    record: &'a StudentRecord,
    /// Classification of the final average.
    status: PassStatus,
}

/// Pretty-printed JSON object for a single record, with its status.
pub fn render_record_json(record: &StudentRecord, config: &GradingConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RecordView {
        record,
        status: status_of(record, config),
    })
}

/// Pretty-printed JSON array of the records, in display order.
pub fn render_json<'a, I>(records: I, config: &GradingConfig) -> serde_json::Result<String>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let views: Vec<RecordView<'a>> = records
        .into_iter()
        .map(|record| RecordView {
            record,
            status: status_of(record, config),
        })
        .collect();
    serde_json::to_string_pretty(&views)
}
