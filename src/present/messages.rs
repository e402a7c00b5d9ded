#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use crate::{
    constants::labels,
    grade::{Field, FieldError, FieldErrors},
};

/// Form label of a field.
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::Name => labels::NAME,
        Field::Work => labels::WORK,
        Field::Activity => labels::ACTIVITY,
        Field::Exam => labels::EXAM,
    }
}

/// Message shown under a rejected field.
pub fn field_message(error: &FieldError) -> String {
    match error {
        FieldError::MissingName => "Nome é obrigatório".to_string(),
        FieldError::MissingGrade => "Campo obrigatório".to_string(),
        FieldError::NotANumber(_) => "Deve ser um número".to_string(),
        FieldError::NotInteger(_) => "Apenas números inteiros".to_string(),
        FieldError::OutOfRange { min, max, .. } => format!("Entre {min} e {max}"),
    }
}

/// Messages keyed by field name, ready to be shown next to the form.
pub fn field_messages(errors: &FieldErrors) -> BTreeMap<&'static str, String> {
    errors
        .iter()
        .map(|(field, error)| (field.key(), field_message(error)))
        .collect()
}

/// One line per rejected field, in form order.
pub fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("  {}: {}", field_label(field), field_message(error)))
        .collect::<Vec<String>>()
        .join("\n")
}
