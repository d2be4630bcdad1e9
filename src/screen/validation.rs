use std::fmt;

use serde::Serialize;

use crate::screen::{actions::is_reserved_action, screen_model::Screen};

/// A misconfiguration found by [`Screen::validate`]. Construction never
/// rejects these; callers decide whether they matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingName,
    EmptyModel,
    UnknownTableColumn { column: String },
    MissingIdField,
    MultipleModelIds { fields: Vec<String> },
    ReservedCustomAction { action: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingName => write!(f, "screen has no name"),
            ValidationIssue::EmptyModel => write!(f, "model declares no fields"),
            ValidationIssue::UnknownTableColumn { column } => {
                write!(f, "table column '{}' is not a model field", column)
            }
            ValidationIssue::MissingIdField => {
                write!(f, "table is configured but no field is named 'id' or flagged modelId")
            }
            ValidationIssue::MultipleModelIds { fields } => {
                write!(f, "several fields flagged modelId: {}", fields.join(", "))
            }
            ValidationIssue::ReservedCustomAction { action } => {
                write!(f, "custom action uses reserved name '{}'", action)
            }
        }
    }
}

impl Screen {
    /// Report misconfiguration without failing.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.name().is_empty() {
            issues.push(ValidationIssue::MissingName);
        }

        if self.model().is_empty() {
            issues.push(ValidationIssue::EmptyModel);
        }

        // Dotted columns address nested data and are not checked.
        for column in self.table_columns() {
            if !column.contains('.') && !self.model().contains_key(column) {
                issues.push(ValidationIssue::UnknownTableColumn {
                    column: column.clone(),
                });
            }
        }

        if !self.table_columns().is_empty() && self.id_field_name().is_none() {
            issues.push(ValidationIssue::MissingIdField);
        }

        let flagged: Vec<String> = self
            .model()
            .iter()
            .filter(|(_, field)| field.model_id)
            .map(|(name, _)| name.clone())
            .collect();
        if flagged.len() > 1 {
            issues.push(ValidationIssue::MultipleModelIds { fields: flagged });
        }

        for action in &self.available_actions().custom {
            if is_reserved_action(&action.name) {
                issues.push(ValidationIssue::ReservedCustomAction {
                    action: action.name.clone(),
                });
            }
        }

        if !issues.is_empty() {
            tracing::debug!(screen = %self.name(), issues = issues.len(), "screen has configuration issues");
        }

        issues
    }
}
