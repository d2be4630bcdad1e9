use std::fmt;

use serde::{Deserialize, Serialize};

use crate::screen::{
    actions::{AvailableActions, NamedAction, is_reserved_action},
    field_model::{FieldDefinition, Model},
    naming::start_case,
    routes::{self, ScreenSettings},
};

// ============================================================================
// Descriptor input
// ============================================================================

/// Raw screen configuration as authored in code or a YAML file.
///
/// Nothing here is required. A missing `name` or `model` is not rejected;
/// it shows up later as odd URLs or an empty form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenDescriptor {
    /// API path segment and plural display label
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_in_navigator: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_columns: Option<Vec<String>>,

    #[serde(default)]
    pub available_actions: AvailableActions,

    #[serde(default, deserialize_with = "crate::screen::field_model::deserialize_model")]
    pub model: Model,
}

impl ScreenDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn api_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_url_prefix = Some(prefix.into());
        self
    }

    pub fn include_in_navigator(mut self, include: bool) -> Self {
        self.include_in_navigator = Some(include);
        self
    }

    pub fn table_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn actions(mut self, actions: AvailableActions) -> Self {
        self.available_actions = actions;
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: impl Into<FieldDefinition>) -> Self {
        self.model.insert(name.into(), field.into());
        self
    }
}

/// What a generated form is for. Outside `View`, identifier fields are left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Mode {
    View,
    Create,
    Edit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::View => f.write_str("View"),
            Mode::Create => f.write_str("Create"),
            Mode::Edit => f.write_str("Edit"),
        }
    }
}

// ============================================================================
// Constructed screen
// ============================================================================

/// A descriptor merged with its defaults. Read-only after construction.
#[derive(Debug, Clone)]
pub struct Screen {
    name: String,
    icon: Option<String>,
    api_url_prefix: Option<String>,
    include_in_navigator: bool,
    table_columns: Vec<String>,
    available_actions: AvailableActions,
    model: Model,
    settings: ScreenSettings,
}

impl Screen {
    pub fn new(descriptor: ScreenDescriptor, settings: ScreenSettings) -> Self {
        let ScreenDescriptor {
            name,
            icon,
            api_url_prefix,
            include_in_navigator,
            table_columns,
            available_actions,
            model,
        } = descriptor;

        if name.is_empty() {
            tracing::warn!("screen constructed without a name");
        }

        let screen = Self {
            name,
            icon,
            api_url_prefix,
            include_in_navigator: include_in_navigator.unwrap_or(true),
            table_columns: table_columns.unwrap_or_default(),
            available_actions,
            model,
            settings,
        };

        tracing::debug!(
            screen = %screen.name,
            fields = screen.model.len(),
            columns = screen.table_columns.len(),
            "screen constructed"
        );

        screen
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn api_url_prefix(&self) -> Option<&str> {
        self.api_url_prefix.as_deref()
    }

    pub fn include_in_navigator(&self) -> bool {
        self.include_in_navigator
    }

    pub fn table_columns(&self) -> &[String] {
        &self.table_columns
    }

    pub fn available_actions(&self) -> &AvailableActions {
        &self.available_actions
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn settings(&self) -> &ScreenSettings {
        &self.settings
    }

    /// Human-readable plural label, e.g. `blog_posts` -> `Blog Posts`.
    pub fn display_name(&self) -> String {
        start_case(&self.name)
    }

    /// First field named `id` or flagged `modelId`, in declaration order.
    pub fn id_field_name(&self) -> Option<&str> {
        self.model
            .iter()
            .find(|(name, field)| name.as_str() == "id" || field.model_id)
            .map(|(name, _)| name.as_str())
    }

    /// Whether a field must be left out of forms generated for `mode`.
    pub(crate) fn excludes_field(&self, field_name: &str, mode: Option<Mode>) -> bool {
        match mode {
            Some(Mode::View) | None => false,
            Some(_) => self.id_field_name() == Some(field_name),
        }
    }

    pub fn query_url(&self) -> String {
        routes::query_url(&self.settings.api_base, self.api_url_prefix(), &self.name)
    }

    /// API URL of one item. An empty id yields the collection root with a
    /// trailing slash.
    pub fn instance_url(&self, id: &str) -> String {
        routes::instance_url(&self.settings.api_base, self.api_url_prefix(), &self.name, id)
    }

    pub fn collection_url(&self) -> String {
        self.instance_url("")
    }

    pub fn route_path(&self) -> String {
        routes::route_path(&self.settings.ui_base, &self.name)
    }

    /// Custom actions in declaration order. Reserved names never appear.
    pub fn custom_actions(&self) -> Vec<&NamedAction> {
        self.available_actions
            .custom
            .iter()
            .filter(|a| !is_reserved_action(&a.name))
            .collect()
    }
}
