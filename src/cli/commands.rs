use serde::Serialize;
use serde_json::Value;

use crate::cli::config::OutputFormat;
use crate::error::CommandError;
use crate::registry::{loader::load_descriptors, registry::ScreenRegistry};
use crate::report::console::{format_check_report, format_navigator, format_screen_report};
use crate::screen::{
    form::{FieldTypeEntry, FormControl},
    routes::ScreenSettings,
    screen_model::{Mode, Screen},
    table::TableData,
};

/// JSON view of a screen for the `inspect` subcommand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInspection {
    pub name: String,
    pub display_name: String,
    pub route_path: String,
    pub collection_url: String,
    pub id_field: Option<String>,
    pub types: Vec<FieldTypeEntry>,
    pub form: indexmap::IndexMap<String, FormControl>,
    pub table: Option<TableData>,
    pub custom_actions: Vec<String>,
}

impl ScreenInspection {
    pub fn from_screen(screen: &Screen, mode: Option<Mode>) -> Self {
        Self {
            name: screen.name().to_string(),
            display_name: screen.display_name(),
            route_path: screen.route_path(),
            collection_url: screen.collection_url(),
            id_field: screen.id_field_name().map(str::to_string),
            types: screen.types(mode),
            form: screen.form(&Value::Null, mode),
            table: screen.table_data(),
            custom_actions: screen
                .custom_actions()
                .iter()
                .map(|a| a.name.clone())
                .collect(),
        }
    }
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(
    path: &str,
    name: Option<&str>,
    mode: Option<Mode>,
    format: OutputFormat,
    settings: &ScreenSettings,
) -> Result<String, CommandError> {
    let registry = load_registry(path, settings)?;

    let screen = match name {
        Some(name) => registry
            .get(name)
            .ok_or_else(|| CommandError::UnknownScreen(name.to_string()))?,
        None => registry
            .iter()
            .next()
            .ok_or_else(|| CommandError::NoScreens(path.to_string()))?,
    };

    match format {
        OutputFormat::Console => Ok(format_screen_report(screen, mode)),
        OutputFormat::Json => {
            let inspection = ScreenInspection::from_screen(screen, mode);
            Ok(serde_json::to_string_pretty(&inspection)? + "\n")
        }
    }
}

// ============================================================================
// navigator subcommand
// ============================================================================

pub fn cmd_navigator(
    path: &str,
    format: OutputFormat,
    settings: &ScreenSettings,
) -> Result<String, CommandError> {
    let registry = load_registry(path, settings)?;
    let entries = registry.navigator_entries();

    match format {
        OutputFormat::Console => Ok(format_navigator(&entries)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)? + "\n"),
    }
}

// ============================================================================
// check subcommand
// ============================================================================

/// Check every screen and return the report and whether all were clean.
pub fn cmd_check(path: &str, settings: &ScreenSettings) -> Result<(String, bool), CommandError> {
    let registry = load_registry(path, settings)?;
    Ok(format_check_report(
        registry.iter().map(|screen| (screen, screen.validate())),
    ))
}

// ============================================================================
// Helpers
// ============================================================================

fn load_registry(path: &str, settings: &ScreenSettings) -> Result<ScreenRegistry, CommandError> {
    let descriptors = load_descriptors(path)?;
    if descriptors.is_empty() {
        return Err(CommandError::NoScreens(path.to_string()));
    }
    Ok(ScreenRegistry::from_descriptors(descriptors, settings))
}
