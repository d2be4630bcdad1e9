use clap::Parser;
use serde_json::Value;

use screen_descriptor::cli::commands::{ScreenInspection, cmd_check, cmd_inspect, cmd_navigator};
use screen_descriptor::cli::config::{
    AppConfig, Cli, Commands, OutputFormat, load_config, log_level, resolve_settings,
};
use screen_descriptor::report::console::{format_navigator, format_screen_report};
use screen_descriptor::{CommandError, Mode, ScreenSettings};

use crate::common::fixtures::{fixture_str, settings, users_screen};

mod common;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_inspect_minimal() {
    let cli = Cli::parse_from(["screen-descriptor", "inspect", "--screen", "users.yaml"]);
    match cli.command {
        Commands::Inspect {
            screen,
            name,
            mode,
            format,
        } => {
            assert_eq!(screen, "users.yaml");
            assert!(name.is_none());
            assert!(mode.is_none());
            assert_eq!(format, OutputFormat::Console);
        }
        _ => panic!("Expected Inspect command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_inspect_all_args() {
    let cli = Cli::parse_from([
        "screen-descriptor",
        "-vv",
        "--api-base",
        "/backend",
        "inspect",
        "--screen",
        "screens",
        "--name",
        "users",
        "--mode",
        "create",
        "--format",
        "json",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.api_base.as_deref(), Some("/backend"));
    match cli.command {
        Commands::Inspect {
            screen,
            name,
            mode,
            format,
        } => {
            assert_eq!(screen, "screens");
            assert_eq!(name.as_deref(), Some("users"));
            assert_eq!(mode, Some(Mode::Create));
            assert_eq!(format, OutputFormat::Json);
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn cli_parse_navigator_and_check() {
    let cli = Cli::parse_from(["screen-descriptor", "navigator", "--screens", "dir", "--ui-base", "/ui"]);
    assert_eq!(cli.ui_base.as_deref(), Some("/ui"));
    assert!(matches!(cli.command, Commands::Navigator { ref screens, format: OutputFormat::Console } if screens == "dir"));

    let cli = Cli::parse_from(["screen-descriptor", "check", "--screens", "dir"]);
    assert!(matches!(cli.command, Commands::Check { ref screens } if screens == "dir"));
}

#[test]
fn cli_rejects_unknown_mode() {
    let result = Cli::try_parse_from([
        "screen-descriptor",
        "inspect",
        "--screen",
        "x.yaml",
        "--mode",
        "delete",
    ]);
    assert!(result.is_err());
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn load_config_missing_file_returns_defaults() {
    let config = load_config(Some("/nonexistent/screen-descriptor.yaml"));
    assert_eq!(config.settings, ScreenSettings::default());
    assert_eq!(config.settings.api_base, "/api");
    assert_eq!(config.settings.ui_base, "/admin");
}

#[test]
fn load_config_partial_file_fills_defaults() {
    let config = load_config(Some(fixture_str("screen-descriptor.yaml").as_str()));
    assert_eq!(config.settings.api_base, "/backend");
    assert_eq!(config.settings.ui_base, "/admin");
}

#[test]
fn resolve_settings_precedence() {
    let config = AppConfig {
        settings: ScreenSettings::new("/from-config", "/config-ui"),
    };

    let resolved = resolve_settings(Some("/from-cli"), None, &config);
    assert_eq!(resolved, ScreenSettings::new("/from-cli", "/config-ui"));

    let resolved = resolve_settings(None, None, &AppConfig::default());
    assert_eq!(resolved, ScreenSettings::default());
}

#[test]
fn log_level_follows_verbosity() {
    assert_eq!(log_level(0), "warn");
    assert_eq!(log_level(1), "info");
    assert_eq!(log_level(2), "debug");
    assert_eq!(log_level(5), "trace");
}

// ============================================================================
// Command Tests
// ============================================================================

#[test]
fn inspect_json_reports_derived_views() {
    let output = cmd_inspect(
        &fixture_str("screens"),
        Some("users"),
        Some(Mode::Create),
        OutputFormat::Json,
        &settings(),
    )
    .expect("inspect succeeds");
    let json: Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(json["displayName"], "Users");
    assert_eq!(json["routePath"], "/admin/users");
    assert_eq!(json["collectionUrl"], "/api/v2/users/");
    assert_eq!(json["idField"], "id");
    assert!(json["form"].get("id").is_none(), "Create mode hides the identifier");
    assert_eq!(json["form"]["preferences"]["value"], "{\n  \"theme\": \"dark\"\n}");
    assert_eq!(json["table"]["url"], "/api/v2/users/query");
    assert_eq!(json["types"][0]["name"], "email");
}

#[test]
fn inspect_defaults_to_first_screen() {
    let output = cmd_inspect(
        &fixture_str("screens"),
        None,
        None,
        OutputFormat::Console,
        &settings(),
    )
    .unwrap();

    assert!(output.starts_with("=== Screen: Blog Posts (blog_posts) ==="));
    assert!(output.contains("Id field:   slug"));
    assert!(output.contains("rating"));
}

#[test]
fn inspect_unknown_screen_is_an_error() {
    let err = cmd_inspect(
        &fixture_str("screens"),
        Some("invoices"),
        None,
        OutputFormat::Json,
        &settings(),
    )
    .unwrap_err();

    assert!(matches!(err, CommandError::UnknownScreen(ref name) if name == "invoices"));
}

#[test]
fn navigator_json_skips_hidden_screens() {
    let output = cmd_navigator(&fixture_str("screens"), OutputFormat::Json, &settings()).unwrap();
    let json: Value = serde_json::from_str(&output).unwrap();

    let entries = json.as_array().expect("array of entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["displayName"], "Blog Posts");
    assert_eq!(entries[1]["routePath"], "/admin/users");
}

#[test]
fn check_passes_clean_screens_and_flags_broken_ones() {
    let (report, clean) = cmd_check(&fixture_str("screens"), &settings()).unwrap();
    assert!(clean);
    assert!(report.contains("3 clean, 0 with issues (3 total)"));

    let (report, clean) = cmd_check(&fixture_str("misconfigured"), &settings()).unwrap();
    assert!(!clean);
    assert!(report.contains("several fields flagged modelId: code, ref"));
    assert!(report.contains("0 clean, 2 with issues (2 total)"));
}

// ============================================================================
// Console report Tests
// ============================================================================

#[test]
fn console_report_lists_fields_actions_and_table() {
    let report = format_screen_report(&users_screen(), Some(Mode::Edit));

    assert!(report.contains("Route:      /admin/users"));
    assert!(report.contains("Actions:    view, edit | custom: publish"));
    assert!(report.contains("Fields (Edit):"));
    assert!(report.contains("[required, email]"));
    assert!(!report.contains("  id "), "Identifier hidden in edit mode");
    assert!(report.contains("Table: email, fullName (default sort: email)"));
}

#[test]
fn console_navigator_format() {
    let screen = users_screen();
    let entries = vec![screen_descriptor::NavigatorEntry {
        display_name: screen.display_name(),
        icon: None,
        route_path: screen.route_path(),
    }];

    assert_eq!(format_navigator(&entries), "Users -> /admin/users\n");
}

#[test]
fn inspection_serializes_custom_action_names() {
    let inspection = ScreenInspection::from_screen(&users_screen(), None);
    assert_eq!(inspection.custom_actions, vec!["publish"]);
    assert_eq!(inspection.form.len(), 4);
}
