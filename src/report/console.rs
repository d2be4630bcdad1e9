use crate::registry::registry::NavigatorEntry;
use crate::screen::{
    field_model::Validator,
    screen_model::{Mode, Screen},
    validation::ValidationIssue,
};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a screen summary for terminal output.
///
/// Produces output like:
/// ```text
/// === Screen: Blog Posts (blog_posts) ===
///
/// Route:      /admin/blog_posts
/// Collection: /api/v2/blog_posts/
/// Id field:   id
/// Actions:    view, edit | custom: publish
///
/// Fields (Create):
///   title    string  [required]
///
/// Table: title, author (default sort: title)
/// ```
pub fn format_screen_report(screen: &Screen, mode: Option<Mode>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Screen: {} ({}) ===\n\n",
        screen.display_name(),
        screen.name()
    ));

    out.push_str(&format!("Route:      {}\n", screen.route_path()));
    out.push_str(&format!("Collection: {}\n", screen.collection_url()));
    out.push_str(&format!(
        "Id field:   {}\n",
        screen.id_field_name().unwrap_or("(none)")
    ));
    out.push_str(&format!(
        "Navigator:  {}\n",
        if screen.include_in_navigator() { "yes" } else { "no" }
    ));
    out.push_str(&format!("Actions:    {}\n", format_actions(screen)));

    let label = mode.map_or_else(|| "all".to_string(), |m| m.to_string());
    out.push_str(&format!("\nFields ({}):\n", label));

    let width = screen.model().keys().map(|k| k.len()).max().unwrap_or(0);
    let form = screen.form(&serde_json::Value::Null, mode);
    for entry in screen.types(mode) {
        let validators = form
            .get(&entry.name)
            .map(|control| format_validators(&control.validators))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:<width$}  {:<8}{}\n",
            entry.name,
            entry.r#type.as_str(),
            validators,
            width = width
        ));
    }

    match screen.table_data() {
        Some(table) => out.push_str(&format!(
            "\nTable: {} (default sort: {})\n",
            table.columns.join(", "),
            table.default_sort
        )),
        None => out.push_str("\nTable: none\n"),
    }

    out
}

/// Format navigator entries, one per line.
pub fn format_navigator(entries: &[NavigatorEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        match &entry.icon {
            Some(icon) => out.push_str(&format!("[{}] {} -> {}\n", icon, entry.display_name, entry.route_path)),
            None => out.push_str(&format!("{} -> {}\n", entry.display_name, entry.route_path)),
        }
    }
    out
}

/// Format the result of checking a set of screens.
///
/// Returns the text and whether every screen was clean.
pub fn format_check_report<'a, I>(results: I) -> (String, bool)
where
    I: IntoIterator<Item = (&'a Screen, Vec<ValidationIssue>)>,
{
    let mut out = String::new();
    let mut clean = 0;
    let mut flagged = 0;

    for (screen, issues) in results {
        if issues.is_empty() {
            clean += 1;
            out.push_str(&format!("\u{2713} OK    {}\n", screen.name()));
        } else {
            flagged += 1;
            out.push_str(&format!("\u{2717} WARN  {} ({} issues)\n", screen.name(), issues.len()));
            for issue in &issues {
                out.push_str(&format!("    - {}\n", issue));
            }
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} clean, {} with issues ({} total) ===\n",
        clean,
        flagged,
        clean + flagged
    ));

    (out, flagged == 0)
}

fn format_actions(screen: &Screen) -> String {
    let actions = screen.available_actions();
    let standard: Vec<&str> = [("view", actions.view), ("edit", actions.edit), ("create", actions.create)]
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .map(|(name, _)| name)
        .collect();
    let custom: Vec<&str> = screen.custom_actions().iter().map(|a| a.name.as_str()).collect();

    let mut text = if standard.is_empty() {
        "(none)".to_string()
    } else {
        standard.join(", ")
    };
    if !custom.is_empty() {
        text.push_str(&format!(" | custom: {}", custom.join(", ")));
    }
    text
}

fn format_validators(validators: &[Validator]) -> String {
    if validators.is_empty() {
        return String::new();
    }
    let names: Vec<String> = validators
        .iter()
        .map(|v| match v {
            Validator::Required => "required".to_string(),
            Validator::RequiredTrue => "requiredTrue".to_string(),
            Validator::Email => "email".to_string(),
            Validator::Min { value } => format!("min={}", value),
            Validator::Max { value } => format!("max={}", value),
            Validator::MinLength { value } => format!("minLength={}", value),
            Validator::MaxLength { value } => format!("maxLength={}", value),
            Validator::Pattern { pattern } => format!("pattern={}", pattern),
            Validator::Custom { name, .. } => name.clone(),
        })
        .collect();
    format!("[{}]", names.join(", "))
}
