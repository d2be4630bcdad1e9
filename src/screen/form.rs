use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::screen::{
    field_model::{FieldType, Validator},
    screen_model::{Mode, Screen},
};

// ============================================================================
// Form shape
// ============================================================================

/// One control of a generated form: initial value, validators, extra state.
///
/// `state` mirrors the third slot reactive form builders accept and is
/// always `None` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormControl {
    pub value: Value,
    pub validators: Vec<Validator>,
    pub state: Option<Value>,
}

/// A field name paired with its type, in model order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeEntry {
    pub name: String,
    pub r#type: FieldType,
}

impl Screen {
    /// Build the form controls for `mode`, seeded from `initial_values`.
    ///
    /// A looked-up value that is missing or falsy (`null`, `false`, `0`, `""`)
    /// falls back to the field's `defaultValue`. Objects and arrays become
    /// pretty-printed JSON text.
    pub fn form(&self, initial_values: &Value, mode: Option<Mode>) -> IndexMap<String, FormControl> {
        let mut controls = IndexMap::with_capacity(self.model().len());

        for (name, field) in self.model() {
            if self.excludes_field(name, mode) {
                continue;
            }

            let value = lookup_path(initial_values, name)
                .filter(|v| is_truthy(v))
                .unwrap_or(&field.default_value);

            controls.insert(
                name.clone(),
                FormControl {
                    value: display_value(value),
                    validators: field.validations.clone(),
                    state: None,
                },
            );
        }

        controls
    }

    /// Field names and types in model order, with the same identifier
    /// exclusion as [`Screen::form`].
    pub fn types(&self, mode: Option<Mode>) -> Vec<FieldTypeEntry> {
        self.model()
            .iter()
            .filter(|(name, _)| !self.excludes_field(name, mode))
            .map(|(name, field)| FieldTypeEntry {
                name: name.clone(),
                r#type: field.r#type.clone(),
            })
            .collect()
    }
}

// ============================================================================
// Value helpers
// ============================================================================

/// JavaScript-style truthiness over JSON values.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve `path` inside `root`.
///
/// An exact top-level key wins. Otherwise the path is split on `.`, with
/// `a[0]` read as `a.0`, and walked through objects and arrays.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if let Some(found) = root.as_object().and_then(|obj| obj.get(path)) {
        return Some(found);
    }

    let normalized = path.replace('[', ".").replace(']', "");
    let segments: Vec<&str> = normalized.split('.').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(obj) => obj.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Render structured values as indented JSON text. Scalars pass through.
pub fn display_value(value: &Value) -> Value {
    match value {
        Value::Object(_) | Value::Array(_) => {
            Value::String(serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()))
        }
        scalar => scalar.clone(),
    }
}
