use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ============================================================================
// Field types
// ============================================================================

/// Semantic type of a model field. Drives which input a form renders.
///
/// Unrecognized tags land in `Other` and keep their raw text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    String,
    Text,
    Number,
    Boolean,
    Date,
    DateTime,
    Email,
    Password,
    Json,
    Select,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Json => "json",
            FieldType::Select => "select",
            FieldType::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, FieldType::Other(_))
    }

    /// The type an input should be rendered as. Unknown tags render as strings.
    pub fn input_kind(&self) -> FieldType {
        match self {
            FieldType::Other(_) => FieldType::String,
            known => known.clone(),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => FieldType::String,
            "text" => FieldType::Text,
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "datetime" => FieldType::DateTime,
            "email" => FieldType::Email,
            "password" => FieldType::Password,
            "json" => FieldType::Json,
            "select" => FieldType::Select,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(FieldType::from(tag.as_str()))
    }
}

// ============================================================================
// Validators
// ============================================================================

/// A form validator descriptor. Stored and handed to the form layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Validator {
    Required,
    RequiredTrue,
    Email,
    Min { value: f64 },
    Max { value: f64 },
    MinLength { value: usize },
    MaxLength { value: usize },
    Pattern { pattern: String },
    Custom {
        name: String,
        #[serde(default, skip_serializing_if = "Value::is_null")]
        args: Value,
    },
}

// ============================================================================
// Field definitions and the ordered model
// ============================================================================

/// One attribute of the modeled entity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default)]
    pub validations: Vec<Validator>,

    #[serde(default)]
    pub r#type: FieldType,

    #[serde(default)]
    pub default_value: Value,

    /// Alternate source key when populating from external data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,

    /// Marks this field as the identifier when it is not literally named `id`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub model_id: bool,
}

impl FieldDefinition {
    pub fn new(r#type: impl Into<FieldType>) -> Self {
        Self {
            r#type: r#type.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validations.push(validator);
        self
    }

    pub fn with_map(mut self, key: impl Into<String>) -> Self {
        self.map = Some(key.into());
        self
    }

    pub fn as_model_id(mut self) -> Self {
        self.model_id = true;
        self
    }
}

impl From<FieldType> for FieldDefinition {
    fn from(r#type: FieldType) -> Self {
        FieldDefinition::new(r#type)
    }
}

/// Field name to definition. Declaration order decides form ordering,
/// default sort and identifier resolution.
pub type Model = IndexMap<String, FieldDefinition>;

/// Model key as written in YAML. Plain scalars like `1:` or `true:` are
/// field names too, so they are read back as their text.
#[derive(PartialEq, Eq, Hash)]
struct FieldName(String);

impl<'de> Deserialize<'de> for FieldName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldNameVisitor;

        impl Visitor<'_> for FieldNameVisitor {
            type Value = FieldName;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a field name")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldName, E> {
                Ok(FieldName(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<FieldName, E> {
                Ok(FieldName(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldName, E> {
                Ok(FieldName(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldName, E> {
                Ok(FieldName(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldName, E> {
                Ok(FieldName(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldName, E> {
                Ok(FieldName(v.to_string()))
            }
        }

        deserializer.deserialize_any(FieldNameVisitor)
    }
}

/// Read a [`Model`], accepting numeric and boolean keys as field names.
pub(crate) fn deserialize_model<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Model, D::Error> {
    let raw = IndexMap::<FieldName, FieldDefinition>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(FieldName(name), field)| (name, field)).collect())
}
