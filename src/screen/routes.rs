use serde::{Deserialize, Serialize};

/// Base paths every screen builds its URLs from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSettings {
    /// Prefix of backend API URLs, e.g. `/api`
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Prefix of front-end navigation paths, e.g. `/admin`
    #[serde(default = "default_ui_base")]
    pub ui_base: String,
}

impl ScreenSettings {
    pub fn new(api_base: impl Into<String>, ui_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ui_base: ui_base.into(),
        }
    }
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            ui_base: default_ui_base(),
        }
    }
}

fn default_api_base() -> String { "/api".to_string() }
fn default_ui_base() -> String { "/admin".to_string() }

/// `{api_base}/{prefix/}{name}`: the resource root shared by every API URL.
///
/// An empty prefix counts as no prefix.
pub fn resource_url(api_base: &str, url_prefix: Option<&str>, name: &str) -> String {
    match url_prefix.filter(|p| !p.is_empty()) {
        Some(prefix) => format!("{}/{}/{}", api_base, prefix, name),
        None => format!("{}/{}", api_base, name),
    }
}

pub fn query_url(api_base: &str, url_prefix: Option<&str>, name: &str) -> String {
    format!("{}/query", resource_url(api_base, url_prefix, name))
}

/// The id is appended verbatim, so an empty id leaves a trailing slash.
pub fn instance_url(api_base: &str, url_prefix: Option<&str>, name: &str, id: &str) -> String {
    format!("{}/{}", resource_url(api_base, url_prefix, name), id)
}

pub fn route_path(ui_base: &str, name: &str) -> String {
    format!("{}/{}", ui_base, name)
}
