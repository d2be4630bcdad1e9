use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::screen::{
    routes::ScreenSettings,
    screen_model::{Screen, ScreenDescriptor},
};

// ============================================================================
// Navigator entries
// ============================================================================

/// One link in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorEntry {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub route_path: String,
}

// ============================================================================
// Registry
// ============================================================================

/// Screens known to the UI, in registration order and keyed by name.
#[derive(Debug, Clone, Default)]
pub struct ScreenRegistry {
    screens: IndexMap<String, Screen>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct and register every descriptor with shared settings.
    pub fn from_descriptors<I>(descriptors: I, settings: &ScreenSettings) -> Self
    where
        I: IntoIterator<Item = ScreenDescriptor>,
    {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(Screen::new(descriptor, settings.clone()));
        }
        registry
    }

    /// Add a screen. A screen with the same name is replaced in place and
    /// keeps its position.
    pub fn register(&mut self, screen: Screen) {
        let name = screen.name().to_string();
        if self.screens.insert(name.clone(), screen).is_some() {
            tracing::warn!(screen = %name, "replaced previously registered screen");
        } else {
            tracing::debug!(screen = %name, "registered screen");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Screen> {
        self.screens.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Screen> {
        self.screens.values()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// Menu entries for screens shown in the navigator.
    pub fn navigator_entries(&self) -> Vec<NavigatorEntry> {
        self.iter()
            .filter(|screen| screen.include_in_navigator())
            .map(|screen| NavigatorEntry {
                display_name: screen.display_name(),
                icon: screen.icon().map(str::to_string),
                route_path: screen.route_path(),
            })
            .collect()
    }
}
