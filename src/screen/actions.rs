use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ActionError;
use crate::screen::screen_model::Screen;

/// Action names that toggle the standard affordances instead of adding a control.
pub const RESERVED_ACTIONS: [&str; 3] = ["view", "edit", "create"];

pub fn is_reserved_action(name: &str) -> bool {
    RESERVED_ACTIONS.contains(&name)
}

// ============================================================================
// Custom action seams (implemented by the host, never invoked here)
// ============================================================================

/// Pending result of a custom action.
pub type ActionFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, ActionError>> + Send + 'a>>;

/// Host-side service that executes custom actions against the backend.
pub trait CustomActionsService: Send + Sync {
    fn execute<'a>(&'a self, screen: &'a str, action: &'a str, item: &'a Value) -> ActionFuture<'a>;
}

/// Handler behind an extra per-item control on a screen.
pub trait CustomAction: Send + Sync {
    fn run<'a>(
        &'a self,
        item: &'a Value,
        screen: &'a Screen,
        service: &'a dyn CustomActionsService,
    ) -> ActionFuture<'a>;
}

/// A custom action paired with the name it is exposed under.
#[derive(Clone)]
pub struct NamedAction {
    pub name: String,
    pub action: Arc<dyn CustomAction>,
}

impl NamedAction {
    pub fn new(name: impl Into<String>, action: Arc<dyn CustomAction>) -> Self {
        Self {
            name: name.into(),
            action,
        }
    }
}

impl fmt::Debug for NamedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Action configuration
// ============================================================================

/// Value side of a legacy `name -> flag | handler` action map.
#[derive(Clone)]
pub enum ActionValue {
    Flag(bool),
    Custom(Arc<dyn CustomAction>),
}

/// Which standard affordances a screen offers, plus its custom actions in order.
///
/// Custom handlers cannot come from a descriptor file; attach them in code
/// with [`AvailableActions::with_custom`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailableActions {
    #[serde(default)]
    pub view: bool,

    #[serde(default)]
    pub edit: bool,

    #[serde(default)]
    pub create: bool,

    #[serde(skip)]
    pub custom: Vec<NamedAction>,
}

impl AvailableActions {
    pub fn new(view: bool, edit: bool, create: bool) -> Self {
        Self {
            view,
            edit,
            create,
            custom: Vec::new(),
        }
    }

    pub fn with_custom(mut self, name: impl Into<String>, action: Arc<dyn CustomAction>) -> Self {
        self.custom.push(NamedAction::new(name, action));
        self
    }

    /// Build from a legacy action map, preserving the iteration order of
    /// custom entries.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ActionValue)>,
        K: Into<String>,
    {
        let mut actions = AvailableActions::default();
        for (name, value) in entries {
            let name = name.into();
            match value {
                ActionValue::Flag(flag) => match name.as_str() {
                    "view" => actions.view = flag,
                    "edit" => actions.edit = flag,
                    "create" => actions.create = flag,
                    other => {
                        tracing::debug!(action = other, "ignoring flag for non-reserved action");
                    }
                },
                ActionValue::Custom(action) => {
                    if is_reserved_action(&name) {
                        tracing::debug!(action = %name, "dropping handler under reserved action name");
                    } else {
                        actions.custom.push(NamedAction { name, action });
                    }
                }
            }
        }
        actions
    }

    pub fn allows(&self, name: &str) -> bool {
        match name {
            "view" => self.view,
            "edit" => self.edit,
            "create" => self.create,
            other => self.custom.iter().any(|a| a.name == other),
        }
    }
}
