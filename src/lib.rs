//! Declarative descriptors for admin UI screens.
//!
//! A [`Screen`] is built once from a [`ScreenDescriptor`] and injected
//! [`ScreenSettings`], then answers read-only questions for the UI: form
//! controls, field types, table metadata, API and route URLs, and custom
//! actions.

pub mod cli;
pub mod error;
pub mod registry;
pub mod report;
pub mod screen;

pub use error::{ActionError, CommandError, LoadError};
pub use registry::{
    loader::{load_descriptors, parse_descriptors},
    registry::{NavigatorEntry, ScreenRegistry},
};
pub use screen::{
    actions::{ActionFuture, ActionValue, AvailableActions, CustomAction, CustomActionsService, NamedAction},
    field_model::{FieldDefinition, FieldType, Model, Validator},
    form::{FieldTypeEntry, FormControl},
    routes::ScreenSettings,
    screen_model::{Mode, Screen, ScreenDescriptor},
    table::{ColumnHeader, TableData},
    validation::ValidationIssue,
};
