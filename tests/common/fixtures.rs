use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};

use serde_json::{Value, json};

use screen_descriptor::{
    ActionError, ActionFuture, AvailableActions, CustomAction, CustomActionsService, FieldDefinition, FieldType,
    Screen, ScreenDescriptor, ScreenSettings, Validator,
};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_str(name: &str) -> String {
    fixture(name).display().to_string()
}

pub fn settings() -> ScreenSettings {
    ScreenSettings::new("/api", "/admin")
}

/// Forwards to the service under the name "publish". Needs the edit affordance.
pub struct PublishAction;

impl CustomAction for PublishAction {
    fn run<'a>(
        &'a self,
        item: &'a Value,
        screen: &'a Screen,
        service: &'a dyn CustomActionsService,
    ) -> ActionFuture<'a> {
        if !screen.available_actions().edit {
            return Box::pin(std::future::ready(Err(ActionError::Unavailable {
                screen: screen.name().to_string(),
                action: "publish".to_string(),
            })));
        }
        service.execute(screen.name(), "publish", item)
    }
}

/// Resolves immediately with what it was asked to do. Locked items fail.
pub struct EchoService;

impl CustomActionsService for EchoService {
    fn execute<'a>(&'a self, screen: &'a str, action: &'a str, item: &'a Value) -> ActionFuture<'a> {
        let result = if item["locked"] == json!(true) {
            Err(ActionError::Failed {
                action: action.to_string(),
                message: "item is locked".to_string(),
            })
        } else {
            Ok(json!({ "screen": screen, "action": action, "item": item }))
        };
        Box::pin(std::future::ready(result))
    }
}

/// Poll a custom action once. The fixtures above never suspend.
pub fn resolve_now(mut pending: ActionFuture<'_>) -> Result<Value, ActionError> {
    let mut cx = Context::from_waker(Waker::noop());
    match pending.as_mut().poll(&mut cx) {
        Poll::Ready(result) => result,
        Poll::Pending => panic!("fixture action should resolve immediately"),
    }
}

pub fn users_descriptor() -> ScreenDescriptor {
    ScreenDescriptor::new("users")
        .icon("person")
        .api_url_prefix("v2")
        .table_columns(["email", "fullName"])
        .actions(
            AvailableActions::new(true, true, false)
                .with_custom("publish", Arc::new(PublishAction)),
        )
        .field("id", FieldType::Number)
        .field(
            "email",
            FieldDefinition::new(FieldType::Email)
                .with_validator(Validator::Required)
                .with_validator(Validator::Email),
        )
        .field("fullName", FieldDefinition::new("string").with_default("Anonymous"))
        .field("count", FieldDefinition::new(FieldType::Number).with_default(5))
}

pub fn users_screen() -> Screen {
    Screen::new(users_descriptor(), settings())
}
