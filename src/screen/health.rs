/// Backend health screen
///
/// One read of /health on mount. A failed request is rendered as data
/// in place of the status object, never as an alert, so the screen
/// always leaves the loading state.

use chrono::Local;
use iced::widget::{column, text};
use iced::Element;
use serde_json::{json, Value};

use crate::Message;

#[derive(Debug, Clone)]
enum HealthState {
    Loading,
    Loaded(Value),
}

/// Transient state of the health screen
#[derive(Debug)]
pub struct HealthScreen {
    state: HealthState,
    checked_at: Option<String>,
}

impl HealthScreen {
    pub fn new() -> Self {
        Self {
            state: HealthState::Loading,
            checked_at: None,
        }
    }

    /// Check finished; an error becomes the status object itself
    pub fn loaded(&mut self, result: Result<Value, String>) {
        let status = match result {
            Ok(status) => status,
            Err(message) => json!({ "error": message }),
        };
        self.state = HealthState::Loaded(status);
        self.checked_at = Some(Local::now().format("%H:%M:%S").to_string());
    }

    pub fn view(&self) -> Element<Message> {
        let body: Element<Message> = match &self.state {
            HealthState::Loading => text("Loading...").into(),
            HealthState::Loaded(status) => {
                let pretty = serde_json::to_string_pretty(status)
                    .unwrap_or_else(|_| status.to_string());
                text(pretty).size(16).into()
            }
        };

        let mut content = column![text("API Health").size(32), body].spacing(20);
        if let Some(checked_at) = &self.checked_at {
            content = content.push(text(format!("Checked at {checked_at}")).size(14));
        }
        content.into()
    }
}

impl Default for HealthScreen {
    fn default() -> Self {
        Self::new()
    }
}
