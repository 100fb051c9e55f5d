/// Generic procedure form screen
///
/// Parameterized entirely by a catalog entry: one text input per field,
/// one HTTP request per submit. There is no client-side validation and
/// no in-flight lock — raw values go to the backend as-is, overlapping
/// submits are allowed, and the server's verdict is shown verbatim.

use iced::widget::{button, column, text, text_input, Column};
use iced::Element;
use serde_json::Value;

use crate::catalog::{FieldMap, Method, ProcedureSpec};
use crate::Message;

/// Transient state of one procedure form
#[derive(Debug)]
pub struct ProcedureScreen {
    spec: &'static ProcedureSpec,
    values: FieldMap,
    message: Option<String>,
}

impl ProcedureScreen {
    /// Mount the form with every field empty
    pub fn new(spec: &'static ProcedureSpec) -> Self {
        Self {
            spec,
            values: FieldMap::new(spec.fields),
            message: None,
        }
    }

    /// Record a keystroke in one field
    pub fn field_changed(&mut self, index: usize, value: String) {
        self.values.set(index, value);
    }

    /// The (method, path, body) triple a submit would send right now
    pub fn request(&self) -> (Method, String, Value) {
        (
            self.spec.method,
            (self.spec.url)(&self.values),
            (self.spec.body)(&self.values),
        )
    }

    /// Outcome of the last submit that came back
    pub fn set_result(&mut self, result: Result<(), String>) {
        self.message = Some(match result {
            Ok(()) => "Success!".to_string(),
            Err(message) => format!("Error: {message}"),
        });
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn view(&self) -> Element<Message> {
        let params: Element<Message> = if self.values.is_empty() {
            text("No parameters.").size(14).into()
        } else {
            let mut form = Column::new().spacing(10);
            for (index, (name, value)) in self.values.iter().enumerate() {
                form = form.push(
                    text_input(name, value).on_input(move |v| Message::FieldChanged(index, v)),
                );
            }
            form.into()
        };

        let mut content = column![
            text(self.spec.title).size(32),
            params,
            button("Submit").on_press(Message::Submit).padding(10),
        ]
        .spacing(20);

        if let Some(message) = &self.message {
            content = content.push(text(message).size(16));
        }

        content.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROCEDURES;

    fn screen(title: &str) -> ProcedureScreen {
        let spec = PROCEDURES
            .iter()
            .find(|p| p.title == title)
            .expect("procedure not in catalog");
        ProcedureScreen::new(spec)
    }

    #[test]
    fn test_mounts_with_empty_fields_and_no_message() {
        let form = screen("Add Airport");
        assert!(form.values.iter().all(|(_, v)| v.is_empty()));
        assert!(form.message().is_none());
    }

    #[test]
    fn test_landing_request_matches_contract() {
        let mut form = screen("Flight Landing");
        form.field_changed(0, "42".to_string());
        let (method, path, body) = form.request();
        assert_eq!(method, Method::Post);
        assert_eq!(path, "/flights/42/land");
        assert_eq!(body, serde_json::json!({ "flightID": "42" }));
    }

    #[test]
    fn test_success_sets_success_message() {
        let mut form = screen("Simulation Cycle");
        form.set_result(Ok(()));
        assert_eq!(form.message(), Some("Success!"));
    }

    #[test]
    fn test_failure_prefixes_server_text() {
        let mut form = screen("Add Airplane");
        form.set_result(Err("Missing 'ip_speed'".to_string()));
        assert_eq!(form.message(), Some("Error: Missing 'ip_speed'"));
    }

    #[test]
    fn test_out_of_range_field_edit_is_ignored() {
        let mut form = screen("Flight Takeoff");
        form.field_changed(99, "noise".to_string());
        let (_, path, _) = form.request();
        assert_eq!(path, "/flights//takeoff");
    }
}
