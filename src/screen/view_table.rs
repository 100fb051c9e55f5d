/// Read-only view table screen
///
/// Fetches one backend view on mount and renders the rows as a table.
/// Column headers are the keys of the first row in the order the server
/// sent them; an empty result set therefore renders no columns at all.
/// That quirk comes from the backend contract and is kept as-is.

use iced::widget::{column, text, Column, Row};
use iced::Element;
use serde_json::Value;

use crate::api::Record;
use crate::Message;

const CELL_WIDTH: f32 = 140.0;

/// Load state of a single view fetch
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Record>),
    Failed(String),
}

/// Transient state of one view screen
#[derive(Debug)]
pub struct ViewScreen {
    name: String,
    state: LoadState,
}

impl ViewScreen {
    /// Mount in the loading state; the fetch is issued by the caller
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch finished; a failure is shown inline, never as an alert
    pub fn loaded(&mut self, result: Result<Vec<Record>, String>) {
        self.state = match result {
            Ok(rows) => LoadState::Loaded(rows),
            Err(message) => LoadState::Failed(format!("Error: {message}")),
        };
    }

    pub fn view(&self) -> Element<Message> {
        let body: Element<Message> = match &self.state {
            LoadState::Loading => text("Loading...").into(),
            LoadState::Failed(message) => text(message).into(),
            LoadState::Loaded(rows) => table(rows),
        };

        column![text(&self.name).size(32), body].spacing(20).into()
    }
}

/// Render rows as a header line plus one line per record
fn table(rows: &[Record]) -> Element<Message> {
    let headers = columns(rows);

    let mut header_row = Row::new().spacing(8);
    for name in &headers {
        header_row = header_row.push(text(name.to_string()).size(16).width(CELL_WIDTH));
    }

    let mut body = Column::new().spacing(4);
    body = body.push(header_row);
    for record in rows {
        let mut line = Row::new().spacing(8);
        for name in &headers {
            let value = record.get(*name).map(cell_text).unwrap_or_default();
            line = line.push(text(value).size(14).width(CELL_WIDTH));
        }
        body = body.push(line);
    }

    body.into()
}

/// Column headers from the first row, in insertion order
fn columns(rows: &[Record]) -> Vec<&str> {
    rows.first()
        .map(|record| record.keys().map(|k| k.as_str()).collect())
        .unwrap_or_default()
}

/// Stringify one cell: strings bare, everything else as JSON
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().expect("test row must be an object").clone()
    }

    #[test]
    fn test_columns_come_from_first_row_in_order() {
        let rows = vec![
            record(json!({ "flightID": 1, "status": "air" })),
            record(json!({ "status": "air", "extra": true })),
        ];
        assert_eq!(columns(&rows), vec!["flightID", "status"]);
    }

    #[test]
    fn test_empty_result_has_no_columns() {
        assert!(columns(&[]).is_empty());
    }

    #[test]
    fn test_cell_text_keeps_strings_bare() {
        assert_eq!(cell_text(&json!("ATL")), "ATL");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(null)), "null");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[test]
    fn test_loaded_rows_replace_loading_state() {
        let mut screen = ViewScreen::new("flights_in_the_air");
        assert!(matches!(screen.state(), LoadState::Loading));

        screen.loaded(Ok(vec![record(json!({ "flightID": 1 }))]));
        match screen.state() {
            LoadState::Loaded(rows) => assert_eq!(rows.len(), 1),
            other => panic!("expected loaded state, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_failure_is_shown_inline() {
        let mut screen = ViewScreen::new("route_summary");
        screen.loaded(Err("Invalid view".to_string()));
        match screen.state() {
            LoadState::Failed(message) => assert_eq!(message, "Error: Invalid view"),
            other => panic!("expected failed state, got {other:?}"),
        }
    }
}
