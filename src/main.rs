use iced::widget::{button, column, container, scrollable, text, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use serde_json::Value;

mod api;
mod catalog;
mod screen;

use api::{ApiClient, Record};
use screen::health::HealthScreen;
use screen::procedure::ProcedureScreen;
use screen::view_table::ViewScreen;

/// Which screen is currently mounted
enum Screen {
    Menu,
    Procedure(ProcedureScreen),
    View(ViewScreen),
    Health(HealthScreen),
}

/// Main application state
struct AirlineConsole {
    /// Client for the backend API
    api: ApiClient,
    /// The mounted screen; navigation replaces it wholesale
    screen: Screen,
    /// Screen generation counter. Async results are stamped with the
    /// generation they were issued under; a result from an older
    /// generation belongs to an unmounted screen and is dropped.
    seq: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Navigate back to the menu
    OpenMenu,
    /// Open the procedure form at this catalog index
    OpenProcedure(usize),
    /// Open the view table at this catalog index and start its fetch
    OpenView(usize),
    /// Open the health screen and start its check
    OpenHealth,
    /// User typed into a form field
    FieldChanged(usize, String),
    /// User pressed Submit on the mounted form
    Submit,
    /// A procedure call finished
    Submitted {
        seq: u64,
        result: Result<(), String>,
    },
    /// A view fetch finished
    ViewLoaded {
        seq: u64,
        result: Result<Vec<Record>, String>,
    },
    /// The health check finished
    HealthLoaded {
        seq: u64,
        result: Result<Value, String>,
    },
}

impl AirlineConsole {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let api = ApiClient::from_env();
        println!("✈️  Airline console talking to {}", api.base_url());

        (
            AirlineConsole {
                api,
                screen: Screen::Menu,
                seq: 0,
            },
            Task::none(),
        )
    }

    /// Swap in a new screen, invalidating all in-flight results
    fn mount(&mut self, screen: Screen) -> u64 {
        self.seq += 1;
        self.screen = screen;
        self.seq
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenMenu => {
                self.mount(Screen::Menu);
                Task::none()
            }
            Message::OpenProcedure(index) => {
                if let Some(spec) = catalog::PROCEDURES.get(index) {
                    self.mount(Screen::Procedure(ProcedureScreen::new(spec)));
                }
                Task::none()
            }
            Message::OpenView(index) => {
                let Some(name) = catalog::VIEWS.get(index) else {
                    return Task::none();
                };
                let seq = self.mount(Screen::View(ViewScreen::new(*name)));
                let api = self.api.clone();
                let name = name.to_string();
                Task::perform(
                    async move { api.fetch_view(&name).await.map_err(|e| e.to_string()) },
                    move |result| Message::ViewLoaded { seq, result },
                )
            }
            Message::OpenHealth => {
                let seq = self.mount(Screen::Health(HealthScreen::new()));
                let api = self.api.clone();
                Task::perform(
                    async move { api.fetch_health().await.map_err(|e| e.to_string()) },
                    move |result| Message::HealthLoaded { seq, result },
                )
            }
            Message::FieldChanged(index, value) => {
                if let Screen::Procedure(form) = &mut self.screen {
                    form.field_changed(index, value);
                }
                Task::none()
            }
            Message::Submit => {
                let Screen::Procedure(form) = &self.screen else {
                    return Task::none();
                };
                // No in-flight lock: overlapping submits are allowed.
                let (method, path, body) = form.request();
                let seq = self.seq;
                let api = self.api.clone();
                Task::perform(
                    async move { api.submit(method, &path, body).await.map_err(|e| e.to_string()) },
                    move |result| Message::Submitted { seq, result },
                )
            }
            Message::Submitted { seq, result } => {
                if seq == self.seq {
                    if let Screen::Procedure(form) = &mut self.screen {
                        form.set_result(result);
                    }
                }
                Task::none()
            }
            Message::ViewLoaded { seq, result } => {
                if seq == self.seq {
                    if let Screen::View(table) = &mut self.screen {
                        table.loaded(result);
                    }
                }
                Task::none()
            }
            Message::HealthLoaded { seq, result } => {
                if seq == self.seq {
                    if let Screen::Health(health) = &mut self.screen {
                        health.loaded(result);
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body = match &self.screen {
            Screen::Menu => screen::menu::view(),
            Screen::Procedure(form) => form.view(),
            Screen::View(table) => table.view(),
            Screen::Health(health) => health.view(),
        };

        let mut bar = Row::new().spacing(12).align_y(Alignment::Center);
        if !matches!(self.screen, Screen::Menu) {
            bar = bar.push(button("Menu").on_press(Message::OpenMenu).padding(6));
        }
        bar = bar.push(text("Airline Management Console").size(20));

        container(
            column![bar, scrollable(body).height(Length::Fill)]
                .spacing(16)
                .padding(20),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Airline Management Console",
        AirlineConsole::update,
        AirlineConsole::view,
    )
    .theme(AirlineConsole::theme)
    .centered()
    .run_with(AirlineConsole::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::view_table::LoadState;
    use serde_json::json;

    fn app() -> AirlineConsole {
        AirlineConsole {
            api: ApiClient::new("http://127.0.0.1:1/api"),
            screen: Screen::Menu,
            seq: 0,
        }
    }

    fn procedure_index(title: &str) -> usize {
        catalog::PROCEDURES
            .iter()
            .position(|p| p.title == title)
            .expect("procedure not in catalog")
    }

    #[test]
    fn test_navigation_bumps_generation() {
        let mut console = app();
        let _ = console.update(Message::OpenHealth);
        assert_eq!(console.seq, 1);
        let _ = console.update(Message::OpenMenu);
        assert_eq!(console.seq, 2);
        assert!(matches!(console.screen, Screen::Menu));
    }

    #[test]
    fn test_landing_form_builds_contract_request() {
        let mut console = app();
        let _ = console.update(Message::OpenProcedure(procedure_index("Flight Landing")));
        let _ = console.update(Message::FieldChanged(0, "42".to_string()));

        let Screen::Procedure(form) = &console.screen else {
            panic!("expected procedure screen");
        };
        let (method, path, body) = form.request();
        assert_eq!(method, catalog::Method::Post);
        assert_eq!(path, "/flights/42/land");
        assert_eq!(body, json!({ "flightID": "42" }));
    }

    #[test]
    fn test_submit_result_lands_on_mounted_form() {
        let mut console = app();
        let _ = console.update(Message::OpenProcedure(procedure_index("Simulation Cycle")));
        let seq = console.seq;
        let _ = console.update(Message::Submitted { seq, result: Ok(()) });

        let Screen::Procedure(form) = &console.screen else {
            panic!("expected procedure screen");
        };
        assert_eq!(form.message(), Some("Success!"));
    }

    #[test]
    fn test_stale_submit_result_is_dropped() {
        let mut console = app();
        let _ = console.update(Message::OpenProcedure(procedure_index("Flight Landing")));
        let stale = console.seq;
        // Navigate to a different form before the result arrives
        let _ = console.update(Message::OpenProcedure(procedure_index("Flight Takeoff")));
        let _ = console.update(Message::Submitted {
            seq: stale,
            result: Ok(()),
        });

        let Screen::Procedure(form) = &console.screen else {
            panic!("expected procedure screen");
        };
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_stale_view_rows_are_dropped() {
        let mut console = app();
        let _ = console.update(Message::OpenView(0));
        let stale = console.seq;
        let _ = console.update(Message::OpenView(1));

        let _ = console.update(Message::ViewLoaded {
            seq: stale,
            result: Ok(vec![json!({ "flightID": 1 }).as_object().unwrap().clone()]),
        });
        let Screen::View(table) = &console.screen else {
            panic!("expected view screen");
        };
        assert!(matches!(table.state(), LoadState::Loading));

        let _ = console.update(Message::ViewLoaded {
            seq: console.seq,
            result: Ok(vec![]),
        });
        let Screen::View(table) = &console.screen else {
            panic!("expected view screen");
        };
        assert!(matches!(table.state(), LoadState::Loaded(rows) if rows.is_empty()));
    }

    #[test]
    fn test_field_edits_outside_forms_are_ignored() {
        let mut console = app();
        let _ = console.update(Message::OpenHealth);
        // Must not panic or disturb the mounted screen
        let _ = console.update(Message::FieldChanged(0, "noise".to_string()));
        assert!(matches!(console.screen, Screen::Health(_)));
    }
}
