/// Navigation menu screen
///
/// A static catalog of links: every procedure, every view, and the
/// health check. No state, no side effects.

use iced::widget::{button, column, text, Column};
use iced::Element;

use crate::catalog::{PROCEDURES, VIEWS};
use crate::Message;

pub fn view() -> Element<'static, Message> {
    let mut procedures = Column::new().spacing(6);
    for (index, spec) in PROCEDURES.iter().enumerate() {
        procedures = procedures.push(
            button(spec.title)
                .on_press(Message::OpenProcedure(index))
                .padding(6),
        );
    }

    let mut views = Column::new().spacing(6);
    for (index, name) in VIEWS.iter().enumerate() {
        views = views.push(button(*name).on_press(Message::OpenView(index)).padding(6));
    }

    column![
        text("Procedures").size(24),
        procedures,
        text("Views").size(24),
        views,
        text("Status").size(24),
        button("Health Check").on_press(Message::OpenHealth).padding(6),
    ]
    .spacing(16)
    .into()
}
