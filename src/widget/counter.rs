use iced::{
    Alignment, Element, Length,
    widget::{Button, Column, Container, Text, container},
};

use super::{
    message::Message,
    render::{Node, NodeKind, Rendered, render},
    state::{CounterState, reduce},
};
use crate::config::{ALERT_COLOR, HEADING_SIZE, PADDING, SPACING};

/// The counter as an iced application state.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterWidget {
    state: CounterState,
}

impl CounterWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: CounterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn render(&self) -> Rendered {
        render(&self.state)
    }

    pub fn update(&mut self, message: Message) {
        self.state = reduce(self.state, message);
        log::debug!("{message:?} -> {:?}", self.state);
    }

    pub fn view(&self) -> Element<'_, Message> {
        element(self.render().into_root())
    }
}

fn element(node: Node) -> Element<'static, Message> {
    match node.kind {
        NodeKind::Container => {
            let content = node
                .children
                .into_iter()
                .fold(
                    Column::new().spacing(SPACING).align_x(Alignment::Center),
                    |col, child| col.push(element(child)),
                );

            Container::new(content)
                .id(container::Id::new(node.id.as_str()))
                .padding(PADDING)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        }
        NodeKind::Heading => Text::new(node.text).size(HEADING_SIZE).into(),
        NodeKind::Button(message) => Button::new(Text::new(node.text))
            .on_press(message)
            .into(),
        NodeKind::ErrorText => Text::new(node.text).color(ALERT_COLOR).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{CounterError, TestId};

    #[test]
    fn update_runs_the_reducer() {
        let mut widget = CounterWidget::new();
        widget.update(Message::Decrement);
        assert_eq!(widget.state().counter, 0);
        assert_eq!(widget.state().error, Some(CounterError::FloorViolation));

        widget.update(Message::Increment);
        widget.update(Message::Increment);
        assert_eq!(widget.state(), CounterState::new(2));
    }

    #[test]
    fn render_tracks_updates() {
        let mut widget = CounterWidget::with_state(CounterState::new(4));
        widget.update(Message::Increment);
        let rendered = widget.render();
        assert_eq!(
            rendered.find_one(TestId::CounterDisplay).unwrap().text,
            "The counter is currently 5"
        );
    }

    #[test]
    fn view_builds_for_both_states() {
        let _ = CounterWidget::new().view();
        let mut widget = CounterWidget::new();
        widget.update(Message::Decrement);
        let _ = widget.view();
    }
}
