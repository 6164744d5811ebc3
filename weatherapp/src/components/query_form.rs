use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Block,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city name";

/// Single-field city form. Enter submits, Esc quits.
pub struct QueryForm {
    input: TextInput,
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

pub struct QueryFormProps<'a> {
    pub query: &'a str,
    pub is_focused: bool,
    /// A lookup is in flight
    pub is_pending: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for QueryForm {
    type Props<'a> = QueryFormProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => vec![Action::Quit],
            KeyCode::Enter => vec![(props.on_submit)(props.query.to_string())],
            _ => {
                // All other keys go to the input
                let input_props = TextInputProps {
                    value: props.query,
                    placeholder: PLACEHOLDER,
                    is_focused: true,
                    style: TextInputStyle {
                        base: BaseStyle {
                            border: None,
                            padding: Padding::xy(1, 0),
                            bg: None,
                            fg: None,
                        },
                        placeholder_style: None,
                        cursor_style: None,
                    },
                    on_change: props.on_change,
                    on_submit: props.on_submit,
                    on_cursor_move: Some(|_| Action::Render),
                };
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border = if props.is_focused {
            Color::Rgb(100, 160, 230)
        } else {
            Color::DarkGray
        };
        let mut block = Block::bordered()
            .title(" City ")
            .border_style(Style::default().fg(border));
        if props.is_pending {
            block = block.title_bottom(" searching... ");
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        let input_props = TextInputProps {
            value: props.query,
            placeholder: PLACEHOLDER,
            is_focused: props.is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, inner, input_props);
    }
}
