use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, QueryForm, QueryFormProps, WeatherCard, WeatherCardProps};
use crate::action::Action;
use crate::state::AppState;

/// Props for WeatherScreen - read-only view of state
pub struct WeatherScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Form on top, conditions below, key hints at the bottom
#[derive(Default)]
pub struct WeatherScreen {
    form: QueryForm,
}

impl WeatherScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(props: &'a WeatherScreenProps<'a>) -> QueryFormProps<'a> {
        QueryFormProps {
            query: &props.state.query,
            is_focused: props.is_focused,
            is_pending: props.state.is_pending(),
            on_change: Action::QueryChange,
            on_submit: Action::QuerySubmit,
        }
    }
}

impl Component<Action> for WeatherScreen {
    type Props<'a> = WeatherScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let form_props = Self::form_props(&props);
        self.form
            .handle_event(event, form_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherScreenProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Form
            Constraint::Min(1),    // Conditions
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        self.form.render(frame, chunks[0], Self::form_props(&props));

        let mut card = WeatherCard;
        card.render(frame, chunks[1], WeatherCardProps { state: props.state });

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
