use artbox::{
    Alignment as ArtAlignment, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::location_header::{HEADER_OVERHEAD, temperature_colors};
use super::{Component, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::api::icon_url;
use crate::sprites;
use crate::state::{AppState, WeatherView};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Everything below the form: current conditions, a placeholder, or the error.
pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
}

/// Fixed rows: blank + blank + condition + stats.
const LAYOUT_FIXED: u16 = 4;

/// Text cap tiers: (header_cap, temp_cap).
/// terminus(6), miniwi(4), plain(1), with HEADER_OVERHEAD added to header.
const TEXT_TIERS: [(u16, u16); 3] = [
    (6 + HEADER_OVERHEAD, 6), // terminus for both
    (4 + HEADER_OVERHEAD, 4), // miniwi for both
    (1 + HEADER_OVERHEAD, 1), // plain for both
];

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

struct LayoutSizing {
    show_sprite: bool,
    sprite_h: u16,
    header_cap: u16,
    temp_cap: u16,
}

/// Keep the sprite by shrinking text first; fall back to emoji with plain text.
fn compute_layout(area_height: u16) -> LayoutSizing {
    let sprite_h = sprites::max_sprite_height();
    for &(header_cap, temp_cap) in &TEXT_TIERS {
        if header_cap + temp_cap + LAYOUT_FIXED + sprite_h <= area_height {
            return LayoutSizing {
                show_sprite: true,
                sprite_h,
                header_cap,
                temp_cap,
            };
        }
    }
    let (header_cap, temp_cap) = TEXT_TIERS[TEXT_TIERS.len() - 1];
    LayoutSizing {
        show_sprite: false,
        sprite_h: 1,
        header_cap,
        temp_cap,
    }
}

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let sizing = compute_layout(area.height);

        match CardView::from_state(props.state) {
            CardView::Error(error) => render_error(frame, area, error),
            CardView::Ready(view) => render_ready(frame, area, props.state, view, &sizing),
            CardView::Loading(city) => {
                render_loading(frame, area, props.state, city, &sizing);
            }
            CardView::Empty => render_hint(frame, area),
        }
    }
}

fn make_layout(area: Rect, sizing: &LayoutSizing) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(sizing.header_cap),
        Constraint::Length(1),
        Constraint::Length(sizing.sprite_h),
        Constraint::Length(1),
        Constraint::Max(sizing.temp_cap),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area)
}

fn render_ready(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &WeatherView,
    sizing: &LayoutSizing,
) {
    let chunks = make_layout(area, sizing);

    let place = view.place();
    let caption = icon_url(&view.icon);
    LocationHeader.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            place: &place,
            caption: &caption,
            temperature: Some(view.temperature_c),
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );

    // Sprite or emoji
    let art = if sizing.show_sprite {
        sprites::weather_sprite(&view.icon, sizing.sprite_h)
    } else {
        None
    };
    match art {
        Some(art) => {
            frame.render_widget(
                Paragraph::new(art).alignment(Alignment::Center),
                chunks[2],
            );
        }
        None => {
            let emoji = Line::from(sprites::weather_emoji(&view.icon)).centered();
            frame.render_widget(Paragraph::new(emoji), chunks[2]);
        }
    }

    // Temperature
    let temp_text = view.temperature_label();
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_gradient(view.temperature_c));
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[4]);

    let condition = Line::from(vec![Span::styled(
        view.condition.clone(),
        Style::default().fg(Color::Gray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[5]);

    let label = Style::default().fg(Color::DarkGray);
    let stats = Line::from(vec![
        Span::styled("Humidity ", label),
        Span::styled(view.humidity_label(), Style::default().fg(Color::Cyan)),
        Span::styled("   Wind ", label),
        Span::styled(view.wind_label(), Style::default().fg(Color::Cyan)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(stats), chunks[6]);
}

fn render_loading(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    city: &str,
    sizing: &LayoutSizing,
) {
    let chunks = make_layout(area, sizing);
    LocationHeader.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            place: city,
            caption: "",
            temperature: None,
            is_animating: state.loading_anim_active(),
            tick_count: state.tick_count,
        },
    );

    let msg = Line::from(vec![Span::styled(
        "Loading...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[5]);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Edit the city and press ", Style::default().fg(Color::DarkGray)),
                Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum CardView<'a> {
    Error(&'a str),
    Ready(&'a WeatherView),
    Loading(&'a str),
    Empty,
}

impl<'a> CardView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => CardView::Error(error),
            DataResource::Loaded(view) => CardView::Ready(view),
            DataResource::Loading => CardView::Loading(state.last_city.as_deref().unwrap_or("")),
            DataResource::Empty => CardView::Empty,
        }
    }
}

fn temperature_gradient(celsius: i32) -> Fill {
    let (start, end) = temperature_colors(Some(celsius));
    Fill::Linear(LinearGradient::horizontal(start, end))
}
