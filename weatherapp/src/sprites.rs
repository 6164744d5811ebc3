//! Condition art keyed by provider icon code
//!
//! Each condition is drawn from one or two coloured layers; spaces in an
//! upper layer are transparent.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

// ============================================================================
// Sprite data
// ============================================================================

mod sprite_data {
    pub const SUN: &str = r"
    \   |   /
     .-'''-.
  -- (     ) --
     '-...-'
    /   |   \
";

    pub const MOON: &str = r"
      _.._
    .' .-'`
   /  /
   |  |
   \  '.___.;
    '._  _.'
       ``
";

    pub const SUN_BEHIND: &str = r"
  \  |  /
   .-'-.
 -(     )-
";

    pub const CLOUD_FRONT: &str = r"


       .--.
    .-(    ).
   (___.__)__)
";

    pub const CLOUD_BACK: &str = r"
      .--.
   .-(    ).
  (___.__)__)
";

    pub const CLOUD_LOW: &str = r"


        .--.
     .-(    ).
    (___.__)__)
";

    pub const DRIZZLE: &str = r"



     ' ' ' '
    ' ' ' '
";

    pub const RAIN: &str = r"



     / / / /
    / / / /
";

    pub const SNOW: &str = r"



     * * * *
    * * * *
";

    pub const BOLT: &str = r"



       /_
        /
";

    pub const FOG: &str = r"
  _ - _ - _ -
   _ - _ - _
  _ - _ - _ -
   _ - _ - _
";
}

// ============================================================================
// Layer compositing
// ============================================================================

/// A single sprite layer with its content and color
struct SpriteLayer {
    content: &'static str,
    color: Color,
}

/// Composite layers into Text; later layers draw over earlier ones.
/// Rows line up across layers, so leading blank lines are significant.
fn composite_layers(layers: &[SpriteLayer]) -> Text<'static> {
    let layer_lines: Vec<Vec<Vec<char>>> = layers
        .iter()
        .map(|layer| {
            let content = layer.content.strip_prefix('\n').unwrap_or(layer.content);
            content
                .lines()
                .map(|line| line.chars().collect())
                .collect()
        })
        .collect();

    let height = layer_lines.iter().map(Vec::len).max().unwrap_or(0);
    let width = layer_lines
        .iter()
        .flatten()
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let lines = (0..height)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..width)
                .map(|col| {
                    let top = layers.iter().zip(&layer_lines).rev().find_map(|(layer, lines)| {
                        lines
                            .get(row)
                            .and_then(|line| line.get(col))
                            .filter(|ch| **ch != ' ')
                            .map(|ch| (*ch, layer.color))
                    });
                    let (ch, color) = top.unwrap_or((' ', Color::Reset));
                    Span::styled(ch.to_string(), Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

// ============================================================================
// Types
// ============================================================================

/// Weather condition categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    ClearNight,
    PartlyCloudy,
    Cloudy,
    Drizzle,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    Unknown,
}

impl WeatherCondition {
    /// Map a provider icon code ("04d", "10n", ...) to a condition.
    pub fn from_icon(icon: &str) -> Self {
        let night = icon.ends_with('n');
        match icon.get(..2).unwrap_or("") {
            "01" if night => WeatherCondition::ClearNight,
            "01" => WeatherCondition::ClearSky,
            "02" => WeatherCondition::PartlyCloudy,
            "03" | "04" => WeatherCondition::Cloudy,
            "09" => WeatherCondition::Drizzle,
            "10" => WeatherCondition::Rain,
            "11" => WeatherCondition::Thunderstorm,
            "13" => WeatherCondition::Snow,
            "50" => WeatherCondition::Fog,
            _ => WeatherCondition::Unknown,
        }
    }

    /// Emoji representation for when sprites don't fit
    pub fn emoji(self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "\u{2600}\u{fe0f}",
            WeatherCondition::ClearNight => "\u{1f319}",
            WeatherCondition::PartlyCloudy => "\u{26c5}",
            WeatherCondition::Cloudy | WeatherCondition::Unknown => "\u{2601}\u{fe0f}",
            WeatherCondition::Fog => "\u{1f32b}\u{fe0f}",
            WeatherCondition::Drizzle => "\u{1f326}\u{fe0f}",
            WeatherCondition::Rain => "\u{1f327}\u{fe0f}",
            WeatherCondition::Snow => "\u{2744}\u{fe0f}",
            WeatherCondition::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }

    fn layers(self) -> Vec<SpriteLayer> {
        use sprite_data::*;

        let cloud = |content| SpriteLayer {
            content,
            color: Color::Rgb(170, 170, 185),
        };
        let dark_cloud = |content| SpriteLayer {
            content,
            color: Color::Rgb(120, 120, 140),
        };

        match self {
            WeatherCondition::ClearSky => vec![SpriteLayer {
                content: SUN,
                color: Color::Yellow,
            }],
            WeatherCondition::ClearNight => vec![SpriteLayer {
                content: MOON,
                color: Color::Rgb(220, 220, 170),
            }],
            WeatherCondition::PartlyCloudy => vec![
                SpriteLayer {
                    content: SUN_BEHIND,
                    color: Color::Yellow,
                },
                cloud(CLOUD_FRONT),
            ],
            WeatherCondition::Cloudy | WeatherCondition::Unknown => {
                vec![dark_cloud(CLOUD_BACK), cloud(CLOUD_LOW)]
            }
            WeatherCondition::Drizzle => vec![
                cloud(CLOUD_BACK),
                SpriteLayer {
                    content: DRIZZLE,
                    color: Color::Rgb(130, 170, 200),
                },
            ],
            WeatherCondition::Rain => vec![
                dark_cloud(CLOUD_BACK),
                SpriteLayer {
                    content: RAIN,
                    color: Color::Rgb(80, 140, 200),
                },
            ],
            WeatherCondition::Thunderstorm => vec![
                dark_cloud(CLOUD_BACK),
                SpriteLayer {
                    content: BOLT,
                    color: Color::Yellow,
                },
            ],
            WeatherCondition::Snow => vec![
                cloud(CLOUD_BACK),
                SpriteLayer {
                    content: SNOW,
                    color: Color::Rgb(200, 220, 255),
                },
            ],
            WeatherCondition::Fog => vec![SpriteLayer {
                content: FOG,
                color: Color::Rgb(180, 180, 190),
            }],
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Art for the condition.
pub fn get_sprite(condition: WeatherCondition) -> Text<'static> {
    composite_layers(&condition.layers())
}

/// Art for an icon code if it fits in `available_height` rows.
pub fn weather_sprite(icon: &str, available_height: u16) -> Option<Text<'static>> {
    let art = get_sprite(WeatherCondition::from_icon(icon));
    (art.lines.len() <= available_height as usize).then_some(art)
}

/// Rows the tallest sprite needs.
pub fn max_sprite_height() -> u16 {
    ALL_CONDITIONS
        .iter()
        .map(|condition| get_sprite(*condition).lines.len() as u16)
        .max()
        .unwrap_or(1)
}

/// Emoji fallback for the given icon code.
pub fn weather_emoji(icon: &str) -> &'static str {
    WeatherCondition::from_icon(icon).emoji()
}

const ALL_CONDITIONS: [WeatherCondition; 10] = [
    WeatherCondition::ClearSky,
    WeatherCondition::ClearNight,
    WeatherCondition::PartlyCloudy,
    WeatherCondition::Cloudy,
    WeatherCondition::Drizzle,
    WeatherCondition::Rain,
    WeatherCondition::Thunderstorm,
    WeatherCondition::Snow,
    WeatherCondition::Fog,
    WeatherCondition::Unknown,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_icon() {
        assert_eq!(WeatherCondition::from_icon("01d"), WeatherCondition::ClearSky);
        assert_eq!(WeatherCondition::from_icon("01n"), WeatherCondition::ClearNight);
        assert_eq!(WeatherCondition::from_icon("02n"), WeatherCondition::PartlyCloudy);
        assert_eq!(WeatherCondition::from_icon("04d"), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_icon("09d"), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_icon("10d"), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_icon("11d"), WeatherCondition::Thunderstorm);
        assert_eq!(WeatherCondition::from_icon("13d"), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_icon("50d"), WeatherCondition::Fog);
        assert_eq!(WeatherCondition::from_icon(""), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_icon("é"), WeatherCondition::Unknown);
    }

    #[test]
    fn test_weather_sprite_respects_height() {
        assert!(weather_sprite("01d", 30).is_some());
        assert!(weather_sprite("01d", 1).is_none());
    }

    #[test]
    fn test_all_sprites_render() {
        for condition in ALL_CONDITIONS {
            let text = get_sprite(condition);
            assert!(!text.lines.is_empty(), "{condition:?} should not be empty");
            assert!(text.lines.len() as u16 <= max_sprite_height());
        }
    }

    #[test]
    fn test_upper_layer_draws_over_lower() {
        let text = get_sprite(WeatherCondition::Rain);
        let rain_color = Color::Rgb(80, 140, 200);
        let has_rain = text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .any(|span| span.content == "/" && span.style.fg == Some(rain_color));
        assert!(has_rain);
    }

    #[test]
    fn test_emoji_fallback() {
        assert!(!weather_emoji("01d").is_empty());
        assert!(!weather_emoji("xx").is_empty());
    }
}
