//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Current conditions for one city, ready for display.
///
/// Built only from a fully decoded provider response, so every field is
/// always present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherView {
    /// Display name as returned by the provider (may differ from the query)
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Whole degrees Celsius, floored
    pub temperature_c: i32,
    pub humidity_pct: u8,
    /// Provider-reported wind speed
    pub wind_speed: f64,
    /// Short condition label, e.g. "Clouds"
    pub condition: String,
    /// Provider icon code, e.g. "04d"
    pub icon: String,
}

impl WeatherView {
    /// "London, GB", or just the city when the provider gave no country.
    pub fn place(&self) -> String {
        if self.country.is_empty() {
            self.city.clone()
        } else {
            format!("{}, {}", self.city, self.country)
        }
    }

    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_c)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }
}

/// Animation timing for the header gradient seam.
pub const LOADING_ANIM_TICK_MS: u64 = 15;
pub const LOADING_ANIM_CYCLE_TICKS: u32 = 60;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Text currently in the city field
    #[debug(section = "Form", label = "Query")]
    pub query: String,

    /// Weather lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherView>,

    /// A request is in flight while an earlier view stays on screen
    #[debug(section = "Weather", label = "Refreshing")]
    pub is_refreshing: bool,

    /// Token of the newest issued request; results with any other token are stale
    #[debug(section = "Requests", label = "Latest")]
    pub latest_request: u64,

    /// Trimmed city of the newest issued request
    #[debug(section = "Requests", label = "City", debug_fmt)]
    pub last_city: Option<String>,

    // --- Animation internals (skipped) ---
    #[debug(skip)]
    pub tick_count: u32,

    /// Remaining ticks to finish the current animation cycle after loading
    #[debug(skip)]
    pub loading_anim_ticks_remaining: u32,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            weather: DataResource::Empty,
            is_refreshing: false,
            latest_request: 0,
            last_city: None,
            tick_count: 0,
            loading_anim_ticks_remaining: 0,
        }
    }
}

impl AppState {
    /// State with the form pre-filled, before any request is issued.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// The view on screen, if the last resolved query succeeded.
    pub fn view(&self) -> Option<&WeatherView> {
        self.weather.data()
    }

    /// The error on screen, if the last resolved query failed.
    pub fn error_message(&self) -> Option<&str> {
        self.weather.error()
    }

    pub fn is_pending(&self) -> bool {
        self.weather.is_loading() || self.is_refreshing
    }

    pub fn loading_anim_active(&self) -> bool {
        self.is_pending() || self.loading_anim_ticks_remaining > 0
    }
}
