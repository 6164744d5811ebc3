//! Provider configuration

/// Default OpenWeather REST host.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
/// Static image host for condition icons.
pub const ICON_BASE_URL: &str = "https://openweathermap.org";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Where and how to reach the weather provider.
#[derive(Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    /// Serve canned data instead of calling the provider
    pub demo: bool,
}

impl WeatherConfig {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            demo: false,
        }
    }

    pub fn demo() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            demo: true,
        }
    }

    /// Endpoint for current conditions.
    pub fn current_weather_url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url)
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self::new(None, DEFAULT_BASE_URL)
    }
}

// Keeps the key out of logs and debug dumps.
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("demo", &self.demo)
            .finish()
    }
}
