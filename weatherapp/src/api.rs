//! OpenWeather client and the offline demo source

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::{ICON_BASE_URL, WeatherConfig};
use crate::state::WeatherView;

/// Shown for every non-success status, whatever the provider said.
pub const CITY_NOT_FOUND: &str = "City not found";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("City not found")]
    CityNotFound,
    #[error("missing OpenWeather API key (set OPENWEATHER_API_KEY or pass --api-key)")]
    MissingApiKey,
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

// Without the URL: its query carries `appid`.
impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Transport(err.without_url().to_string())
    }
}

/// Anything that can answer "what is the weather in this city right now".
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherView, WeatherError>;
}

/// Pick the live client or the demo source.
pub fn source_for(config: &WeatherConfig) -> Box<dyn WeatherSource> {
    if config.demo {
        Box::new(DemoSource)
    } else {
        Box::new(OpenWeatherClient::new(config.clone()))
    }
}

/// URL of the provider's image for an icon code.
pub fn icon_url(icon: &str) -> String {
    format!("{}/img/wn/{}@2x.png", ICON_BASE_URL, urlencoding::encode(icon))
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    wind: WindBlock,
    weather: Vec<ConditionEntry>,
    sys: SysBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct SysBlock {
    #[serde(default)]
    country: String,
}

/// Error bodies are only logged, so every field is optional.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    cod: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

fn view_from_response(data: CurrentResponse) -> Result<WeatherView, WeatherError> {
    let condition = data
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::Decode("response contained no weather conditions".into()))?;

    Ok(WeatherView {
        city: data.name,
        country: data.sys.country,
        temperature_c: data.main.temp.floor() as i32,
        humidity_pct: data.main.humidity,
        wind_speed: data.wind.speed,
        condition: condition.main,
        icon: condition.icon,
    })
}

/// Decode a successful current-weather body into a view.
pub fn parse_current(body: &str) -> Result<WeatherView, WeatherError> {
    let data: CurrentResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Decode(e.to_string()))?;
    view_from_response(data)
}

// ============================================================================
// Live client
// ============================================================================

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: WeatherConfig,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Full request URL with every query parameter percent-encoded.
    pub fn request_url(&self, city: &str) -> Result<Url, WeatherError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;
        Url::parse_with_params(
            &self.config.current_weather_url(),
            &[("q", city), ("units", "metric"), ("appid", api_key)],
        )
        .map_err(|e| WeatherError::Transport(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherView, WeatherError> {
        let url = self.request_url(city)?;
        tracing::info!(city, "requesting current weather");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            tracing::warn!(
                city,
                %status,
                cod = ?detail.cod,
                detail = detail.message.as_deref().unwrap_or(""),
                "provider rejected lookup"
            );
            return Err(WeatherError::CityNotFound);
        }

        parse_current(&body)
    }
}

// ============================================================================
// Demo source
// ============================================================================

/// Canned conditions for a few cities; anything else is "not found".
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn lookup(city: &str) -> Option<WeatherView> {
        let (name, country, temperature_c, humidity_pct, wind_speed, condition, icon) =
            match city.to_lowercase().as_str() {
                "new york" => ("New York", "US", 22, 65, 12.0, "Clouds", "02d"),
                "london" => ("London", "GB", 15, 80, 8.0, "Rain", "10d"),
                "tokyo" => ("Tokyo", "JP", 28, 70, 5.0, "Clear", "01d"),
                _ => return None,
            };
        Some(WeatherView {
            city: name.into(),
            country: country.into(),
            temperature_c,
            humidity_pct,
            wind_speed,
            condition: condition.into(),
            icon: icon.into(),
        })
    }
}

#[async_trait]
impl WeatherSource for DemoSource {
    async fn current(&self, city: &str) -> Result<WeatherView, WeatherError> {
        Self::lookup(city).ok_or(WeatherError::CityNotFound)
    }
}
