//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Look up current weather for `city`, tagged with request token `request`
    FetchWeather { request: u64, city: String },
}

impl Effect {
    /// Task key for the spawned lookup. One key per request so a newer
    /// submission never cancels an older one still in flight.
    pub fn task_key(&self) -> String {
        match self {
            Effect::FetchWeather { request, .. } => format!("weather-{request}"),
        }
    }
}
