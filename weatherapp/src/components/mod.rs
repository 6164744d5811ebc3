pub mod location_header;
pub mod query_form;
pub mod weather_card;
pub mod weather_screen;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use location_header::{LocationHeader, LocationHeaderProps};
pub use query_form::{QueryForm, QueryFormProps};
pub use weather_card::{ERROR_ICON, WeatherCard, WeatherCardProps};
pub use weather_screen::{WeatherScreen, WeatherScreenProps};
