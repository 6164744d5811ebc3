//! Weather lookup TUI
//!
//! Type a city, press Enter, see current conditions from OpenWeather.
//! The library exposes the app's modules for the binary and for tests.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod sprites;
pub mod state;
