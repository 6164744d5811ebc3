//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherView;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Query category =====
    /// City field text changed
    QueryChange(String),

    /// Form submitted with the raw field text (trimmed by the reducer)
    QuerySubmit(String),

    // ===== Weather category =====
    /// Result: provider answered request `request` with a full view
    WeatherDidLoad { request: u64, view: WeatherView },

    /// Result: request `request` failed; `message` is shown as-is
    WeatherDidError { request: u64, message: String },

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}
