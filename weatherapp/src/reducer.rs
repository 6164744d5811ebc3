//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, LOADING_ANIM_CYCLE_TICKS};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Query actions =====
        Action::QueryChange(query) => {
            if query == state.query {
                return DispatchResult::unchanged();
            }
            state.query = query;
            DispatchResult::changed()
        }

        Action::QuerySubmit(raw) => {
            let city = raw.trim();
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            let city = city.to_string();

            state.latest_request = state.latest_request.wrapping_add(1);
            state.last_city = Some(city.clone());
            if state.weather.is_loaded() {
                state.is_refreshing = true;
            } else {
                state.weather = DataResource::Loading;
            }
            state.tick_count = 0;
            state.loading_anim_ticks_remaining = 0;

            DispatchResult::changed_with(Effect::FetchWeather {
                request: state.latest_request,
                city,
            })
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad { request, view } => {
            if request != state.latest_request {
                tracing::debug!(request, latest = state.latest_request, "dropping stale weather");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(view);
            state.is_refreshing = false;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        Action::WeatherDidError { request, message } => {
            if request != state.latest_request {
                tracing::debug!(request, latest = state.latest_request, "dropping stale error");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            state.is_refreshing = false;
            state.loading_anim_ticks_remaining = ticks_to_phase_zero(state.tick_count);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.loading_anim_active() {
                state.tick_count = state.tick_count.wrapping_add(1);
                if state.loading_anim_ticks_remaining > 0 {
                    state.loading_anim_ticks_remaining -= 1;
                }
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn ticks_to_phase_zero(tick_count: u32) -> u32 {
    let cycle = LOADING_ANIM_CYCLE_TICKS.max(1);
    if tick_count == 0 {
        return cycle;
    }
    let remainder = tick_count % cycle;
    if remainder == 0 { 0 } else { cycle - remainder }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherView;

    fn view(city: &str) -> WeatherView {
        WeatherView {
            city: city.into(),
            country: "GB".into(),
            temperature_c: 15,
            humidity_pct: 80,
            wind_speed: 8.0,
            condition: "Clouds".into(),
            icon: "04d".into(),
        }
    }

    #[test]
    fn test_submit_trims_and_emits_one_fetch() {
        let mut state = AppState::default();
        state.tick_count = 5;
        state.loading_anim_ticks_remaining = 7;

        let result = reducer(&mut state, Action::QuerySubmit("  London \t".into()));

        assert!(result.changed);
        assert!(state.weather.is_loading());
        assert_eq!(state.latest_request, 1);
        assert_eq!(state.last_city.as_deref(), Some("London"));
        assert_eq!(state.tick_count, 0);
        assert_eq!(state.loading_anim_ticks_remaining, 0);
        assert_eq!(
            result.effects,
            vec![Effect::FetchWeather {
                request: 1,
                city: "London".into()
            }]
        );
    }

    #[test]
    fn test_blank_submit_is_a_no_op() {
        let mut state = AppState::with_query("   ");

        for raw in ["", "   ", "\t\n"] {
            let result = reducer(&mut state, Action::QuerySubmit(raw.into()));
            assert!(!result.changed);
            assert!(result.effects.is_empty());
        }
        assert!(state.weather.is_empty());
        assert_eq!(state.latest_request, 0);
        assert_eq!(state.query, "   ");
    }

    #[test]
    fn test_resubmitting_same_city_fetches_again() {
        let mut state = AppState::default();

        let first = reducer(&mut state, Action::QuerySubmit("Paris".into()));
        let second = reducer(&mut state, Action::QuerySubmit("Paris".into()));

        assert_eq!(first.effects.len(), 1);
        assert_eq!(second.effects.len(), 1);
        assert_eq!(state.latest_request, 2);
    }

    #[test]
    fn test_submit_keeps_loaded_view_while_refreshing() {
        let mut state = AppState {
            weather: DataResource::Loaded(view("London")),
            latest_request: 3,
            ..Default::default()
        };

        reducer(&mut state, Action::QuerySubmit("Oslo".into()));

        assert!(state.is_refreshing);
        assert_eq!(state.view().map(|v| v.city.as_str()), Some("London"));
    }

    #[test]
    fn test_did_load_replaces_error() {
        let mut state = AppState {
            weather: DataResource::Failed("City not found".into()),
            latest_request: 1,
            tick_count: 1,
            ..Default::default()
        };

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 1,
                view: view("London"),
            },
        );

        assert!(result.changed);
        assert_eq!(state.view(), Some(&view("London")));
        assert!(state.error_message().is_none());
        assert_eq!(
            state.loading_anim_ticks_remaining,
            LOADING_ANIM_CYCLE_TICKS - 1
        );
    }

    #[test]
    fn test_did_error_clears_view() {
        let mut state = AppState {
            weather: DataResource::Loaded(view("London")),
            is_refreshing: true,
            latest_request: 2,
            ..Default::default()
        };

        reducer(
            &mut state,
            Action::WeatherDidError {
                request: 2,
                message: "City not found".into(),
            },
        );

        assert!(state.view().is_none());
        assert_eq!(state.error_message(), Some("City not found"));
        assert!(!state.is_refreshing);
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut state = AppState::default();
        reducer(&mut state, Action::QuerySubmit("Berlin".into()));
        reducer(&mut state, Action::QuerySubmit("Tokyo".into()));

        // Tokyo (2) resolves first, then Berlin (1) arrives late.
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 2,
                view: view("Tokyo"),
            },
        );
        let late = reducer(
            &mut state,
            Action::WeatherDidLoad {
                request: 1,
                view: view("Berlin"),
            },
        );
        let late_error = reducer(
            &mut state,
            Action::WeatherDidError {
                request: 1,
                message: "timeout".into(),
            },
        );

        assert!(!late.changed);
        assert!(!late_error.changed);
        assert_eq!(state.view().map(|v| v.city.as_str()), Some("Tokyo"));
    }

    #[test]
    fn test_query_change_updates_field_only() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::QueryChange("Lon".into()));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert_eq!(state.query, "Lon");

        let result = reducer(&mut state, Action::QueryChange("Lon".into()));
        assert!(!result.changed);
    }

    #[test]
    fn test_tick_rerenders_during_loading_animation() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::Tick);
        assert!(!result.changed);

        state.loading_anim_ticks_remaining = 1;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
        assert_eq!(state.loading_anim_ticks_remaining, 0);

        state.weather = DataResource::Loading;
        let result = reducer(&mut state, Action::Tick);
        assert!(result.changed);
    }
}
