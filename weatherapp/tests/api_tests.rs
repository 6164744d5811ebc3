//! OpenWeatherClient against a mock provider.

use pretty_assertions::assert_eq;
use weatherapp::api::{OpenWeatherClient, WeatherError, WeatherSource, source_for};
use weatherapp::config::WeatherConfig;
use weatherapp::state::WeatherView;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(temp: f64) -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.13, "lat": 51.51},
        "name": "London",
        "main": {"temp": temp, "feels_like": 14.2, "humidity": 80},
        "wind": {"speed": 8, "deg": 240},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "sys": {"country": "GB"},
        "cod": 200
    })
}

fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(WeatherConfig::new(Some("KEY".into()), server.uri()))
}

#[tokio::test]
async fn test_current_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "London"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(15.0)))
        .mount(&mock_server)
        .await;

    let view = client_for(&mock_server).current("London").await.unwrap();

    assert_eq!(
        view,
        WeatherView {
            city: "London".into(),
            country: "GB".into(),
            temperature_c: 15,
            humidity_pct: 80,
            wind_speed: 8.0,
            condition: "Clouds".into(),
            icon: "04d".into(),
        }
    );
}

#[tokio::test]
async fn test_current_floors_temperature() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(21.8)))
        .mount(&mock_server)
        .await;

    let view = client_for(&mock_server).current("London").await.unwrap();
    assert_eq!(view.temperature_c, 21);
}

#[tokio::test]
async fn test_city_query_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(25.0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).current("São Paulo").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_not_found_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current("Atlantis").await.unwrap_err();
    assert_eq!(err, WeatherError::CityNotFound);
    assert_eq!(err.to_string(), "City not found");
}

#[tokio::test]
async fn test_unauthorized_with_plain_body_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current("London").await.unwrap_err();
    assert_eq!(err, WeatherError::CityNotFound);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).current("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = WeatherConfig::new(Some("SECRETKEY123".into()), "http://127.0.0.1:1");
    let err = OpenWeatherClient::new(config)
        .current("London")
        .await
        .unwrap_err();

    match err {
        WeatherError::Transport(message) => {
            assert!(!message.is_empty());
            assert!(!message.contains("SECRETKEY123"), "key leaked: {message}");
            assert!(!message.contains("appid"), "query leaked: {message}");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_key_skips_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(15.0)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new(WeatherConfig::new(None, mock_server.uri()));
    let err = client.current("London").await.unwrap_err();
    assert_eq!(err, WeatherError::MissingApiKey);
}

#[tokio::test]
async fn test_demo_source() {
    let source = source_for(&WeatherConfig::demo());

    let view = source.current("TOKYO").await.unwrap();
    assert_eq!(view.place(), "Tokyo, JP");

    let err = source.current("Atlantis").await.unwrap_err();
    assert_eq!(err, WeatherError::CityNotFound);
}
