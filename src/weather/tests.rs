// src/weather/tests.rs

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::weather::models::*;
    use crate::weather::provider::{load_weather, WeatherError, WeatherProvider, WeatherView};

    fn melbourne_report(temp: f64) -> WeatherReport {
        WeatherReport {
            name: "Melbourne".to_string(),
            weather: vec![WeatherCondition {
                description: "scattered clouds".to_string(),
            }],
            main: MainReadings {
                temp,
                humidity: 60.0,
                pressure: 1015.0,
            },
            wind: Wind { speed: 4.6 },
            clouds: Clouds { all: 40.0 },
            sys: Sys {
                country: "AU".to_string(),
            },
        }
    }

    struct StubProvider {
        response: Result<WeatherReport, WeatherError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(response: Result<WeatherReport, WeatherError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for StubProvider {
        async fn current(&self, _city: &str) -> Result<WeatherReport, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.response.clone()
        }
    }

    #[test]
    fn test_kelvin_to_celsius_rounds_to_nearest_degree() {
        // 296.76 K is 23.61 °C, displayed as 24
        let report = melbourne_report(296.76);
        assert_eq!(report.temp_celsius(), 24);
        assert_eq!(report.temp_label(), "24°C");

        let freezing = melbourne_report(273.15);
        assert_eq!(freezing.temp_label(), "0°C");
    }

    #[test]
    fn test_report_deserializes_from_collaborator_json() {
        let payload = r#"{
            "name": "Melbourne",
            "weather": [{"description": "light rain", "icon": "10d"}],
            "main": {"temp": 289.4, "humidity": 82, "pressure": 1008, "feels_like": 288.1},
            "wind": {"speed": 7.2, "deg": 180},
            "clouds": {"all": 90},
            "sys": {"country": "AU", "sunrise": 1722550000}
        }"#;

        let report: WeatherReport =
            serde_json::from_str(payload).expect("collaborator payload should parse");
        assert_eq!(report.description(), "light rain");
        assert_eq!(report.sys.country, "AU");
        assert_eq!(report.temp_celsius(), 16);
    }

    #[tokio::test]
    async fn test_load_weather_applies_successful_fetch() {
        let provider = StubProvider::new(Ok(melbourne_report(296.76)));

        let view = load_weather(&provider, "Melbourne").await;
        match view {
            WeatherView::Ready(report) => assert_eq!(report.name, "Melbourne"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_weather_surfaces_generic_failure_message() {
        let provider = StubProvider::new(Err(WeatherError::Fetch));

        let view = load_weather(&provider, "Melbourne").await;
        assert_eq!(
            view,
            WeatherView::Failed("Failed to fetch weather data.".to_string())
        );
    }

    #[tokio::test]
    async fn test_load_weather_skips_fetch_without_a_city() {
        let provider = StubProvider::new(Ok(melbourne_report(296.76)));

        let view = load_weather(&provider, "   ").await;
        assert_eq!(view, WeatherView::Idle);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_refetch_supersedes_previous_state() {
        let failing = StubProvider::new(Err(WeatherError::Fetch));
        let working = StubProvider::new(Ok(melbourne_report(300.15)));

        let first = load_weather(&failing, "Melbourne").await;
        assert!(matches!(first, WeatherView::Failed(_)));

        // Retrying the triggering action replaces the failed state
        let second = load_weather(&working, "Melbourne").await;
        match second {
            WeatherView::Ready(report) => assert_eq!(report.temp_label(), "27°C"),
            other => panic!("expected Ready, got {:?}", other),
        }
    }
}
