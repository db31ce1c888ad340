// src/weather/models.rs

use serde::{Deserialize, Serialize};

// ============================================================================
// Weather Report Models
// ============================================================================

/// Current-conditions record as the weather collaborator returns it.
/// Field names follow the collaborator's JSON, temperatures arrive in
/// kelvin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
    pub wind: Wind,
    pub clouds: Clouds,
    pub sys: Sys,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sys {
    pub country: String,
}

impl WeatherReport {
    /// Kelvin reading converted for display, rounded to the nearest
    /// whole degree
    pub fn temp_celsius(&self) -> i32 {
        (self.main.temp - 273.15).round() as i32
    }

    /// Display label, e.g. "24°C"
    pub fn temp_label(&self) -> String {
        format!("{}°C", self.temp_celsius())
    }

    /// First reported condition, empty when the collaborator sends none
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map(|condition| condition.description.as_str())
            .unwrap_or("")
    }
}
