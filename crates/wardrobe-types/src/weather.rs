//! Weather report types for the home screen.

use serde::{Deserialize, Serialize};

/// Full report from `GET /api/weather/current`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherReport {
    pub location: LocationInfo,
    pub current: CurrentWeather,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocationInfo {
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
}

/// Current conditions at the requested location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: i32,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub visibility: f64,
    #[serde(default)]
    pub uv_index: f64,
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: i32,
    #[serde(default)]
    pub wind_gust: f64,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_day: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub condition: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub humidity: i32,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default)]
    pub hours: Vec<HourlyWeather>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyWeather {
    pub time: String,
    pub temperature: f64,
    pub condition: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub humidity: i32,
    #[serde(default)]
    pub precipitation: f64,
}

/// Severity is one of "minor", "moderate", "severe", "extreme".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub title: String,
    pub description: String,
    pub severity: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub areas: Vec<String>,
}

/// Payload of `GET /api/weather/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub forecast: Vec<ForecastDay>,
}
