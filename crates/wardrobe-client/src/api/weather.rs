//! Weather endpoints.

use wardrobe_types::weather::{WeatherForecast, WeatherReport};

use crate::client::WardrobeClient;
use crate::error::ClientError;

impl WardrobeClient {
    /// Current conditions for the user's location.
    pub async fn current_weather(&self) -> Result<WeatherReport, ClientError> {
        self.get("/api/weather/current").await
    }

    pub async fn weather_forecast(&self) -> Result<WeatherForecast, ClientError> {
        self.get("/api/weather/forecast").await
    }
}
