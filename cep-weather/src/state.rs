// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::HttpTransport;
use config::ServiceConfig;
use error::Error;
use std::sync::Arc;
use viacep::ViaCepClient;
use weather::{WeatherApiClient, WeatherConfig};

/// Read-only per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
  pub locations: ViaCepClient,
  pub temperatures: WeatherApiClient,
}

impl AppState {
  pub fn new(locations: ViaCepClient, temperatures: WeatherApiClient) -> Self {
    Self {
      locations,
      temperatures,
    }
  }

  /// Both resolvers go through the same transport.
  pub fn from_config(
    config: &ServiceConfig,
    transport: Arc<dyn HttpTransport>,
  ) -> Result<Self, Error> {
    let locations = ViaCepClient::new(&config.postal.base_url, transport.clone())?;
    let weather_config =
      WeatherConfig::new(config.weather_api_key.clone(), &config.weather.base_url)?;

    Ok(Self::new(
      locations,
      WeatherApiClient::new(weather_config, transport),
    ))
  }
}
