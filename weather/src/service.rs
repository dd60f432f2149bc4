// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::CURRENT_PATH,
  models::{api::WeatherApiResponse, weather::CurrentWeather},
};
use base::{HttpTransport, TransportRequest};
use error::Error;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Looks up the current temperature of a locality on WeatherAPI.
#[derive(Clone)]
pub struct WeatherApiClient {
  config: WeatherConfig,
  transport: Arc<dyn HttpTransport>,
}

impl WeatherApiClient {
  pub fn new(config: WeatherConfig, transport: Arc<dyn HttpTransport>) -> Self {
    Self { config, transport }
  }

  fn build_api_url(&self, api_key: &str, city: &str) -> Result<Url, Error> {
    let endpoint = self.config.base_url.join(CURRENT_PATH)?;
    Ok(Url::parse_with_params(
      endpoint.as_str(),
      &[("key", api_key), ("q", city), ("aqi", "no")],
    )?)
  }

  #[instrument(skip(self))]
  pub async fn resolve_temperature(&self, city: &str) -> Result<CurrentWeather, Error> {
    let api_key = self.config.api_key.as_deref().ok_or(Error::MissingApiKey)?;

    let url = self.build_api_url(api_key, city)?;
    let response = self
      .transport
      .execute(TransportRequest::get(url.as_str()))
      .await?;

    if !response.is_success() {
      return Err(Error::ApiError(format!(
        "failed to get weather data: status code {}",
        response.status.as_u16()
      )));
    }

    let payload: WeatherApiResponse = response.json()?;
    let weather = CurrentWeather::from_response(payload);
    debug!(
      "{} ({}) is at {}°C",
      weather.location, weather.country, weather.temperature_celsius
    );

    Ok(weather)
  }
}
