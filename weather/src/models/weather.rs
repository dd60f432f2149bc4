// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::WeatherApiResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
  pub temperature_celsius: f64,
  pub location: String,
  pub country: String,
}

impl CurrentWeather {
  pub(crate) fn from_response(response: WeatherApiResponse) -> Self {
    Self {
      temperature_celsius: response.current.temp_c,
      location: response.location.name,
      country: response.location.country,
    }
  }
}
