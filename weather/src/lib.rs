// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;
pub mod units;

pub use config::WeatherConfig;
pub use models::weather::CurrentWeather;
pub use service::WeatherApiClient;
pub use units::{celsius_to_fahrenheit, celsius_to_kelvin};

pub(crate) mod constants {
  pub(crate) const CURRENT_PATH: &str = "v1/current.json";
}
