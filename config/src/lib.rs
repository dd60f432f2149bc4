// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;

pub use config::{HttpSection, ProviderSection, ServiceConfig};

pub mod env {
  pub const PORT: &str = "PORT";
  pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";
  pub const CONFIG_PATH: &str = "CEP_WEATHER_CONFIG";
  pub const VIACEP_BASE_URL: &str = "VIACEP_BASE_URL";
  pub const WEATHER_API_BASE_URL: &str = "WEATHER_API_BASE_URL";
  pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
}
