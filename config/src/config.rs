// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::env;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br";
pub const DEFAULT_WEATHER_API_URL: &str = "http://api.weatherapi.com";

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
  pub port: u16,
  /// Only ever taken from the environment.
  #[serde(skip)]
  pub weather_api_key: Option<String>,
  pub postal: ProviderSection,
  pub weather: ProviderSection,
  pub http: HttpSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSection {
  pub base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpSection {
  /// Unset means no timeout beyond the client's own.
  pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      port: DEFAULT_PORT,
      weather_api_key: None,
      postal: ProviderSection {
        base_url: DEFAULT_VIACEP_URL.to_string(),
      },
      weather: ProviderSection {
        base_url: DEFAULT_WEATHER_API_URL.to_string(),
      },
      http: HttpSection::default(),
    }
  }
}

impl ServiceConfig {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Self = toml::from_str(&content)
      .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  pub fn from_env() -> anyhow::Result<Self> {
    Self::load(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from a variable lookup: an optional TOML file
  /// first, then individual variables on top of it.
  pub fn load<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let mut config = match lookup(env::CONFIG_PATH) {
      Some(path) => Self::from_file(path)?,
      None => Self::default(),
    };

    if let Some(port) = lookup(env::PORT) {
      config.port = port
        .trim()
        .parse()
        .with_context(|| format!("Invalid {} value: {}", env::PORT, port))?;
    }

    if let Some(url) = lookup(env::VIACEP_BASE_URL) {
      config.postal.base_url = url;
    }

    if let Some(url) = lookup(env::WEATHER_API_BASE_URL) {
      config.weather.base_url = url;
    }

    if let Some(secs) = lookup(env::HTTP_TIMEOUT_SECS) {
      config.http.timeout_secs = Some(
        secs
          .trim()
          .parse()
          .with_context(|| format!("Invalid {} value: {}", env::HTTP_TIMEOUT_SECS, secs))?,
      );
    }

    config.weather_api_key = lookup(env::WEATHER_API_KEY);
    Ok(config)
  }

  pub fn http_timeout(&self) -> Option<Duration> {
    self.http.timeout_secs.map(Duration::from_secs)
  }
}

impl std::fmt::Debug for ServiceConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ServiceConfig")
      .field("port", &self.port)
      .field(
        "weather_api_key",
        &self.weather_api_key.as_ref().map(|_| "***"),
      )
      .field("postal", &self.postal)
      .field("weather", &self.weather)
      .field("http", &self.http)
      .finish()
  }
}
