// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("CEP not found: {0}")]
  CepNotFound(String),
  #[error("WEATHER_API_KEY environment variable not set")]
  MissingApiKey,
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Transport error: {0}")]
  TransportError(String),
  #[error("API error: {0}")]
  ApiError(String),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Invalid URL: {0}")]
  InvalidUrl(#[from] url::ParseError),
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Error::ParseError(err.to_string())
  }
}
