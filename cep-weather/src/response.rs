// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use axum::{
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use weather::{celsius_to_fahrenheit, celsius_to_kelvin};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResponse {
  #[serde(rename = "temp_C")]
  pub temp_c: f64,
  #[serde(rename = "temp_F")]
  pub temp_f: f64,
  #[serde(rename = "temp_K")]
  pub temp_k: f64,
}

impl TemperatureResponse {
  pub fn from_celsius(celsius: f64) -> Self {
    Self {
      temp_c: celsius,
      temp_f: celsius_to_fahrenheit(celsius),
      temp_k: celsius_to_kelvin(celsius),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub message: String,
}

/// Everything a client can see go wrong. The display text is the response
/// message; upstream causes are logged by the handler, never rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
  #[error("")]
  MethodNotAllowed,
  #[error("CEP parameter is required")]
  CepRequired,
  #[error("invalid zipcode")]
  InvalidCep,
  #[error("can not find zipcode")]
  CepNotFound,
  #[error("failed to get temperature data")]
  TemperatureUnavailable,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
      ApiError::CepRequired => StatusCode::BAD_REQUEST,
      ApiError::InvalidCep => StatusCode::UNPROCESSABLE_ENTITY,
      ApiError::CepNotFound => StatusCode::NOT_FOUND,
      ApiError::TemperatureUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::MethodNotAllowed => (
        self.status(),
        [(header::CONTENT_TYPE, "application/json")],
      )
        .into_response(),
      _ => (
        self.status(),
        Json(ErrorResponse {
          message: self.to_string(),
        }),
      )
        .into_response(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converts_celsius_to_all_units() {
    let response = TemperatureResponse::from_celsius(25.0);
    assert_eq!(
      response,
      TemperatureResponse {
        temp_c: 25.0,
        temp_f: 77.0,
        temp_k: 298.0,
      }
    );
  }

  #[test]
  fn serializes_with_unit_suffixes() {
    let response = TemperatureResponse::from_celsius(0.0);
    let json = serde_json::to_value(response).unwrap();
    assert_eq!(
      json,
      serde_json::json!({"temp_C": 0.0, "temp_F": 32.0, "temp_K": 273.0})
    );
  }

  #[test]
  fn status_and_message_table() {
    let table = [
      (ApiError::CepRequired, 400, "CEP parameter is required"),
      (ApiError::InvalidCep, 422, "invalid zipcode"),
      (ApiError::CepNotFound, 404, "can not find zipcode"),
      (ApiError::TemperatureUnavailable, 500, "failed to get temperature data"),
    ];

    for (error, status, message) in table {
      assert_eq!(error.status().as_u16(), status);
      assert_eq!(error.to_string(), message);
    }
    assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  #[test]
  fn every_error_response_is_json() {
    for error in [
      ApiError::MethodNotAllowed,
      ApiError::CepRequired,
      ApiError::InvalidCep,
      ApiError::CepNotFound,
      ApiError::TemperatureUnavailable,
    ] {
      let response = error.into_response();
      assert_eq!(response.status(), error.status());
      assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
      );
    }
  }
}
