// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  response::{ApiError, TemperatureResponse},
  state::AppState,
};
use axum::{
  extract::{RawQuery, State},
  http::Method,
  Json,
};
use tracing::{error, instrument, warn};
use url::form_urlencoded;
use viacep::is_valid_cep;

/// First `cep` value in the query string, decoded.
fn cep_param(query: Option<&str>) -> Option<String> {
  form_urlencoded::parse(query?.as_bytes())
    .find(|(key, _)| key == "cep")
    .map(|(_, value)| value.into_owned())
}

#[instrument(skip_all, fields(method = %method))]
pub async fn temperature(
  State(state): State<AppState>,
  method: Method,
  RawQuery(query): RawQuery,
) -> Result<Json<TemperatureResponse>, ApiError> {
  if method != Method::GET {
    warn!("Rejected {} request to /temperature", method);
    return Err(ApiError::MethodNotAllowed);
  }

  let cep = match cep_param(query.as_deref()) {
    Some(cep) if !cep.is_empty() => cep,
    Some(_) => {
      warn!("CEP parameter is empty");
      return Err(ApiError::CepRequired);
    }
    None => {
      warn!("CEP parameter is missing");
      return Err(ApiError::CepRequired);
    }
  };

  if !is_valid_cep(&cep) {
    warn!("Rejected malformed CEP {:?}", cep);
    return Err(ApiError::InvalidCep);
  }

  let location = state
    .locations
    .resolve_location(&cep)
    .await
    .map_err(|e| {
      warn!("Error getting location from CEP {}: {}", cep, e);
      ApiError::CepNotFound
    })?;

  let weather = state
    .temperatures
    .resolve_temperature(&location.locality)
    .await
    .map_err(|e| {
      error!("Error getting temperature for {}: {}", location.locality, e);
      ApiError::TemperatureUnavailable
    })?;

  Ok(Json(TemperatureResponse::from_celsius(
    weather.temperature_celsius,
  )))
}

pub async fn health() -> &'static str {
  "OK"
}
