// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use error::Error;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct TransportRequest {
  pub method: Method,
  pub url: String,
}

impl TransportRequest {
  pub fn get(url: impl Into<String>) -> Self {
    Self {
      method: Method::GET,
      url: url.into(),
    }
  }
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
  pub status: StatusCode,
  pub body: Vec<u8>,
}

impl TransportResponse {
  pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
    Self {
      status,
      body: body.into(),
    }
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
    Ok(serde_json::from_slice(&self.body)?)
  }
}

/// Single "perform request, get response" capability the resolvers depend on.
#[async_trait]
pub trait HttpTransport: Send + Sync {
  async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error>;
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
  client: Client,
  timeout: Option<Duration>,
}

impl ReqwestTransport {
  pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
    Ok(Self {
      client: Client::builder().build()?,
      timeout,
    })
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  #[instrument(skip(self, request), fields(method = %request.method))]
  async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
    let mut builder = self.client.request(request.method, &request.url);
    if let Some(timeout) = self.timeout {
      builder = builder.timeout(timeout);
    }

    // reqwest errors render the full URL, query string and API key included.
    let response = builder
      .send()
      .await
      .map_err(|e| Error::HttpError(e.without_url()))?;
    let status = response.status();
    let body = response
      .bytes()
      .await
      .map_err(|e| Error::HttpError(e.without_url()))?;
    debug!("Upstream answered {} with {} bytes", status, body.len());

    Ok(TransportResponse::new(status, body.to_vec()))
  }
}

#[derive(Debug, Clone)]
enum StubReply {
  Respond(TransportResponse),
  Fail(String),
}

/// Scripted transport: the first route whose pattern is a substring of the
/// request URL answers it. Unmatched URLs get a 500 with `{}`.
#[derive(Debug, Default)]
pub struct StubTransport {
  routes: Vec<(String, StubReply)>,
  requests: Mutex<Vec<String>>,
}

impl StubTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(
    mut self,
    pattern: impl Into<String>,
    status: u16,
    body: impl Into<String>,
  ) -> Self {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let reply = StubReply::Respond(TransportResponse::new(status, body.into().into_bytes()));
    self.routes.push((pattern.into(), reply));
    self
  }

  pub fn fail(mut self, pattern: impl Into<String>, reason: impl Into<String>) -> Self {
    self.routes.push((pattern.into(), StubReply::Fail(reason.into())));
    self
  }

  /// URLs requested so far, in order.
  pub fn requests(&self) -> Vec<String> {
    self
      .requests
      .lock()
      .map(|urls| urls.clone())
      .unwrap_or_default()
  }
}

#[async_trait]
impl HttpTransport for StubTransport {
  async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
    if let Ok(mut urls) = self.requests.lock() {
      urls.push(request.url.clone());
    }

    let reply = self
      .routes
      .iter()
      .find(|(pattern, _)| request.url.contains(pattern.as_str()))
      .map(|(_, reply)| reply.clone());

    match reply {
      Some(StubReply::Respond(response)) => Ok(response),
      Some(StubReply::Fail(reason)) => Err(Error::TransportError(reason)),
      None => Ok(TransportResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        b"{}".to_vec(),
      )),
    }
  }
}
