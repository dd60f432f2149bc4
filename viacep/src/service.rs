// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::{api::ViaCepResponse, location::PostalLookup};
use base::{HttpTransport, TransportRequest};
use error::Error;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

/// Resolves a CEP to its locality through ViaCEP.
#[derive(Clone)]
pub struct ViaCepClient {
  base_url: Url,
  transport: Arc<dyn HttpTransport>,
}

impl ViaCepClient {
  pub fn new(base_url: &str, transport: Arc<dyn HttpTransport>) -> Result<Self, Error> {
    let mut base_url = Url::parse(base_url)?;
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }

    Ok(Self {
      base_url,
      transport,
    })
  }

  fn build_lookup_url(&self, cep: &str) -> Result<Url, Error> {
    Ok(self.base_url.join(&format!("ws/{}/json/", cep))?)
  }

  /// The HTTP status is not inspected: ViaCEP reports unknown codes in the
  /// payload, so only transport and decode failures or the `erro` flag fail.
  #[instrument(skip(self))]
  pub async fn resolve_location(&self, cep: &str) -> Result<PostalLookup, Error> {
    let url = self.build_lookup_url(cep)?;
    let response = self
      .transport
      .execute(TransportRequest::get(url.as_str()))
      .await?;

    let payload: ViaCepResponse = response.json()?;
    let lookup = PostalLookup::from_response(payload);
    if !lookup.found {
      return Err(Error::CepNotFound(cep.to_string()));
    }

    debug!("CEP {} resolved to {}/{}", cep, lookup.locality, lookup.state);
    Ok(lookup)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use base::StubTransport;

  const SE_PAYLOAD: &str = r#"{
    "cep": "01001-000",
    "logradouro": "Praça da Sé",
    "complemento": "lado ímpar",
    "bairro": "Sé",
    "localidade": "São Paulo",
    "uf": "SP",
    "ibge": "3550308",
    "gia": "1004",
    "ddd": "11",
    "siafi": "7107"
  }"#;

  fn client(stub: StubTransport) -> (ViaCepClient, Arc<StubTransport>) {
    let stub = Arc::new(stub);
    let client = ViaCepClient::new("https://viacep.com.br", stub.clone()).unwrap();
    (client, stub)
  }

  #[tokio::test]
  async fn resolves_locality() {
    let (client, stub) = client(StubTransport::new().respond("viacep.com.br", 200, SE_PAYLOAD));

    let lookup = client.resolve_location("01001000").await.unwrap();
    assert_eq!(lookup.locality, "São Paulo");
    assert!(lookup.found);
    assert_eq!(
      stub.requests(),
      vec!["https://viacep.com.br/ws/01001000/json/".to_string()]
    );
  }

  #[tokio::test]
  async fn error_flag_is_not_found() {
    let stub = StubTransport::new().respond("viacep.com.br", 200, r#"{"erro": true}"#);
    let (client, _) = client(stub);

    let err = client.resolve_location("99999999").await.unwrap_err();
    assert!(matches!(err, Error::CepNotFound(cep) if cep == "99999999"));
  }

  #[tokio::test]
  async fn string_error_flag_is_not_found() {
    let stub = StubTransport::new().respond("viacep.com.br", 200, r#"{"erro": "true"}"#);
    let (client, _) = client(stub);

    let err = client.resolve_location("99999999").await.unwrap_err();
    assert!(matches!(err, Error::CepNotFound(_)));
  }

  #[tokio::test]
  async fn status_code_is_ignored() {
    let stub = StubTransport::new().respond("viacep.com.br", 503, SE_PAYLOAD);
    let (client, _) = client(stub);

    let lookup = client.resolve_location("01001000").await.unwrap();
    assert_eq!(lookup.locality, "São Paulo");
  }

  #[tokio::test]
  async fn garbage_body_is_a_parse_error() {
    let stub = StubTransport::new().respond("viacep.com.br", 400, "<html>Bad Request</html>");
    let (client, _) = client(stub);

    let err = client.resolve_location("01001000").await.unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
  }

  #[tokio::test]
  async fn transport_failure_is_propagated() {
    let (client, _) = client(StubTransport::new().fail("viacep.com.br", "dns failure"));

    let err = client.resolve_location("01001000").await.unwrap_err();
    assert!(matches!(err, Error::TransportError(_)));
  }

  #[test]
  fn custom_base_url_is_joined() {
    let stub = Arc::new(StubTransport::new());
    let client = ViaCepClient::new("http://127.0.0.1:9000", stub).unwrap();
    assert_eq!(
      client.build_lookup_url("01001000").unwrap().as_str(),
      "http://127.0.0.1:9000/ws/01001000/json/"
    );
  }

  #[test]
  fn base_url_path_prefix_is_kept() {
    let stub = Arc::new(StubTransport::new());
    let client = ViaCepClient::new("http://gateway.local/viacep", stub).unwrap();
    assert_eq!(
      client.build_lookup_url("01001000").unwrap().as_str(),
      "http://gateway.local/viacep/ws/01001000/json/"
    );
  }

  #[test]
  fn rejects_unparseable_base_url() {
    let result = ViaCepClient::new("not a url", Arc::new(StubTransport::new()));
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
  }
}
