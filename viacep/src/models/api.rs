// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// Raw ViaCEP payload. Unknown CEPs come back as `{"erro": true}` with a 200.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ViaCepResponse {
  pub cep: String,
  pub logradouro: String,
  pub complemento: String,
  pub bairro: String,
  pub localidade: String,
  pub uf: String,
  pub ibge: String,
  pub gia: String,
  pub ddd: String,
  pub siafi: String,
  #[serde(deserialize_with = "flag")]
  pub erro: bool,
}

// ViaCEP has sent the flag both as a bool and as the string "true".
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: serde::Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Flag {
    Bool(bool),
    Text(String),
  }

  Ok(match Flag::deserialize(deserializer)? {
    Flag::Bool(value) => value,
    Flag::Text(value) => value.eq_ignore_ascii_case("true"),
  })
}
