// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::ViaCepResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalLookup {
  pub locality: String,
  pub state: String,
  pub found: bool,
}

impl PostalLookup {
  pub(crate) fn from_response(response: ViaCepResponse) -> Self {
    Self {
      found: !response.erro && !response.localidade.is_empty(),
      locality: response.localidade,
      state: response.uf,
    }
  }
}
