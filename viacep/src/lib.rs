// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod cep;
pub mod models;
pub mod service;

pub use cep::is_valid_cep;
pub use models::location::PostalLookup;
pub use service::ViaCepClient;
