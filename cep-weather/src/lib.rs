// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod handlers;
pub mod response;
pub mod server;
pub mod state;

pub use response::{ApiError, ErrorResponse, TemperatureResponse};
pub use server::{build_router, run};
pub use state::AppState;
