// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Result;
use config::ServiceConfig;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(env_filter())
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

#[tokio::main]
async fn main() -> Result<()> {
  setup_logging();

  let config = ServiceConfig::from_env()?;
  tracing::debug!("Loaded {:?}", config);

  cep_weather::run(config).await
}
