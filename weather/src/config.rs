// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use url::Url;

#[derive(Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: Option<String>,
  pub(crate) base_url: Url,
}

impl WeatherConfig {
  /// A missing or blank key is accepted here and only fails the lookups.
  pub fn new(api_key: Option<String>, base_url: &str) -> Result<Self, Error> {
    let mut base_url = Url::parse(base_url)?;
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }

    Ok(Self {
      api_key: api_key.filter(|key| !key.trim().is_empty()),
      base_url,
    })
  }

}

impl std::fmt::Debug for WeatherConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WeatherConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "***"))
      .field("base_url", &self.base_url.as_str())
      .finish()
  }
}
