// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherApiResponse {
  #[serde(default)]
  pub location: ApiLocation,
  pub current: CurrentConditions,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ApiLocation {
  pub name: String,
  pub region: String,
  pub country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CurrentConditions {
  pub temp_c: f64,
}
