// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
  celsius * 1.8 + 32.0
}

/// Uses the whole-number 273 offset; clients compare against it.
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
  celsius + 273.0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fahrenheit() {
    for (celsius, expected) in [(0.0, 32.0), (25.0, 77.0), (-10.0, 14.0)] {
      assert_eq!(celsius_to_fahrenheit(celsius), expected, "{celsius}°C");
    }
  }

  #[test]
  fn kelvin() {
    for (celsius, expected) in [(0.0, 273.0), (25.0, 298.0), (-10.0, 263.0)] {
      assert_eq!(celsius_to_kelvin(celsius), expected, "{celsius}°C");
    }
  }
}
