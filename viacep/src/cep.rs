// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use regex::Regex;
use std::sync::LazyLock;

// ASCII only: `\d` would also accept other Unicode digits.
static CEP_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8}$").unwrap());

/// A CEP is exactly eight ASCII digits, no separators.
pub fn is_valid_cep(cep: &str) -> bool {
  CEP_PATTERN.is_match(cep)
}
