//! Normalização e truncamento de texto extraído

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("expressão regular literal"))
}

/// Colapsa sequências de espaços em branco em um único espaço e apara as
/// pontas
///
/// A operação é idempotente: texto já normalizado passa inalterado.
pub fn normalize_whitespace(text: &str) -> String {
    whitespace_runs().replace_all(text.trim(), " ").into_owned()
}

/// Trunca o texto para no máximo `max_chars` caracteres
///
/// Texto dentro do limite passa inalterado; acima dele, o corte é exato
/// no limite, sem reticências.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        text.chars().take(max_chars).collect()
    } else {
        text.to_string()
    }
}
