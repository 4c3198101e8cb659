//! Inicialização de logs
//!
//! Usa `tracing-subscriber` com filtro por variável de ambiente
//! (`RUST_LOG`); o nível padrão é `info`.

use tracing_subscriber::EnvFilter;

/// Inicializa o subscriber global de logs
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Inicialização tolerante para testes (pode ser chamada mais de uma vez)
pub fn try_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}
