use crate::error::{AppResult, ConfigError};

/// Configuração do programa
///
/// A chave da API é obrigatória e a sua ausência é um erro fatal de
/// inicialização; os demais campos têm valores padrão e podem ser
/// sobrescritos por variáveis de ambiente.
#[derive(Clone, Debug)]
pub struct Config {
    // --- Configuração do LLM ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// Limite de tokens de saída por chamada
    pub llm_max_tokens: u32,
    // --- Busca de páginas ---
    /// Identificação do cliente HTTP
    pub user_agent: String,
    /// Tempo limite por requisição, em segundos
    pub fetch_timeout_secs: u64,
    // --- Portal Meu INSS ---
    pub portal_url: String,
    /// Porta de depuração do navegador
    pub browser_debug_port: u16,
    /// Diretório de saída das tarefas raspadas
    pub output_dir: String,
}

impl Config {
    /// Carrega a configuração a partir das variáveis de ambiente
    ///
    /// Falha com `ConfigError::EnvVarNotFound` quando `LLM_API_KEY` não
    /// está definida, antes de qualquer chamada de rede.
    pub fn from_env() -> AppResult<Self> {
        let llm_api_key =
            std::env::var("LLM_API_KEY").map_err(|_| ConfigError::EnvVarNotFound {
                var_name: "LLM_API_KEY".to_string(),
            })?;

        Ok(Self {
            llm_api_key,
            llm_api_base_url: std::env::var("LLM_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_model_name: std::env::var("LLM_MODEL_NAME")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            llm_max_tokens: env_parse("LLM_MAX_TOKENS", 2048)?,
            user_agent: std::env::var("FETCH_USER_AGENT")
                .unwrap_or_else(|_| "prev-case-analyzer/0.1".to_string()),
            fetch_timeout_secs: env_parse("FETCH_TIMEOUT_SECS", 30)?,
            portal_url: std::env::var("PORTAL_URL")
                .unwrap_or_else(|_| "https://meu.inss.gov.br".to_string()),
            browser_debug_port: env_parse("BROWSER_DEBUG_PORT", 2001)?,
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "output_tarefas".to_string()),
        })
    }

    /// Configuração de teste, sem tocar o ambiente do processo
    pub fn for_tests() -> Self {
        Self {
            llm_api_key: "chave-de-teste".to_string(),
            llm_api_base_url: "http://localhost:9/v1".to_string(),
            llm_model_name: "modelo-de-teste".to_string(),
            llm_max_tokens: 2048,
            user_agent: "prev-case-analyzer/0.1".to_string(),
            fetch_timeout_secs: 5,
            portal_url: "https://meu.inss.gov.br".to_string(),
            browser_debug_port: 2001,
            output_dir: "output_tarefas".to_string(),
        }
    }
}

/// Lê e converte uma variável de ambiente numérica, com valor padrão
fn env_parse<T: std::str::FromStr>(var_name: &str, default: T) -> AppResult<T> {
    match std::env::var(var_name) {
        Err(_) => Ok(default),
        Ok(value) => value
            .parse()
            .map_err(|_| {
                ConfigError::EnvVarParseFailed {
                    var_name: var_name.to_string(),
                    value,
                    expected_type: std::any::type_name::<T>().to_string(),
                }
                .into()
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::Mutex;

    // Testes que mexem nas variáveis de ambiente rodam serializados
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Aplica as variáveis, roda o teste e restaura o ambiente original
    fn with_env(vars: &[(&str, Option<&str>)], test: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap();

        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
            .collect();

        for (key, value) in vars {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        test();

        for (key, value) in saved {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }

    #[test]
    fn missing_api_key_is_a_fatal_config_error() {
        with_env(&[("LLM_API_KEY", None)], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                AppError::Config(ConfigError::EnvVarNotFound { ref var_name })
                    if var_name == "LLM_API_KEY"
            ));
        });
    }

    #[test]
    fn unparseable_max_tokens_is_a_config_error() {
        with_env(
            &[
                ("LLM_API_KEY", Some("chave")),
                ("LLM_MAX_TOKENS", Some("muitos")),
            ],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(matches!(
                    err,
                    AppError::Config(ConfigError::EnvVarParseFailed { ref var_name, ref value, .. })
                        if var_name == "LLM_MAX_TOKENS" && value == "muitos"
                ));
            },
        );
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        with_env(
            &[
                ("LLM_API_KEY", Some("chave")),
                ("LLM_MAX_TOKENS", None),
                ("LLM_MODEL_NAME", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.llm_api_key, "chave");
                assert_eq!(config.llm_max_tokens, 2048);
                assert_eq!(config.llm_model_name, "gpt-4o");
            },
        );
    }
}
