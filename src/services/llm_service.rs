//! Serviço de LLM - camada de capacidade
//!
//! Só conhece "enviar uma conversa de um turno e juntar a resposta"; não
//! sabe o que é caso, página nem documento.
//!
//! ## Pilha técnica
//! - `async-openai` com endpoint e modelo configuráveis
//! - resposta consumida em streaming e montada em uma única string

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppResult, UpstreamError};

/// Capacidade de completar uma conversa de um turno
///
/// O orquestrador e os agentes dependem deste trait, não do cliente
/// concreto, para que testes possam substituir o modelo por um dublê.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Envia uma instrução de sistema + mensagem de usuário e devolve o
    /// texto completo da resposta (string vazia se o modelo não emitir
    /// conteúdo de texto)
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String>;
}

/// Serviço de LLM sobre `async-openai`
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_tokens: u32,
}

impl LlmService {
    /// Cria o serviço a partir da configuração
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            max_tokens: config.llm_max_tokens,
        }
    }

    fn call_failed(&self, err: impl std::error::Error + Send + Sync + 'static) -> UpstreamError {
        UpstreamError::CallFailed {
            model: self.model_name.clone(),
            source: Box::new(err),
        }
    }
}

#[async_trait]
impl ChatModel for LlmService {
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String> {
        debug!("Chamando o modelo {}", self.model_name);
        debug!("Mensagem do usuário: {} caracteres", user_message.len());

        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(system_message)
            .build()
            .map_err(|e| UpstreamError::RequestBuildFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            })?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| UpstreamError::RequestBuildFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            })?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_msg),
                ChatCompletionRequestMessage::User(user_msg),
            ])
            .temperature(0.2)
            .max_tokens(self.max_tokens)
            .stream(true)
            .build()
            .map_err(|e| UpstreamError::RequestBuildFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            })?;

        let mut stream = self
            .client
            .chat()
            .create_stream(request)
            .await
            .map_err(|e| {
                warn!("Falha na chamada ao modelo: {}", e);
                self.call_failed(e)
            })?;

        // Monta a resposta final a partir dos deltas de texto; qualquer
        // outro tipo de conteúdo é ignorado
        let mut content = String::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                warn!("Stream interrompido: {}", e);
                UpstreamError::StreamFailed {
                    model: self.model_name.clone(),
                    source: Box::new(e),
                }
            })?;

            if let Some(delta) = chunk
                .choices
                .first()
                .and_then(|choice| choice.delta.content.as_deref())
            {
                content.push_str(delta);
            }
        }

        debug!("Resposta montada: {} caracteres", content.len());

        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    /// Conectividade real com o endpoint configurado.
    /// Execução manual: cargo test -- --ignored
    #[tokio::test]
    #[ignore]
    async fn complete_against_live_endpoint() {
        crate::utils::logging::try_init();

        let config = Config::from_env().expect("LLM_API_KEY deve estar definida");
        let service = LlmService::new(&config);

        let response = service
            .complete(
                "Você é um assistente conciso.",
                "Responda com uma frase: o que é o INSS?",
            )
            .await
            .expect("chamada ao modelo");

        println!("Resposta: {}", response);
        assert!(!response.is_empty());
    }
}
