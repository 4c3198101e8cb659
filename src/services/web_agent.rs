//! Agente de análise web - camada de capacidade
//!
//! Combina uma página buscada com a pergunta do caso e obtém uma resposta
//! do modelo. Só processa uma página por vez; não conhece o fluxo.

use std::sync::Arc;

use tracing::debug;

use crate::error::AppResult;
use crate::models::FetchedPage;
use crate::services::llm_service::ChatModel;
use crate::services::prompts::{MAX_SOURCE_CHARS, WEB_ANALYSIS_SYSTEM};
use crate::utils::text::truncate_chars;

/// Agente de análise de páginas web
pub struct WebAnalysisAgent {
    model: Arc<dyn ChatModel>,
}

impl WebAnalysisAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Analisa uma página à luz da pergunta do caso
    ///
    /// O texto da página é truncado em [`MAX_SOURCE_CHARS`] antes de ser
    /// embutido no prompt. Falhas do modelo propagam sem retentativa.
    pub async fn analyze(&self, page: &FetchedPage, question: &str) -> AppResult<String> {
        debug!("Analisando página: {}", page.url);

        let excerpt = truncate_chars(&page.content, MAX_SOURCE_CHARS);
        let prompt = build_prompt(page, &excerpt, question);

        self.model.complete(WEB_ANALYSIS_SYSTEM, &prompt).await
    }
}

fn build_prompt(page: &FetchedPage, excerpt: &str, question: &str) -> String {
    format!(
        r#"Analise o conteúdo da página abaixo e responda à pergunta.

Fonte: {url}
Título: {title}
Data de acesso: {accessed}

Conteúdo da página:
{excerpt}

Pergunta: {question}"#,
        url = page.url,
        title = page.title,
        accessed = page.fetched_at.format("%d/%m/%Y %H:%M"),
        excerpt = excerpt,
        question = question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn prompt_embeds_metadata_and_question() {
        let page = FetchedPage {
            url: "https://www.gov.br/inss".to_string(),
            title: "INSS".to_string(),
            content: "texto da página".to_string(),
            fetched_at: Local::now(),
        };
        let prompt = build_prompt(&page, &page.content, "Qual a carência?");

        assert!(prompt.contains("Fonte: https://www.gov.br/inss"));
        assert!(prompt.contains("Título: INSS"));
        assert!(prompt.contains("Data de acesso:"));
        assert!(prompt.contains("texto da página"));
        assert!(prompt.contains("Pergunta: Qual a carência?"));
    }
}
