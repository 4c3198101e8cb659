//! Agente de análise de documentos - camada de capacidade
//!
//! Mesmo contrato do agente web, sobre um documento PDF interpretado.

use std::sync::Arc;

use tracing::debug;

use crate::error::AppResult;
use crate::models::ParsedDocument;
use crate::services::llm_service::ChatModel;
use crate::services::prompts::{DOCUMENT_ANALYSIS_SYSTEM, MAX_SOURCE_CHARS};
use crate::utils::text::truncate_chars;

/// Agente de análise de documentos PDF
pub struct DocumentAnalysisAgent {
    model: Arc<dyn ChatModel>,
}

impl DocumentAnalysisAgent {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Analisa um documento à luz da pergunta do caso
    pub async fn analyze(&self, document: &ParsedDocument, question: &str) -> AppResult<String> {
        debug!("Analisando documento: {}", document.source_label);

        let excerpt = truncate_chars(&document.text, MAX_SOURCE_CHARS);
        let prompt = build_prompt(document, &excerpt, question);

        self.model.complete(DOCUMENT_ANALYSIS_SYSTEM, &prompt).await
    }
}

fn build_prompt(document: &ParsedDocument, excerpt: &str, question: &str) -> String {
    format!(
        r#"Analise o conteúdo do documento abaixo e responda à pergunta.

Documento: {label}
Páginas: {pages}
Data de acesso: {accessed}

Conteúdo do documento:
{excerpt}

Pergunta: {question}"#,
        label = document.source_label,
        pages = document.page_count,
        accessed = document.parsed_at.format("%d/%m/%Y %H:%M"),
        excerpt = excerpt,
        question = question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn prompt_embeds_label_and_page_count() {
        let document = ParsedDocument {
            source_label: "laudo_medico.pdf".to_string(),
            text: "conteúdo do laudo".to_string(),
            page_count: 4,
            parsed_at: Local::now(),
        };
        let prompt = build_prompt(&document, &document.text, "O laudo comprova incapacidade?");

        assert!(prompt.contains("Documento: laudo_medico.pdf"));
        assert!(prompt.contains("Páginas: 4"));
        assert!(prompt.contains("conteúdo do laudo"));
        assert!(prompt.contains("Pergunta: O laudo comprova incapacidade?"));
    }
}
