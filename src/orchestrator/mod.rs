//! Orquestrador de casos - camada de fluxo
//!
//! Fluxo estritamente sequencial, em três fases:
//! 1. coleta web: um agente por URL, na ordem fornecida
//! 2. coleta de documentos: um agente por PDF, na ordem fornecida
//! 3. síntese: uma chamada final ao modelo com todo o contexto
//!
//! Qualquer falha em qualquer fase aborta o caso inteiro; não há
//! recuperação parcial, retentativa nem memoização entre invocações.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{DocumentParser, DocumentSource, PageFetcher, PageSource};
use crate::models::{CaseInput, CaseResult};
use crate::services::llm_service::ChatModel;
use crate::services::prompts::{CONTEXT_SEPARATOR, SYNTHESIS_SYSTEM};
use crate::services::{DocumentAnalysisAgent, LlmService, WebAnalysisAgent};

/// Orquestrador de casos previdenciários
pub struct Orchestrator {
    model: Arc<dyn ChatModel>,
    fetcher: Arc<dyn PageSource>,
    parser: Arc<dyn DocumentSource>,
    web_agent: WebAnalysisAgent,
    document_agent: DocumentAnalysisAgent,
}

impl Orchestrator {
    /// Cria o orquestrador com os componentes reais
    pub fn new(config: &Config) -> AppResult<Self> {
        let model: Arc<dyn ChatModel> = Arc::new(LlmService::new(config));
        let fetcher: Arc<dyn PageSource> = Arc::new(PageFetcher::new(config)?);
        let parser: Arc<dyn DocumentSource> = Arc::new(DocumentParser::new());
        Ok(Self::with_components(model, fetcher, parser))
    }

    /// Cria o orquestrador com componentes fornecidos pelo chamador
    /// (testes usam dublês de modelo, buscador e interpretador)
    pub fn with_components(
        model: Arc<dyn ChatModel>,
        fetcher: Arc<dyn PageSource>,
        parser: Arc<dyn DocumentSource>,
    ) -> Self {
        Self {
            web_agent: WebAnalysisAgent::new(Arc::clone(&model)),
            document_agent: DocumentAnalysisAgent::new(Arc::clone(&model)),
            model,
            fetcher,
            parser,
        }
    }

    /// Processa um caso do início ao fim
    pub async fn process_case(&self, input: &CaseInput) -> AppResult<CaseResult> {
        info!("📋 Iniciando análise do caso");
        info!(
            "🔗 {} fonte(s) web, 📄 {} documento(s)",
            input.urls.len(),
            input.pdf_paths.len()
        );

        let mut context_blocks: Vec<String> = Vec::new();
        let mut sources: Vec<String> = Vec::new();

        // Fase 1: coleta web
        for url in &input.urls {
            info!("🌐 Analisando fonte web: {}", url);
            let page = self.fetcher.fetch(url).await?;
            let answer = self.web_agent.analyze(&page, &input.query).await?;
            context_blocks.push(format!("fonte: web {}\n{}", url, answer));
            sources.push(url.clone());
        }

        // Fase 2: coleta de documentos
        for path in &input.pdf_paths {
            info!("📄 Analisando documento: {}", path);
            let document = self.parser.parse_path(path).await?;
            let answer = self.document_agent.analyze(&document, &input.query).await?;
            context_blocks.push(format!("fonte: documento {}\n{}", path, answer));
            sources.push(path.clone());
        }

        // Fase 3: síntese
        info!("⚖️ Sintetizando a decisão final...");
        let prompt = build_synthesis_prompt(&input.query, &context_blocks);
        let reply = self.model.complete(SYNTHESIS_SYSTEM, &prompt).await?;

        // Fase 4: partição decisão/fundamentação
        let (decision, reasoning) = split_decision(&reply);

        info!("✓ Caso concluído ({} fonte(s))", sources.len());

        Ok(CaseResult {
            decision,
            reasoning,
            sources,
        })
    }
}

/// Monta o prompt da síntese final
fn build_synthesis_prompt(query: &str, context_blocks: &[String]) -> String {
    if context_blocks.is_empty() {
        return format!("Pergunta do caso: {}", query);
    }

    format!(
        r#"Pergunta do caso: {query}

Contexto coletado das fontes:

{context}"#,
        query = query,
        context = context_blocks.join(CONTEXT_SEPARATOR),
    )
}

/// Parte a resposta do modelo na primeira linha em branco
///
/// Tudo antes dela é a decisão; tudo depois é a fundamentação. É um corte
/// heurístico de texto, não uma análise estruturada: sem linha em branco,
/// a resposta inteira vira decisão e a fundamentação fica vazia.
pub fn split_decision(reply: &str) -> (String, String) {
    match reply.split_once("\n\n") {
        Some((decision, reasoning)) => (decision.to_string(), reasoning.to_string()),
        None => (reply.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_first_blank_line() {
        let (decision, reasoning) = split_decision("A\n\nB\n\nC");
        assert_eq!(decision, "A");
        assert_eq!(reasoning, "B\n\nC");
    }

    #[test]
    fn split_without_blank_line() {
        let (decision, reasoning) = split_decision("Benefício deferido.");
        assert_eq!(decision, "Benefício deferido.");
        assert_eq!(reasoning, "");
    }

    #[test]
    fn split_preserves_single_newlines_in_decision() {
        let (decision, reasoning) = split_decision("linha 1\nlinha 2\n\nresto");
        assert_eq!(decision, "linha 1\nlinha 2");
        assert_eq!(reasoning, "resto");
    }

    #[test]
    fn synthesis_prompt_without_context_is_query_only() {
        let prompt = build_synthesis_prompt("Qual a carência?", &[]);
        assert_eq!(prompt, "Pergunta do caso: Qual a carência?");
    }

    #[test]
    fn synthesis_prompt_joins_blocks_with_separator() {
        let blocks = vec!["fonte: web a\nresposta a".to_string(), "fonte: web b\nresposta b".to_string()];
        let prompt = build_synthesis_prompt("Pergunta?", &blocks);
        assert!(prompt.contains("Pergunta do caso: Pergunta?"));
        assert!(prompt.contains(&blocks.join(CONTEXT_SEPARATOR)));
    }
}
