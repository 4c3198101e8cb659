//! Modelos do fluxo de análise de casos
//!
//! Todos os valores são imutáveis depois de construídos: nada aqui é
//! cacheado nem compartilhado entre invocações do orquestrador.

use chrono::{DateTime, Local};

/// Um caso previdenciário: a pergunta e suas fontes de apoio
#[derive(Debug, Clone)]
pub struct CaseInput {
    /// Pergunta jurídica em linguagem natural
    pub query: String,
    /// URLs de apoio, na ordem de processamento
    pub urls: Vec<String>,
    /// Caminhos de PDFs de apoio, na ordem de processamento
    pub pdf_paths: Vec<String>,
}

impl CaseInput {
    /// Cria um caso sem fontes de apoio
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            urls: Vec::new(),
            pdf_paths: Vec::new(),
        }
    }
}

/// Resultado final de um caso
///
/// `sources` registra a proveniência na ordem de processamento: todas as
/// URLs e depois todos os caminhos de PDF, exatamente como fornecidos;
/// duplicatas são preservadas.
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// Primeiro parágrafo da resposta do modelo
    pub decision: String,
    /// Restante da resposta (vazio se o modelo respondeu em um parágrafo)
    pub reasoning: String,
    /// URLs e caminhos que contribuíram contexto, em ordem
    pub sources: Vec<String>,
}

/// Página web buscada e limpa
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub title: String,
    /// Texto visível, com espaços em branco normalizados
    pub content: String,
    pub fetched_at: DateTime<Local>,
}

/// Documento PDF interpretado
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Caminho do arquivo ou rótulo do buffer em memória
    pub source_label: String,
    /// Texto extraído, com espaços em branco normalizados
    pub text: String,
    pub page_count: usize,
    pub parsed_at: DateTime<Local>,
}
