//! Interpretador de documentos PDF - camada de infraestrutura
//!
//! Extrai texto e contagem de páginas de um caminho ou de um buffer em
//! memória, com a mesma normalização de espaços do buscador de páginas.

use async_trait::async_trait;
use chrono::Local;
use std::path::Path;
use tracing::debug;

use crate::error::{AppError, AppResult, FileError, ParseError};
use crate::models::ParsedDocument;
use crate::utils::text::normalize_whitespace;

/// Rótulo usado quando o chamador fornece bytes sem nome
const BUFFER_LABEL: &str = "documento em memória";

/// Capacidade de interpretar um documento
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Interpreta um PDF a partir de um caminho no sistema de arquivos
    async fn parse_path(&self, path: &str) -> AppResult<ParsedDocument>;
    /// Interpreta um PDF a partir de bytes em memória
    async fn parse_bytes(&self, bytes: &[u8], label: Option<&str>) -> AppResult<ParsedDocument>;
}

/// Interpretador baseado no `pdf-extract`
#[derive(Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentSource for DocumentParser {
    async fn parse_path(&self, path: &str) -> AppResult<ParsedDocument> {
        debug!("Interpretando documento: {}", path);

        if !Path::new(path).is_file() {
            return Err(FileError::NotFound {
                path: path.to_string(),
            }
            .into());
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path, e))?;

        self.parse_bytes(&bytes, Some(path)).await
    }

    async fn parse_bytes(&self, bytes: &[u8], label: Option<&str>) -> AppResult<ParsedDocument> {
        let label = label.unwrap_or(BUFFER_LABEL).to_string();

        let raw = pdf_extract::extract_text_from_mem(bytes).map_err(|e| ParseError::InvalidPdf {
            label: label.clone(),
            source: Box::new(e),
        })?;

        // pdf-extract separa páginas com form feed
        let page_count = raw
            .split('\x0C')
            .filter(|page| !page.trim().is_empty())
            .count()
            .max(1);

        debug!("Documento '{}' com {} página(s)", label, page_count);

        Ok(ParsedDocument {
            source_label: label,
            text: normalize_whitespace(&raw),
            page_count,
            parsed_at: Local::now(),
        })
    }
}
