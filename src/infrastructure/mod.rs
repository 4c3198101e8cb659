//! Camada de infraestrutura
//!
//! Componentes que falam com o mundo externo (HTTP, sistema de arquivos)
//! e só expõem capacidades, sem conhecer o fluxo do caso.

pub mod document_parser;
pub mod page_fetcher;

pub use document_parser::{DocumentParser, DocumentSource};
pub use page_fetcher::{PageFetcher, PageSource};
