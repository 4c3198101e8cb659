//! # Prev Case Analyzer
//!
//! Assistente de automação para questões previdenciárias brasileiras:
//! analisa um caso (pergunta + páginas web + PDFs) com um modelo de
//! linguagem e, separadamente, raspa a lista de tarefas do portal
//! Meu INSS atrás de uma interface de capacidades.
//!
//! ## Arquitetura
//!
//! ### ① Camada de infraestrutura
//! - `infrastructure/` - fala com o mundo externo, só expõe capacidades
//! - `PageFetcher` - HTTP + limpeza de HTML
//! - `DocumentParser` - extração de texto de PDF
//!
//! ### ② Camada de capacidades
//! - `services/` - "o que sei fazer" sobre uma única fonte
//! - `LlmService` - chamada de um turno ao modelo (trait `ChatModel`)
//! - `WebAnalysisAgent` / `DocumentAnalysisAgent` - fonte + pergunta → resposta
//!
//! ### ③ Camada de fluxo
//! - `orchestrator/` - coleta web → coleta de documentos → síntese → partição
//!
//! ### ④ Portal
//! - `portal/` - automação do Meu INSS isolada atrás de `PortalClient`
//!
//! O fluxo de um caso é estritamente sequencial: nenhuma fonte é
//! processada em paralelo e nada é cacheado entre invocações.

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod portal;
pub mod services;
pub mod utils;

// Reexporta os tipos mais usados
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentParser, DocumentSource, PageFetcher, PageSource};
pub use models::{CaseInput, CaseResult, FetchedPage, ParsedDocument};
pub use orchestrator::Orchestrator;
pub use portal::{MeuInssPortal, PortalClient, TaskStore};
pub use services::{ChatModel, DocumentAnalysisAgent, LlmService, WebAnalysisAgent};
