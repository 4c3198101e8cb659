//! Camada de capacidades de negócio
//!
//! Cada serviço descreve "o que sei fazer" sobre uma única fonte; nenhum
//! deles conhece a ordem do fluxo nem guarda estado entre chamadas.

pub mod document_agent;
pub mod llm_service;
pub mod prompts;
pub mod web_agent;

pub use document_agent::DocumentAnalysisAgent;
pub use llm_service::{ChatModel, LlmService};
pub use web_agent::WebAnalysisAgent;
