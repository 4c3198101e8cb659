//! Automação do portal Meu INSS
//!
//! Os seletores do portal são frágeis por natureza (uma aplicação Angular
//! em mudança); por isso toda a automação fica atrás do trait
//! [`PortalClient`], trocável sem tocar no resto do programa.

pub mod connection;
pub mod meu_inss;
pub mod store;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{PortalTask, PortalTaskDetail};

pub use connection::connect_to_browser_and_page;
pub use meu_inss::MeuInssPortal;
pub use store::TaskStore;

/// Capacidades de um portal de tarefas
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// Autentica no portal com CPF e senha
    async fn login(&self, cpf: &str, password: &str) -> AppResult<()>;
    /// Lista as tarefas visíveis do segurado autenticado
    async fn list_tasks(&self) -> AppResult<Vec<PortalTask>>;
    /// Busca o detalhe de uma tarefa pelo identificador
    async fn fetch_task_detail(&self, id: &str) -> AppResult<PortalTaskDetail>;
}
