//! Persistência das tarefas raspadas
//!
//! Grava instantâneos em JSON no diretório de saída configurado; um
//! arquivo por coleta, nomeado pelo horário.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::Config;
use crate::error::{AppResult, FileError};
use crate::models::{PortalTask, PortalTaskDetail};

/// Armazenamento de tarefas em disco
pub struct TaskStore {
    output_dir: PathBuf,
}

impl TaskStore {
    /// Cria o armazenamento apontando para o diretório configurado
    pub fn new(config: &Config) -> Self {
        Self {
            output_dir: PathBuf::from(&config.output_dir),
        }
    }

    /// Armazenamento com diretório explícito (testes)
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: dir.into(),
        }
    }

    /// Grava um instantâneo da lista de tarefas; devolve o caminho gravado
    pub async fn save_tasks(&self, tasks: &[PortalTask]) -> AppResult<PathBuf> {
        let path = self.output_dir.join(snapshot_filename(Local::now()));
        let json = serde_json::to_string_pretty(tasks)?;
        self.write(&path, &json).await?;

        info!("💾 {} tarefa(s) gravadas em {}", tasks.len(), path.display());
        Ok(path)
    }

    /// Grava o detalhe de uma tarefa; devolve o caminho gravado
    pub async fn save_detail(&self, detail: &PortalTaskDetail) -> AppResult<PathBuf> {
        let path = self
            .output_dir
            .join(format!("tarefa_{}.json", detail.task.id));
        let json = serde_json::to_string_pretty(detail)?;
        self.write(&path, &json).await?;

        info!("💾 Detalhe da tarefa {} gravado", detail.task.id);
        Ok(path)
    }

    async fn write(&self, path: &Path, contents: &str) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| FileError::WriteFailed {
                path: self.output_dir.display().to_string(),
                source: Box::new(e),
            })?;

        tokio::fs::write(path, contents)
            .await
            .map_err(|e| FileError::WriteFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        Ok(())
    }
}

/// Nome do arquivo de instantâneo para um dado horário
fn snapshot_filename(at: DateTime<Local>) -> String {
    format!("tarefas_{}.json", at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_filename_encodes_timestamp() {
        use chrono::TimeZone;
        let at = Local.with_ymd_and_hms(2026, 8, 24, 14, 30, 5).unwrap();
        assert_eq!(snapshot_filename(at), "tarefas_20260824_143005.json");
    }

    #[tokio::test]
    async fn saves_and_reloads_tasks() {
        let dir = std::env::temp_dir().join(format!("prev_store_{}", std::process::id()));
        let store = TaskStore::with_dir(&dir);

        let tasks = vec![PortalTask {
            id: "1".to_string(),
            protocol: "20260001".to_string(),
            service: "Aposentadoria por Idade Rural".to_string(),
            status: "Em análise".to_string(),
            updated_at: Some("20/08/2026".to_string()),
        }];

        let path = store.save_tasks(&tasks).await.unwrap();
        let reloaded: Vec<PortalTask> =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();

        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].protocol, "20260001");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
