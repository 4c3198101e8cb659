//! Modelos das tarefas raspadas do portal Meu INSS

use serde::{Deserialize, Serialize};

/// Uma linha da lista de tarefas do portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalTask {
    /// Identificador interno da tarefa
    pub id: String,
    /// Número de protocolo exibido ao segurado
    #[serde(default)]
    pub protocol: String,
    /// Nome do serviço (ex.: "Aposentadoria por Idade Urbana")
    #[serde(default)]
    pub service: String,
    /// Situação atual (ex.: "Em análise")
    #[serde(default)]
    pub status: String,
    /// Data da última atualização, como exibida pelo portal
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Detalhe de uma tarefa, com o histórico de andamentos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalTaskDetail {
    #[serde(flatten)]
    pub task: PortalTask,
    /// Andamentos na ordem em que o portal os exibe
    #[serde(default)]
    pub history: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_task_row_with_missing_fields() {
        let json = r#"{"id": "12345", "service": "Aposentadoria por Idade Rural"}"#;
        let task: PortalTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, "12345");
        assert_eq!(task.service, "Aposentadoria por Idade Rural");
        assert_eq!(task.status, "");
        assert!(task.updated_at.is_none());
    }

    #[test]
    fn detail_flattens_task_fields() {
        let json = r#"{
            "id": "9",
            "protocol": "20250001",
            "service": "Pensão por Morte",
            "status": "Concluída",
            "history": ["Protocolado", "Em análise", "Concluída"]
        }"#;
        let detail: PortalTaskDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.task.protocol, "20250001");
        assert_eq!(detail.history.len(), 3);
    }
}
