//! Aplicação principal
//!
//! Monta o orquestrador, executa o caso de demonstração e imprime o
//! resultado. Sem flags nem subcomandos.

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{CaseInput, CaseResult};
use crate::orchestrator::Orchestrator;

/// Aplicação
pub struct App {
    orchestrator: Orchestrator,
}

impl App {
    /// Inicializa a aplicação com a configuração carregada
    pub fn initialize(config: Config) -> AppResult<Self> {
        log_startup(&config);
        let orchestrator = Orchestrator::new(&config)?;
        Ok(Self { orchestrator })
    }

    /// Executa o caso de demonstração e imprime o resultado
    pub async fn run(&self) -> AppResult<()> {
        let case = demo_case();
        let result = self.orchestrator.process_case(&case).await?;
        print_result(&result);
        Ok(())
    }
}

/// O caso fixo de demonstração
fn demo_case() -> CaseInput {
    CaseInput {
        query: "Segurado especial rural com 58 anos de idade e 16 anos de atividade rural \
                comprovada tem direito à aposentadoria por idade rural? Quais documentos \
                servem como início de prova material?"
            .to_string(),
        urls: vec![
            "https://www.gov.br/inss/pt-br/assuntos/aposentadoria-por-idade-rural".to_string(),
            "https://www.gov.br/inss/pt-br/direitos-e-deveres".to_string(),
        ],
        pdf_paths: vec![],
    }
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Analisador de casos previdenciários");
    info!("🤖 Modelo: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

fn print_result(result: &CaseResult) {
    println!("{}", "=".repeat(60));
    println!("DECISÃO");
    println!("{}", "=".repeat(60));
    println!("{}\n", result.decision);

    println!("{}", "=".repeat(60));
    println!("FUNDAMENTAÇÃO");
    println!("{}", "=".repeat(60));
    println!("{}\n", result.reasoning);

    println!("{}", "=".repeat(60));
    println!("FONTES CONSULTADAS");
    println!("{}", "=".repeat(60));
    for source in &result.sources {
        println!("- {}", source);
    }
}
