use anyhow::Result;

use prev_case_analyzer::app::App;
use prev_case_analyzer::config::Config;
use prev_case_analyzer::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Inicializa os logs
    logging::init();

    // Carrega a configuração; chave de API ausente é erro fatal aqui,
    // antes de qualquer chamada de rede
    let config = Config::from_env()?;

    // Inicializa e executa a aplicação
    App::initialize(config)?.run().await?;

    Ok(())
}
