//! Testes manuais do portal Meu INSS
//!
//! Exigem um navegador aberto com a porta de depuração ativa e
//! credenciais reais; por isso ficam ignorados por padrão.
//! Execução manual: cargo test --test portal_test -- --ignored

use prev_case_analyzer::config::Config;
use prev_case_analyzer::portal::{connect_to_browser_and_page, MeuInssPortal, PortalClient, TaskStore};
use prev_case_analyzer::utils::logging;

fn test_config() -> Config {
    Config::from_env().unwrap_or_else(|_| Config::for_tests())
}

#[tokio::test]
#[ignore]
async fn browser_connection() {
    logging::try_init();

    let config = test_config();
    let result = connect_to_browser_and_page(
        config.browser_debug_port,
        Some(&config.portal_url),
        None,
    )
    .await;

    assert!(result.is_ok(), "deveria conectar ao navegador");
}

#[tokio::test]
#[ignore]
async fn login_and_list_tasks() {
    logging::try_init();

    let config = test_config();
    let cpf = std::env::var("PORTAL_CPF").expect("PORTAL_CPF deve estar definida");
    let password = std::env::var("PORTAL_SENHA").expect("PORTAL_SENHA deve estar definida");

    let portal = MeuInssPortal::connect(&config)
        .await
        .expect("conexão com o portal");

    portal.login(&cpf, &password).await.expect("login");

    let tasks = portal.list_tasks().await.expect("lista de tarefas");
    println!("Encontradas {} tarefa(s)", tasks.len());

    let store = TaskStore::new(&config);
    let path = store.save_tasks(&tasks).await.expect("gravação");
    println!("Instantâneo gravado em {}", path.display());
}

#[tokio::test]
#[ignore]
async fn fetch_first_task_detail() {
    logging::try_init();

    let config = test_config();
    let portal = MeuInssPortal::connect(&config)
        .await
        .expect("conexão com o portal");

    let tasks = portal.list_tasks().await.expect("lista de tarefas");
    let first = tasks.first().expect("ao menos uma tarefa");

    let detail = portal
        .fetch_task_detail(&first.id)
        .await
        .expect("detalhe da tarefa");

    println!("Tarefa {}: {} andamento(s)", detail.task.id, detail.history.len());

    let store = TaskStore::new(&config);
    store.save_detail(&detail).await.expect("gravação do detalhe");
}
