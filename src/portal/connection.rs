//! Conexão com o navegador via porta de depuração

use chromiumoxide::{Browser, Page};
use futures::StreamExt;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use crate::error::{AppResult, BrowserError};

/// Conecta ao navegador em execução e obtém uma página
///
/// Procura uma aba cujo título contenha `target_title`; sem
/// correspondência, cria uma página nova e navega para `target_url`.
pub async fn connect_to_browser_and_page(
    port: u16,
    target_url: Option<&str>,
    target_title: Option<&str>,
) -> AppResult<(Browser, Page)> {
    let browser_url = format!("http://localhost:{}", port);
    info!("Conectando ao navegador: {}", browser_url);

    let (browser, mut handler) =
        Browser::connect(&browser_url)
            .await
            .map_err(|e| BrowserError::ConnectionFailed {
                port,
                source: Box::new(e),
            })?;
    debug!("Conexão estabelecida");

    // Processa os eventos do navegador em segundo plano
    tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });

    // Pequena espera para o estado do navegador sincronizar
    sleep(Duration::from_millis(300)).await;

    let pages = browser
        .pages()
        .await
        .map_err(|e| BrowserError::PageCreationFailed {
            source: Box::new(e),
        })?;
    debug!("{} página(s) abertas", pages.len());

    if let Some(title) = target_title {
        for page in pages.iter() {
            if let Ok(Some(page_title)) = page.get_title().await {
                if page_title.contains(title) {
                    info!("✓ Página alvo encontrada: {}", page_title);
                    return Ok((browser, page.clone()));
                }
            }
        }
        debug!("Nenhuma aba corresponde a '{}', criando página nova", title);
    }

    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| BrowserError::PageCreationFailed {
            source: Box::new(e),
        })?;

    if let Some(url) = target_url {
        page.goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                source: Box::new(e),
            })?;
        info!("Navegou para: {}", url);
    }

    Ok((browser, page))
}
