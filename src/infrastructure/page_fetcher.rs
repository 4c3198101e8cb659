//! Buscador de páginas - camada de infraestrutura
//!
//! Faz um GET com identificação fixa e prazo limitado, remove os nós sem
//! conteúdo (script, style, navegação etc.) e devolve título + texto
//! visível com espaços normalizados. Sem retentativa: uma falha aborta a
//! análise daquela URL.

use async_trait::async_trait;
use chrono::Local;
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, NetworkError};
use crate::models::FetchedPage;
use crate::utils::text::normalize_whitespace;

/// Elementos descartados na extração de texto visível
const STRIPPED_TAGS: [&str; 8] = [
    "script", "style", "nav", "footer", "header", "aside", "iframe", "noscript",
];

/// Capacidade de buscar uma página
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> AppResult<FetchedPage>;
}

/// Buscador de páginas via HTTP
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    /// Cria o buscador com o User-Agent e o tempo limite da configuração
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| NetworkError::ClientBuild {
                source: Box::new(e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch(&self, url: &str) -> AppResult<FetchedPage> {
        debug!("Buscando página: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::http_request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::http_request_failed(url, e))?;

        let page = extract_page(url, &body);
        debug!(
            "Página extraída: '{}' ({} caracteres)",
            page.title,
            page.content.len()
        );

        Ok(page)
    }
}

/// Extrai título e texto visível de um corpo HTML
fn extract_page(url: &str, body: &str) -> FetchedPage {
    let document = Html::parse_document(body);

    let title = document
        .select(title_selector())
        .next()
        .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .unwrap_or_default();

    let mut raw = String::new();
    if let Some(body_el) = document.select(body_selector()).next() {
        collect_visible_text(body_el, &mut raw);
    }

    FetchedPage {
        url: url.to_string(),
        title,
        content: normalize_whitespace(&raw),
        fetched_at: Local::now(),
    }
}

/// Acumula o texto dos nós visíveis, pulando as subárvores descartadas
fn collect_visible_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(el) => {
                if !STRIPPED_TAGS.contains(&el.name()) {
                    if let Some(child_ref) = ElementRef::wrap(child) {
                        collect_visible_text(child_ref, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn title_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("title").expect("seletor literal"))
}

fn body_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    SEL.get_or_init(|| Selector::parse("body").expect("seletor literal"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html>
          <head><title>  Aposentadoria por Idade
            Rural </title><style>.x { color: red; }</style></head>
          <body>
            <header>Barra do governo</header>
            <nav><a href="/">Início</a></nav>
            <main>
              <h1>Aposentadoria   por Idade Rural</h1>
              <p>Benefício devido ao  trabalhador rural.</p>
              <script>console.log("rastreador");</script>
              <div><p>Carência de <b>180</b> meses.</p></div>
            </main>
            <aside>Links relacionados</aside>
            <footer>Rodapé institucional</footer>
            <noscript>Ative o JavaScript</noscript>
          </body>
        </html>
    "#;

    #[test]
    fn extracts_normalized_title() {
        let page = extract_page("https://exemplo.gov.br", SAMPLE);
        assert_eq!(page.title, "Aposentadoria por Idade Rural");
    }

    #[test]
    fn strips_non_content_elements() {
        let page = extract_page("https://exemplo.gov.br", SAMPLE);
        assert!(page.content.contains("Benefício devido ao trabalhador rural."));
        assert!(page.content.contains("Carência de 180 meses."));
        assert!(!page.content.contains("rastreador"));
        assert!(!page.content.contains("Barra do governo"));
        assert!(!page.content.contains("Início"));
        assert!(!page.content.contains("Links relacionados"));
        assert!(!page.content.contains("Rodapé"));
        assert!(!page.content.contains("Ative o JavaScript"));
    }

    #[test]
    fn content_has_collapsed_whitespace() {
        let page = extract_page("https://exemplo.gov.br", SAMPLE);
        assert!(!page.content.contains("  "));
        assert!(!page.content.contains('\n'));
    }

    #[test]
    fn missing_title_and_body_yield_empty_page() {
        let page = extract_page("https://exemplo.gov.br", "<html></html>");
        assert_eq!(page.title, "");
        // parse_document sintetiza um body vazio
        assert_eq!(page.content, "");
        assert_eq!(page.url, "https://exemplo.gov.br");
    }
}
