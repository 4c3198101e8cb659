//! Cliente do portal Meu INSS
//!
//! Toda a fragilidade específica do site mora aqui: seletores, esperas e
//! os scripts executados dentro da página. Nada fora deste arquivo
//! conhece o DOM do portal.

use chromiumoxide::{Browser, Page};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tokio::time::{sleep, Duration};
use tracing::{debug, info, warn};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{AppResult, BrowserError};
use crate::models::{PortalTask, PortalTaskDetail};
use crate::portal::connection::connect_to_browser_and_page;
use crate::portal::PortalClient;

// ========== Seletores do portal (aplicação Angular) ==========

const LOGIN_BUTTON: &str = "button.br-button.sign-in";
const CPF_INPUT: &str = "input#accountId";
const CPF_CONTINUE: &str = "button#enter-account-id";
const PASSWORD_INPUT: &str = "input#password";
const PASSWORD_SUBMIT: &str = "button#submit-button";
const LOGIN_ERROR_BANNER: &str = "div.br-message.danger";
const TASK_TABLE: &str = "table.lista-tarefas tbody tr";
const TASK_DETAIL_PANEL: &str = "div.detalhe-tarefa";

/// Tentativas de espera por um seletor (500 ms entre cada)
const WAIT_ATTEMPTS: u32 = 40;

/// Cliente do Meu INSS sobre o protocolo de depuração do Chrome
pub struct MeuInssPortal {
    // Mantém a conexão com o navegador viva enquanto o cliente existir
    _browser: Browser,
    page: Page,
    portal_url: String,
}

impl MeuInssPortal {
    /// Conecta ao navegador em execução e abre o portal
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let (browser, page) = connect_to_browser_and_page(
            config.browser_debug_port,
            Some(&config.portal_url),
            Some("Meu INSS"),
        )
        .await?;

        Ok(Self {
            _browser: browser,
            page,
            portal_url: config.portal_url.clone(),
        })
    }

    /// Executa um script na página e devolve o resultado como JSON
    async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let value = result.into_value()?;
        Ok(value)
    }

    /// Executa um script e desserializa o resultado
    async fn eval_as<T: DeserializeOwned>(&self, js_code: impl Into<String>) -> AppResult<T> {
        let value = self.eval(js_code).await?;
        let typed = serde_json::from_value(value)?;
        Ok(typed)
    }

    /// Espera um seletor aparecer na página
    async fn wait_for(&self, selector: &str) -> AppResult<()> {
        for _ in 0..WAIT_ATTEMPTS {
            let found: bool = self
                .eval_as(format!("document.querySelector({:?}) !== null", selector))
                .await?;
            if found {
                return Ok(());
            }
            sleep(Duration::from_millis(500)).await;
        }
        Err(BrowserError::ElementNotFound {
            selector: selector.to_string(),
        }
        .into())
    }

    /// Clica em um elemento já presente na página
    async fn click(&self, selector: &str) -> AppResult<()> {
        self.eval(format!("document.querySelector({:?}).click()", selector))
            .await?;
        Ok(())
    }

    /// Preenche um campo e dispara o evento `input` (a aplicação Angular
    /// só registra o valor com o evento)
    async fn fill(&self, selector: &str, value: &str) -> AppResult<()> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({selector:?});
                el.value = {value:?};
                el.dispatchEvent(new Event('input', {{ bubbles: true }}));
            }})()"#,
        );
        self.eval(js).await?;
        Ok(())
    }

    /// Navega e espera o seletor de referência da tela
    async fn goto_and_wait(&self, url: &str, selector: &str) -> AppResult<()> {
        self.page
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                source: Box::new(e),
            })?;
        self.wait_for(selector).await
    }
}

#[async_trait]
impl PortalClient for MeuInssPortal {
    async fn login(&self, cpf: &str, password: &str) -> AppResult<()> {
        info!("🔐 Autenticando no portal...");

        self.wait_for(LOGIN_BUTTON).await?;
        self.click(LOGIN_BUTTON).await?;

        self.wait_for(CPF_INPUT).await?;
        self.fill(CPF_INPUT, cpf).await?;
        self.click(CPF_CONTINUE).await?;

        self.wait_for(PASSWORD_INPUT).await?;
        self.fill(PASSWORD_INPUT, password).await?;
        self.click(PASSWORD_SUBMIT).await?;

        // Ou a lista de tarefas aparece, ou o portal mostra o aviso de erro
        for _ in 0..WAIT_ATTEMPTS {
            let logged_in: bool = self
                .eval_as(format!(
                    "document.querySelector({:?}) !== null",
                    TASK_TABLE
                ))
                .await?;
            if logged_in {
                info!("✓ Login concluído");
                return Ok(());
            }

            let error_text: Option<String> = self
                .eval_as(format!(
                    "(() => {{ const el = document.querySelector({:?}); return el ? el.innerText.trim() : null; }})()",
                    LOGIN_ERROR_BANNER
                ))
                .await?;
            if let Some(reason) = error_text {
                warn!("Login recusado: {}", reason);
                return Err(BrowserError::LoginFailed { reason }.into());
            }

            sleep(Duration::from_millis(500)).await;
        }

        Err(BrowserError::ElementNotFound {
            selector: TASK_TABLE.to_string(),
        }
        .into())
    }

    async fn list_tasks(&self) -> AppResult<Vec<PortalTask>> {
        info!("📥 Coletando a lista de tarefas...");

        let url = format!("{}/#/tarefas", self.portal_url);
        self.goto_and_wait(&url, TASK_TABLE).await?;

        let js = format!(
            r#"Array.from(document.querySelectorAll({TASK_TABLE:?})).map(row => {{
                const cells = row.querySelectorAll('td');
                const text = i => cells[i] ? cells[i].innerText.trim() : '';
                return {{
                    id: row.getAttribute('data-id') || text(0),
                    protocol: text(0),
                    service: text(1),
                    status: text(2),
                    updated_at: cells[3] ? cells[3].innerText.trim() : null
                }};
            }})"#,
        );

        let tasks: Vec<PortalTask> = self.eval_as(js).await?;
        info!("✓ {} tarefa(s) encontradas", tasks.len());
        debug!("{:?}", tasks);

        Ok(tasks)
    }

    async fn fetch_task_detail(&self, id: &str) -> AppResult<PortalTaskDetail> {
        info!("🔎 Buscando detalhe da tarefa {}", id);

        let url = format!("{}/#/tarefas/{}", self.portal_url, id);
        self.goto_and_wait(&url, TASK_DETAIL_PANEL).await?;

        let js = format!(
            r#"(() => {{
                const panel = document.querySelector({TASK_DETAIL_PANEL:?});
                const field = name => {{
                    const el = panel.querySelector('[data-campo="' + name + '"]');
                    return el ? el.innerText.trim() : '';
                }};
                return {{
                    id: {id:?},
                    protocol: field('protocolo'),
                    service: field('servico'),
                    status: field('situacao'),
                    updated_at: field('atualizacao') || null,
                    history: Array.from(panel.querySelectorAll('ul.andamentos li'))
                        .map(li => li.innerText.trim())
                }};
            }})()"#,
        );

        let detail: PortalTaskDetail = self.eval_as(js).await?;
        Ok(detail)
    }
}
