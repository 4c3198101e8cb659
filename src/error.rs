//! Tipos de erro da aplicação
//!
//! Cada componente folha (fetcher, parser, agentes, portal) produz seu
//! próprio sub-erro; o orquestrador apenas propaga, sem recuperação local.

use thiserror::Error;

/// Erro da aplicação
#[derive(Debug, Error)]
pub enum AppError {
    /// Falha de rede ao buscar uma página
    #[error("erro de rede: {0}")]
    Network(#[from] NetworkError),
    /// Falha de arquivo
    #[error("erro de arquivo: {0}")]
    File(#[from] FileError),
    /// Falha ao interpretar um documento
    #[error("erro de análise: {0}")]
    Parse(#[from] ParseError),
    /// Falha na chamada ao modelo
    #[error("erro no modelo: {0}")]
    Upstream(#[from] UpstreamError),
    /// Falha de configuração
    #[error("erro de configuração: {0}")]
    Config(#[from] ConfigError),
    /// Falha de navegador (portal Meu INSS)
    #[error("erro de navegador: {0}")]
    Browser(#[from] BrowserError),
}

/// Erros de rede do buscador de páginas
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Falha ao montar o cliente HTTP
    #[error("falha ao criar o cliente HTTP: {source}")]
    ClientBuild {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Requisição falhou (DNS, conexão, TLS)
    #[error("falha na requisição para {url}: {source}")]
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Tempo limite excedido
    #[error("tempo limite excedido ao buscar {url}")]
    Timeout { url: String },
    /// Resposta com status de erro
    #[error("resposta HTTP {status} ao buscar {url}")]
    BadStatus { url: String, status: u16 },
}

/// Erros de acesso a arquivos
#[derive(Debug, Error)]
pub enum FileError {
    /// Arquivo não encontrado
    #[error("arquivo não encontrado: {path}")]
    NotFound { path: String },
    /// Falha de leitura
    #[error("falha ao ler o arquivo {path}: {source}")]
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha de escrita
    #[error("falha ao gravar o arquivo {path}: {source}")]
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Erros de interpretação de documentos
#[derive(Debug, Error)]
pub enum ParseError {
    /// Os bytes não formam um PDF válido
    #[error("PDF inválido ({label}): {source}")]
    InvalidPdf {
        label: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha ao decodificar JSON
    #[error("falha ao decodificar JSON: {source}")]
    Json {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Erros da chamada ao modelo de linguagem
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A chamada falhou (autenticação, limite de requisições, rede)
    #[error("falha na chamada ao modelo {model}: {source}")]
    CallFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// O stream de resposta foi interrompido
    #[error("falha no stream de resposta do modelo {model}: {source}")]
    StreamFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha ao montar a requisição
    #[error("falha ao montar a requisição para o modelo {model}: {source}")]
    RequestBuildFailed {
        model: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Erros de configuração (fatais na inicialização)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Variável de ambiente obrigatória ausente
    #[error("variável de ambiente {var_name} não definida")]
    EnvVarNotFound { var_name: String },
    /// Valor de variável de ambiente inválido
    #[error("variável de ambiente {var_name} inválida: '{value}' não é {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// Erros de automação do navegador
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Falha ao conectar na porta de depuração
    #[error("não foi possível conectar ao navegador (porta {port}): {source}")]
    ConnectionFailed {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha ao criar página
    #[error("falha ao criar página: {source}")]
    PageCreationFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha de navegação
    #[error("falha ao navegar para {url}: {source}")]
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Falha ao executar script na página
    #[error("falha ao executar script: {source}")]
    ScriptFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Elemento não apareceu dentro do prazo
    #[error("elemento '{selector}' não encontrado na página")]
    ElementNotFound { selector: String },
    /// Autenticação recusada pelo portal
    #[error("falha de login no portal: {reason}")]
    LoginFailed { reason: String },
}

// ========== Conversões de erros de terceiros ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(ParseError::Json {
            source: Box::new(err),
        })
    }
}

// ========== Construtores de conveniência ==========

impl AppError {
    /// Erro de requisição HTTP, distinguindo tempo limite de falha comum
    pub fn http_request_failed(url: impl Into<String>, err: reqwest::Error) -> Self {
        let url = url.into();
        if err.is_timeout() {
            AppError::Network(NetworkError::Timeout { url })
        } else {
            AppError::Network(NetworkError::RequestFailed {
                url,
                source: Box::new(err),
            })
        }
    }

    /// Erro de leitura de arquivo
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

/// Resultado da aplicação
pub type AppResult<T> = Result<T, AppError>;
