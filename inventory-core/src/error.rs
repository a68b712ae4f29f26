use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Server error: {status} from {url}")]
    ServerError { status: u16, url: String },
    #[error("Unexpected response shape from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid API configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InventoryError>;

/// Which operation boundary a failure was caught at.
///
/// The screen never shows the technical error; each boundary has one generic
/// message and the details go to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Load,
    Save,
    Delete,
}

impl FailureKind {
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureKind::Load => "Error al cargar datos. Verifica tu API o configuración CORS.",
            FailureKind::Save => "No se pudo guardar el producto. Verifica los datos o la API.",
            FailureKind::Delete => "No se pudo eliminar el producto. Inténtalo nuevamente.",
        }
    }

    /// Only a failed load hides the product table.
    pub fn blocks_table(&self) -> bool {
        matches!(self, FailureKind::Load)
    }
}

/// A failure as the controller stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.user_message().to_string(),
        }
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
