use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("rank {rank} has weight {weight} but no trading cards")]
    MissingRank { rank: usize, weight: f64 },

    #[error("no rank weights configured")]
    NoRankWeights,

    #[error("rank weights sum to {total}, so rank 0 can be drawn, but it has no trading cards")]
    MissingFallbackRank { total: f64 },

    #[error("only {found} eligible tarot cards, need at least {needed}")]
    InsufficientTarotCards { found: usize, needed: usize },

    #[error("no trading cards of rank {rank} to draw from")]
    EmptyPool { rank: usize },
}

impl DrawError {
    /// Whether the error comes from a catalog that should have been rejected at startup.
    pub fn is_configuration(&self) -> bool {
        match self {
            DrawError::NoRankWeights => true,
            DrawError::MissingRank { .. } => true,
            DrawError::MissingFallbackRank { .. } => true,
            DrawError::InsufficientTarotCards { .. } => true,
            DrawError::EmptyPool { .. } => false,
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DrawError),
}

#[derive(Error, Debug)]
pub enum EdenError {
    #[error("request to eden failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode eden response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("eden returned status {status} for {path}")]
    Status { path: String, status: String },
}

impl EdenError {
    pub fn status(&self) -> Option<&str> {
        match self {
            EdenError::Status { status, .. } => Some(status.as_str()),
            _ => None,
        }
    }
}
