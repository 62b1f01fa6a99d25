use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown image format: {0}")]
    UnknownFormat(String),

    #[error("Invalid page location: {0}")]
    InvalidLocation(String),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
