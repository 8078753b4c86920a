use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("HTTP {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("Invalid response from {url}: {reason}")]
    InvalidResponse { url: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrudError {
    #[error("No entity with id '{id}'")]
    NotFound { id: String },
}
