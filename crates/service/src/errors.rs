use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unable to open storage file: {0}")]
    StorageOpen(String),
    #[error("unable to parse storage file: {0}")]
    StorageCorrupt(String),
    #[error("unable to serialize records: {0}")]
    Serialize(String),
    #[error("unable to write storage file: {0}")]
    Write(String),
    #[error("already exists: {0}")]
    AlreadyExists(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }

    pub fn already_exists(entity: &str, id: &str) -> Self {
        Self::AlreadyExists(format!("{} {} already exists", entity, id))
    }
}
