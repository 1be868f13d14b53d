use crate::domain::common::entities::app_errors::CoreError;

/// Key/value storage for the serialized state document.
#[cfg_attr(test, mockall::automock)]
pub trait StatePersistence: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError>;
}
