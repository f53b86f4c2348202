//! Transport to the service that actually stores users.

mod http;
mod memory;

pub use http::HttpBackend;
pub use memory::InMemoryBackend;

use async_trait::async_trait;
use thiserror::Error;

use crate::users::model::{NewUser, User, UserPage};

/// Failure talking to the user backend.
///
/// A missing user is not an error: `get_user` answers `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("user with email {0} already exists")]
    AlreadyExists(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to decode backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Whether the backend answered with a well-formed status but an unreadable body.
    pub fn is_decode(&self) -> bool {
        matches!(self, BackendError::Decode(_))
    }
}

/// The three user RPCs.
#[async_trait]
pub trait UserBackend: Send + Sync {
    async fn list_users(&self, page: u32, page_size: u32) -> Result<UserPage, BackendError>;
    async fn get_user(&self, id: u64) -> Result<Option<User>, BackendError>;
    async fn create_user(&self, req: &NewUser) -> Result<User, BackendError>;
}
