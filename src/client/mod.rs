//! Typed user service client with mock fallback.
//!
//! Every call goes to the backend first. When the backend is unreachable or
//! answers with a failure status, the call is served from a fixed
//! [`MockDataset`] instead and the result is tagged [`Sourced::Fallback`].
//! A 404 on get-by-id is a real answer ("no such user") and never falls back.
//! Unreadable response bodies count as backend failures too.

mod mock;

pub use mock::MockDataset;

use std::sync::Arc;

use rand::Rng;
use tracing::warn;

use crate::backend::{BackendError, UserBackend};
use crate::users::model::{now_unix, NewUser, User, UserPage};

/// Range of ids handed to users fabricated while the backend is down.
pub const FABRICATED_ID_RANGE: std::ops::Range<u64> = 100..1100;

/// A value tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    Live(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Sourced::Live(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Live(v) | Sourced::Fallback(v) => v,
        }
    }
}

#[derive(Clone)]
pub struct UserServiceClient {
    backend: Arc<dyn UserBackend>,
    mock: Arc<MockDataset>,
}

impl UserServiceClient {
    pub fn new(backend: Arc<dyn UserBackend>) -> Self {
        Self::with_fixture(backend, MockDataset::seed())
    }

    pub fn with_fixture(backend: Arc<dyn UserBackend>, mock: MockDataset) -> Self {
        Self {
            backend,
            mock: Arc::new(mock),
        }
    }

    pub fn mock(&self) -> &MockDataset {
        &self.mock
    }

    pub async fn list_users(&self, page: u32, page_size: u32) -> Sourced<UserPage> {
        match self.backend.list_users(page, page_size).await {
            Ok(users) => Sourced::Live(users),
            Err(e) => {
                log_fallback(&e, "list_users");
                Sourced::Fallback(self.mock.page(page, page_size))
            }
        }
    }

    pub async fn get_user(&self, id: u64) -> Sourced<Option<User>> {
        match self.backend.get_user(id).await {
            Ok(user) => Sourced::Live(user),
            Err(e) => {
                log_fallback(&e, "get_user");
                Sourced::Fallback(self.mock.find(id))
            }
        }
    }

    pub async fn create_user(&self, req: &NewUser) -> Sourced<User> {
        match self.backend.create_user(req).await {
            Ok(user) => Sourced::Live(user),
            Err(e) => {
                log_fallback(&e, "create_user");
                let id = rand::thread_rng().gen_range(FABRICATED_ID_RANGE);
                Sourced::Fallback(User::stamped(id, &req.name, &req.email, now_unix()))
            }
        }
    }
}

fn log_fallback(err: &BackendError, op: &'static str) {
    if err.is_decode() {
        warn!(op, error = %err, "unreadable backend response, using mock data");
    } else {
        warn!(op, error = %err, "backend unavailable, using mock data");
    }
}
