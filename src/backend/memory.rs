use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::{BackendError, UserBackend};
use crate::users::model::{now_unix, page_bounds, NewUser, User, UserPage};

const SEED_TIMESTAMP: i64 = 1_640_995_200; // 2022-01-01
const DEFAULT_PAGE_SIZE: u32 = 10;

struct Store {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

/// In-process stand-in for the user service.
pub struct InMemoryBackend {
    store: RwLock<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::with_users(vec![
            User::stamped(1, "John Doe", "john@example.com", SEED_TIMESTAMP),
            User::stamped(2, "Jane Smith", "jane@example.com", SEED_TIMESTAMP),
        ])
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let users = users.into_iter().map(|u| (u.id, u)).collect();
        Self {
            store: RwLock::new(Store { users, next_id }),
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserBackend for InMemoryBackend {
    async fn list_users(&self, page: u32, page_size: u32) -> Result<UserPage, BackendError> {
        let page = page.max(1);
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };

        let store = self.store.read().await;
        let all: Vec<&User> = store.users.values().collect();
        let users = all[page_bounds(page, page_size, all.len())]
            .iter()
            .map(|u| (*u).clone())
            .collect();
        Ok(UserPage {
            users,
            total_count: all.len() as u64,
        })
    }

    async fn get_user(&self, id: u64) -> Result<Option<User>, BackendError> {
        Ok(self.store.read().await.users.get(&id).cloned())
    }

    async fn create_user(&self, req: &NewUser) -> Result<User, BackendError> {
        let mut store = self.store.write().await;
        if store.users.values().any(|u| u.email == req.email) {
            return Err(BackendError::AlreadyExists(req.email.clone()));
        }
        let user = User::stamped(store.next_id, &req.name, &req.email, now_unix());
        store.users.insert(user.id, user.clone());
        store.next_id += 1;
        info!(user_id = user.id, email = %user.email, "user created");
        Ok(user)
    }
}
