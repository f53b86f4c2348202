use tracing::debug;

use super::Loadable;
use crate::client::UserServiceClient;
use crate::users::model::{total_pages, User, UserPage};

pub const LIST_PAGE_SIZE: u32 = 10;

/// What the list should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Error,
    Empty,
    Loaded,
}

/// Paged user list.
#[derive(Debug, Default)]
pub struct UserListView {
    page: u32,
    state: Loadable<UserPage, String>,
    loaded_for: Option<(u32, u64)>,
    refresh_seen: u64,
}

impl UserListView {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> &Loadable<UserPage, String> {
        &self.state
    }

    pub fn status(&self) -> ListStatus {
        match &self.state {
            Loadable::Idle | Loadable::Loading => ListStatus::Loading,
            Loadable::Failed(_) => ListStatus::Error,
            Loadable::Loaded(p) if p.users.is_empty() => ListStatus::Empty,
            Loadable::Loaded(_) => ListStatus::Loaded,
        }
    }

    pub fn users(&self) -> &[User] {
        self.state.value().map(|p| p.users.as_slice()).unwrap_or(&[])
    }

    pub fn total_count(&self) -> u64 {
        self.state.value().map(|p| p.total_count).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count(), LIST_PAGE_SIZE)
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Loads if never loaded, or if the page or the parent's refresh counter moved.
    pub async fn sync(&mut self, client: &UserServiceClient, refresh: u64) {
        self.refresh_seen = refresh;
        if self.loaded_for != Some((self.page, refresh)) {
            self.load(client).await;
        }
    }

    pub async fn load(&mut self, client: &UserServiceClient) {
        self.state.start();
        debug!(page = self.page, "loading user list");
        let page = client.list_users(self.page, LIST_PAGE_SIZE).await.into_inner();
        self.state.finish(Ok(page));
        self.loaded_for = Some((self.page, self.refresh_seen));
    }

    pub async fn refresh(&mut self, client: &UserServiceClient) {
        self.load(client).await;
    }

    pub async fn retry(&mut self, client: &UserServiceClient) {
        self.load(client).await;
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages().max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// The user at `index` on the current page, for the parent's selection handler.
    pub fn select(&self, index: usize) -> Option<User> {
        self.users().get(index).cloned()
    }
}
