use super::Loadable;
use crate::client::UserServiceClient;
use crate::users::model::User;
use crate::users::validation::parse_user_id;

/// Single-user lookup panel.
#[derive(Debug)]
pub struct UserDetailsView {
    pub search: String,
    initial_id: Option<u64>,
    state: Loadable<User, String>,
}

impl UserDetailsView {
    /// Opens on a user already in hand.
    pub fn with_user(user: User) -> Self {
        Self {
            search: user.id.to_string(),
            initial_id: None,
            state: Loadable::Loaded(user),
        }
    }

    /// Opens on an id that is fetched by the first [`sync`](Self::sync).
    pub fn with_id(id: u64) -> Self {
        Self {
            search: id.to_string(),
            initial_id: Some(id),
            state: Loadable::Idle,
        }
    }

    pub fn empty() -> Self {
        Self {
            search: String::new(),
            initial_id: None,
            state: Loadable::Idle,
        }
    }

    pub fn state(&self) -> &Loadable<User, String> {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.value()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error().map(String::as_str)
    }

    pub async fn sync(&mut self, client: &UserServiceClient) {
        if let Some(id) = self.initial_id.take() {
            self.load(client, id).await;
        }
    }

    /// Runs the search box. Bad input never reaches the client.
    pub async fn search(&mut self, client: &UserServiceClient) {
        match parse_user_id(&self.search) {
            Ok(id) => self.load(client, id).await,
            Err(e) => self.state = Loadable::Failed(e.to_string()),
        }
    }

    pub async fn refresh(&mut self, client: &UserServiceClient) {
        if let Some(id) = self.user().map(|u| u.id) {
            self.load(client, id).await;
        }
    }

    pub async fn load(&mut self, client: &UserServiceClient, id: u64) {
        self.state.start();
        self.state = match client.get_user(id).await.into_inner() {
            Some(user) => Loadable::Loaded(user),
            None => Loadable::Failed(format!("User with ID {id} not found")),
        };
    }
}

#[cfg(test)]
mod details_tests {
    use super::*;
    use crate::backend::{BackendError, InMemoryBackend, UserBackend};
    use crate::users::model::{NewUser, UserPage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct Counting(AtomicUsize);

    #[async_trait]
    impl UserBackend for Counting {
        async fn list_users(&self, _p: u32, _s: u32) -> Result<UserPage, BackendError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(UserPage::default())
        }
        async fn get_user(&self, _id: u64) -> Result<Option<User>, BackendError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }
        async fn create_user(&self, _r: &NewUser) -> Result<User, BackendError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(BackendError::Unreachable("n/a".into()))
        }
    }

    #[tokio::test]
    async fn malformed_search_makes_no_call() {
        let backend = Arc::new(Counting::default());
        let client = UserServiceClient::new(backend.clone());
        let mut view = UserDetailsView::empty();
        for input in ["", "abc", "0", "-5"] {
            view.search = input.into();
            view.search(&client).await;
            assert_eq!(view.error(), Some("Please enter a valid user ID"));
        }
        assert_eq!(backend.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_user_reports_not_found() {
        let client = UserServiceClient::new(Arc::new(Counting::default()));
        let mut view = UserDetailsView::empty();
        view.search = "12".into();
        view.search(&client).await;
        assert_eq!(view.error(), Some("User with ID 12 not found"));
        assert!(view.user().is_none());
    }

    #[tokio::test]
    async fn initial_id_is_loaded_once() {
        let client = UserServiceClient::new(Arc::new(InMemoryBackend::new()));
        let mut view = UserDetailsView::with_id(2);
        assert_eq!(view.state(), &Loadable::Idle);
        view.sync(&client).await;
        assert_eq!(view.user().map(|u| u.name.as_str()), Some("Jane Smith"));
    }

    #[tokio::test]
    async fn preselected_user_needs_no_fetch() {
        let backend = Arc::new(Counting::default());
        let client = UserServiceClient::new(backend.clone());
        let mut view = UserDetailsView::with_user(User::stamped(5, "Eve", "eve@example.com", 1));
        view.sync(&client).await;
        assert_eq!(view.user().map(|u| u.id), Some(5));
        assert_eq!(backend.0.load(Ordering::SeqCst), 0);

        view.refresh(&client).await;
        assert_eq!(backend.0.load(Ordering::SeqCst), 1);
        assert_eq!(view.error(), Some("User with ID 5 not found"));
    }
}
