use super::{CreateUserView, UserDetailsView, UserListView};
use crate::client::UserServiceClient;
use crate::users::model::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    List,
    Create,
    Details,
}

/// Tab container wiring the list, create and details views together.
pub struct Dashboard {
    client: UserServiceClient,
    active: Tab,
    refresh: u64,
    selected: Option<User>,
    pub list: UserListView,
    pub create: CreateUserView,
    pub details: UserDetailsView,
}

impl Dashboard {
    pub fn new(client: UserServiceClient) -> Self {
        Self {
            client,
            active: Tab::List,
            refresh: 0,
            selected: None,
            list: UserListView::new(),
            create: CreateUserView::new(),
            details: UserDetailsView::empty(),
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn refresh_counter(&self) -> u64 {
        self.refresh
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Switches tabs and lets the newly shown view catch up.
    pub async fn open(&mut self, tab: Tab) {
        self.active = tab;
        match tab {
            Tab::List => self.list.sync(&self.client, self.refresh).await,
            Tab::Details => self.details.sync(&self.client).await,
            Tab::Create => {}
        }
    }

    pub fn select_user(&mut self, user: User) {
        self.details = UserDetailsView::with_user(user.clone());
        self.selected = Some(user);
        self.active = Tab::Details;
    }

    /// Selects the row at `index` of the current list page.
    pub fn select_row(&mut self, index: usize) -> bool {
        match self.list.select(index) {
            Some(user) => {
                self.select_user(user);
                true
            }
            None => false,
        }
    }

    pub async fn submit_create(&mut self) -> Option<User> {
        let user = self.create.submit(&self.client).await?;
        self.refresh += 1;
        self.select_user(user.clone());
        Some(user)
    }
}
