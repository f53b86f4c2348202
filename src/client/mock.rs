use crate::users::model::{page_bounds, User, UserPage};

/// Fixed substitute dataset served when the backend is unavailable.
///
/// Read-only after construction; records fabricated by a failed create are
/// not added here.
#[derive(Debug, Clone)]
pub struct MockDataset {
    users: Vec<User>,
}

impl MockDataset {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seed() -> Self {
        Self::new(vec![
            User::stamped(1, "John Doe", "john@example.com", 1_640_995_200),
            User::stamped(2, "Jane Smith", "jane@example.com", 1_640_995_200),
            User::stamped(3, "Bob Johnson", "bob@example.com", 1_641_081_600),
        ])
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn page(&self, page: u32, page_size: u32) -> UserPage {
        UserPage {
            users: self.users[page_bounds(page, page_size, self.users.len())].to_vec(),
            total_count: self.users.len() as u64,
        }
    }

    pub fn find(&self, id: u64) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }
}

impl Default for MockDataset {
    fn default() -> Self {
        Self::seed()
    }
}
