//! Headless view components.
//!
//! Each view owns its own load/error state and talks to the backend only
//! through [`UserServiceClient`](crate::client::UserServiceClient).

mod create;
mod dashboard;
mod details;
mod list;
mod loadable;

pub use create::{CreateStatus, CreateUserView};
pub use dashboard::{Dashboard, Tab};
pub use details::UserDetailsView;
pub use list::{ListStatus, UserListView, LIST_PAGE_SIZE};
pub use loadable::Loadable;
