//! Demo user directory: a server-rendered overview page, a REST proxy over a
//! user backend, and a typed client with headless views that fall back to
//! mock data when the backend is down.

pub mod app;
pub mod backend;
pub mod client;
pub mod config;
pub mod render;
pub mod state;
pub mod users;
pub mod views;

pub use backend::{BackendError, HttpBackend, InMemoryBackend, UserBackend};
pub use client::{MockDataset, Sourced, UserServiceClient};
pub use users::model::{NewUser, User, UserPage};
