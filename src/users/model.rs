use serde::{Deserialize, Serialize};

/// User record as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,                      // server-assigned, immutable
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default)]
    pub created_at: i64,              // unix seconds
    #[serde(default)]
    pub updated_at: i64,              // unix seconds
}

impl User {
    /// Builds a record whose timestamps both equal `at`.
    pub fn stamped(id: u64, name: impl Into<String>, email: impl Into<String>, at: i64) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            surname: None,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One page of a user listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub total_count: u64,
}

/// Number of pages needed to show `total_count` items, `page_size` at a time.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size as u64) as u32
}

/// Half-open index range of `page` within a collection of `len` items.
///
/// `page` is 1-indexed; page 0 is read as page 1. The range is clipped to
/// `len`, so a page past the end yields an empty range.
pub fn page_bounds(page: u32, page_size: u32, len: usize) -> std::ops::Range<usize> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
    let end = start.saturating_add(page_size as usize);
    start.min(len)..end.min(len)
}

pub fn now_unix() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}
