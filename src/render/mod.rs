//! Server-side rendered overview page.

mod page;

pub use page::{render_document, PageModel, RenderUser};

use axum::{extract::State, response::Html, routing::get, Router};
use tracing::{error, instrument};

use crate::state::AppState;

/// Page and size requested for the overview.
pub const OVERVIEW_PAGE: u32 = 1;
pub const OVERVIEW_PAGE_SIZE: u32 = 100;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Always 200: an unreachable backend shows up as a banner inside the page.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let model = match state
        .backend
        .list_users(OVERVIEW_PAGE, OVERVIEW_PAGE_SIZE)
        .await
    {
        Ok(page) => PageModel {
            users: page.users.into_iter().map(RenderUser::from).collect(),
            total_count: page.total_count,
            error: None,
        },
        Err(e) => {
            error!(error = %e, "failed to fetch users for overview");
            PageModel {
                users: Vec::new(),
                total_count: 0,
                error: Some(state.config.unavailable_message()),
            }
        }
    };
    Html(render_document(&model))
}
