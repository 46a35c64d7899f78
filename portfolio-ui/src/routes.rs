//! HTTP route handlers for the read-only listing API.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::Deserialize;

use portfolio::core::paging::PAGE_SIZE;
use portfolio::listing::ListingPage;
use portfolio::project::Project;

use crate::state::AppState;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/projects", get(list_projects))
        .route("/projects/{title}", get(get_project))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

/// GET /api/projects?page=N - one page of the listing (default page 1).
async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<ListingPage> {
    let page = query.page.unwrap_or(1);
    Json(ListingPage::build(&state.projects, page, PAGE_SIZE))
}

/// GET /api/projects/:title - a single project by title.
async fn get_project(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Project>, StatusCode> {
    state
        .projects
        .iter()
        .find(|project| project.title == title)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
