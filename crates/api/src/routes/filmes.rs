//! Route definitions for movies.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::filmes;
use crate::state::AppState;

/// Routes mounted at `/api/Filmes`.
///
/// ```text
/// GET    /              -> list
/// GET    /{id}          -> get_by_id
/// POST   /create        -> create
/// PUT    /update/{id}   -> update
/// DELETE /delete/{id}   -> delete
/// POST   /import        -> import (multipart CSV)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(filmes::list))
        .route("/{id}", get(filmes::get_by_id))
        .route("/create", post(filmes::create))
        .route("/update/{id}", put(filmes::update))
        .route("/delete/{id}", delete(filmes::delete))
        .route("/import", post(filmes::import))
}
