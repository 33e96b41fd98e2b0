//! Route definitions for rentals.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::locacoes;
use crate::state::AppState;

/// Routes mounted at `/api/Locacoes`.
///
/// ```text
/// GET    /              -> list
/// GET    /{id}          -> get_by_id
/// POST   /create        -> create
/// PUT    /update/{id}   -> update
/// DELETE /delete/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(locacoes::list))
        .route("/{id}", get(locacoes::get_by_id))
        .route("/create", post(locacoes::create))
        .route("/update/{id}", put(locacoes::update))
        .route("/delete/{id}", delete(locacoes::delete))
}
