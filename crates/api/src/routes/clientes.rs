//! Route definitions for customers.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::clientes;
use crate::state::AppState;

/// Routes mounted at `/api/Clientes`.
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
        .route("/", get(clientes::list))
        .route("/{id}", get(clientes::get_by_id))
        .route("/create", post(clientes::create))
        .route("/update/{id}", put(clientes::update))
        .route("/delete/{id}", delete(clientes::delete))
}
