//! Route definitions.

pub mod clientes;
pub mod filmes;
pub mod health;
pub mod locacoes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /Clientes                 GET list, POST create (/create)
/// /Clientes/{id}            GET
/// /Clientes/update/{id}     PUT
/// /Clientes/delete/{id}     DELETE
///
/// /Filmes                   same five operations
/// /Filmes/import            POST multipart CSV import
///
/// /Locacoes                 same five operations
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/Clientes", clientes::router())
        .nest("/Filmes", filmes::router())
        .nest("/Locacoes", locacoes::router())
}
