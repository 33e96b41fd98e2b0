//! Request handlers for the locadora resources.
//!
//! Each submodule provides async handler functions (list, get_by_id,
//! create, update, delete) for a single entity type. Handlers delegate
//! to the corresponding repository in `locadora_db` and map errors via
//! [`AppError`](crate::error::AppError). The movie module additionally
//! carries the CSV import endpoint.

pub mod clientes;
pub mod filmes;
pub mod locacoes;
