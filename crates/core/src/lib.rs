//! Domain logic for the locadora API.
//!
//! This crate has no I/O: it holds the shared type aliases, the domain
//! error kinds, the rental due-date rule, and the pure row-extraction
//! logic for the movie CSV import. Persistence lives in `locadora-db`
//! and the HTTP surface in `locadora-api`.

pub mod error;
pub mod importacao;
pub mod locacao;
pub mod types;
