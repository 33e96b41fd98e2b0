//! Row models and wire DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for the create/update wire bodies (ids
//!   are caller-assigned, so both operations share one shape)

pub mod cliente;
pub mod filme;
pub mod locacao;
