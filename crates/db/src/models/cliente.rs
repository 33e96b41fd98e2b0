//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use locadora_core::types::{DbId, Timestamp};

/// A row from the `cliente` table. Also the wire projection — the two
/// shapes are field-identical for customers.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    pub id: DbId,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: Timestamp,
}

/// Wire payload for create and update. The id travels in the body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClienteInput {
    pub id: DbId,
    #[validate(length(max = 200, message = "nome deve ter no máximo 200 caracteres"))]
    pub nome: String,
    #[validate(length(max = 11, message = "cpf deve ter no máximo 11 caracteres"))]
    pub cpf: String,
    pub data_nascimento: Timestamp,
}
