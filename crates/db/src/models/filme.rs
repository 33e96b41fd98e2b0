//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use locadora_core::types::DbId;

/// A row from the `filme` table. Also the wire projection.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filme {
    pub id: DbId,
    pub titulo: String,
    pub classificacao_indicativa: i32,
    /// New releases rent for a shorter window; consulted once, at
    /// rental creation.
    pub lancamento: bool,
}

/// Wire payload for create and update. The id travels in the body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilmeInput {
    pub id: DbId,
    #[validate(length(max = 100, message = "titulo deve ter no máximo 100 caracteres"))]
    pub titulo: String,
    pub classificacao_indicativa: i32,
    pub lancamento: bool,
}
