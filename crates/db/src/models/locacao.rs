//! Rental entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use locadora_core::types::{DbId, Timestamp};

/// A row from the `locacao` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locacao {
    pub id: DbId,
    pub data_locacao: Timestamp,
    pub data_devolucao: Timestamp,
    pub id_cliente: DbId,
    pub id_filme: DbId,
}

/// Wire payload for create and update. The id travels in the body.
///
/// Dates are optional: a missing rental date falls back to the server
/// clock at write time; a missing due date is computed from the movie
/// flag at creation and left untouched on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocacaoInput {
    pub id: DbId,
    pub id_cliente: DbId,
    pub id_filme: DbId,
    #[serde(default)]
    pub data_locacao: Option<Timestamp>,
    #[serde(default)]
    pub data_devolucao: Option<Timestamp>,
}

/// Resolved values for a rental insert; the due date has already been
/// derived from the referenced movie.
#[derive(Debug, Clone)]
pub struct NewLocacao {
    pub id: DbId,
    pub id_cliente: DbId,
    pub id_filme: DbId,
    pub data_locacao: Timestamp,
    pub data_devolucao: Timestamp,
}

/// Resolved values for a rental update. `data_devolucao` stays `None`
/// when the caller did not supply one, leaving the stored value alone.
#[derive(Debug, Clone)]
pub struct UpdateLocacao {
    pub id_cliente: DbId,
    pub id_filme: DbId,
    pub data_locacao: Timestamp,
    pub data_devolucao: Option<Timestamp>,
}

/// Wire view of a rental: the stored row plus the referenced customer
/// name and movie title, resolved at read time (never stored).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocacaoView {
    pub id: DbId,
    pub data_locacao: Timestamp,
    pub data_devolucao: Timestamp,
    pub id_cliente: DbId,
    pub nome_cliente: String,
    pub id_filme: DbId,
    pub titulo_filme: String,
}
