//! Repository for the `locacao` table.

use sqlx::PgPool;

use locadora_core::types::DbId;

use crate::models::locacao::{Locacao, NewLocacao, UpdateLocacao};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, data_locacao, data_devolucao, id_cliente, id_filme";

/// Provides CRUD operations for rentals.
pub struct LocacaoRepo;

impl LocacaoRepo {
    /// Insert a new rental with its caller-assigned id and the already
    /// derived due date, returning the created row. Foreign keys reject
    /// references to missing customers or movies.
    pub async fn create(pool: &PgPool, input: &NewLocacao) -> Result<Locacao, sqlx::Error> {
        let query = format!(
            "INSERT INTO locacao (id, data_locacao, data_devolucao, id_cliente, id_filme)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Locacao>(&query)
            .bind(input.id)
            .bind(input.data_locacao)
            .bind(input.data_devolucao)
            .bind(input.id_cliente)
            .bind(input.id_filme)
            .fetch_one(pool)
            .await
    }

    /// Find a rental by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Locacao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locacao WHERE id = $1");
        sqlx::query_as::<_, Locacao>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rentals in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Locacao>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locacao ORDER BY id");
        sqlx::query_as::<_, Locacao>(&query).fetch_all(pool).await
    }

    /// Overwrite the references and rental date; the stored due date is
    /// kept when the update carries none. Returns `None` if no row with
    /// the given `id` exists at write time.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocacao,
    ) -> Result<Option<Locacao>, sqlx::Error> {
        let query = format!(
            "UPDATE locacao SET
                id_cliente = $2,
                id_filme = $3,
                data_locacao = $4,
                data_devolucao = COALESCE($5, data_devolucao)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Locacao>(&query)
            .bind(id)
            .bind(input.id_cliente)
            .bind(input.id_filme)
            .bind(input.data_locacao)
            .bind(input.data_devolucao)
            .fetch_optional(pool)
            .await
    }

    /// Delete a rental by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locacao WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a rental with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM locacao WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
