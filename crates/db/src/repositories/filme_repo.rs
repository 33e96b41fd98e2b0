//! Repository for the `filme` table.

use sqlx::PgPool;

use locadora_core::importacao::FilmeImportado;
use locadora_core::types::DbId;

use crate::models::filme::{Filme, FilmeInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, titulo, classificacao_indicativa, lancamento";

/// Provides CRUD operations for movies.
pub struct FilmeRepo;

impl FilmeRepo {
    /// Insert a new movie with its caller-assigned id, returning the
    /// created row. A taken id surfaces as a unique-key violation.
    pub async fn create(pool: &PgPool, input: &FilmeInput) -> Result<Filme, sqlx::Error> {
        let query = format!(
            "INSERT INTO filme (id, titulo, classificacao_indicativa, lancamento)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filme>(&query)
            .bind(input.id)
            .bind(&input.titulo)
            .bind(input.classificacao_indicativa)
            .bind(input.lancamento)
            .fetch_one(pool)
            .await
    }

    /// Insert every imported row in one transaction. Any failure — a
    /// duplicate id included — rolls the whole batch back.
    pub async fn create_batch(
        pool: &PgPool,
        filmes: &[FilmeImportado],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for filme in filmes {
            sqlx::query(
                "INSERT INTO filme (id, titulo, classificacao_indicativa, lancamento)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(filme.id)
            .bind(&filme.titulo)
            .bind(filme.classificacao_indicativa)
            .bind(filme.lancamento)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(filmes.len() as u64)
    }

    /// Find a movie by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Filme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filme WHERE id = $1");
        sqlx::query_as::<_, Filme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Filme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filme ORDER BY id");
        sqlx::query_as::<_, Filme>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable fields of the movie matching the input's
    /// id. Returns `None` if no such row exists at write time.
    pub async fn update(pool: &PgPool, input: &FilmeInput) -> Result<Option<Filme>, sqlx::Error> {
        let query = format!(
            "UPDATE filme SET titulo = $2, classificacao_indicativa = $3, lancamento = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Filme>(&query)
            .bind(input.id)
            .bind(&input.titulo)
            .bind(input.classificacao_indicativa)
            .bind(input.lancamento)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM filme WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a movie with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM filme WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
