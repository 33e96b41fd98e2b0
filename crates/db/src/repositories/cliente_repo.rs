//! Repository for the `cliente` table.

use sqlx::PgPool;

use locadora_core::types::DbId;

use crate::models::cliente::{Cliente, ClienteInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, nome, cpf, data_nascimento";

/// Provides CRUD operations for customers.
pub struct ClienteRepo;

impl ClienteRepo {
    /// Insert a new customer with its caller-assigned id, returning the
    /// created row. A taken id surfaces as a unique-key violation.
    pub async fn create(pool: &PgPool, input: &ClienteInput) -> Result<Cliente, sqlx::Error> {
        let query = format!(
            "INSERT INTO cliente (id, nome, cpf, data_nascimento)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(input.id)
            .bind(&input.nome)
            .bind(&input.cpf)
            .bind(input.data_nascimento)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cliente WHERE id = $1");
        sqlx::query_as::<_, Cliente>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all customers in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Cliente>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cliente ORDER BY id");
        sqlx::query_as::<_, Cliente>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable fields of the customer matching the input's
    /// id. Returns `None` if no such row exists at write time.
    pub async fn update(pool: &PgPool, input: &ClienteInput) -> Result<Option<Cliente>, sqlx::Error> {
        let query = format!(
            "UPDATE cliente SET nome = $2, cpf = $3, data_nascimento = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cliente>(&query)
            .bind(input.id)
            .bind(&input.nome)
            .bind(&input.cpf)
            .bind(input.data_nascimento)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cliente WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a customer with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cliente WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
