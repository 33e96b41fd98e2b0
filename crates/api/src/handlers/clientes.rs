//! Handlers for the `/api/Clientes` resource.

use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use locadora_core::types::DbId;
use locadora_db::models::cliente::{Cliente, ClienteInput};
use locadora_db::repositories::ClienteRepo;

use crate::error::{requisicao_invalida, AppError, AppResult};
use crate::state::AppState;

/// GET /api/Clientes
///
/// An empty table is a 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Cliente>>> {
    let clientes = ClienteRepo::list(&state.pool).await?;

    if clientes.is_empty() {
        return Err(AppError::not_found("Não há clientes cadastrados"));
    }

    Ok(Json(clientes))
}

/// GET /api/Clientes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Cliente>> {
    let cliente = ClienteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Não há cliente com ID {id} cadastrado no sistema."))
        })?;

    Ok(Json(cliente))
}

/// POST /api/Clientes/create
///
/// The id is caller-assigned; a taken id is rejected before the insert
/// so the existing row is never touched.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ClienteInput>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Cliente>)> {
    input.validate().map_err(requisicao_invalida)?;

    if ClienteRepo::exists(&state.pool, input.id)
        .await
        .map_err(requisicao_invalida)?
    {
        return Err(AppError::conflict(format!(
            "ID {} já associado a outro cliente. Verifique.",
            input.id
        )));
    }

    let cliente = ClienteRepo::create(&state.pool, &input)
        .await
        .map_err(requisicao_invalida)?;

    let location = format!("/api/Clientes/{}", cliente.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(cliente),
    ))
}

/// PUT /api/Clientes/update/{id}
///
/// The row is located by the **body** id; the path id only appears in
/// error messages. A row that vanishes between the read and the write
/// is re-checked and reported as not-found or a generic failure.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ClienteInput>,
) -> AppResult<Json<Cliente>> {
    input.validate().map_err(requisicao_invalida)?;

    if ClienteRepo::find_by_id(&state.pool, input.id)
        .await
        .map_err(requisicao_invalida)?
        .is_none()
    {
        return Err(AppError::not_found(format!("ID {id} não encontrado.")));
    }

    match ClienteRepo::update(&state.pool, &input)
        .await
        .map_err(requisicao_invalida)?
    {
        Some(cliente) => Ok(Json(cliente)),
        None => {
            if ClienteRepo::exists(&state.pool, id)
                .await
                .map_err(requisicao_invalida)?
            {
                Err(requisicao_invalida(
                    "o registro foi modificado por outra requisição",
                ))
            } else {
                Err(AppError::not_found(format!(
                    "Cliente com ID {id} não cadastrado no sistema."
                )))
            }
        }
    }
}

/// DELETE /api/Clientes/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    if !ClienteRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!(
            "O ID de cliente {id} não registrado no sistema."
        )));
    }

    Ok("Cliente excluído com sucesso!".to_string())
}
