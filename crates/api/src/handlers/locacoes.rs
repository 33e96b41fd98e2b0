//! Handlers for the `/api/Locacoes` resource.
//!
//! Rental views embed the referenced customer's name and movie's title,
//! resolved at read time. The due date is derived from the movie's
//! new-release flag once, at creation; updates never recompute it.

use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use locadora_core::locacao::data_devolucao;
use locadora_core::types::DbId;
use locadora_db::models::locacao::{
    Locacao, LocacaoInput, LocacaoView, NewLocacao, UpdateLocacao,
};
use locadora_db::repositories::{ClienteRepo, FilmeRepo, LocacaoRepo};

use crate::error::{requisicao_invalida, AppError, AppResult};
use crate::state::AppState;

/// GET /api/Locacoes
///
/// An empty table is a 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<LocacaoView>>> {
    let locacoes = LocacaoRepo::list(&state.pool).await?;

    if locacoes.is_empty() {
        return Err(AppError::not_found("Não há locações cadastradas"));
    }

    let mut views = Vec::with_capacity(locacoes.len());
    for locacao in locacoes {
        views.push(to_view(&state, locacao).await?);
    }

    Ok(Json(views))
}

/// GET /api/Locacoes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LocacaoView>> {
    let locacao = LocacaoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Não há locação com ID {id} cadastrado no sistema."))
        })?;

    Ok(Json(to_view(&state, locacao).await?))
}

/// POST /api/Locacoes/create
///
/// Derives the due date from the referenced movie: new releases rent
/// for 2 days, catalogue titles for 3. There is no duplicate-id
/// pre-check here — a taken id surfaces through the generic failure
/// path, as do references to missing customers.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<LocacaoInput>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Locacao>)> {
    let filme = FilmeRepo::find_by_id(&state.pool, input.id_filme)
        .await
        .map_err(requisicao_invalida)?
        .ok_or_else(|| {
            requisicao_invalida(format!(
                "Não há filme com ID {} cadastrado no sistema.",
                input.id_filme
            ))
        })?;

    let data_locacao = input.data_locacao.unwrap_or_else(Utc::now);
    let nova = NewLocacao {
        id: input.id,
        id_cliente: input.id_cliente,
        id_filme: input.id_filme,
        data_locacao,
        data_devolucao: data_devolucao(data_locacao, filme.lancamento),
    };

    let locacao = LocacaoRepo::create(&state.pool, &nova)
        .await
        .map_err(requisicao_invalida)?;

    let location = format!("/api/Locacoes/{}", locacao.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(locacao),
    ))
}

/// PUT /api/Locacoes/update/{id}
///
/// The row is located by the **body** id; the path id only appears in
/// error messages. References are overwritten unconditionally; a
/// missing rental date falls back to the server clock; a missing due
/// date leaves the stored one alone.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<LocacaoInput>,
) -> AppResult<Json<Locacao>> {
    if LocacaoRepo::find_by_id(&state.pool, input.id)
        .await
        .map_err(requisicao_invalida)?
        .is_none()
    {
        return Err(AppError::not_found(format!(
            "Nenhuma locação encontrada com o ID {id}"
        )));
    }

    let alteracao = UpdateLocacao {
        id_cliente: input.id_cliente,
        id_filme: input.id_filme,
        data_locacao: input.data_locacao.unwrap_or_else(Utc::now),
        data_devolucao: input.data_devolucao,
    };

    match LocacaoRepo::update(&state.pool, input.id, &alteracao)
        .await
        .map_err(requisicao_invalida)?
    {
        Some(locacao) => Ok(Json(locacao)),
        None => {
            if LocacaoRepo::exists(&state.pool, id)
                .await
                .map_err(requisicao_invalida)?
            {
                Err(requisicao_invalida(
                    "o registro foi modificado por outra requisição",
                ))
            } else {
                Err(AppError::not_found(format!(
                    "Locação com ID {id} não cadastrado no sistema."
                )))
            }
        }
    }
}

/// DELETE /api/Locacoes/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    if !LocacaoRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!(
            "O ID de locação {id} não registrado no sistema."
        )));
    }

    Ok("Locação excluída com sucesso!".to_string())
}

/// Resolve the referenced customer and movie names for a stored rental.
///
/// A dangling reference is a broken invariant (deletes are blocked by
/// foreign keys) and reports as a server fault, not a client error.
async fn to_view(state: &AppState, locacao: Locacao) -> Result<LocacaoView, AppError> {
    let cliente = ClienteRepo::find_by_id(&state.pool, locacao.id_cliente)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!(
                "locação {} referencia cliente {} inexistente",
                locacao.id, locacao.id_cliente
            ))
        })?;

    let filme = FilmeRepo::find_by_id(&state.pool, locacao.id_filme)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!(
                "locação {} referencia filme {} inexistente",
                locacao.id, locacao.id_filme
            ))
        })?;

    Ok(LocacaoView {
        id: locacao.id,
        data_locacao: locacao.data_locacao,
        data_devolucao: locacao.data_devolucao,
        id_cliente: cliente.id,
        nome_cliente: cliente.nome,
        id_filme: filme.id,
        titulo_filme: filme.titulo,
    })
}
