//! Handlers for the `/api/Filmes` resource, including the CSV bulk
//! import endpoint.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use locadora_core::importacao;
use locadora_core::types::DbId;
use locadora_db::models::filme::{Filme, FilmeInput};
use locadora_db::repositories::FilmeRepo;

use crate::error::{requisicao_invalida, AppError, AppResult};
use crate::state::AppState;

/// GET /api/Filmes
///
/// An empty table is a 404, not an empty list.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Filme>>> {
    let filmes = FilmeRepo::list(&state.pool).await?;

    if filmes.is_empty() {
        return Err(AppError::not_found("Não há filmes cadastrados"));
    }

    Ok(Json(filmes))
}

/// GET /api/Filmes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Filme>> {
    let filme = FilmeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Não há filme com ID {id} cadastrado no sistema."))
        })?;

    Ok(Json(filme))
}

/// POST /api/Filmes/create
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FilmeInput>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Filme>)> {
    input.validate().map_err(requisicao_invalida)?;

    if FilmeRepo::exists(&state.pool, input.id)
        .await
        .map_err(requisicao_invalida)?
    {
        return Err(AppError::conflict(format!(
            "ID {} já associado a outro filme. Verifique.",
            input.id
        )));
    }

    let filme = FilmeRepo::create(&state.pool, &input)
        .await
        .map_err(requisicao_invalida)?;

    let location = format!("/api/Filmes/{}", filme.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(filme),
    ))
}

/// PUT /api/Filmes/update/{id}
///
/// The row is located by the **body** id; the path id only appears in
/// error messages.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<FilmeInput>,
) -> AppResult<Json<Filme>> {
    input.validate().map_err(requisicao_invalida)?;

    if FilmeRepo::find_by_id(&state.pool, input.id)
        .await
        .map_err(requisicao_invalida)?
        .is_none()
    {
        return Err(AppError::not_found(format!("ID {id} não encontrado.")));
    }

    match FilmeRepo::update(&state.pool, &input)
        .await
        .map_err(requisicao_invalida)?
    {
        Some(filme) => Ok(Json(filme)),
        None => {
            if FilmeRepo::exists(&state.pool, id)
                .await
                .map_err(requisicao_invalida)?
            {
                Err(requisicao_invalida(
                    "o registro foi modificado por outra requisição",
                ))
            } else {
                Err(AppError::not_found(format!(
                    "Filme com ID {id} não cadastrado no sistema."
                )))
            }
        }
    }
}

/// DELETE /api/Filmes/delete/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<String> {
    if !FilmeRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!(
            "ID {id} não existe na base de dados."
        )));
    }

    Ok("Filme excluído com sucesso!".to_string())
}

/// POST /api/Filmes/import
///
/// Multipart upload of a `.csv` file; every extracted row is inserted
/// in one all-or-nothing batch. Rows whose id column is not an integer
/// are skipped (which also drops a header line); any other malformed
/// field or a duplicate id fails the whole import.
pub async fn import(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<String> {
    let field = multipart
        .next_field()
        .await
        .map_err(requisicao_invalida)?
        .ok_or_else(|| requisicao_invalida("nenhum arquivo recebido"))?;

    let nome_arquivo = field.file_name().unwrap_or_default().to_string();
    if !importacao::formato_suportado(&nome_arquivo) {
        return Err(AppError::invalid_request("Formato do arquivo não suportado"));
    }

    let dados = field.bytes().await.map_err(requisicao_invalida)?;

    let filmes = importacao::extrair_filmes(&dados).map_err(requisicao_invalida)?;

    FilmeRepo::create_batch(&state.pool, &filmes)
        .await
        .map_err(requisicao_invalida)?;

    tracing::info!(filmes = filmes.len(), arquivo = %nome_arquivo, "Importação concluída");

    Ok("Arquivo importado com sucesso!".to_string())
}
