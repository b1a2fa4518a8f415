use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::{
    error::{AppError, OperationResult},
    extract::{AppJson, AppPath},
    models::aviso::{
        CreateAvisoRequest, DeleteAvisoRequest, GetAvisoRequest, GetAvisosRequest,
        UpdateAvisoRequest,
    },
    AppState,
};

const NAO_ENCONTRADO: &str = "Aviso Não Encontrado.";
const SEM_AVISOS: &str = "Sem Avisos.";
pub const ID_INVALIDO_UPDATE: &str = "Dados Inválidos (ID menor ou igual a zero).";

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "mensagem": NAO_ENCONTRADO }))).into_response()
}

fn respond<T: Serialize>(outcome: OperationResult<T>) -> Response {
    match outcome {
        OperationResult::Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        OperationResult::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
        OperationResult::NoContent => StatusCode::NO_CONTENT.into_response(),
        OperationResult::NotFound => not_found(),
    }
}

/// GET /avisos/{id}
pub async fn get_aviso(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let outcome = state.mediator.send(GetAvisoRequest { id }).await?;
    Ok(respond(outcome))
}

/// GET /avisos. An empty list is reported as a message, not as 204.
pub async fn list_avisos(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.mediator.send(GetAvisosRequest).await? {
        OperationResult::NoContent => {
            Ok((StatusCode::OK, Json(json!({ "mensagem": SEM_AVISOS }))).into_response())
        }
        outcome => Ok(respond(outcome)),
    }
}

/// POST /avisos
pub async fn create_aviso(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateAvisoRequest>,
) -> Result<Response, AppError> {
    let outcome = state.mediator.send(body).await?;
    Ok(respond(outcome))
}

/// PUT /avisos/{id}. Only `mensagem` is taken from the body. The id is
/// checked before the body is looked at.
pub async fn update_aviso(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    body: Result<AppJson<UpdateAvisoRequest>, AppError>,
) -> Result<Response, AppError> {
    if id <= 0 {
        return Err(AppError::Validation(ID_INVALIDO_UPDATE.into()));
    }
    let AppJson(mut body) = body?;
    body.id = id;
    let outcome = state.mediator.send(body).await?;
    Ok(respond(outcome))
}

/// DELETE /avisos/{id} (soft delete)
pub async fn delete_aviso(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Response, AppError> {
    let outcome = state.mediator.send(DeleteAvisoRequest { id }).await?;
    Ok(respond(outcome))
}
