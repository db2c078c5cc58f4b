// src/handlers/escalas.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireCargo, Secretaria},
    models::escala::{AtualizarEscalaPayload, CriarEscalaPayload, Escala, FiltroEscalas},
};

// GET /escalas
#[utoipa::path(
    get,
    path = "/escalas",
    tag = "Escalas",
    params(FiltroEscalas),
    responses((status = 200, body = [Escala])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroEscalas>,
) -> Result<Json<Vec<Escala>>, AppError> {
    let escalas = app_state.escala_repo.listar(&filtro).await?;
    Ok(Json(escalas))
}

// POST /escalas
#[utoipa::path(
    post,
    path = "/escalas",
    tag = "Escalas",
    request_body = CriarEscalaPayload,
    responses((status = 201, body = Escala)),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<CriarEscalaPayload>,
) -> Result<(StatusCode, Json<Escala>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let escala = app_state.escala_repo.criar(&payload).await?;
    Ok((StatusCode::CREATED, Json(escala)))
}

// PUT /escalas/{id}
#[utoipa::path(
    put,
    path = "/escalas/{id}",
    tag = "Escalas",
    request_body = AtualizarEscalaPayload,
    responses(
        (status = 200, body = Escala),
        (status = 404, description = "Escala não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarEscalaPayload>,
) -> Result<Json<Escala>, AppError> {
    let escala = app_state
        .escala_repo
        .atualizar(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Escala"))?;
    Ok(Json(escala))
}

// DELETE /escalas/{id}
#[utoipa::path(
    delete,
    path = "/escalas/{id}",
    tag = "Escalas",
    responses(
        (status = 204, description = "Escala removida"),
        (status = 404, description = "Escala não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !app_state.escala_repo.excluir(id).await? {
        return Err(AppError::NaoEncontrado("Escala"));
    }
    Ok(StatusCode::NO_CONTENT)
}
