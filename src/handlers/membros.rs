// src/handlers/membros.rs

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
    models::membro::{AtualizarMembroPayload, CriarMembroPayload, FiltroMembros, Membro},
};

// GET /membros
#[utoipa::path(
    get,
    path = "/membros",
    tag = "Membros",
    params(FiltroMembros),
    responses((status = 200, body = [Membro])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroMembros>,
) -> Result<Json<Vec<Membro>>, AppError> {
    let membros = app_state.membro_repo.listar(&filtro).await?;
    Ok(Json(membros))
}

// GET /membros/{id}
#[utoipa::path(
    get,
    path = "/membros/{id}",
    tag = "Membros",
    responses(
        (status = 200, body = Membro),
        (status = 404, description = "Membro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn buscar(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Membro>, AppError> {
    let membro = app_state
        .membro_repo
        .buscar_por_id(id)
        .await?
        .ok_or(AppError::NaoEncontrado("Membro"))?;
    Ok(Json(membro))
}

// POST /membros — restrito à secretaria
#[utoipa::path(
    post,
    path = "/membros",
    tag = "Membros",
    request_body = CriarMembroPayload,
    responses((status = 201, body = Membro)),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<CriarMembroPayload>,
) -> Result<(StatusCode, Json<Membro>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let membro = app_state.membro_repo.criar(&payload).await?;
    Ok((StatusCode::CREATED, Json(membro)))
}

// PATCH /membros/{id} — alteração parcial; membros nunca são excluídos
#[utoipa::path(
    patch,
    path = "/membros/{id}",
    tag = "Membros",
    request_body = AtualizarMembroPayload,
    responses(
        (status = 200, body = Membro),
        (status = 404, description = "Membro não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMembroPayload>,
) -> Result<Json<Membro>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let membro = app_state
        .membro_repo
        .atualizar(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Membro"))?;
    Ok(Json(membro))
}
