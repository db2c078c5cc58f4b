// src/handlers/eventos.rs

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
    models::evento::{AtualizarEventoPayload, CriarEventoPayload, Evento, FiltroEventos},
};

// GET /eventos — alimenta tanto a lista quanto o calendário
#[utoipa::path(
    get,
    path = "/eventos",
    tag = "Eventos",
    params(FiltroEventos),
    responses((status = 200, body = [Evento])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    Query(filtro): Query<FiltroEventos>,
) -> Result<Json<Vec<Evento>>, AppError> {
    let eventos = app_state.evento_repo.listar(&filtro).await?;
    Ok(Json(eventos))
}

// POST /eventos
#[utoipa::path(
    post,
    path = "/eventos",
    tag = "Eventos",
    request_body = CriarEventoPayload,
    responses((status = 201, body = Evento)),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<CriarEventoPayload>,
) -> Result<(StatusCode, Json<Evento>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let evento = app_state.evento_repo.criar(&payload).await?;
    Ok((StatusCode::CREATED, Json(evento)))
}

// PUT /eventos/{id}
#[utoipa::path(
    put,
    path = "/eventos/{id}",
    tag = "Eventos",
    request_body = AtualizarEventoPayload,
    responses(
        (status = 200, body = Evento),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarEventoPayload>,
) -> Result<Json<Evento>, AppError> {
    let evento = app_state
        .evento_repo
        .atualizar(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Evento"))?;
    Ok(Json(evento))
}

// DELETE /eventos/{id}
#[utoipa::path(
    delete,
    path = "/eventos/{id}",
    tag = "Eventos",
    responses(
        (status = 204, description = "Evento removido"),
        (status = 404, description = "Evento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !app_state.evento_repo.excluir(id).await? {
        return Err(AppError::NaoEncontrado("Evento"));
    }
    Ok(StatusCode::NO_CONTENT)
}
