// src/handlers/cargos.rs

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{RequireCargo, Secretaria},
    models::cargo::{Cargo, CriarCargoPayload, VinculoPayload},
};

// GET /cargos
#[utoipa::path(
    get,
    path = "/cargos",
    tag = "Cargos",
    responses((status = 200, body = [Cargo])),
    security(("api_jwt" = []))
)]
pub async fn listar(State(app_state): State<AppState>) -> Result<Json<Vec<Cargo>>, AppError> {
    let cargos = app_state.cargo_repo.listar().await?;
    Ok(Json(cargos))
}

// POST /cargos
#[utoipa::path(
    post,
    path = "/cargos",
    tag = "Cargos",
    request_body = CriarCargoPayload,
    responses((status = 201, body = Cargo)),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<CriarCargoPayload>,
) -> Result<(StatusCode, Json<Cargo>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let cargo = app_state.cargo_repo.criar(&payload).await?;
    Ok((StatusCode::CREATED, Json(cargo)))
}

// POST /cargos/vincular — o novo cargo só entra no token no próximo login
#[utoipa::path(
    post,
    path = "/cargos/vincular",
    tag = "Cargos",
    request_body = VinculoPayload,
    responses((status = 204, description = "Vínculo criado (idempotente)")),
    security(("api_jwt" = []))
)]
pub async fn vincular(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<VinculoPayload>,
) -> Result<StatusCode, AppError> {
    app_state
        .cargo_repo
        .vincular(payload.membro_id, payload.cargo_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// POST /cargos/desvincular
#[utoipa::path(
    post,
    path = "/cargos/desvincular",
    tag = "Cargos",
    request_body = VinculoPayload,
    responses(
        (status = 204, description = "Vínculo removido"),
        (status = 404, description = "Vínculo não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn desvincular(
    State(app_state): State<AppState>,
    _secretaria: RequireCargo<Secretaria>,
    Json(payload): Json<VinculoPayload>,
) -> Result<StatusCode, AppError> {
    let removido = app_state
        .cargo_repo
        .desvincular(payload.membro_id, payload.cargo_id)
        .await?;

    if !removido {
        return Err(AppError::NaoEncontrado("Vínculo"));
    }
    Ok(StatusCode::NO_CONTENT)
}
