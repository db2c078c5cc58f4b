// src/handlers/patrimonio.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    domain::depreciacao::{self, Depreciacao},
    middleware::rbac::{RequireCargo, Tesouraria},
    models::patrimonio::{
        AtualizarPatrimonioPayload, CriarPatrimonioPayload, FiltroPatrimonio,
        ParametrosDepreciacao, Patrimonio,
    },
};

// GET /patrimonio
#[utoipa::path(
    get,
    path = "/patrimonio",
    tag = "Patrimônio",
    params(FiltroPatrimonio),
    responses((status = 200, body = [Patrimonio])),
    security(("api_jwt" = []))
)]
pub async fn listar(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Query(filtro): Query<FiltroPatrimonio>,
) -> Result<Json<Vec<Patrimonio>>, AppError> {
    let itens = app_state.patrimonio_repo.listar(&filtro).await?;
    Ok(Json(itens))
}

// POST /patrimonio
#[utoipa::path(
    post,
    path = "/patrimonio",
    tag = "Patrimônio",
    request_body = CriarPatrimonioPayload,
    responses((status = 201, body = Patrimonio)),
    security(("api_jwt" = []))
)]
pub async fn criar(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarPatrimonioPayload>,
) -> Result<(StatusCode, Json<Patrimonio>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state.patrimonio_repo.criar(&payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /patrimonio/{id}
#[utoipa::path(
    put,
    path = "/patrimonio/{id}",
    tag = "Patrimônio",
    request_body = AtualizarPatrimonioPayload,
    responses(
        (status = 200, body = Patrimonio),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn atualizar(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarPatrimonioPayload>,
) -> Result<Json<Patrimonio>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let item = app_state
        .patrimonio_repo
        .atualizar(id, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Item de patrimônio"))?;
    Ok(Json(item))
}

// DELETE /patrimonio/{id}
#[utoipa::path(
    delete,
    path = "/patrimonio/{id}",
    tag = "Patrimônio",
    responses(
        (status = 204, description = "Item removido"),
        (status = 404, description = "Item não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn excluir(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !app_state.patrimonio_repo.excluir(id).await? {
        return Err(AppError::NaoEncontrado("Item de patrimônio"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// GET /patrimonio/{id}/depreciacao — simulação sob demanda, nada é
// persistido. Vida útil e valor residual são escolhas de quem consulta.
#[utoipa::path(
    get,
    path = "/patrimonio/{id}/depreciacao",
    tag = "Patrimônio",
    params(ParametrosDepreciacao),
    responses(
        (status = 200, description = "Depreciação linear calculada na data de hoje", body = Depreciacao),
        (status = 404, description = "Item não encontrado"),
        (status = 422, description = "Vida útil ou valor residual inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn calcular_depreciacao(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Query(params): Query<ParametrosDepreciacao>,
) -> Result<Json<Depreciacao>, AppError> {
    let item = app_state
        .patrimonio_repo
        .buscar_por_id(id)
        .await?
        .ok_or(AppError::NaoEncontrado("Item de patrimônio"))?;

    let resultado = depreciacao::calcular(
        item.preco_aquisicao,
        item.data_aquisicao,
        params.vida_util_anos,
        params.valor_residual,
        Utc::now().date_naive(),
    )?;

    Ok(Json(resultado))
}
