// src/handlers/financeiro.rs
//
// Famílias de rotas por caixa: /entradas[/missoes|/projetos] e as
// /saidas espelhadas. O par (caixa, movimento) vem da rota; o corpo só
// traz tipo, valor, data, descrição e membro. O `tipo` é validado contra
// o vocabulário fixo antes de tocar o banco.

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
    domain::vocabulario,
    middleware::rbac::{RequireCargo, Tesouraria},
    models::financeiro::{
        AtualizarMovimentoPayload, Caixa, CriarMovimentoPayload, FiltroMovimentos, Movimento,
        TipoMovimento,
    },
};

fn validar_tipo(caixa: Caixa, sentido: TipoMovimento, tipo: &str) -> Result<(), AppError> {
    if !vocabulario::tipo_permitido(caixa, sentido, tipo) {
        return Err(AppError::TipoForaDoVocabulario {
            tipo: tipo.to_string(),
            caixa: caixa.rotulo(),
            movimento: sentido.rotulo(),
            permitidos: vocabulario::tipos_permitidos(caixa, sentido),
        });
    }
    Ok(())
}

async fn criar(
    app_state: AppState,
    caixa: Caixa,
    sentido: TipoMovimento,
    payload: CriarMovimentoPayload,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    validar_tipo(caixa, sentido, &payload.tipo)?;

    let movimento = app_state.financeiro_repo.criar(caixa, sentido, &payload).await?;
    Ok((StatusCode::CREATED, Json(movimento)))
}

async fn atualizar(
    app_state: AppState,
    id: Uuid,
    caixa: Caixa,
    sentido: TipoMovimento,
    payload: AtualizarMovimentoPayload,
) -> Result<Json<Movimento>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    if let Some(tipo) = &payload.tipo {
        validar_tipo(caixa, sentido, tipo)?;
    }

    let movimento = app_state
        .financeiro_repo
        .atualizar(id, caixa, sentido, &payload)
        .await?
        .ok_or(AppError::NaoEncontrado("Movimento"))?;
    Ok(Json(movimento))
}

async fn excluir(
    app_state: AppState,
    id: Uuid,
    caixa: Caixa,
    sentido: TipoMovimento,
) -> Result<StatusCode, AppError> {
    if !app_state.financeiro_repo.excluir(id, caixa, sentido).await? {
        return Err(AppError::NaoEncontrado("Movimento"));
    }
    Ok(StatusCode::NO_CONTENT)
}

// GET /filtrar/geral — listagem plana com filtros e paginação skip/limit
#[utoipa::path(
    get,
    path = "/filtrar/geral",
    tag = "Financeiro",
    params(FiltroMovimentos),
    responses((status = 200, body = [Movimento])),
    security(("api_jwt" = []))
)]
pub async fn filtrar_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Query(filtro): Query<FiltroMovimentos>,
) -> Result<Json<Vec<Movimento>>, AppError> {
    let movimentos = app_state.financeiro_repo.filtrar(&filtro).await?;
    Ok(Json(movimentos))
}

// =========================================================================
//  ENTRADAS
// =========================================================================

// POST /entradas
#[utoipa::path(
    post,
    path = "/entradas",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses(
        (status = 201, body = Movimento),
        (status = 422, description = "Tipo fora do vocabulário do caixa geral")
    ),
    security(("api_jwt" = []))
)]
pub async fn criar_entrada_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Financeiro, TipoMovimento::Entrada, payload).await
}

// PUT /entradas/{id}
#[utoipa::path(
    put,
    path = "/entradas/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento), (status = 404, description = "Movimento não encontrado")),
    security(("api_jwt" = []))
)]
pub async fn atualizar_entrada_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Financeiro, TipoMovimento::Entrada, payload).await
}

// DELETE /entradas/{id}
#[utoipa::path(
    delete,
    path = "/entradas/{id}",
    tag = "Financeiro",
    responses((status = 204), (status = 404, description = "Movimento não encontrado")),
    security(("api_jwt" = []))
)]
pub async fn excluir_entrada_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Financeiro, TipoMovimento::Entrada).await
}

// POST /entradas/missoes
#[utoipa::path(
    post,
    path = "/entradas/missoes",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses((status = 201, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn criar_entrada_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Missionario, TipoMovimento::Entrada, payload).await
}

// PUT /entradas/missoes/{id}
#[utoipa::path(
    put,
    path = "/entradas/missoes/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_entrada_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Missionario, TipoMovimento::Entrada, payload).await
}

// DELETE /entradas/missoes/{id}
#[utoipa::path(
    delete,
    path = "/entradas/missoes/{id}",
    tag = "Financeiro",
    responses((status = 204)),
    security(("api_jwt" = []))
)]
pub async fn excluir_entrada_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Missionario, TipoMovimento::Entrada).await
}

// POST /entradas/projetos
#[utoipa::path(
    post,
    path = "/entradas/projetos",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses((status = 201, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn criar_entrada_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Projetos, TipoMovimento::Entrada, payload).await
}

// PUT /entradas/projetos/{id}
#[utoipa::path(
    put,
    path = "/entradas/projetos/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_entrada_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Projetos, TipoMovimento::Entrada, payload).await
}

// DELETE /entradas/projetos/{id}
#[utoipa::path(
    delete,
    path = "/entradas/projetos/{id}",
    tag = "Financeiro",
    responses((status = 204)),
    security(("api_jwt" = []))
)]
pub async fn excluir_entrada_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Projetos, TipoMovimento::Entrada).await
}

// =========================================================================
//  SAÍDAS (espelham as entradas)
// =========================================================================

// POST /saidas
#[utoipa::path(
    post,
    path = "/saidas",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses((status = 201, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn criar_saida_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Financeiro, TipoMovimento::Saida, payload).await
}

// PUT /saidas/{id}
#[utoipa::path(
    put,
    path = "/saidas/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_saida_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Financeiro, TipoMovimento::Saida, payload).await
}

// DELETE /saidas/{id}
#[utoipa::path(
    delete,
    path = "/saidas/{id}",
    tag = "Financeiro",
    responses((status = 204)),
    security(("api_jwt" = []))
)]
pub async fn excluir_saida_geral(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Financeiro, TipoMovimento::Saida).await
}

// POST /saidas/missoes
#[utoipa::path(
    post,
    path = "/saidas/missoes",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses((status = 201, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn criar_saida_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Missionario, TipoMovimento::Saida, payload).await
}

// PUT /saidas/missoes/{id}
#[utoipa::path(
    put,
    path = "/saidas/missoes/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_saida_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Missionario, TipoMovimento::Saida, payload).await
}

// DELETE /saidas/missoes/{id}
#[utoipa::path(
    delete,
    path = "/saidas/missoes/{id}",
    tag = "Financeiro",
    responses((status = 204)),
    security(("api_jwt" = []))
)]
pub async fn excluir_saida_missoes(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Missionario, TipoMovimento::Saida).await
}

// POST /saidas/projetos
#[utoipa::path(
    post,
    path = "/saidas/projetos",
    tag = "Financeiro",
    request_body = CriarMovimentoPayload,
    responses((status = 201, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn criar_saida_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Json(payload): Json<CriarMovimentoPayload>,
) -> Result<(StatusCode, Json<Movimento>), AppError> {
    criar(app_state, Caixa::Projetos, TipoMovimento::Saida, payload).await
}

// PUT /saidas/projetos/{id}
#[utoipa::path(
    put,
    path = "/saidas/projetos/{id}",
    tag = "Financeiro",
    request_body = AtualizarMovimentoPayload,
    responses((status = 200, body = Movimento)),
    security(("api_jwt" = []))
)]
pub async fn atualizar_saida_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AtualizarMovimentoPayload>,
) -> Result<Json<Movimento>, AppError> {
    atualizar(app_state, id, Caixa::Projetos, TipoMovimento::Saida, payload).await
}

// DELETE /saidas/projetos/{id}
#[utoipa::path(
    delete,
    path = "/saidas/projetos/{id}",
    tag = "Financeiro",
    responses((status = 204)),
    security(("api_jwt" = []))
)]
pub async fn excluir_saida_projetos(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    excluir(app_state, id, Caixa::Projetos, TipoMovimento::Saida).await
}
