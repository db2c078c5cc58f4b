// src/handlers/relatorios.rs

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::Sessao,
    middleware::rbac::{RequireCargo, Tesouraria},
    models::relatorio::{ParametrosRelatorio, RelatorioFinanceiro, RelatorioResumido},
};

// GET /relatorios/financeiro — itemizado, só para a tesouraria
#[utoipa::path(
    get,
    path = "/relatorios/financeiro",
    tag = "Relatórios",
    params(ParametrosRelatorio),
    responses(
        (status = 200, description = "Fechamento por caixa com movimentos agrupados", body = RelatorioFinanceiro),
        (status = 403, description = "Requer cargo de tesouraria")
    ),
    security(("api_jwt" = []))
)]
pub async fn financeiro(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Query(params): Query<ParametrosRelatorio>,
) -> Result<Json<RelatorioFinanceiro>, AppError> {
    let relatorio = app_state
        .relatorio_service
        .detalhado(params.mes, params.ano)
        .await?;
    Ok(Json(relatorio))
}

// GET /relatorios/financeiro_resumido — sem itemização, qualquer autenticado
#[utoipa::path(
    get,
    path = "/relatorios/financeiro_resumido",
    tag = "Relatórios",
    params(ParametrosRelatorio),
    responses((status = 200, body = RelatorioResumido)),
    security(("api_jwt" = []))
)]
pub async fn financeiro_resumido(
    State(app_state): State<AppState>,
    Sessao(claims): Sessao,
    Query(params): Query<ParametrosRelatorio>,
) -> Result<Json<RelatorioResumido>, AppError> {
    tracing::debug!(
        "Relatório resumido {:02}/{} solicitado por {}",
        params.mes,
        params.ano,
        claims.nome
    );

    let relatorio = app_state
        .relatorio_service
        .resumido(params.mes, params.ano)
        .await?;
    Ok(Json(relatorio))
}

// GET /relatorios/financeiro/pdf — versão paginada para impressão
#[utoipa::path(
    get,
    path = "/relatorios/financeiro/pdf",
    tag = "Relatórios",
    params(ParametrosRelatorio),
    responses((status = 200, description = "PDF do relatório mensal", content_type = "application/pdf")),
    security(("api_jwt" = []))
)]
pub async fn financeiro_pdf(
    State(app_state): State<AppState>,
    _tesouraria: RequireCargo<Tesouraria>,
    Query(params): Query<ParametrosRelatorio>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = app_state
        .relatorio_service
        .pdf(params.mes, params.ano)
        .await?;

    let nome_arquivo = format!(
        "attachment; filename=\"relatorio_{:02}_{}.pdf\"",
        params.mes, params.ano
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, nome_arquivo),
        ],
        bytes,
    ))
}
