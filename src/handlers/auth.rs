// src/handlers/auth.rs

use axum::{extract::State, Form, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::auth::{LoginPayload, LoginResponse},
};

// POST /auth/login (form-encoded, fluxo "password grant")
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body(content = LoginPayload, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token emitido com o retrato de cargos do membro", body = LoginResponse),
        (status = 401, description = "Usuário ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Form(payload): Form<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    if let Some(grant_type) = &payload.grant_type {
        if grant_type != "password" {
            return Err(AppError::ParametroInvalido(format!(
                "grant_type não suportado: {}",
                grant_type
            )));
        }
    }

    let (access_token, claims) = app_state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    tracing::info!("🔐 Login de {} ({} cargos)", claims.nome, claims.cargos.len());

    // A resposta repete o payload do token: é o mesmo retrato que o
    // cliente obteria decodificando os claims localmente.
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        membro_id: claims.membro_id,
        nome: claims.nome,
        cargos: claims.cargos,
    }))
}
