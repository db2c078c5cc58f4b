// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domain::depreciacao::ErroDepreciacao;

// Tipo de erro único da aplicação, com `thiserror` para melhor ergonomia.
// Toda falha degrada para um JSON {"error": "..."} legível; nenhuma
// derruba o processo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Credenciais inválidas")]
    CredenciaisInvalidas,

    #[error("Token inválido")]
    TokenInvalido,

    #[error("Acesso negado: requer cargo de {0}")]
    AcessoNegado(&'static str),

    #[error("{0} não encontrado")]
    NaoEncontrado(&'static str),

    #[error("Tipo '{tipo}' não permitido para {caixa}/{movimento}")]
    TipoForaDoVocabulario {
        tipo: String,
        caixa: &'static str,
        movimento: &'static str,
        permitidos: &'static [&'static str],
    },

    #[error("Parâmetro inválido: {0}")]
    ParametroInvalido(String),

    #[error(transparent)]
    Depreciacao(#[from] ErroDepreciacao),

    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),

    #[error("Erro de JWT: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Fonte não encontrada: {0}")]
    FonteNaoEncontrada(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::CredenciaisInvalidas => (
                StatusCode::UNAUTHORIZED,
                "Usuário ou senha inválidos.".to_string(),
            ),
            AppError::TokenInvalido => (
                StatusCode::UNAUTHORIZED,
                "Token de autenticação inválido ou ausente.".to_string(),
            ),
            AppError::AcessoNegado(cargo) => (
                StatusCode::FORBIDDEN,
                format!("Você precisa de um cargo de {} para realizar esta ação.", cargo),
            ),
            AppError::NaoEncontrado(recurso) => (
                StatusCode::NOT_FOUND,
                format!("{} não encontrado.", recurso),
            ),

            AppError::TipoForaDoVocabulario { tipo, caixa, movimento, permitidos } => {
                let body = Json(json!({
                    "error": format!(
                        "O tipo '{}' não é permitido para {} / {}.",
                        tipo, caixa, movimento
                    ),
                    "permitidos": permitidos,
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }

            AppError::ParametroInvalido(mensagem) => (StatusCode::BAD_REQUEST, mensagem),

            AppError::Depreciacao(erro) => {
                (StatusCode::UNPROCESSABLE_ENTITY, erro.to_string())
            }

            // Todos os outros erros (DatabaseError, InternalServerError...)
            // viram 500. O `tracing` loga a mensagem detalhada.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
