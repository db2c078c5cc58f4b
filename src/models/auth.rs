// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Representa um usuário vindo do banco de dados. Todo usuário está
// vinculado a um membro; são os cargos do membro que entram no token.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Usuario {
    pub id: Uuid,
    pub membro_id: Uuid,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Dados de login, no formato form-encoded do fluxo "password grant".
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(length(min = 1, message = "O campo 'username' é obrigatório."))]
    pub username: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,

    #[serde(default)]
    pub grant_type: Option<String>,
}

// Resposta de autenticação: o token mais o payload de claims que o
// cliente usa para montar a sessão local.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,

    #[schema(example = "bearer")]
    pub token_type: String,

    pub membro_id: Uuid,
    pub nome: String,

    #[schema(example = json!(["Tesoureiro", "Diacono"]))]
    pub cargos: Vec<String>,
}

// Estrutura de dados ("claims") dentro do JWT. Os cargos são um retrato
// do momento do login: mudança de cargo só reflete após um novo login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,       // ID do usuário
    pub membro_id: Uuid, // ID do membro vinculado
    pub nome: String,
    pub cargos: Vec<String>,
    pub exp: usize, // Expiration time
    pub iat: usize, // Issued At
}
