// src/models/evento.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Evento {
    pub id: Uuid,

    #[schema(example = "Conferência de Missões")]
    pub titulo: String,

    pub descricao: Option<String>,

    pub inicio: DateTime<Utc>,
    pub fim: Option<DateTime<Utc>>,

    pub ativo: bool,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarEventoPayload {
    #[validate(length(min = 1, message = "O título é obrigatório."))]
    pub titulo: String,

    pub descricao: Option<String>,
    pub inicio: DateTime<Utc>,
    pub fim: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizarEventoPayload {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub inicio: Option<DateTime<Utc>>,
    pub fim: Option<DateTime<Utc>>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltroEventos {
    pub ativo: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
