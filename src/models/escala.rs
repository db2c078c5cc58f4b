// src/models/escala.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// Um membro escalado para uma função em um culto/horário.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Escala {
    pub id: Uuid,
    pub membro_id: Uuid,

    #[schema(example = "Som")]
    pub tipo_escala: String,

    pub data_hora: DateTime<Utc>,

    // false = escalação desfeita, mantida no histórico
    pub ativo: bool,

    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarEscalaPayload {
    pub membro_id: Uuid,

    #[validate(length(min = 1, message = "O tipo da escala é obrigatório."))]
    pub tipo_escala: String,

    pub data_hora: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AtualizarEscalaPayload {
    pub membro_id: Option<Uuid>,
    pub tipo_escala: Option<String>,
    pub data_hora: Option<DateTime<Utc>>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltroEscalas {
    pub membro_id: Option<Uuid>,
    pub ativo: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
