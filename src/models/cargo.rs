// src/models/cargo.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// Cargo eclesiástico (Tesoureiro, Secretario, Diacono...). O vínculo
// membro <-> cargo é feito pelas operações vincular/desvincular.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cargo {
    pub id: Uuid,

    #[schema(example = "Tesoureiro")]
    pub nome: String,

    #[schema(example = "Responsável pela tesouraria")]
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarCargoPayload {
    #[validate(length(min = 1, message = "O nome do cargo é obrigatório."))]
    pub nome: String,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VinculoPayload {
    pub membro_id: Uuid,
    pub cargo_id: Uuid,
}
