// src/models/financeiro.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

// --- Enums (Mapeando o Postgres) ---

/// Os três caixas contábeis da igreja.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "caixa", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Caixa {
    Financeiro,  // Caixa geral
    Missionario, // Missões
    Projetos,    // Nossa Casa
}

impl Caixa {
    pub fn rotulo(&self) -> &'static str {
        match self {
            Caixa::Financeiro => "financeiro",
            Caixa::Missionario => "missionario",
            Caixa::Projetos => "projetos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_movimento", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TipoMovimento {
    Entrada,
    Saida,
}

impl TipoMovimento {
    pub fn rotulo(&self) -> &'static str {
        match self {
            TipoMovimento::Entrada => "entrada",
            TipoMovimento::Saida => "saida",
        }
    }
}

// --- Structs ---

// Uma entrada ou saída de um dos caixas. `caixa`/`movimento` podem faltar
// em registros legados importados; o agregador lida com isso.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movimento {
    pub id: Uuid,

    #[schema(example = "DÍZIMO")]
    pub tipo: String,

    #[schema(example = "150.00")]
    pub valor: Decimal,

    #[schema(value_type = String, format = Date, example = "2026-08-02")]
    pub data: NaiveDate,

    pub descricao: Option<String>,
    pub membro_id: Option<Uuid>,

    pub caixa: Option<Caixa>,
    pub movimento: Option<TipoMovimento>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn validar_nao_negativo(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// O caixa e o sentido (entrada/saída) vêm da rota, não do corpo.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarMovimentoPayload {
    #[validate(length(min = 1, message = "O campo 'tipo' é obrigatório."))]
    #[schema(example = "OFERTA COMUM")]
    pub tipo: String,

    #[validate(custom(function = "validar_nao_negativo"))]
    #[schema(example = "150.00")]
    pub valor: Decimal,

    #[schema(value_type = String, format = Date)]
    pub data: NaiveDate,

    pub descricao: Option<String>,
    pub membro_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarMovimentoPayload {
    pub tipo: Option<String>,

    #[validate(custom(function = "validar_nao_negativo"))]
    pub valor: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data: Option<NaiveDate>,

    pub descricao: Option<String>,
    pub membro_id: Option<Uuid>,
}

// Filtros da listagem geral (GET /filtrar/geral).
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltroMovimentos {
    pub descricao: Option<String>,
    pub membro_id: Option<Uuid>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_inicio: Option<NaiveDate>,

    #[param(value_type = Option<String>, format = Date)]
    pub data_fim: Option<NaiveDate>,

    pub tipo_movimento: Option<TipoMovimento>,
    pub tipo_caixa: Option<Caixa>,

    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
