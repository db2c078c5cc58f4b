// src/models/patrimonio.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "tipo_patrimonio", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoPatrimonio {
    Imovel,
    Veiculo,
    Instrumento,
    Mobiliario,
    Equipamento,
    Outro,
}

// Bem patrimonial. Não há colunas de depreciação: ela é calculada sob
// demanda a partir do preço e da data de aquisição, nunca persistida.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Patrimonio {
    pub id: Uuid,

    #[schema(example = "Teclado Yamaha PSR-SX700")]
    pub nome_item: String,

    pub tipo: TipoPatrimonio,

    #[schema(example = "12000.00")]
    pub preco_aquisicao: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-08-25")]
    pub data_aquisicao: NaiveDate,

    pub observacoes: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn validar_nao_negativo(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O preço de aquisição não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarPatrimonioPayload {
    #[validate(length(min = 1, message = "O nome do item é obrigatório."))]
    pub nome_item: String,

    pub tipo: TipoPatrimonio,

    #[validate(custom(function = "validar_nao_negativo"))]
    pub preco_aquisicao: Decimal,

    #[schema(value_type = String, format = Date)]
    pub data_aquisicao: NaiveDate,

    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarPatrimonioPayload {
    pub nome_item: Option<String>,
    pub tipo: Option<TipoPatrimonio>,

    #[validate(custom(function = "validar_nao_negativo"))]
    pub preco_aquisicao: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_aquisicao: Option<NaiveDate>,

    pub observacoes: Option<String>,
}

// Parâmetros da simulação de depreciação (GET /patrimonio/{id}/depreciacao).
#[derive(Debug, Deserialize, IntoParams)]
pub struct ParametrosDepreciacao {
    /// Vida útil em anos (inteiro positivo)
    pub vida_util_anos: i32,

    /// Valor residual ao fim da vida útil (0 <= R < preço de aquisição)
    #[param(value_type = f64, example = 2000.0)]
    pub valor_residual: Decimal,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltroPatrimonio {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
