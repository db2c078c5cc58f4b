// src/models/membro.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// Registro do livro de membros. `ativo = false` marca um contribuinte:
// alguém que contribui sem ter sido recebido como membro.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Membro {
    pub id: Uuid,

    #[schema(example = "Maria da Silva")]
    pub nome: String,

    // Somente dígitos; a máscara XXX.XXX.XXX-XX é responsabilidade da exibição.
    #[schema(example = "52998224725")]
    pub cpf: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<NaiveDate>,

    #[schema(example = "11987654321")]
    pub telefone: Option<String>,

    pub email: Option<String>,
    pub estado_civil: Option<String>,
    pub nome_pai: Option<String>,
    pub nome_mae: Option<String>,

    pub ativo: bool,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CriarMembroPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub nome: String,

    #[validate(length(equal = 11, message = "O CPF deve ter 11 dígitos."))]
    pub cpf: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<NaiveDate>,

    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub estado_civil: Option<String>,
    pub nome_pai: Option<String>,
    pub nome_mae: Option<String>,

    // Ausente = membro pleno; false cadastra um contribuinte.
    pub ativo: Option<bool>,
}

// PATCH: somente os campos presentes são alterados.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AtualizarMembroPayload {
    pub nome: Option<String>,

    #[validate(length(equal = 11, message = "O CPF deve ter 11 dígitos."))]
    pub cpf: Option<String>,

    #[schema(value_type = Option<String>, format = Date)]
    pub data_nascimento: Option<NaiveDate>,

    pub telefone: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    pub estado_civil: Option<String>,
    pub nome_pai: Option<String>,
    pub nome_mae: Option<String>,
    pub ativo: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FiltroMembros {
    // Busca por nome (ILIKE %nome%)
    pub nome: Option<String>,
    pub ativo: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
