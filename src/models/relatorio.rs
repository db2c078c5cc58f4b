// src/models/relatorio.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::domain::agregador::MovimentosAgrupados;
use crate::models::financeiro::{Caixa, TipoMovimento};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ParametrosRelatorio {
    /// Mês de referência (1 a 12)
    pub mes: u32,
    /// Ano de referência
    pub ano: i32,
}

// Fechamento de um caixa no mês: saldo que veio do período anterior,
// somas de entradas e saídas e o saldo final resultante.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResumoCaixa {
    pub caixa: Caixa,

    #[schema(example = "3210.50")]
    pub saldo_anterior: Decimal,

    #[schema(example = "1500.00")]
    pub total_entradas: Decimal,

    #[schema(example = "820.00")]
    pub total_saidas: Decimal,

    #[schema(example = "3890.50")]
    pub saldo_final: Decimal,
}

// Soma por tipo dentro de um caixa ("DÍZIMO": 1200.00, ...).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct TotalPorTipo {
    pub caixa: Option<Caixa>,
    pub movimento: Option<TipoMovimento>,
    pub tipo: String,
    pub total: Decimal,
}

// Relatório detalhado: fechamentos por caixa mais a lista de movimentos
// do mês agrupada em caixa -> movimento -> lista.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelatorioFinanceiro {
    pub mes: u32,
    pub ano: i32,
    pub caixas: Vec<ResumoCaixa>,

    #[schema(value_type = Object)]
    pub movimentos: MovimentosAgrupados,
}

// Relatório resumido: sem itemização, apenas fechamentos e somas por tipo.
#[derive(Debug, Serialize, ToSchema)]
pub struct RelatorioResumido {
    pub mes: u32,
    pub ano: i32,
    pub caixas: Vec<ResumoCaixa>,
    pub totais_por_tipo: Vec<TotalPorTipo>,
}
