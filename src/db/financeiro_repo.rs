// src/db/financeiro_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::financeiro::{
        AtualizarMovimentoPayload, Caixa, CriarMovimentoPayload, FiltroMovimentos, Movimento,
        TipoMovimento,
    },
    models::relatorio::TotalPorTipo,
};

const COLUNAS: &str = "id, tipo, valor, data, descricao, membro_id, caixa, movimento, \
                       created_at, updated_at";

#[derive(Clone)]
pub struct FinanceiroRepository {
    pool: PgPool,
}

impl FinanceiroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  MOVIMENTOS (entradas e saídas por caixa)
    // =========================================================================

    pub async fn criar(
        &self,
        caixa: Caixa,
        movimento: TipoMovimento,
        payload: &CriarMovimentoPayload,
    ) -> Result<Movimento, AppError> {
        let criado = sqlx::query_as::<_, Movimento>(&format!(
            r#"
            INSERT INTO movimentos (tipo, valor, data, descricao, membro_id, caixa, movimento)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&payload.tipo)
        .bind(payload.valor)
        .bind(payload.data)
        .bind(&payload.descricao)
        .bind(payload.membro_id)
        .bind(caixa)
        .bind(movimento)
        .fetch_one(&self.pool)
        .await?;

        Ok(criado)
    }

    // O par (caixa, movimento) vem da rota: /entradas/{id} não alcança
    // registros de saída nem de outro caixa.
    pub async fn atualizar(
        &self,
        id: Uuid,
        caixa: Caixa,
        movimento: TipoMovimento,
        payload: &AtualizarMovimentoPayload,
    ) -> Result<Option<Movimento>, AppError> {
        let atualizado = sqlx::query_as::<_, Movimento>(&format!(
            r#"
            UPDATE movimentos SET
                tipo       = COALESCE($4, tipo),
                valor      = COALESCE($5, valor),
                data       = COALESCE($6, data),
                descricao  = COALESCE($7, descricao),
                membro_id  = COALESCE($8, membro_id),
                updated_at = now()
            WHERE id = $1 AND caixa = $2 AND movimento = $3
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(caixa)
        .bind(movimento)
        .bind(&payload.tipo)
        .bind(payload.valor)
        .bind(payload.data)
        .bind(&payload.descricao)
        .bind(payload.membro_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(atualizado)
    }

    pub async fn excluir(
        &self,
        id: Uuid,
        caixa: Caixa,
        movimento: TipoMovimento,
    ) -> Result<bool, AppError> {
        let resultado = sqlx::query(
            "DELETE FROM movimentos WHERE id = $1 AND caixa = $2 AND movimento = $3",
        )
        .bind(id)
        .bind(caixa)
        .bind(movimento)
        .execute(&self.pool)
        .await?;

        Ok(resultado.rows_affected() > 0)
    }

    // Listagem geral com filtros opcionais e paginação skip/limit.
    pub async fn filtrar(&self, filtro: &FiltroMovimentos) -> Result<Vec<Movimento>, AppError> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUNAS} FROM movimentos WHERE 1=1"));

        if let Some(descricao) = &filtro.descricao {
            qb.push(" AND descricao ILIKE ");
            qb.push_bind(format!("%{}%", descricao));
        }
        if let Some(membro_id) = filtro.membro_id {
            qb.push(" AND membro_id = ");
            qb.push_bind(membro_id);
        }
        if let Some(data_inicio) = filtro.data_inicio {
            qb.push(" AND data >= ");
            qb.push_bind(data_inicio);
        }
        if let Some(data_fim) = filtro.data_fim {
            qb.push(" AND data <= ");
            qb.push_bind(data_fim);
        }
        if let Some(tipo_movimento) = filtro.tipo_movimento {
            qb.push(" AND movimento = ");
            qb.push_bind(tipo_movimento);
        }
        if let Some(tipo_caixa) = filtro.tipo_caixa {
            qb.push(" AND caixa = ");
            qb.push_bind(tipo_caixa);
        }

        let skip = filtro.skip.unwrap_or(0).max(0);
        let limit = filtro.limit.unwrap_or(50).clamp(1, 200);

        qb.push(" ORDER BY created_at DESC LIMIT ");
        qb.push_bind(limit);
        qb.push(" OFFSET ");
        qb.push_bind(skip);

        let movimentos = qb
            .build_query_as::<Movimento>()
            .fetch_all(&self.pool)
            .await?;

        Ok(movimentos)
    }

    // =========================================================================
    //  AGREGADOS DO RELATÓRIO MENSAL
    // =========================================================================

    /// Movimentos do intervalo [inicio, fim), na ordem em que o cliente
    /// os exibe (mais recentes primeiro).
    pub async fn movimentos_periodo(
        &self,
        inicio: NaiveDate,
        fim: NaiveDate,
    ) -> Result<Vec<Movimento>, AppError> {
        let movimentos = sqlx::query_as::<_, Movimento>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM movimentos
            WHERE data >= $1 AND data < $2
            ORDER BY created_at DESC
            "#
        ))
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(movimentos)
    }

    /// Saldo acumulado de um caixa antes de `inicio`: entradas menos saídas.
    pub async fn saldo_anterior(
        &self,
        caixa: Caixa,
        inicio: NaiveDate,
    ) -> Result<Decimal, AppError> {
        let saldo = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(
                CASE WHEN movimento = 'entrada' THEN valor ELSE -valor END
            ), 0)
            FROM movimentos
            WHERE caixa = $1 AND movimento IS NOT NULL AND data < $2
            "#,
        )
        .bind(caixa)
        .bind(inicio)
        .fetch_one(&self.pool)
        .await?;

        Ok(saldo)
    }

    pub async fn total_periodo(
        &self,
        caixa: Caixa,
        movimento: TipoMovimento,
        inicio: NaiveDate,
        fim: NaiveDate,
    ) -> Result<Decimal, AppError> {
        let total = sqlx::query_scalar::<_, Decimal>(
            r#"
            SELECT COALESCE(SUM(valor), 0)
            FROM movimentos
            WHERE caixa = $1 AND movimento = $2 AND data >= $3 AND data < $4
            "#,
        )
        .bind(caixa)
        .bind(movimento)
        .bind(inicio)
        .bind(fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Somas por tipo dentro do período, para o relatório resumido.
    pub async fn totais_por_tipo(
        &self,
        inicio: NaiveDate,
        fim: NaiveDate,
    ) -> Result<Vec<TotalPorTipo>, AppError> {
        let totais = sqlx::query_as::<_, TotalPorTipo>(
            r#"
            SELECT caixa, movimento, tipo, COALESCE(SUM(valor), 0) AS total
            FROM movimentos
            WHERE data >= $1 AND data < $2
            GROUP BY caixa, movimento, tipo
            ORDER BY caixa, movimento, tipo
            "#,
        )
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await?;

        Ok(totais)
    }
}
