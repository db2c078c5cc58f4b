// src/db/patrimonio_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::patrimonio::{
        AtualizarPatrimonioPayload, CriarPatrimonioPayload, FiltroPatrimonio, Patrimonio,
    },
};

const COLUNAS: &str = "id, nome_item, tipo, preco_aquisicao, data_aquisicao, observacoes, \
                       created_at, updated_at";

#[derive(Clone)]
pub struct PatrimonioRepository {
    pool: PgPool,
}

impl PatrimonioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, payload: &CriarPatrimonioPayload) -> Result<Patrimonio, AppError> {
        let item = sqlx::query_as::<_, Patrimonio>(&format!(
            r#"
            INSERT INTO patrimonio (nome_item, tipo, preco_aquisicao, data_aquisicao, observacoes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&payload.nome_item)
        .bind(payload.tipo)
        .bind(payload.preco_aquisicao)
        .bind(payload.data_aquisicao)
        .bind(&payload.observacoes)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn listar(&self, filtro: &FiltroPatrimonio) -> Result<Vec<Patrimonio>, AppError> {
        let skip = filtro.skip.unwrap_or(0).max(0);
        let limit = filtro.limit.unwrap_or(50).clamp(1, 200);

        let itens = sqlx::query_as::<_, Patrimonio>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM patrimonio
            ORDER BY nome_item ASC
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(itens)
    }

    pub async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Patrimonio>, AppError> {
        let item = sqlx::query_as::<_, Patrimonio>(&format!(
            "SELECT {COLUNAS} FROM patrimonio WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarPatrimonioPayload,
    ) -> Result<Option<Patrimonio>, AppError> {
        let item = sqlx::query_as::<_, Patrimonio>(&format!(
            r#"
            UPDATE patrimonio SET
                nome_item       = COALESCE($2, nome_item),
                tipo            = COALESCE($3, tipo),
                preco_aquisicao = COALESCE($4, preco_aquisicao),
                data_aquisicao  = COALESCE($5, data_aquisicao),
                observacoes     = COALESCE($6, observacoes),
                updated_at      = now()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&payload.nome_item)
        .bind(payload.tipo)
        .bind(payload.preco_aquisicao)
        .bind(payload.data_aquisicao)
        .bind(&payload.observacoes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM patrimonio WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
