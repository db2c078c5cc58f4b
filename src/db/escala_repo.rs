// src/db/escala_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::escala::{AtualizarEscalaPayload, CriarEscalaPayload, Escala, FiltroEscalas},
};

const COLUNAS: &str = "id, membro_id, tipo_escala, data_hora, ativo, created_at";

#[derive(Clone)]
pub struct EscalaRepository {
    pool: PgPool,
}

impl EscalaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, payload: &CriarEscalaPayload) -> Result<Escala, AppError> {
        let escala = sqlx::query_as::<_, Escala>(&format!(
            r#"
            INSERT INTO escalas (membro_id, tipo_escala, data_hora)
            VALUES ($1, $2, $3)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(payload.membro_id)
        .bind(&payload.tipo_escala)
        .bind(payload.data_hora)
        .fetch_one(&self.pool)
        .await?;

        Ok(escala)
    }

    pub async fn listar(&self, filtro: &FiltroEscalas) -> Result<Vec<Escala>, AppError> {
        let skip = filtro.skip.unwrap_or(0).max(0);
        let limit = filtro.limit.unwrap_or(50).clamp(1, 200);

        let escalas = sqlx::query_as::<_, Escala>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM escalas
            WHERE ($1::uuid IS NULL OR membro_id = $1)
              AND ($2::boolean IS NULL OR ativo = $2)
            ORDER BY data_hora DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(filtro.membro_id)
        .bind(filtro.ativo)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(escalas)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarEscalaPayload,
    ) -> Result<Option<Escala>, AppError> {
        let escala = sqlx::query_as::<_, Escala>(&format!(
            r#"
            UPDATE escalas SET
                membro_id   = COALESCE($2, membro_id),
                tipo_escala = COALESCE($3, tipo_escala),
                data_hora   = COALESCE($4, data_hora),
                ativo       = COALESCE($5, ativo)
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(payload.membro_id)
        .bind(&payload.tipo_escala)
        .bind(payload.data_hora)
        .bind(payload.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(escala)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM escalas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
