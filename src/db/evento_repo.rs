// src/db/evento_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::evento::{AtualizarEventoPayload, CriarEventoPayload, Evento, FiltroEventos},
};

const COLUNAS: &str = "id, titulo, descricao, inicio, fim, ativo, created_at";

#[derive(Clone)]
pub struct EventoRepository {
    pool: PgPool,
}

impl EventoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, payload: &CriarEventoPayload) -> Result<Evento, AppError> {
        let evento = sqlx::query_as::<_, Evento>(&format!(
            r#"
            INSERT INTO eventos (titulo, descricao, inicio, fim)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&payload.titulo)
        .bind(&payload.descricao)
        .bind(payload.inicio)
        .bind(payload.fim)
        .fetch_one(&self.pool)
        .await?;

        Ok(evento)
    }

    pub async fn listar(&self, filtro: &FiltroEventos) -> Result<Vec<Evento>, AppError> {
        let skip = filtro.skip.unwrap_or(0).max(0);
        let limit = filtro.limit.unwrap_or(50).clamp(1, 200);

        let eventos = sqlx::query_as::<_, Evento>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM eventos
            WHERE ($1::boolean IS NULL OR ativo = $1)
            ORDER BY inicio DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(filtro.ativo)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(eventos)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarEventoPayload,
    ) -> Result<Option<Evento>, AppError> {
        let evento = sqlx::query_as::<_, Evento>(&format!(
            r#"
            UPDATE eventos SET
                titulo    = COALESCE($2, titulo),
                descricao = COALESCE($3, descricao),
                inicio    = COALESCE($4, inicio),
                fim       = COALESCE($5, fim),
                ativo     = COALESCE($6, ativo)
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&payload.titulo)
        .bind(&payload.descricao)
        .bind(payload.inicio)
        .bind(payload.fim)
        .bind(payload.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(evento)
    }

    pub async fn excluir(&self, id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query("DELETE FROM eventos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(resultado.rows_affected() > 0)
    }
}
