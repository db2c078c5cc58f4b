// src/db/membro_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::membro::{AtualizarMembroPayload, CriarMembroPayload, FiltroMembros, Membro},
};

const COLUNAS: &str = "id, nome, cpf, data_nascimento, telefone, email, estado_civil, \
                       nome_pai, nome_mae, ativo, created_at, updated_at";

#[derive(Clone)]
pub struct MembroRepository {
    pool: PgPool,
}

impl MembroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, payload: &CriarMembroPayload) -> Result<Membro, AppError> {
        let membro = sqlx::query_as::<_, Membro>(&format!(
            r#"
            INSERT INTO membros
                (nome, cpf, data_nascimento, telefone, email, estado_civil,
                 nome_pai, nome_mae, ativo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUNAS}
            "#
        ))
        .bind(&payload.nome)
        .bind(&payload.cpf)
        .bind(payload.data_nascimento)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.estado_civil)
        .bind(&payload.nome_pai)
        .bind(&payload.nome_mae)
        .bind(payload.ativo.unwrap_or(true))
        .fetch_one(&self.pool)
        .await?;

        Ok(membro)
    }

    pub async fn listar(&self, filtro: &FiltroMembros) -> Result<Vec<Membro>, AppError> {
        let skip = filtro.skip.unwrap_or(0).max(0);
        let limit = filtro.limit.unwrap_or(50).clamp(1, 200);

        let membros = sqlx::query_as::<_, Membro>(&format!(
            r#"
            SELECT {COLUNAS}
            FROM membros
            WHERE ($1::text IS NULL OR nome ILIKE '%' || $1 || '%')
              AND ($2::boolean IS NULL OR ativo = $2)
            ORDER BY nome ASC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(&filtro.nome)
        .bind(filtro.ativo)
        .bind(limit)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        Ok(membros)
    }

    pub async fn buscar_por_id(&self, id: Uuid) -> Result<Option<Membro>, AppError> {
        let membro = sqlx::query_as::<_, Membro>(&format!(
            "SELECT {COLUNAS} FROM membros WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(membro)
    }

    // PATCH parcial: campos ausentes permanecem como estão. Membros nunca
    // são removidos, apenas atualizados (inclusive o flag `ativo`).
    pub async fn atualizar(
        &self,
        id: Uuid,
        payload: &AtualizarMembroPayload,
    ) -> Result<Option<Membro>, AppError> {
        let membro = sqlx::query_as::<_, Membro>(&format!(
            r#"
            UPDATE membros SET
                nome            = COALESCE($2, nome),
                cpf             = COALESCE($3, cpf),
                data_nascimento = COALESCE($4, data_nascimento),
                telefone        = COALESCE($5, telefone),
                email           = COALESCE($6, email),
                estado_civil    = COALESCE($7, estado_civil),
                nome_pai        = COALESCE($8, nome_pai),
                nome_mae        = COALESCE($9, nome_mae),
                ativo           = COALESCE($10, ativo),
                updated_at      = now()
            WHERE id = $1
            RETURNING {COLUNAS}
            "#
        ))
        .bind(id)
        .bind(&payload.nome)
        .bind(&payload.cpf)
        .bind(payload.data_nascimento)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.estado_civil)
        .bind(&payload.nome_pai)
        .bind(&payload.nome_mae)
        .bind(payload.ativo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(membro)
    }
}
