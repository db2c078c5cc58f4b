// src/db/cargo_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::cargo::{Cargo, CriarCargoPayload},
};

#[derive(Clone)]
pub struct CargoRepository {
    pool: PgPool,
}

impl CargoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self) -> Result<Vec<Cargo>, AppError> {
        let cargos = sqlx::query_as::<_, Cargo>(
            "SELECT id, nome, descricao FROM cargos ORDER BY nome ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cargos)
    }

    pub async fn criar(&self, payload: &CriarCargoPayload) -> Result<Cargo, AppError> {
        let cargo = sqlx::query_as::<_, Cargo>(
            r#"
            INSERT INTO cargos (nome, descricao)
            VALUES ($1, $2)
            RETURNING id, nome, descricao
            "#,
        )
        .bind(&payload.nome)
        .bind(&payload.descricao)
        .fetch_one(&self.pool)
        .await?;

        Ok(cargo)
    }

    // Vincular duas vezes é inofensivo (ON CONFLICT DO NOTHING).
    pub async fn vincular(&self, membro_id: Uuid, cargo_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO membro_cargo (membro_id, cargo_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(membro_id)
        .bind(cargo_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn desvincular(&self, membro_id: Uuid, cargo_id: Uuid) -> Result<bool, AppError> {
        let resultado = sqlx::query(
            "DELETE FROM membro_cargo WHERE membro_id = $1 AND cargo_id = $2",
        )
        .bind(membro_id)
        .bind(cargo_id)
        .execute(&self.pool)
        .await?;

        Ok(resultado.rows_affected() > 0)
    }

    /// Nomes dos cargos de um membro; é isto que entra nos claims do token.
    pub async fn cargos_do_membro(&self, membro_id: Uuid) -> Result<Vec<String>, AppError> {
        let nomes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT c.nome
            FROM cargos c
            JOIN membro_cargo mc ON mc.cargo_id = c.id
            WHERE mc.membro_id = $1
            ORDER BY c.nome ASC
            "#,
        )
        .bind(membro_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(nomes)
    }
}
