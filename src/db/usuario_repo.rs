// src/db/usuario_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::auth::Usuario};

#[derive(Clone)]
pub struct UsuarioRepository {
    pool: PgPool,
}

impl UsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn buscar_por_username(&self, username: &str) -> Result<Option<Usuario>, AppError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            r#"
            SELECT id, membro_id, username, password_hash, created_at, updated_at
            FROM usuarios
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(usuario)
    }
}
