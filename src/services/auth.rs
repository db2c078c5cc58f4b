// src/services/auth.rs

use bcrypt::verify;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    common::error::AppError,
    db::{CargoRepository, MembroRepository, UsuarioRepository},
    models::auth::Claims,
};

#[derive(Clone)]
pub struct AuthService {
    usuario_repo: UsuarioRepository,
    membro_repo: MembroRepository,
    cargo_repo: CargoRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(
        usuario_repo: UsuarioRepository,
        membro_repo: MembroRepository,
        cargo_repo: CargoRepository,
        jwt_secret: String,
    ) -> Self {
        Self {
            usuario_repo,
            membro_repo,
            cargo_repo,
            jwt_secret,
        }
    }

    /// Fluxo "password grant": confere a senha e emite um token cujos
    /// claims carregam o retrato dos cargos do membro naquele momento.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, Claims), AppError> {
        let usuario = self
            .usuario_repo
            .buscar_por_username(username)
            .await?
            .ok_or(AppError::CredenciaisInvalidas)?;

        let password_clone = password.to_owned();
        let password_hash_clone = usuario.password_hash.clone();

        // Executa a verificação de bcrypt em um thread separado
        let senha_valida = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !senha_valida {
            return Err(AppError::CredenciaisInvalidas);
        }

        let membro = self
            .membro_repo
            .buscar_por_id(usuario.membro_id)
            .await?
            .ok_or(AppError::NaoEncontrado("Membro"))?;

        let cargos = self.cargo_repo.cargos_do_membro(membro.id).await?;

        self.criar_token(usuario.id, membro.id, membro.nome, cargos)
    }

    /// Validação com assinatura, usada pelo middleware em toda requisição.
    /// Não consulta o banco: os cargos valem como estavam no login.
    pub fn validar_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map_err(|_| AppError::TokenInvalido)?;

        Ok(token_data.claims)
    }

    fn criar_token(
        &self,
        usuario_id: uuid::Uuid,
        membro_id: uuid::Uuid,
        nome: String,
        cargos: Vec<String>,
    ) -> Result<(String, Claims), AppError> {
        let agora = Utc::now();
        let expira_em = agora + chrono::Duration::days(7);

        let claims = Claims {
            sub: usuario_id,
            membro_id,
            nome,
            cargos,
            exp: expira_em.timestamp() as usize,
            iat: agora.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?;

        Ok((token, claims))
    }
}
