// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CargoRepository, EscalaRepository, EventoRepository, FinanceiroRepository,
        MembroRepository, PatrimonioRepository, UsuarioRepository,
    },
    services::{AuthService, RelatorioService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    pub auth_service: AuthService,
    pub relatorio_service: RelatorioService,

    pub membro_repo: MembroRepository,
    pub cargo_repo: CargoRepository,
    pub escala_repo: EscalaRepository,
    pub evento_repo: EventoRepository,
    pub financeiro_repo: FinanceiroRepository,
    pub patrimonio_repo: PatrimonioRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let usuario_repo = UsuarioRepository::new(db_pool.clone());
        let membro_repo = MembroRepository::new(db_pool.clone());
        let cargo_repo = CargoRepository::new(db_pool.clone());
        let escala_repo = EscalaRepository::new(db_pool.clone());
        let evento_repo = EventoRepository::new(db_pool.clone());
        let financeiro_repo = FinanceiroRepository::new(db_pool.clone());
        let patrimonio_repo = PatrimonioRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            usuario_repo,
            membro_repo.clone(),
            cargo_repo.clone(),
            jwt_secret.clone(),
        );
        let relatorio_service = RelatorioService::new(financeiro_repo.clone());

        Ok(Self {
            db_pool,
            jwt_secret,
            auth_service,
            relatorio_service,
            membro_repo,
            cargo_repo,
            escala_repo,
            evento_repo,
            financeiro_repo,
            patrimonio_repo,
        })
    }
}
