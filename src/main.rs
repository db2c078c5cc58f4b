// src/main.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod domain;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::auth_guard;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // Rotas de autenticação (públicas)
    let rotas_auth = Router::new().route("/login", post(handlers::auth::login));

    // Registros da secretaria. Sem DELETE de membros: o cadastro é
    // histórico, desativa-se pelo flag `ativo`.
    let rotas_membros = Router::new()
        .route(
            "/",
            get(handlers::membros::listar).post(handlers::membros::criar),
        )
        .route(
            "/{id}",
            get(handlers::membros::buscar).patch(handlers::membros::atualizar),
        );

    let rotas_cargos = Router::new()
        .route(
            "/",
            get(handlers::cargos::listar).post(handlers::cargos::criar),
        )
        .route("/vincular", post(handlers::cargos::vincular))
        .route("/desvincular", post(handlers::cargos::desvincular));

    let rotas_escalas = Router::new()
        .route(
            "/",
            get(handlers::escalas::listar).post(handlers::escalas::criar),
        )
        .route(
            "/{id}",
            put(handlers::escalas::atualizar).delete(handlers::escalas::excluir),
        );

    let rotas_eventos = Router::new()
        .route(
            "/",
            get(handlers::eventos::listar).post(handlers::eventos::criar),
        )
        .route(
            "/{id}",
            put(handlers::eventos::atualizar).delete(handlers::eventos::excluir),
        );

    // Família de rotas por caixa: a raiz é o caixa geral, /missoes e
    // /projetos são os demais. Os segmentos estáticos têm precedência
    // sobre {id}.
    let rotas_entradas = Router::new()
        .route("/", post(handlers::financeiro::criar_entrada_geral))
        .route(
            "/{id}",
            put(handlers::financeiro::atualizar_entrada_geral)
                .delete(handlers::financeiro::excluir_entrada_geral),
        )
        .route("/missoes", post(handlers::financeiro::criar_entrada_missoes))
        .route(
            "/missoes/{id}",
            put(handlers::financeiro::atualizar_entrada_missoes)
                .delete(handlers::financeiro::excluir_entrada_missoes),
        )
        .route("/projetos", post(handlers::financeiro::criar_entrada_projetos))
        .route(
            "/projetos/{id}",
            put(handlers::financeiro::atualizar_entrada_projetos)
                .delete(handlers::financeiro::excluir_entrada_projetos),
        );

    let rotas_saidas = Router::new()
        .route("/", post(handlers::financeiro::criar_saida_geral))
        .route(
            "/{id}",
            put(handlers::financeiro::atualizar_saida_geral)
                .delete(handlers::financeiro::excluir_saida_geral),
        )
        .route("/missoes", post(handlers::financeiro::criar_saida_missoes))
        .route(
            "/missoes/{id}",
            put(handlers::financeiro::atualizar_saida_missoes)
                .delete(handlers::financeiro::excluir_saida_missoes),
        )
        .route("/projetos", post(handlers::financeiro::criar_saida_projetos))
        .route(
            "/projetos/{id}",
            put(handlers::financeiro::atualizar_saida_projetos)
                .delete(handlers::financeiro::excluir_saida_projetos),
        );

    let rotas_relatorios = Router::new()
        .route("/financeiro", get(handlers::relatorios::financeiro))
        .route("/financeiro/pdf", get(handlers::relatorios::financeiro_pdf))
        .route(
            "/financeiro_resumido",
            get(handlers::relatorios::financeiro_resumido),
        );

    let rotas_patrimonio = Router::new()
        .route(
            "/",
            get(handlers::patrimonio::listar).post(handlers::patrimonio::criar),
        )
        .route(
            "/{id}",
            put(handlers::patrimonio::atualizar).delete(handlers::patrimonio::excluir),
        )
        .route(
            "/{id}/depreciacao",
            get(handlers::patrimonio::calcular_depreciacao),
        );

    // Tudo que não é login exige token válido; o recorte fino por cargo
    // fica nos extratores RequireCargo de cada handler.
    let rotas_protegidas = Router::new()
        .nest("/membros", rotas_membros)
        .nest("/cargos", rotas_cargos)
        .nest("/escalas", rotas_escalas)
        .nest("/eventos", rotas_eventos)
        .nest("/entradas", rotas_entradas)
        .nest("/saidas", rotas_saidas)
        .nest("/relatorios", rotas_relatorios)
        .nest("/patrimonio", rotas_patrimonio)
        .route("/filtrar/geral", get(handlers::financeiro::filtrar_geral))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let app = Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/auth", rotas_auth)
        .merge(rotas_protegidas)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
