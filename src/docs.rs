// src/docs.rs

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,

        // --- Membros ---
        handlers::membros::listar,
        handlers::membros::buscar,
        handlers::membros::criar,
        handlers::membros::atualizar,

        // --- Cargos ---
        handlers::cargos::listar,
        handlers::cargos::criar,
        handlers::cargos::vincular,
        handlers::cargos::desvincular,

        // --- Escalas ---
        handlers::escalas::listar,
        handlers::escalas::criar,
        handlers::escalas::atualizar,
        handlers::escalas::excluir,

        // --- Eventos ---
        handlers::eventos::listar,
        handlers::eventos::criar,
        handlers::eventos::atualizar,
        handlers::eventos::excluir,

        // --- Financeiro ---
        handlers::financeiro::filtrar_geral,
        handlers::financeiro::criar_entrada_geral,
        handlers::financeiro::atualizar_entrada_geral,
        handlers::financeiro::excluir_entrada_geral,
        handlers::financeiro::criar_entrada_missoes,
        handlers::financeiro::atualizar_entrada_missoes,
        handlers::financeiro::excluir_entrada_missoes,
        handlers::financeiro::criar_entrada_projetos,
        handlers::financeiro::atualizar_entrada_projetos,
        handlers::financeiro::excluir_entrada_projetos,
        handlers::financeiro::criar_saida_geral,
        handlers::financeiro::atualizar_saida_geral,
        handlers::financeiro::excluir_saida_geral,
        handlers::financeiro::criar_saida_missoes,
        handlers::financeiro::atualizar_saida_missoes,
        handlers::financeiro::excluir_saida_missoes,
        handlers::financeiro::criar_saida_projetos,
        handlers::financeiro::atualizar_saida_projetos,
        handlers::financeiro::excluir_saida_projetos,

        // --- Relatórios ---
        handlers::relatorios::financeiro,
        handlers::relatorios::financeiro_resumido,
        handlers::relatorios::financeiro_pdf,

        // --- Patrimônio ---
        handlers::patrimonio::listar,
        handlers::patrimonio::criar,
        handlers::patrimonio::atualizar,
        handlers::patrimonio::excluir,
        handlers::patrimonio::calcular_depreciacao,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Usuario,
            models::auth::LoginPayload,
            models::auth::LoginResponse,

            // --- Membros ---
            models::membro::Membro,
            models::membro::CriarMembroPayload,
            models::membro::AtualizarMembroPayload,

            // --- Cargos ---
            models::cargo::Cargo,
            models::cargo::CriarCargoPayload,
            models::cargo::VinculoPayload,

            // --- Escalas ---
            models::escala::Escala,
            models::escala::CriarEscalaPayload,
            models::escala::AtualizarEscalaPayload,

            // --- Eventos ---
            models::evento::Evento,
            models::evento::CriarEventoPayload,
            models::evento::AtualizarEventoPayload,

            // --- Financeiro ---
            models::financeiro::Caixa,
            models::financeiro::TipoMovimento,
            models::financeiro::Movimento,
            models::financeiro::CriarMovimentoPayload,
            models::financeiro::AtualizarMovimentoPayload,

            // --- Relatórios ---
            models::relatorio::ResumoCaixa,
            models::relatorio::TotalPorTipo,
            models::relatorio::RelatorioFinanceiro,
            models::relatorio::RelatorioResumido,

            // --- Patrimônio ---
            models::patrimonio::TipoPatrimonio,
            models::patrimonio::Patrimonio,
            models::patrimonio::CriarPatrimonioPayload,
            models::patrimonio::AtualizarPatrimonioPayload,
            domain::depreciacao::Depreciacao,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Autenticação e emissão de token"),
        (name = "Membros", description = "Livro de membros e contribuintes"),
        (name = "Cargos", description = "Cargos e vínculos"),
        (name = "Escalas", description = "Escalas de serviço"),
        (name = "Eventos", description = "Agenda de eventos"),
        (name = "Financeiro", description = "Entradas e saídas dos três caixas"),
        (name = "Relatórios", description = "Fechamento mensal"),
        (name = "Patrimônio", description = "Bens e depreciação"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_jwt",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}
