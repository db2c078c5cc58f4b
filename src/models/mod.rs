pub mod auth;
pub mod cargo;
pub mod escala;
pub mod evento;
pub mod financeiro;
pub mod membro;
pub mod patrimonio;
pub mod relatorio;
