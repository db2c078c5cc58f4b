pub mod auth;
pub mod cargos;
pub mod escalas;
pub mod eventos;
pub mod financeiro;
pub mod membros;
pub mod patrimonio;
pub mod relatorios;
