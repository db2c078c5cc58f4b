pub mod auth;
pub mod relatorio_service;

pub use auth::AuthService;
pub use relatorio_service::RelatorioService;
