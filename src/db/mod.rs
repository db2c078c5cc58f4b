pub mod cargo_repo;
pub mod escala_repo;
pub mod evento_repo;
pub mod financeiro_repo;
pub mod membro_repo;
pub mod patrimonio_repo;
pub mod usuario_repo;

pub use cargo_repo::CargoRepository;
pub use escala_repo::EscalaRepository;
pub use evento_repo::EventoRepository;
pub use financeiro_repo::FinanceiroRepository;
pub use membro_repo::MembroRepository;
pub use patrimonio_repo::PatrimonioRepository;
pub use usuario_repo::UsuarioRepository;
