// Núcleo de cálculo puro: nada aqui toca banco, rede ou relógio de
// parede. Quem chama injeta a data de referência.

pub mod agregador;
pub mod depreciacao;
pub mod mascaras;
pub mod sessao;
pub mod vocabulario;
