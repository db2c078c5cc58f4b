// src/domain/vocabulario.rs
//
// Vocabulário fixo de tipos por (caixa, movimento). Fonte única de
// verdade: formulários, validação das rotas e exibição consomem daqui.

use crate::models::financeiro::{Caixa, TipoMovimento};

/// Tipos aceitos para um par (caixa, movimento).
pub fn tipos_permitidos(caixa: Caixa, movimento: TipoMovimento) -> &'static [&'static str] {
    use Caixa::*;
    use TipoMovimento::*;

    match (caixa, movimento) {
        // Grafia dupla herdada dos formulários antigos: MEAN e MEAR coexistem.
        (Financeiro, Entrada) => &["DÍZIMO", "OFERTA COMUM", "ENTRADA MEAN", "ENTRADA MEAR"],
        (Financeiro, Saida) => &["SAÍDA FIXA", "SAÍDA VARIÁVEL"],
        (Missionario, Entrada) => &["COMPROMISSO DE FÉ", "OFERTA MISSÕES"],
        (Missionario, Saida) => &["SAÍDA MISSÕES"],
        (Projetos, Entrada) => &["NOSSA CASA"],
        (Projetos, Saida) => &["SAÍDA NOSSA CASA"],
    }
}

pub fn tipo_permitido(caixa: Caixa, movimento: TipoMovimento, tipo: &str) -> bool {
    tipos_permitidos(caixa, movimento).contains(&tipo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dizimo_so_entra_no_caixa_geral() {
        assert!(tipo_permitido(Caixa::Financeiro, TipoMovimento::Entrada, "DÍZIMO"));
        assert!(!tipo_permitido(Caixa::Missionario, TipoMovimento::Entrada, "DÍZIMO"));
        assert!(!tipo_permitido(Caixa::Financeiro, TipoMovimento::Saida, "DÍZIMO"));
    }

    #[test]
    fn projetos_so_tem_nossa_casa() {
        assert_eq!(
            tipos_permitidos(Caixa::Projetos, TipoMovimento::Entrada),
            ["NOSSA CASA"]
        );
        assert_eq!(
            tipos_permitidos(Caixa::Projetos, TipoMovimento::Saida),
            ["SAÍDA NOSSA CASA"]
        );
    }

    #[test]
    fn tipo_fora_do_vocabulario_recusado() {
        assert!(!tipo_permitido(Caixa::Financeiro, TipoMovimento::Entrada, "VENDA"));
        // Comparação é sensível a acento e caixa
        assert!(!tipo_permitido(Caixa::Financeiro, TipoMovimento::Entrada, "dízimo"));
        assert!(!tipo_permitido(Caixa::Financeiro, TipoMovimento::Saida, "SAIDA FIXA"));
    }
}
