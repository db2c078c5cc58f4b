// src/domain/agregador.rs
//
// Agrupa uma lista plana de movimentos em caixa -> movimento -> lista,
// para exibição em seções e para o relatório detalhado.

use std::collections::BTreeMap;

use crate::models::financeiro::Movimento;

/// Balde dos movimentos sem `caixa` ou sem `movimento`. Um registro sem
/// classificação não é descartado: ele cai aqui.
pub const NAO_CLASSIFICADO: &str = "nao_classificado";

pub type MovimentosAgrupados = BTreeMap<String, BTreeMap<String, Vec<Movimento>>>;

/// Agrupamento em dois níveis, O(n). A ordem dentro de cada balde é a
/// ordem de chegada; nenhuma ordenação é aplicada aqui.
pub fn agrupar(movimentos: Vec<Movimento>) -> MovimentosAgrupados {
    let mut grupos: MovimentosAgrupados = BTreeMap::new();

    for movimento in movimentos {
        let chave_caixa = movimento
            .caixa
            .map(|c| c.rotulo())
            .unwrap_or(NAO_CLASSIFICADO)
            .to_string();
        let chave_movimento = movimento
            .movimento
            .map(|m| m.rotulo())
            .unwrap_or(NAO_CLASSIFICADO)
            .to_string();

        grupos
            .entry(chave_caixa)
            .or_default()
            .entry(chave_movimento)
            .or_default()
            .push(movimento);
    }

    grupos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::financeiro::{Caixa, TipoMovimento};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn movimento(caixa: Option<Caixa>, sentido: Option<TipoMovimento>, tipo: &str) -> Movimento {
        Movimento {
            id: Uuid::new_v4(),
            tipo: tipo.to_string(),
            valor: Decimal::from(10),
            data: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            descricao: None,
            membro_id: None,
            caixa,
            movimento: sentido,
            created_at: None,
            updated_at: None,
        }
    }

    fn total(grupos: &MovimentosAgrupados) -> usize {
        grupos
            .values()
            .flat_map(|por_movimento| por_movimento.values())
            .map(|lista| lista.len())
            .sum()
    }

    #[test]
    fn nenhum_movimento_se_perde() {
        let entrada = vec![
            movimento(Some(Caixa::Financeiro), Some(TipoMovimento::Entrada), "DÍZIMO"),
            movimento(Some(Caixa::Financeiro), Some(TipoMovimento::Saida), "SAÍDA FIXA"),
            movimento(Some(Caixa::Missionario), Some(TipoMovimento::Entrada), "OFERTA MISSÕES"),
            movimento(Some(Caixa::Projetos), Some(TipoMovimento::Entrada), "NOSSA CASA"),
            movimento(None, Some(TipoMovimento::Entrada), "DÍZIMO"),
            movimento(Some(Caixa::Financeiro), None, "OFERTA COMUM"),
            movimento(None, None, "?"),
        ];
        let n = entrada.len();

        let grupos = agrupar(entrada);
        assert_eq!(total(&grupos), n);
    }

    #[test]
    fn sem_classificacao_cai_no_balde_proprio() {
        let grupos = agrupar(vec![movimento(None, None, "LEGADO")]);

        let balde = &grupos[NAO_CLASSIFICADO][NAO_CLASSIFICADO];
        assert_eq!(balde.len(), 1);
        assert_eq!(balde[0].tipo, "LEGADO");
        assert_eq!(total(&grupos), 1);
    }

    #[test]
    fn ordem_de_chegada_preservada_no_balde() {
        let mut primeiro = movimento(Some(Caixa::Financeiro), Some(TipoMovimento::Entrada), "DÍZIMO");
        let mut segundo = movimento(Some(Caixa::Financeiro), Some(TipoMovimento::Entrada), "DÍZIMO");
        primeiro.descricao = Some("primeiro".into());
        segundo.descricao = Some("segundo".into());

        let grupos = agrupar(vec![primeiro, segundo]);
        let balde = &grupos["financeiro"]["entrada"];
        assert_eq!(balde[0].descricao.as_deref(), Some("primeiro"));
        assert_eq!(balde[1].descricao.as_deref(), Some("segundo"));
    }

    #[test]
    fn reexecucao_gera_a_mesma_estrutura() {
        let entrada = vec![
            movimento(Some(Caixa::Missionario), Some(TipoMovimento::Saida), "SAÍDA MISSÕES"),
            movimento(Some(Caixa::Projetos), Some(TipoMovimento::Saida), "SAÍDA NOSSA CASA"),
        ];

        let a = agrupar(entrada.clone());
        let b = agrupar(entrada);

        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
        assert_eq!(total(&a), total(&b));
    }
}
