// src/domain/depreciacao.rs
//
// Depreciação linear de um bem patrimonial, calculada sob demanda.
// Função pura das quatro entradas mais a data de referência; o resultado
// nunca é persistido.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErroDepreciacao {
    #[error("A vida útil deve ser um número positivo de anos.")]
    VidaUtilInvalida,

    #[error("O valor residual deve ser maior ou igual a zero e menor que o preço de aquisição.")]
    ValorResidualInvalido,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Depreciacao {
    #[schema(example = "10000.00")]
    pub base_depreciavel: Decimal,

    #[schema(example = "2000.00")]
    pub depreciacao_anual: Decimal,

    #[schema(example = "166.67")]
    pub depreciacao_mensal: Decimal,

    pub meses_decorridos: i64,

    #[schema(example = "4000.00")]
    pub depreciacao_acumulada: Decimal,

    #[schema(example = "8000.00")]
    pub valor_contabil: Decimal,
}

/// Calcula a depreciação linear de um bem na data `hoje`.
///
/// Regras:
/// - `vida_util_anos` deve ser positivo; `0 <= valor_residual < preco_aquisicao`.
/// - A acumulada é limitada à base depreciável: o bem nunca vale menos
///   que o residual.
/// - Bem adquirido no futuro ainda não depreciou nada.
pub fn calcular(
    preco_aquisicao: Decimal,
    data_aquisicao: NaiveDate,
    vida_util_anos: i32,
    valor_residual: Decimal,
    hoje: NaiveDate,
) -> Result<Depreciacao, ErroDepreciacao> {
    if vida_util_anos <= 0 {
        return Err(ErroDepreciacao::VidaUtilInvalida);
    }
    if valor_residual.is_sign_negative() || valor_residual >= preco_aquisicao {
        return Err(ErroDepreciacao::ValorResidualInvalido);
    }

    let base_depreciavel = preco_aquisicao - valor_residual;
    let depreciacao_anual = base_depreciavel / Decimal::from(vida_util_anos);
    let depreciacao_mensal = depreciacao_anual / Decimal::from(12);

    let meses_decorridos = if data_aquisicao > hoje {
        0
    } else {
        let meses = i64::from(hoje.year() - data_aquisicao.year()) * 12
            - i64::from(data_aquisicao.month())
            + i64::from(hoje.month());
        meses.max(0)
    };

    let acumulada_bruta = depreciacao_mensal * Decimal::from(meses_decorridos);
    let depreciacao_acumulada = acumulada_bruta.min(base_depreciavel).round_dp(2);
    let valor_contabil = (preco_aquisicao - depreciacao_acumulada).round_dp(2);

    Ok(Depreciacao {
        base_depreciavel,
        depreciacao_anual: depreciacao_anual.round_dp(2),
        depreciacao_mensal: depreciacao_mensal.round_dp(2),
        meses_decorridos,
        depreciacao_acumulada,
        valor_contabil,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn exemplo_completo_24_meses() {
        // P=12000, adquirido exatamente 24 meses atrás, L=5 anos, R=2000
        let r = calcular(
            dec("12000.00"),
            data(2024, 8, 25),
            5,
            dec("2000.00"),
            data(2026, 8, 25),
        )
        .unwrap();

        assert_eq!(r.base_depreciavel, dec("10000.00"));
        assert_eq!(r.depreciacao_anual, dec("2000.00"));
        assert_eq!(r.depreciacao_mensal, dec("166.67"));
        assert_eq!(r.meses_decorridos, 24);
        assert_eq!(r.depreciacao_acumulada, dec("4000.00"));
        assert_eq!(r.valor_contabil, dec("8000.00"));
    }

    #[test]
    fn aquisicao_hoje_nao_deprecia() {
        let hoje = data(2026, 8, 25);
        let r = calcular(dec("5000"), hoje, 10, dec("500"), hoje).unwrap();
        assert_eq!(r.meses_decorridos, 0);
        assert_eq!(r.depreciacao_acumulada, Decimal::ZERO);
        assert_eq!(r.valor_contabil, dec("5000"));
    }

    #[test]
    fn aquisicao_futura_nao_deprecia() {
        let r = calcular(
            dec("5000"),
            data(2027, 1, 1),
            3,
            dec("100"),
            data(2026, 8, 25),
        )
        .unwrap();
        assert_eq!(r.meses_decorridos, 0);
        assert_eq!(r.depreciacao_acumulada, Decimal::ZERO);
        assert_eq!(r.valor_contabil, dec("5000"));
    }

    #[test]
    fn acumulada_limitada_a_base() {
        // 30 anos depois de uma vida útil de 2: trava em P - R
        let r = calcular(
            dec("1000.00"),
            data(1996, 8, 25),
            2,
            dec("100.00"),
            data(2026, 8, 25),
        )
        .unwrap();
        assert_eq!(r.depreciacao_acumulada, dec("900.00"));
        assert_eq!(r.valor_contabil, dec("100.00"));
    }

    #[test]
    fn acumulada_nao_decresce_mes_a_mes() {
        let aquisicao = data(2024, 3, 10);
        let mut anterior = Decimal::ZERO;
        for n in 0..60u32 {
            let hoje = aquisicao
                .checked_add_months(chrono::Months::new(n))
                .unwrap();
            let r = calcular(dec("9000"), aquisicao, 4, dec("1000"), hoje).unwrap();
            assert!(r.depreciacao_acumulada >= anterior);
            assert!(r.depreciacao_acumulada <= dec("8000"));
            anterior = r.depreciacao_acumulada;
        }
    }

    #[test]
    fn vida_util_invalida_rejeitada() {
        let hoje = data(2026, 8, 25);
        assert_eq!(
            calcular(dec("1000"), hoje, 0, dec("0"), hoje),
            Err(ErroDepreciacao::VidaUtilInvalida)
        );
        assert_eq!(
            calcular(dec("1000"), hoje, -3, dec("0"), hoje),
            Err(ErroDepreciacao::VidaUtilInvalida)
        );
    }

    #[test]
    fn residual_invalido_rejeitado() {
        let hoje = data(2026, 8, 25);
        assert_eq!(
            calcular(dec("1000"), hoje, 5, dec("-1"), hoje),
            Err(ErroDepreciacao::ValorResidualInvalido)
        );
        assert_eq!(
            calcular(dec("1000"), hoje, 5, dec("1000"), hoje),
            Err(ErroDepreciacao::ValorResidualInvalido)
        );
        assert_eq!(
            calcular(dec("1000"), hoje, 5, dec("1500"), hoje),
            Err(ErroDepreciacao::ValorResidualInvalido)
        );
    }

    #[test]
    fn mesmo_insumo_mesmo_resultado() {
        let a = calcular(
            dec("7500.50"),
            data(2023, 2, 28),
            8,
            dec("300"),
            data(2026, 8, 25),
        )
        .unwrap();
        let b = calcular(
            dec("7500.50"),
            data(2023, 2, 28),
            8,
            dec("300"),
            data(2026, 8, 25),
        )
        .unwrap();
        assert_eq!(a.depreciacao_acumulada, b.depreciacao_acumulada);
        assert_eq!(a.valor_contabil, b.valor_contabil);
    }
}
