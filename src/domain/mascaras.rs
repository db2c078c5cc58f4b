// src/domain/mascaras.rs
//
// Máscaras determinísticas de entrada e formatação monetária brasileira.
// A edição de valores acontece em centavos (inteiro); a conversão para
// reais decimais acontece em um único ponto, `centavos_para_reais`, logo
// antes de montar o payload.

use rust_decimal::Decimal;

// Limite de dígitos aceitos no campo de moeda (R$ 9.999.999.999,99).
const MAX_DIGITOS_MOEDA: usize = 12;

pub fn somente_digitos(texto: &str) -> String {
    texto.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reinterpreta os dígitos do campo como centavos: "1234" => 1234
/// centavos (R$ 12,34). Zeros à esquerda colapsam na conversão.
pub fn extrair_centavos(texto: &str) -> i64 {
    let digitos = somente_digitos(texto);
    let recorte = if digitos.len() > MAX_DIGITOS_MOEDA {
        &digitos[..MAX_DIGITOS_MOEDA]
    } else {
        &digitos
    };
    recorte.parse::<i64>().unwrap_or(0)
}

/// Fronteira única centavos -> reais. O valor enviado ao servidor é este.
pub fn centavos_para_reais(centavos: i64) -> Decimal {
    Decimal::new(centavos, 2)
}

fn agrupar_milhares(inteiro: &str) -> String {
    let digitos: Vec<char> = inteiro.chars().collect();
    let mut saida = String::with_capacity(digitos.len() + digitos.len() / 3);
    for (i, c) in digitos.iter().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            saida.push('.');
        }
        saida.push(*c);
    }
    saida
}

/// Formata o conteúdo bruto do campo como moeda: "150000" => "R$ 1.500,00".
/// Entrada vazia vira "R$ 0,00".
pub fn mascarar_moeda(texto: &str) -> String {
    let centavos = extrair_centavos(texto);
    let reais = centavos / 100;
    let resto = centavos % 100;
    format!("R$ {},{:02}", agrupar_milhares(&reais.to_string()), resto)
}

/// Formata um valor decimal já em reais, para relatórios e PDF.
pub fn formatar_reais(valor: Decimal) -> String {
    let arredondado = valor.round_dp(2);
    let negativo = arredondado.is_sign_negative();
    let texto = arredondado.abs().to_string();

    let (inteiro, fracao) = match texto.split_once('.') {
        Some((i, f)) => (i.to_string(), format!("{:0<2}", f)),
        None => (texto, "00".to_string()),
    };

    let sinal = if negativo { "-" } else { "" };
    format!("{}R$ {},{}", sinal, agrupar_milhares(&inteiro), fracao)
}

/// Máscara progressiva de CPF: XXX.XXX.XXX-XX, formatando até onde
/// houver dígitos. Idempotente: mascarar um valor já mascarado não muda nada.
pub fn mascarar_cpf(texto: &str) -> String {
    let mut digitos = somente_digitos(texto);
    digitos.truncate(11);

    match digitos.len() {
        0..=3 => digitos,
        4..=6 => format!("{}.{}", &digitos[..3], &digitos[3..]),
        7..=9 => format!("{}.{}.{}", &digitos[..3], &digitos[3..6], &digitos[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digitos[..3],
            &digitos[3..6],
            &digitos[6..9],
            &digitos[9..]
        ),
    }
}

/// Máscara progressiva de telefone celular: (XX) XXXXX-XXXX, degradando
/// para entradas parciais em quatro faixas de comprimento.
pub fn mascarar_telefone(texto: &str) -> String {
    let mut digitos = somente_digitos(texto);
    digitos.truncate(11);

    match digitos.len() {
        0 => String::new(),
        1..=2 => format!("({}", digitos),
        3..=7 => format!("({}) {}", &digitos[..2], &digitos[2..]),
        _ => format!("({}) {}-{}", &digitos[..2], &digitos[2..7], &digitos[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn moeda_exemplo_do_formulario() {
        // Digitar "150000" exibe R$ 1.500,00 e envia 1500.00
        assert_eq!(mascarar_moeda("150000"), "R$ 1.500,00");
        assert_eq!(
            centavos_para_reais(extrair_centavos("150000")),
            Decimal::from_str("1500.00").unwrap()
        );
    }

    #[test]
    fn moeda_entrada_vazia_e_zeros() {
        assert_eq!(mascarar_moeda(""), "R$ 0,00");
        assert_eq!(mascarar_moeda("0007"), "R$ 0,07");
        assert_eq!(mascarar_moeda("abc"), "R$ 0,00");
    }

    #[test]
    fn moeda_ida_e_volta() {
        for entrada in ["1", "12", "1234", "999999999999", "005000"] {
            let mascarado = mascarar_moeda(entrada);
            assert_eq!(
                extrair_centavos(&mascarado),
                entrada.parse::<i64>().unwrap(),
                "round-trip falhou para {entrada:?}"
            );
        }
    }

    #[test]
    fn moeda_ignora_digitos_alem_do_limite() {
        // 13 dígitos: o último é descartado, não estoura
        assert_eq!(extrair_centavos("9999999999991"), 999_999_999_999);
    }

    #[test]
    fn formatar_reais_com_milhares() {
        assert_eq!(formatar_reais(Decimal::from_str("0").unwrap()), "R$ 0,00");
        assert_eq!(
            formatar_reais(Decimal::from_str("1234567.8").unwrap()),
            "R$ 1.234.567,80"
        );
        assert_eq!(
            formatar_reais(Decimal::from_str("-42.5").unwrap()),
            "-R$ 42,50"
        );
    }

    #[test]
    fn cpf_progressivo() {
        assert_eq!(mascarar_cpf(""), "");
        assert_eq!(mascarar_cpf("529"), "529");
        assert_eq!(mascarar_cpf("52998"), "529.98");
        assert_eq!(mascarar_cpf("52998224"), "529.982.24");
        assert_eq!(mascarar_cpf("52998224725"), "529.982.247-25");
    }

    #[test]
    fn cpf_idempotente_e_inverso_exato() {
        for entrada in ["5", "5299822", "52998224725", "529.982.247-25"] {
            let uma_vez = mascarar_cpf(entrada);
            assert_eq!(mascarar_cpf(&uma_vez), uma_vez);
            assert_eq!(somente_digitos(&uma_vez), somente_digitos(entrada));
        }
    }

    #[test]
    fn telefone_progressivo() {
        assert_eq!(mascarar_telefone(""), "");
        assert_eq!(mascarar_telefone("1"), "(1");
        assert_eq!(mascarar_telefone("11"), "(11");
        assert_eq!(mascarar_telefone("11987"), "(11) 987");
        assert_eq!(mascarar_telefone("119876543"), "(11) 98765-43");
        assert_eq!(mascarar_telefone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn telefone_idempotente() {
        let mascarado = mascarar_telefone("11987654321");
        assert_eq!(mascarar_telefone(&mascarado), mascarado);
    }
}
