// src/services/relatorio_service.rs
//
// Monta o relatório mensal: fechamento por caixa (saldo anterior,
// entradas, saídas, saldo final), a versão detalhada com os movimentos
// agrupados e a versão em PDF paginado.

use chrono::NaiveDate;
use genpdf::{elements, style, Element};

use crate::{
    common::error::AppError,
    db::FinanceiroRepository,
    domain::{agregador, mascaras},
    models::financeiro::{Caixa, TipoMovimento},
    models::relatorio::{RelatorioFinanceiro, RelatorioResumido, ResumoCaixa},
};

const CAIXAS: [Caixa; 3] = [Caixa::Financeiro, Caixa::Missionario, Caixa::Projetos];

#[derive(Clone)]
pub struct RelatorioService {
    repo: FinanceiroRepository,
}

impl RelatorioService {
    pub fn new(repo: FinanceiroRepository) -> Self {
        Self { repo }
    }

    // Intervalo [primeiro dia do mês, primeiro dia do mês seguinte).
    fn periodo(mes: u32, ano: i32) -> Result<(NaiveDate, NaiveDate), AppError> {
        let inicio = NaiveDate::from_ymd_opt(ano, mes, 1)
            .ok_or_else(|| AppError::ParametroInvalido(format!("Mês inválido: {}", mes)))?;
        let fim = if mes == 12 {
            NaiveDate::from_ymd_opt(ano + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(ano, mes + 1, 1)
        }
        .ok_or_else(|| AppError::ParametroInvalido(format!("Ano inválido: {}", ano)))?;

        Ok((inicio, fim))
    }

    async fn fechamento_caixas(
        &self,
        inicio: NaiveDate,
        fim: NaiveDate,
    ) -> Result<Vec<ResumoCaixa>, AppError> {
        let mut caixas = Vec::with_capacity(CAIXAS.len());

        for caixa in CAIXAS {
            let saldo_anterior = self.repo.saldo_anterior(caixa, inicio).await?;
            let total_entradas = self
                .repo
                .total_periodo(caixa, TipoMovimento::Entrada, inicio, fim)
                .await?;
            let total_saidas = self
                .repo
                .total_periodo(caixa, TipoMovimento::Saida, inicio, fim)
                .await?;

            caixas.push(ResumoCaixa {
                caixa,
                saldo_anterior,
                total_entradas,
                total_saidas,
                saldo_final: saldo_anterior + total_entradas - total_saidas,
            });
        }

        Ok(caixas)
    }

    /// Relatório detalhado: fechamentos mais os movimentos do mês
    /// agrupados em caixa -> movimento -> lista.
    pub async fn detalhado(&self, mes: u32, ano: i32) -> Result<RelatorioFinanceiro, AppError> {
        let (inicio, fim) = Self::periodo(mes, ano)?;

        let caixas = self.fechamento_caixas(inicio, fim).await?;
        let movimentos = self.repo.movimentos_periodo(inicio, fim).await?;

        Ok(RelatorioFinanceiro {
            mes,
            ano,
            caixas,
            movimentos: agregador::agrupar(movimentos),
        })
    }

    /// Relatório resumido: fechamentos e somas por tipo, sem itemização.
    pub async fn resumido(&self, mes: u32, ano: i32) -> Result<RelatorioResumido, AppError> {
        let (inicio, fim) = Self::periodo(mes, ano)?;

        let caixas = self.fechamento_caixas(inicio, fim).await?;
        let totais_por_tipo = self.repo.totais_por_tipo(inicio, fim).await?;

        Ok(RelatorioResumido {
            mes,
            ano,
            caixas,
            totais_por_tipo,
        })
    }

    /// Versão em PDF do relatório resumido, para impressão e arquivo.
    pub async fn pdf(&self, mes: u32, ano: i32) -> Result<Vec<u8>, AppError> {
        let relatorio = self.resumido(mes, ano).await?;

        // Carrega a fonte da pasta 'fonts/'
        let font_family = genpdf::fonts::from_files("./fonts", "Roboto", None).map_err(|_| {
            AppError::FonteNaoEncontrada("Fonte não encontrada na pasta ./fonts".to_string())
        })?;

        let mut doc = genpdf::Document::new(font_family);
        doc.set_title(format!("Relatório Financeiro {:02}/{}", mes, ano));
        let mut decorator = genpdf::SimplePageDecorator::new();
        decorator.set_margins(10);
        doc.set_page_decorator(decorator);

        let negrito = style::Style::new().bold();

        doc.push(
            elements::Paragraph::new("RELATÓRIO FINANCEIRO MENSAL")
                .styled(style::Style::new().bold().with_font_size(18)),
        );
        doc.push(elements::Paragraph::new(format!("Referência: {:02}/{}", mes, ano)));
        doc.push(elements::Break::new(1.5));

        // --- FECHAMENTO POR CAIXA ---
        for resumo in &relatorio.caixas {
            doc.push(
                elements::Paragraph::new(resumo.caixa.rotulo().to_uppercase())
                    .styled(style::Style::new().bold().with_font_size(14)),
            );

            let mut tabela = elements::TableLayout::new(vec![3, 2]);
            tabela.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));

            let linhas = [
                ("Saldo anterior", resumo.saldo_anterior),
                ("Total de entradas", resumo.total_entradas),
                ("Total de saídas", resumo.total_saidas),
                ("Saldo final", resumo.saldo_final),
            ];
            for (rotulo, valor) in linhas {
                tabela
                    .row()
                    .element(elements::Paragraph::new(rotulo))
                    .element(elements::Paragraph::new(mascaras::formatar_reais(valor)))
                    .push()
                    .map_err(|e| anyhow::anyhow!("Falha ao montar tabela do PDF: {}", e))?;
            }

            doc.push(tabela);
            doc.push(elements::Break::new(1));
        }

        // --- SOMAS POR TIPO ---
        doc.push(
            elements::Paragraph::new("RESUMO POR TIPO")
                .styled(style::Style::new().bold().with_font_size(14)),
        );

        let mut tabela = elements::TableLayout::new(vec![2, 2, 3, 2]);
        tabela.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));
        tabela
            .row()
            .element(elements::Paragraph::new("Caixa").styled(negrito))
            .element(elements::Paragraph::new("Movimento").styled(negrito))
            .element(elements::Paragraph::new("Tipo").styled(negrito))
            .element(elements::Paragraph::new("Total").styled(negrito))
            .push()
            .map_err(|e| anyhow::anyhow!("Falha ao montar tabela do PDF: {}", e))?;

        for total in &relatorio.totais_por_tipo {
            let caixa = total
                .caixa
                .map(|c| c.rotulo())
                .unwrap_or(agregador::NAO_CLASSIFICADO);
            let movimento = total
                .movimento
                .map(|m| m.rotulo())
                .unwrap_or(agregador::NAO_CLASSIFICADO);

            tabela
                .row()
                .element(elements::Paragraph::new(caixa))
                .element(elements::Paragraph::new(movimento))
                .element(elements::Paragraph::new(total.tipo.clone()))
                .element(elements::Paragraph::new(mascaras::formatar_reais(total.total)))
                .push()
                .map_err(|e| anyhow::anyhow!("Falha ao montar tabela do PDF: {}", e))?;
        }

        doc.push(tabela);

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Falha ao renderizar o PDF: {}", e))?;

        Ok(buffer)
    }
}
