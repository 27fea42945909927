//! Página de relatórios
//!
//! Carrega as nove rotas de relatório de uma vez para o mês de referência.
//! A carga é tudo-ou-nada: uma falha descarta o lote inteiro e mantém os
//! dados anteriores na tela.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::error;

use crate::client::ApiClient;
use crate::models::{
    CardsResumo, CustoDetalhado, CustoPorTipo, ReservasPorDia, SlaAprovacao, TopVeiculo,
    TotalPorStatus, UtilizacaoVeiculo,
};
use crate::utils::errors::{erro_formulario, AppResult};

/// Primeiro e último dia do mês de referência (AAAA-MM), como datas ISO.
pub fn inicio_fim_do_mes(mes_ref: &str) -> AppResult<(String, String)> {
    let invalido = || erro_formulario(format!("Mês de referência inválido: {mes_ref}"));
    let (ano, mes) = mes_ref.split_once('-').ok_or_else(invalido)?;
    let ano: i32 = ano.parse().map_err(|_| invalido())?;
    let mes: u32 = mes.parse().map_err(|_| invalido())?;
    let primeiro = NaiveDate::from_ymd_opt(ano, mes, 1).ok_or_else(invalido)?;
    let proximo = if mes == 12 {
        NaiveDate::from_ymd_opt(ano + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(ano, mes + 1, 1)
    }
    .ok_or_else(invalido)?;
    let ultimo = proximo.pred_opt().ok_or_else(invalido)?;
    Ok((primeiro.to_string(), ultimo.to_string()))
}

#[derive(Debug)]
pub struct PaginaRelatorios {
    client: ApiClient,
    /// Mês de referência no formato AAAA-MM; inicia no mês corrente.
    pub mes_ref: String,
    pub erro: String,
    pub cards: CardsResumo,
    pub utilizacao: Vec<UtilizacaoVeiculo>,
    pub custos_detalhados: Vec<CustoDetalhado>,
    pub sla: Option<SlaAprovacao>,
    pub reservas_status: Vec<TotalPorStatus>,
    pub veiculos_status: Vec<TotalPorStatus>,
    pub top_veiculos: Vec<TopVeiculo>,
    pub custos_por_tipo: Vec<CustoPorTipo>,
    pub reservas_por_dia: Vec<ReservasPorDia>,
}

impl PaginaRelatorios {
    pub fn nova(client: ApiClient) -> Self {
        let agora = Utc::now();
        Self {
            client,
            mes_ref: format!("{:04}-{:02}", agora.year(), agora.month()),
            erro: String::new(),
            cards: CardsResumo::default(),
            utilizacao: Vec::new(),
            custos_detalhados: Vec::new(),
            sla: None,
            reservas_status: Vec::new(),
            veiculos_status: Vec::new(),
            top_veiculos: Vec::new(),
            custos_por_tipo: Vec::new(),
            reservas_por_dia: Vec::new(),
        }
    }

    pub async fn carregar(&mut self) {
        self.erro.clear();
        let (ini, fim) = match inicio_fim_do_mes(&self.mes_ref) {
            Ok(par) => par,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };

        let resultado = tokio::try_join!(
            self.client.cards_resumo(&self.mes_ref),
            self.client.utilizacao(&self.mes_ref),
            self.client.custos(&ini, &fim),
            self.client.sla(&ini, &fim),
            self.client.reservas_status(),
            self.client.veiculos_status(),
            self.client.top_veiculos(&self.mes_ref),
            self.client.custos_por_tipo(&ini, &fim),
            self.client.reservas_por_dia(&ini, &fim),
        );

        match resultado {
            Ok((
                cards,
                utilizacao,
                custos_detalhados,
                sla,
                reservas_status,
                veiculos_status,
                top_veiculos,
                custos_por_tipo,
                reservas_por_dia,
            )) => {
                self.cards = cards;
                self.utilizacao = utilizacao;
                self.custos_detalhados = custos_detalhados;
                self.sla = Some(sla);
                self.reservas_status = reservas_status;
                self.veiculos_status = veiculos_status;
                self.top_veiculos = top_veiculos;
                self.custos_por_tipo = custos_por_tipo;
                self.reservas_por_dia = reservas_por_dia;
            }
            Err(e) => {
                error!("falha ao carregar relatórios: {e}");
                self.erro = "Não deu pra carregar relatórios. Confere se o token é \
                             admin/gestor e se as rotas /api/v1/relatorios/... estão expostas."
                    .to_string();
            }
        }
    }

    /// Troca o mês de referência e recarrega o lote.
    pub async fn selecionar_mes(&mut self, mes_ref: &str) {
        self.mes_ref = mes_ref.to_string();
        self.carregar().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limites_do_mes_cobrem_fevereiro_e_dezembro() {
        assert_eq!(
            inicio_fim_do_mes("2026-02").unwrap(),
            ("2026-02-01".to_string(), "2026-02-28".to_string())
        );
        assert_eq!(
            inicio_fim_do_mes("2024-02").unwrap(),
            ("2024-02-01".to_string(), "2024-02-29".to_string())
        );
        assert_eq!(
            inicio_fim_do_mes("2026-12").unwrap(),
            ("2026-12-01".to_string(), "2026-12-31".to_string())
        );
    }

    #[test]
    fn mes_invalido_da_erro() {
        assert!(inicio_fim_do_mes("2026").is_err());
        assert!(inicio_fim_do_mes("2026-13").is_err());
        assert!(inicio_fim_do_mes("abcd-ef").is_err());
    }
}
