//! Relatórios operacionais
//!
//! Rotas mensais recebem `ano_mes=AAAA-MM`; as de período recebem
//! `ini`/`fim` como datas ISO (AAAA-MM-DD).

use super::ApiClient;
use crate::models::{
    CardsResumo, CustoDetalhado, CustoPorTipo, ReservasPorDia, SlaAprovacao, TopVeiculo,
    TotalPorStatus, UtilizacaoVeiculo,
};
use crate::utils::errors::AppResult;

impl ApiClient {
    pub async fn cards_resumo(&self, ano_mes: &str) -> AppResult<CardsResumo> {
        self.get(&format!("/relatorios/cards-resumo?ano_mes={ano_mes}"))
            .await
    }

    /// Versão sem filtro, usada pelos cards do dashboard.
    pub async fn cards_resumo_atual(&self) -> AppResult<CardsResumo> {
        self.get("/relatorios/cards-resumo").await
    }

    pub async fn utilizacao(&self, ano_mes: &str) -> AppResult<Vec<UtilizacaoVeiculo>> {
        self.get(&format!("/relatorios/utilizacao?ano_mes={ano_mes}"))
            .await
    }

    pub async fn custos(&self, ini: &str, fim: &str) -> AppResult<Vec<CustoDetalhado>> {
        self.get(&format!("/relatorios/custos?ini={ini}&fim={fim}"))
            .await
    }

    pub async fn sla(&self, ini: &str, fim: &str) -> AppResult<SlaAprovacao> {
        self.get(&format!("/relatorios/sla?ini={ini}&fim={fim}"))
            .await
    }

    pub async fn reservas_status(&self) -> AppResult<Vec<TotalPorStatus>> {
        self.get("/relatorios/reservas-status").await
    }

    pub async fn veiculos_status(&self) -> AppResult<Vec<TotalPorStatus>> {
        self.get("/relatorios/veiculos-status").await
    }

    pub async fn top_veiculos(&self, ano_mes: &str) -> AppResult<Vec<TopVeiculo>> {
        self.get(&format!("/relatorios/top-veiculos?ano_mes={ano_mes}"))
            .await
    }

    pub async fn custos_por_tipo(&self, ini: &str, fim: &str) -> AppResult<Vec<CustoPorTipo>> {
        self.get(&format!("/relatorios/custos-por-tipo?ini={ini}&fim={fim}"))
            .await
    }

    pub async fn reservas_por_dia(&self, ini: &str, fim: &str) -> AppResult<Vec<ReservasPorDia>> {
        self.get(&format!("/relatorios/reservas-por-dia?ini={ini}&fim={fim}"))
            .await
    }
}
