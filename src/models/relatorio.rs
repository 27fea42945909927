//! Linhas dos relatórios operacionais
//!
//! Cada struct espelha uma rota de `GET /relatorios/*`. Campos ausentes
//! viram zero/None: os cards do painel mostram "—" quando não há dado.

use serde::{Deserialize, Serialize};

/// `GET /relatorios/cards-resumo`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardsResumo {
    #[serde(default)]
    pub total_veiculos: i64,
    #[serde(default)]
    pub veiculos_disponiveis: i64,
    #[serde(default)]
    pub reservas_pendentes: i64,
    #[serde(default)]
    pub alocacoes_ativas: i64,
    #[serde(default)]
    pub custo_periodo: f64,
}

/// `GET /relatorios/utilizacao`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilizacaoVeiculo {
    pub veiculo_id: String,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub fabricante: Option<String>,
    #[serde(default)]
    pub placa: Option<String>,
    #[serde(default)]
    pub total_horas: f64,
    #[serde(default)]
    pub total_dias: f64,
    #[serde(default)]
    pub count_reservas: i64,
}

/// `GET /relatorios/custos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustoDetalhado {
    pub tipo: String,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub fabricante: Option<String>,
    #[serde(default)]
    pub placa: Option<String>,
    #[serde(default)]
    pub total_valor: f64,
    #[serde(default)]
    pub count_eventos: i64,
    #[serde(default)]
    pub media_valor: Option<f64>,
}

/// `GET /relatorios/sla`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlaAprovacao {
    #[serde(default)]
    pub tempo_medio_horas: f64,
    #[serde(default)]
    pub tempo_minimo_horas: f64,
    #[serde(default)]
    pub tempo_maximo_horas: f64,
    #[serde(default)]
    pub total_reservas: i64,
}

/// `GET /relatorios/reservas-status` e `GET /relatorios/veiculos-status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TotalPorStatus {
    pub status: String,
    #[serde(default)]
    pub total: i64,
}

/// `GET /relatorios/top-veiculos`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopVeiculo {
    pub veiculo_id: String,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub placa: Option<String>,
    #[serde(default)]
    pub total_horas: f64,
}

/// `GET /relatorios/custos-por-tipo`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustoPorTipo {
    pub tipo: String,
    #[serde(default)]
    pub total: f64,
}

/// `GET /relatorios/reservas-por-dia`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservasPorDia {
    pub dia: String,
    #[serde(default)]
    pub total: i64,
}
