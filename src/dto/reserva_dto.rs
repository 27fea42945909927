use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// Corpo de `POST /reservas`
///
/// O solicitante segue no corpo mesmo quando o backend o extrai do token.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovaReserva {
    #[serde(rename = "idSolicitUsuar")]
    #[validate(length(min = 1, message = "informe o solicitante"))]
    pub solicitante: String,
    #[serde(rename = "idSupervAprov", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(rename = "idVeicReserva")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "datUsoReserva", skip_serializing_if = "Option::is_none")]
    pub data_uso: Option<DateTime<Utc>>,
    #[serde(rename = "datDevPrevReserva", skip_serializing_if = "Option::is_none")]
    pub devolucao_prevista: Option<DateTime<Utc>>,
    #[serde(rename = "dscDestinoReserva", skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    #[serde(rename = "dscFinalidReserva", skip_serializing_if = "Option::is_none")]
    pub finalidade: Option<String>,
    #[serde(rename = "qtdKmEstReserva", skip_serializing_if = "Option::is_none")]
    pub km_estimado: Option<f64>,
    #[serde(rename = "valCombEstReserva", skip_serializing_if = "Option::is_none")]
    pub combustivel_estimado: Option<f64>,
    #[serde(rename = "dscObsReserva", skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// Corpo de `PUT /reservas/:id` — o solicitante não muda na edição.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AtualizaReserva {
    #[serde(rename = "idSupervAprov", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(rename = "idVeicReserva")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "datUsoReserva", skip_serializing_if = "Option::is_none")]
    pub data_uso: Option<DateTime<Utc>>,
    #[serde(rename = "datDevPrevReserva", skip_serializing_if = "Option::is_none")]
    pub devolucao_prevista: Option<DateTime<Utc>>,
    #[serde(rename = "dscDestinoReserva", skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    #[serde(rename = "dscFinalidReserva", skip_serializing_if = "Option::is_none")]
    pub finalidade: Option<String>,
    #[serde(rename = "qtdKmEstReserva", skip_serializing_if = "Option::is_none")]
    pub km_estimado: Option<f64>,
    #[serde(rename = "valCombEstReserva", skip_serializing_if = "Option::is_none")]
    pub combustivel_estimado: Option<f64>,
    #[serde(rename = "dscObsReserva", skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// Corpo de `POST /reservas/:id/aprovar` — identifica quem está aprovando.
#[derive(Debug, Clone, Serialize)]
pub struct AprovacaoReserva {
    #[serde(rename = "idSupervAprov")]
    pub supervisor: String,
}
