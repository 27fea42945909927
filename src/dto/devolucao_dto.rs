use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// Corpo de `POST /devolucoes`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovaDevolucao {
    #[serde(rename = "idReservaDevol")]
    #[validate(length(min = 1, message = "selecione a reserva"))]
    pub reserva: String,
    #[serde(rename = "idUsuarDevol")]
    #[validate(length(min = 1, message = "informe quem está devolvendo"))]
    pub usuario: String,
    #[serde(rename = "datDevol")]
    pub data: DateTime<Utc>,
    #[serde(rename = "dscLocalDevol", skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(rename = "qtdKmPercDevol", skip_serializing_if = "Option::is_none")]
    pub km_percorrido: Option<f64>,
    #[serde(rename = "valCombFinalDevol", skip_serializing_if = "Option::is_none")]
    pub combustivel_final: Option<f64>,
    #[serde(rename = "dscLatariaDevol", skip_serializing_if = "Option::is_none")]
    pub lataria: Option<String>,
    #[serde(rename = "dscPneusDevol", skip_serializing_if = "Option::is_none")]
    pub pneus: Option<String>,
    #[serde(rename = "dscMotorDevol", skip_serializing_if = "Option::is_none")]
    pub motor: Option<String>,
    #[serde(rename = "dscObsDevol", skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(rename = "dscFeedbkDevol", skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}
