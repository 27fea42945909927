use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

use crate::models::TipoEvento;

/// Corpo de `POST /eventos`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovoEvento {
    #[serde(rename = "idVeicEvent")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "idUsuarEvent")]
    #[validate(length(min = 1, message = "selecione o responsável"))]
    pub responsavel: String,
    #[serde(rename = "dscTipoEvent")]
    pub tipo: TipoEvento,
    #[serde(rename = "datEvent")]
    pub data: DateTime<Utc>,
    #[serde(rename = "dscLocalEvent", skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(rename = "valEvent", skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(rename = "dscDetalEvent", skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<String>,
    #[serde(rename = "dscComprovEvent", skip_serializing_if = "Option::is_none")]
    pub comprovante: Option<String>,
    #[serde(rename = "dscTipoLogrEvent", skip_serializing_if = "Option::is_none")]
    pub tipo_logradouro: Option<String>,
    #[serde(rename = "dscNomeLogrEvent", skip_serializing_if = "Option::is_none")]
    pub nome_logradouro: Option<String>,
    #[serde(rename = "numLogrEvent", skip_serializing_if = "Option::is_none")]
    pub numero_logradouro: Option<String>,
    #[serde(rename = "dscBairroEvent", skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(rename = "dscCidadeEvent", skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(rename = "dscEstadoEvent", skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "numCepEvent", skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}
