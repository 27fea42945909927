//! Modelo de Devolucao
//!
//! Registro da entrega do veículo ao fim de uma reserva: condição, uso e
//! feedback de quem devolveu.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entidade, Ref, Reserva, Usuario};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Devolucao {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "idReservaDevol")]
    pub reserva: Ref<Reserva>,
    #[serde(rename = "idUsuarDevol")]
    pub usuario: Ref<Usuario>,
    #[serde(rename = "datDevol", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DateTime<Utc>>,
    #[serde(rename = "dscLocalDevol", default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(rename = "qtdKmPercDevol", default, skip_serializing_if = "Option::is_none")]
    pub km_percorrido: Option<f64>,
    #[serde(rename = "valCombFinalDevol", default, skip_serializing_if = "Option::is_none")]
    pub combustivel_final: Option<f64>,
    #[serde(rename = "dscLatariaDevol", default, skip_serializing_if = "Option::is_none")]
    pub lataria: Option<String>,
    #[serde(rename = "dscPneusDevol", default, skip_serializing_if = "Option::is_none")]
    pub pneus: Option<String>,
    #[serde(rename = "dscMotorDevol", default, skip_serializing_if = "Option::is_none")]
    pub motor: Option<String>,
    #[serde(rename = "dscObsDevol", default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(rename = "dscFeedbkDevol", default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Entidade for Devolucao {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `GET /devolucoes` responde array cru ou `{"devolucoes": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListaDevolucoes {
    Lista(Vec<Devolucao>),
    Envelope {
        #[serde(default)]
        devolucoes: Vec<Devolucao>,
    },
}

impl ListaDevolucoes {
    pub fn into_vec(self) -> Vec<Devolucao> {
        match self {
            ListaDevolucoes::Lista(devolucoes) => devolucoes,
            ListaDevolucoes::Envelope { devolucoes } => devolucoes,
        }
    }
}
