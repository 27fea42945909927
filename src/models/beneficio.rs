//! Modelo de Beneficio
//!
//! Alocação permanente de veículo a um funcionário, fora do fluxo de
//! reserva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entidade, Ref, Usuario, Veiculo};

/// Estado da alocação - mapeia `indStatAloc`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusAlocacao {
    #[default]
    #[serde(rename = "ativa")]
    Ativa,
    #[serde(rename = "encerrada")]
    Encerrada,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Beneficio {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "idUsuarAloc")]
    pub usuario: Ref<Usuario>,
    #[serde(rename = "idVeicAloc")]
    pub veiculo: Ref<Veiculo>,
    #[serde(rename = "idMotExclAloc", default, skip_serializing_if = "Option::is_none")]
    pub motorista_exclusivo: Option<Ref<Usuario>>,
    #[serde(rename = "indFdsAloc", default)]
    pub fim_de_semana: bool,
    // o backend já devolveu esse campo sem o sufixo Aloc
    #[serde(
        rename = "dscLocalEstacAloc",
        alias = "dscLocalEstac",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub local_estacionamento: Option<String>,
    #[serde(rename = "numPriorAloc", default)]
    pub prioridade: i32,
    #[serde(rename = "dscJustfAloc", default, skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
    #[serde(rename = "datInicioAloc", default, skip_serializing_if = "Option::is_none")]
    pub inicio: Option<DateTime<Utc>>,
    #[serde(rename = "datFimAloc", default, skip_serializing_if = "Option::is_none")]
    pub fim: Option<DateTime<Utc>>,
    #[serde(rename = "indStatAloc", default)]
    pub status: StatusAlocacao,
}

impl Entidade for Beneficio {
    fn id(&self) -> &str {
        &self.id
    }
}
