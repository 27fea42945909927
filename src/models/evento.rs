//! Modelo de Evento
//!
//! Ocorrência não ligada a reserva: manutenção, sinistro, inspeção etc.,
//! com custo e endereço opcionais.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entidade, Ref, Usuario, Veiculo};

/// Tipo do evento - mapeia `dscTipoEvent`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TipoEvento {
    #[serde(rename = "manutencao")]
    Manutencao,
    #[serde(rename = "revisao")]
    Revisao,
    #[serde(rename = "lavagem")]
    Lavagem,
    #[serde(rename = "troca_pneus")]
    TrocaPneus,
    #[serde(rename = "conserto")]
    Conserto,
    #[serde(rename = "batida")]
    Batida,
    #[serde(rename = "guincho")]
    Guincho,
    #[serde(rename = "roubo")]
    Roubo,
    #[serde(rename = "inspecao")]
    Inspecao,
    #[serde(rename = "lacracao")]
    Lacracao,
    #[serde(rename = "licenciamento")]
    Licenciamento,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evento {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "idVeicEvent")]
    pub veiculo: Ref<Veiculo>,
    #[serde(rename = "idUsuarEvent")]
    pub responsavel: Ref<Usuario>,
    #[serde(rename = "dscTipoEvent")]
    pub tipo: TipoEvento,
    #[serde(rename = "datEvent", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<DateTime<Utc>>,
    #[serde(rename = "dscLocalEvent", default, skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(rename = "valEvent", default, skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(rename = "dscDetalEvent", default, skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<String>,
    #[serde(rename = "dscComprovEvent", default, skip_serializing_if = "Option::is_none")]
    pub comprovante: Option<String>,
    #[serde(rename = "dscTipoLogrEvent", default, skip_serializing_if = "Option::is_none")]
    pub tipo_logradouro: Option<String>,
    #[serde(rename = "dscNomeLogrEvent", default, skip_serializing_if = "Option::is_none")]
    pub nome_logradouro: Option<String>,
    #[serde(rename = "numLogrEvent", default, skip_serializing_if = "Option::is_none")]
    pub numero_logradouro: Option<String>,
    #[serde(rename = "dscBairroEvent", default, skip_serializing_if = "Option::is_none")]
    pub bairro: Option<String>,
    #[serde(rename = "dscCidadeEvent", default, skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(rename = "dscEstadoEvent", default, skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(rename = "numCepEvent", default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

impl Entidade for Evento {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `GET /eventos` responde array cru ou `{"eventos": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListaEventos {
    Lista(Vec<Evento>),
    Envelope {
        #[serde(default)]
        eventos: Vec<Evento>,
    },
}

impl ListaEventos {
    pub fn into_vec(self) -> Vec<Evento> {
        match self {
            ListaEventos::Lista(eventos) => eventos,
            ListaEventos::Envelope { eventos } => eventos,
        }
    }
}
