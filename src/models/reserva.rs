//! Modelo de Reserva
//!
//! Pedido de uso de veículo por janela de tempo, sujeito a aprovação do
//! supervisor. As transições de estado pertencem ao backend; o cliente só
//! dispara as ações e recarrega a lista.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entidade, Ref, Usuario, Veiculo};

/// Estado da reserva - mapeia `indStatReserva`
///
/// O backend já respondeu esse campo como `indStatResrv` em algumas rotas;
/// o alias absorve a divergência na leitura, e a escrita usa sempre
/// `indStatReserva`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusReserva {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "aprovada")]
    Aprovada,
    #[serde(rename = "rejeitada")]
    Rejeitada,
    #[serde(rename = "cancelada")]
    Cancelada,
    #[serde(rename = "concluida")]
    Concluida,
}

impl StatusReserva {
    /// Reservas nesses estados não aceitam mais devolução.
    pub fn encerrada(self) -> bool {
        matches!(self, Self::Concluida | Self::Cancelada | Self::Rejeitada)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reserva {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "idSolicitUsuar")]
    pub solicitante: Ref<Usuario>,
    #[serde(rename = "idSupervAprov", default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<Ref<Usuario>>,
    #[serde(rename = "idVeicReserva", default, skip_serializing_if = "Option::is_none")]
    pub veiculo: Option<Ref<Veiculo>>,
    #[serde(rename = "datUsoReserva", default, skip_serializing_if = "Option::is_none")]
    pub data_uso: Option<DateTime<Utc>>,
    #[serde(rename = "datDevPrevReserva", default, skip_serializing_if = "Option::is_none")]
    pub devolucao_prevista: Option<DateTime<Utc>>,
    #[serde(rename = "dscDestinoReserva", default, skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    #[serde(rename = "dscFinalidReserva", default, skip_serializing_if = "Option::is_none")]
    pub finalidade: Option<String>,
    #[serde(rename = "qtdKmEstReserva", default, skip_serializing_if = "Option::is_none")]
    pub km_estimado: Option<f64>,
    #[serde(rename = "valCombEstReserva", default, skip_serializing_if = "Option::is_none")]
    pub combustivel_estimado: Option<f64>,
    #[serde(rename = "dscObsReserva", default, skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
    #[serde(rename = "indStatReserva", alias = "indStatResrv")]
    pub status: StatusReserva,
}

impl Entidade for Reserva {
    fn id(&self) -> &str {
        &self.id
    }
}

/// `GET /reservas` responde ora um array cru, ora `{"reservas": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListaReservas {
    Lista(Vec<Reserva>),
    Envelope {
        #[serde(default)]
        reservas: Vec<Reserva>,
    },
}

impl ListaReservas {
    pub fn into_vec(self) -> Vec<Reserva> {
        match self {
            ListaReservas::Lista(reservas) => reservas,
            ListaReservas::Envelope { reservas } => reservas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_aceita_o_nome_de_campo_divergente() {
        let com_alias: Reserva = serde_json::from_value(json!({
            "_id": "r1",
            "idSolicitUsuar": "u1",
            "indStatResrv": "aprovada"
        }))
        .unwrap();
        assert_eq!(com_alias.status, StatusReserva::Aprovada);

        let normal: Reserva = serde_json::from_value(json!({
            "_id": "r2",
            "idSolicitUsuar": "u1",
            "indStatReserva": "pendente"
        }))
        .unwrap();
        assert_eq!(normal.status, StatusReserva::Pendente);
    }

    #[test]
    fn lista_aceita_array_cru_e_envelope() {
        let cru: ListaReservas = serde_json::from_value(json!([])).unwrap();
        assert!(cru.into_vec().is_empty());

        let envelope: ListaReservas = serde_json::from_value(json!({
            "reservas": [{
                "_id": "r1",
                "idSolicitUsuar": "u1",
                "indStatReserva": "pendente"
            }]
        }))
        .unwrap();
        assert_eq!(envelope.into_vec().len(), 1);
    }
}
