//! Modelo de Documento

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entidade, Ref, Veiculo};

/// Tipo do documento - mapeia `dscTipoDoc`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TipoDocumento {
    #[serde(rename = "crlv")]
    Crlv,
    #[serde(rename = "ipva")]
    Ipva,
    #[serde(rename = "seguro")]
    Seguro,
    #[serde(rename = "outro")]
    Outro,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Documento {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "idVeicDoc")]
    pub veiculo: Ref<Veiculo>,
    #[serde(rename = "dscTipoDoc")]
    pub tipo: TipoDocumento,
    #[serde(rename = "dscPathDoc", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "datVencDoc", default, skip_serializing_if = "Option::is_none")]
    pub vencimento: Option<DateTime<Utc>>,
}

impl Entidade for Documento {
    fn id(&self) -> &str {
        &self.id
    }
}
