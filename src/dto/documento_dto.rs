use chrono::NaiveDate;
use serde::Serialize;
use validator::Validate;

use crate::models::TipoDocumento;

/// Corpo de `POST /documentos` — o vencimento é data pura (AAAA-MM-DD).
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovoDocumento {
    #[serde(rename = "idVeicDoc")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "dscTipoDoc")]
    pub tipo: TipoDocumento,
    #[serde(rename = "dscPathDoc")]
    #[validate(length(min = 1, message = "informe o arquivo"))]
    pub path: String,
    #[serde(rename = "datVencDoc", skip_serializing_if = "Option::is_none")]
    pub vencimento: Option<NaiveDate>,
}
