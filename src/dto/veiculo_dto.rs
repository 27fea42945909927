use serde::Serialize;
use validator::Validate;

use crate::models::{Combustivel, StatusVeiculo, TipoVeiculo};

/// Corpo de `POST /veiculos` e `PUT /veiculos/:id`
///
/// A lista de opcionais vai sempre ao wire, ainda que vazia, como o
/// formulário envia.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovoVeiculo {
    #[serde(rename = "dscFabricVeic")]
    #[validate(length(min = 1, message = "informe o fabricante"))]
    pub fabricante: String,
    #[serde(rename = "dscModelVeic")]
    #[validate(length(min = 1, message = "informe o modelo"))]
    pub modelo: String,
    #[serde(rename = "dscPlacaVeic", skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    #[serde(rename = "dscCorVeic", skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(rename = "dscCombustVeic")]
    pub combustivel: Combustivel,
    #[serde(rename = "dscTipoVeic")]
    pub tipo: TipoVeiculo,
    #[serde(rename = "qtdPortaVeic")]
    pub portas: u32,
    #[serde(rename = "dscOpcionVeic")]
    pub opcionais: Vec<String>,
    #[serde(rename = "dscRestrVeic", skip_serializing_if = "Option::is_none")]
    pub restricao: Option<String>,
    #[serde(rename = "dscTipoHabVeic", skip_serializing_if = "Option::is_none")]
    pub habilitacao: Option<String>,
    #[serde(rename = "indStatVeic")]
    pub status: StatusVeiculo,
}
