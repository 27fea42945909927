//! Modelo de Veiculo

use serde::{Deserialize, Serialize};

use super::Entidade;

/// Estado do veículo - mapeia `indStatVeic`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusVeiculo {
    #[serde(rename = "disponivel")]
    Disponivel,
    #[serde(rename = "reservado")]
    Reservado,
    #[serde(rename = "em_manutencao")]
    EmManutencao,
    #[serde(rename = "indisponivel")]
    Indisponivel,
}

/// Categoria do veículo - mapeia `dscTipoVeic`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TipoVeiculo {
    #[serde(rename = "carro")]
    Carro,
    #[serde(rename = "moto")]
    Moto,
    #[serde(rename = "van")]
    Van,
    #[serde(rename = "triciclo")]
    Triciclo,
    #[serde(rename = "trator")]
    Trator,
    #[serde(rename = "barco")]
    Barco,
    #[serde(rename = "aviao_pequeno")]
    AviaoPequeno,
    #[serde(rename = "outro")]
    Outro,
}

/// Combustível - mapeia `dscCombustVeic` (os valores do wire carregam acento)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Combustivel {
    #[serde(rename = "gasolina")]
    Gasolina,
    #[serde(rename = "etanol")]
    Etanol,
    #[serde(rename = "diesel")]
    Diesel,
    #[serde(rename = "elétrico")]
    Eletrico,
    #[serde(rename = "híbrido")]
    Hibrido,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Veiculo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "dscFabricVeic", default, skip_serializing_if = "Option::is_none")]
    pub fabricante: Option<String>,
    #[serde(rename = "dscModelVeic", default, skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    // placa é opcional para barco, trator etc.
    #[serde(rename = "dscPlacaVeic", default, skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    #[serde(rename = "dscCorVeic", default, skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(rename = "dscCombustVeic")]
    pub combustivel: Combustivel,
    #[serde(rename = "dscTipoVeic")]
    pub tipo: TipoVeiculo,
    #[serde(rename = "qtdPortaVeic", default)]
    pub portas: u32,
    #[serde(rename = "dscOpcionVeic", default)]
    pub opcionais: Vec<String>,
    #[serde(rename = "dscRestrVeic", default, skip_serializing_if = "Option::is_none")]
    pub restricao: Option<String>,
    #[serde(rename = "dscTipoHabVeic", default, skip_serializing_if = "Option::is_none")]
    pub habilitacao: Option<String>,
    #[serde(rename = "indStatVeic")]
    pub status: StatusVeiculo,
}

impl Veiculo {
    /// Rótulo de dropdown: modelo (ou fabricante) seguido da placa quando houver.
    pub fn rotulo(&self) -> String {
        let nome = self
            .modelo
            .as_deref()
            .or(self.fabricante.as_deref())
            .unwrap_or("Veículo");
        match self.placa.as_deref() {
            Some(placa) => format!("{} - {}", nome, placa),
            None => nome.to_string(),
        }
    }
}

impl Entidade for Veiculo {
    fn id(&self) -> &str {
        &self.id
    }
}
