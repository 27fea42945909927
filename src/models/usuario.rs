//! Modelo de Usuario
//!
//! Funcionário com acesso ao painel. A senha nunca aparece no modelo de
//! leitura; ela só existe nos payloads de escrita.

use serde::{Deserialize, Serialize};

use super::{Entidade, Ref};

/// Perfil de acesso - mapeia `indPerfUsuar`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PerfilUsuario {
    #[serde(rename = "solicitante")]
    Solicitante,
    #[serde(rename = "supervisor")]
    Supervisor,
    #[serde(rename = "gestor_frota")]
    GestorFrota,
    #[serde(rename = "admin")]
    Admin,
}

impl PerfilUsuario {
    /// Perfis aceitos no dropdown de supervisor/aprovador de reserva.
    pub fn pode_aprovar(self) -> bool {
        matches!(self, Self::Supervisor | Self::GestorFrota | Self::Admin)
    }

    /// Perfis que administram alocações permanentes.
    pub fn gerencia_beneficios(self) -> bool {
        matches!(self, Self::GestorFrota | Self::Admin)
    }
}

/// Situação cadastral - mapeia `indStatUsuar`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusUsuario {
    #[serde(rename = "ativo")]
    Ativo,
    #[serde(rename = "inativo")]
    Inativo,
    #[serde(rename = "bloqueado")]
    Bloqueado,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Usuario {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nomUsuar", default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(rename = "dscEmailUsuar")]
    pub email: String,
    #[serde(rename = "numTelUsuar", default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(rename = "dscCargoUsuar", default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(rename = "indPerfUsuar")]
    pub perfil: PerfilUsuario,
    #[serde(rename = "indStatUsuar")]
    pub status: StatusUsuario,
    #[serde(rename = "idSupervUsuar", default, skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<Ref<Usuario>>,
}

impl Usuario {
    /// Nome para exibição: nome cadastrado ou, na falta dele, o e-mail.
    pub fn rotulo(&self) -> &str {
        self.nome.as_deref().unwrap_or(&self.email)
    }
}

impl Entidade for Usuario {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Envelope de `GET /usuarios`
#[derive(Debug, Deserialize)]
pub struct ListaUsuarios {
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
}
