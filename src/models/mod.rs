//! Modelos de entidade
//!
//! Registros trocados literalmente com a API remota. O cliente não impõe
//! invariantes além do que o serde consegue expressar; tudo é cópia
//! transitória, recarregada sob demanda.

pub mod beneficio;
pub mod devolucao;
pub mod documento;
pub mod evento;
pub mod relatorio;
pub mod reserva;
pub mod usuario;
pub mod veiculo;

pub use beneficio::*;
pub use devolucao::*;
pub use documento::*;
pub use evento::*;
pub use relatorio::*;
pub use reserva::*;
pub use usuario::*;
pub use veiculo::*;

use serde::{Deserialize, Serialize};

/// Entidade persistida pelo backend, identificada por `_id`.
pub trait Entidade {
    fn id(&self) -> &str;
}

/// Referência que o backend devolve ora como objeto populado, ora como id cru.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Ref<T> {
    Objeto(Box<T>),
    Id(String),
}

impl<T> Ref<T> {
    pub fn objeto(&self) -> Option<&T> {
        match self {
            Ref::Objeto(o) => Some(o),
            Ref::Id(_) => None,
        }
    }
}

impl<T: Entidade> Ref<T> {
    /// Id da entidade referenciada, populada ou não.
    pub fn id(&self) -> &str {
        match self {
            Ref::Objeto(o) => o.id(),
            Ref::Id(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_aceita_id_cru_e_objeto_populado() {
        let cru: Ref<Usuario> = serde_json::from_value(serde_json::json!("abc123")).unwrap();
        assert_eq!(cru.id(), "abc123");
        assert!(cru.objeto().is_none());

        let populado: Ref<Usuario> = serde_json::from_value(serde_json::json!({
            "_id": "abc123",
            "nomUsuar": "Aline Silva",
            "dscEmailUsuar": "aline@empresa.com",
            "indPerfUsuar": "supervisor",
            "indStatUsuar": "ativo"
        }))
        .unwrap();
        assert_eq!(populado.id(), "abc123");
        assert_eq!(populado.objeto().unwrap().rotulo(), "Aline Silva");
    }
}
