use serde::Serialize;
use validator::Validate;

use crate::models::{PerfilUsuario, StatusUsuario};

/// Corpo de `POST /usuarios`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovoUsuario {
    #[serde(rename = "nomUsuar")]
    #[validate(length(min = 1, message = "informe o nome"))]
    pub nome: String,
    #[serde(rename = "dscEmailUsuar")]
    #[validate(email(message = "e-mail inválido"))]
    pub email: String,
    #[serde(rename = "dscSenhaUsuar")]
    #[validate(length(min = 1, message = "informe a senha"))]
    pub senha: String,
    #[serde(rename = "numTelUsuar", skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(rename = "dscCargoUsuar", skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(rename = "indPerfUsuar")]
    pub perfil: PerfilUsuario,
    #[serde(rename = "indStatUsuar")]
    pub status: StatusUsuario,
    #[serde(rename = "idSupervUsuar", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
}

/// Corpo de `PUT /usuarios/:id`. A senha só vai ao wire quando redigitada.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AtualizaUsuario {
    #[serde(rename = "nomUsuar")]
    #[validate(length(min = 1, message = "informe o nome"))]
    pub nome: String,
    #[serde(rename = "dscEmailUsuar")]
    #[validate(email(message = "e-mail inválido"))]
    pub email: String,
    #[serde(rename = "dscSenhaUsuar", skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
    #[serde(rename = "numTelUsuar", skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(rename = "dscCargoUsuar", skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
    #[serde(rename = "indPerfUsuar")]
    pub perfil: PerfilUsuario,
    #[serde(rename = "indStatUsuar")]
    pub status: StatusUsuario,
    #[serde(rename = "idSupervUsuar", skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcionais_vazios_ficam_fora_do_wire() {
        let payload = NovoUsuario {
            nome: "Aline Silva".to_string(),
            email: "aline@empresa.com".to_string(),
            senha: "segredo".to_string(),
            telefone: None,
            cargo: None,
            perfil: PerfilUsuario::Solicitante,
            status: StatusUsuario::Ativo,
            supervisor: None,
        };
        let wire = serde_json::to_value(&payload).unwrap();
        let objeto = wire.as_object().unwrap();
        assert!(objeto.contains_key("nomUsuar"));
        assert!(objeto.contains_key("dscSenhaUsuar"));
        assert!(!objeto.contains_key("numTelUsuar"));
        assert!(!objeto.contains_key("idSupervUsuar"));
        assert_eq!(wire["indPerfUsuar"], "solicitante");
    }
}
