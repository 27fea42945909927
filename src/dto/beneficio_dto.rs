use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::Validate;

/// Corpo de `POST /beneficios`
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NovoBeneficio {
    #[serde(rename = "idUsuarAloc")]
    #[validate(length(min = 1, message = "selecione o usuário beneficiado"))]
    pub usuario: String,
    #[serde(rename = "idVeicAloc")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "idMotExclAloc", skip_serializing_if = "Option::is_none")]
    pub motorista_exclusivo: Option<String>,
    #[serde(rename = "indFdsAloc")]
    pub fim_de_semana: bool,
    #[serde(rename = "dscLocalEstacAloc", skip_serializing_if = "Option::is_none")]
    pub local_estacionamento: Option<String>,
    #[serde(rename = "numPriorAloc")]
    pub prioridade: i32,
    #[serde(rename = "dscJustfAloc", skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
    #[serde(rename = "datInicioAloc")]
    pub inicio: DateTime<Utc>,
    #[serde(rename = "datFimAloc", skip_serializing_if = "Option::is_none")]
    pub fim: Option<DateTime<Utc>>,
}

/// Corpo de `PUT /beneficios/:id`
///
/// Diferente da criação, limpar o motorista exclusivo manda `null`
/// explícito para o backend desfazer o vínculo.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AtualizaBeneficio {
    #[serde(rename = "idUsuarAloc")]
    #[validate(length(min = 1, message = "selecione o usuário beneficiado"))]
    pub usuario: String,
    #[serde(rename = "idVeicAloc")]
    #[validate(length(min = 1, message = "selecione o veículo"))]
    pub veiculo: String,
    #[serde(rename = "idMotExclAloc")]
    pub motorista_exclusivo: Option<String>,
    #[serde(rename = "indFdsAloc")]
    pub fim_de_semana: bool,
    #[serde(rename = "dscLocalEstacAloc", skip_serializing_if = "Option::is_none")]
    pub local_estacionamento: Option<String>,
    #[serde(rename = "numPriorAloc")]
    pub prioridade: i32,
    #[serde(rename = "dscJustfAloc", skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
    #[serde(rename = "datInicioAloc", skip_serializing_if = "Option::is_none")]
    pub inicio: Option<DateTime<Utc>>,
    #[serde(rename = "datFimAloc", skip_serializing_if = "Option::is_none")]
    pub fim: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atualizacao_manda_null_ao_limpar_motorista() {
        let payload = AtualizaBeneficio {
            usuario: "u1".to_string(),
            veiculo: "v1".to_string(),
            motorista_exclusivo: None,
            fim_de_semana: false,
            local_estacionamento: None,
            prioridade: 0,
            justificativa: None,
            inicio: None,
            fim: None,
        };
        let wire = serde_json::to_value(&payload).unwrap();
        assert!(wire["idMotExclAloc"].is_null());
        assert!(!wire.as_object().unwrap().contains_key("datFimAloc"));
    }
}
