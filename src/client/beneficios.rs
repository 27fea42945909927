//! Benefícios (alocações de veículo)

use validator::Validate;

use super::ApiClient;
use crate::dto::{AtualizaBeneficio, NovoBeneficio};
use crate::models::Beneficio;
use crate::utils::errors::AppResult;

impl ApiClient {
    pub async fn listar_beneficios(&self) -> AppResult<Vec<Beneficio>> {
        self.get("/beneficios").await
    }

    pub async fn criar_beneficio(&self, payload: &NovoBeneficio) -> AppResult<()> {
        payload.validate()?;
        self.post("/beneficios", payload).await
    }

    pub async fn atualizar_beneficio(&self, id: &str, payload: &AtualizaBeneficio) -> AppResult<()> {
        payload.validate()?;
        self.put(&format!("/beneficios/{id}"), payload).await
    }

    /// `POST /beneficios/:id/encerrar` — encerra a alocação sem excluí-la.
    pub async fn encerrar_beneficio(&self, id: &str) -> AppResult<()> {
        self.post_vazio(&format!("/beneficios/{id}/encerrar")).await
    }
}
