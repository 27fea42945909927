//! Veículos

use validator::Validate;

use super::ApiClient;
use crate::dto::NovoVeiculo;
use crate::models::Veiculo;
use crate::utils::errors::AppResult;

impl ApiClient {
    /// `GET /veiculos` — array cru, sem envelope.
    pub async fn listar_veiculos(&self) -> AppResult<Vec<Veiculo>> {
        self.get("/veiculos").await
    }

    pub async fn criar_veiculo(&self, payload: &NovoVeiculo) -> AppResult<()> {
        payload.validate()?;
        self.post("/veiculos", payload).await
    }

    /// A edição manda o mesmo corpo da criação.
    pub async fn atualizar_veiculo(&self, id: &str, payload: &NovoVeiculo) -> AppResult<()> {
        payload.validate()?;
        self.put(&format!("/veiculos/{id}"), payload).await
    }

    pub async fn excluir_veiculo(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/veiculos/{id}")).await
    }
}
