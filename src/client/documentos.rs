//! Documentos de veículo

use validator::Validate;

use super::ApiClient;
use crate::dto::NovoDocumento;
use crate::models::Documento;
use crate::utils::errors::AppResult;

impl ApiClient {
    pub async fn listar_documentos(&self) -> AppResult<Vec<Documento>> {
        self.get("/documentos").await
    }

    pub async fn criar_documento(&self, payload: &NovoDocumento) -> AppResult<()> {
        payload.validate()?;
        self.post("/documentos", payload).await
    }

    pub async fn excluir_documento(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/documentos/{id}")).await
    }
}
