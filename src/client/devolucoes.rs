//! Devoluções

use validator::Validate;

use super::ApiClient;
use crate::dto::NovaDevolucao;
use crate::models::{Devolucao, ListaDevolucoes};
use crate::utils::errors::AppResult;

impl ApiClient {
    pub async fn listar_devolucoes(&self) -> AppResult<Vec<Devolucao>> {
        let lista: ListaDevolucoes = self.get("/devolucoes").await?;
        Ok(lista.into_vec())
    }

    /// Devoluções só são criadas, nunca editadas ou excluídas pelo painel.
    pub async fn registrar_devolucao(&self, payload: &NovaDevolucao) -> AppResult<()> {
        payload.validate()?;
        self.post("/devolucoes", payload).await
    }
}
