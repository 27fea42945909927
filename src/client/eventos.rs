//! Eventos de veículo

use validator::Validate;

use super::ApiClient;
use crate::dto::NovoEvento;
use crate::models::{Evento, ListaEventos};
use crate::utils::errors::AppResult;

impl ApiClient {
    pub async fn listar_eventos(&self) -> AppResult<Vec<Evento>> {
        let lista: ListaEventos = self.get("/eventos").await?;
        Ok(lista.into_vec())
    }

    /// O histórico de eventos é só-acréscimo; não há edição nem exclusão.
    pub async fn criar_evento(&self, payload: &NovoEvento) -> AppResult<()> {
        payload.validate()?;
        self.post("/eventos", payload).await
    }
}
