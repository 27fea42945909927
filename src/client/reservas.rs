//! Reservas

use validator::Validate;

use super::ApiClient;
use crate::dto::{AprovacaoReserva, AtualizaReserva, NovaReserva};
use crate::models::{ListaReservas, Reserva};
use crate::utils::errors::AppResult;

impl ApiClient {
    /// `GET /reservas` — ora array cru, ora envelope `{ reservas }`.
    pub async fn listar_reservas(&self) -> AppResult<Vec<Reserva>> {
        let lista: ListaReservas = self.get("/reservas").await?;
        Ok(lista.into_vec())
    }

    pub async fn criar_reserva(&self, payload: &NovaReserva) -> AppResult<()> {
        payload.validate()?;
        self.post("/reservas", payload).await
    }

    pub async fn atualizar_reserva(&self, id: &str, payload: &AtualizaReserva) -> AppResult<()> {
        payload.validate()?;
        self.put(&format!("/reservas/{id}"), payload).await
    }

    /// `POST /reservas/:id/aprovar` — o corpo identifica o aprovador.
    pub async fn aprovar_reserva(&self, id: &str, supervisor_id: &str) -> AppResult<()> {
        let corpo = AprovacaoReserva {
            supervisor: supervisor_id.to_string(),
        };
        self.post(&format!("/reservas/{id}/aprovar"), &corpo).await
    }

    pub async fn rejeitar_reserva(&self, id: &str) -> AppResult<()> {
        self.post_vazio(&format!("/reservas/{id}/rejeitar")).await
    }

    pub async fn cancelar_reserva(&self, id: &str) -> AppResult<()> {
        self.post_vazio(&format!("/reservas/{id}/cancelar")).await
    }
}
