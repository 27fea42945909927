//! Usuários

use validator::Validate;

use super::ApiClient;
use crate::dto::{AtualizaUsuario, NovoUsuario};
use crate::models::{ListaUsuarios, Usuario};
use crate::utils::errors::AppResult;

impl ApiClient {
    /// `GET /usuarios?limit=200` — a rota devolve envelope `{ usuarios }`.
    pub async fn listar_usuarios(&self) -> AppResult<Vec<Usuario>> {
        let lista: ListaUsuarios = self.get("/usuarios?limit=200").await?;
        Ok(lista.usuarios)
    }

    pub async fn criar_usuario(&self, payload: &NovoUsuario) -> AppResult<()> {
        payload.validate()?;
        self.post("/usuarios", payload).await
    }

    pub async fn atualizar_usuario(&self, id: &str, payload: &AtualizaUsuario) -> AppResult<()> {
        payload.validate()?;
        self.put(&format!("/usuarios/{id}"), payload).await
    }

    pub async fn excluir_usuario(&self, id: &str) -> AppResult<()> {
        self.delete(&format!("/usuarios/{id}")).await
    }
}
