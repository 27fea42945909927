//! Autenticação

use super::ApiClient;
use crate::dto::{LoginRequest, LoginResponse};
use crate::models::Usuario;
use crate::utils::errors::AppResult;

impl ApiClient {
    /// `POST /auth/login`. O token só é guardado se o login deu certo; uma
    /// falha deixa o cliente exatamente como estava.
    pub async fn login(&self, email: &str, senha: &str) -> AppResult<Usuario> {
        let corpo = LoginRequest {
            email: email.to_string(),
            senha: senha.to_string(),
        };
        let resposta: LoginResponse = self.post_json("/auth/login", &corpo).await?;
        self.definir_token(resposta.token).await;
        Ok(resposta.usuario)
    }

    /// `POST /auth/seed-admin` — cria o admin inicial em base vazia.
    pub async fn seed_admin(&self) -> AppResult<()> {
        self.post_vazio("/auth/seed-admin").await
    }
}
