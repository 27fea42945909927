//! Cliente HTTP da API de frota
//!
//! Toda requisição carrega a chave de API no cabeçalho `X-API-Key`; as rotas
//! autenticadas recebem também o bearer token obtido no login. Respostas
//! não-2xx são reduzidas à mensagem do envelope `erro`/`message` do backend.

pub mod auth;
pub mod beneficios;
pub mod devolucoes;
pub mod documentos;
pub mod eventos;
pub mod relatorios;
pub mod reservas;
pub mod usuarios;
pub mod veiculos;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::config::environment::ClientConfig;
use crate::utils::errors::{AppError, AppResult};

/// Cliente autenticado da API. Clonável; o token é compartilhado entre
/// os clones, então um login vale para todas as páginas.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn definir_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    pub async fn limpar_token(&self) {
        *self.token.write().await = None;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn requisicao(&self, metodo: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(metodo, self.config.url(path))
            .header("X-API-Key", &self.config.api_key);
        if let Some(token) = self.token.read().await.as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Envia e trata o status. Em não-2xx decodifica o envelope de erro do
    /// backend; sem envelope legível, a mensagem genérica.
    async fn enviar(&self, req: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        debug!(status = status.as_u16(), "resposta de erro da API");
        let corpo: serde_json::Value = resp.json().await.unwrap_or_default();
        let mensagem = corpo
            .get("erro")
            .and_then(|v| v.as_str())
            .or_else(|| corpo.get("message").and_then(|v| v.as_str()))
            .unwrap_or("Erro na requisição")
            .to_string();
        Err(AppError::Api {
            status: status.as_u16(),
            mensagem,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let req = self.requisicao(Method::GET, path).await;
        let resp = self.enviar(req).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post<B: Serialize>(&self, path: &str, corpo: &B) -> AppResult<()> {
        let req = self.requisicao(Method::POST, path).await.json(corpo);
        self.enviar(req).await?;
        Ok(())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        corpo: &B,
    ) -> AppResult<T> {
        let req = self.requisicao(Method::POST, path).await.json(corpo);
        let resp = self.enviar(req).await?;
        Ok(resp.json().await?)
    }

    /// POST sem corpo, usado pelas transições de status (aprovar, rejeitar...).
    pub(crate) async fn post_vazio(&self, path: &str) -> AppResult<()> {
        let req = self.requisicao(Method::POST, path).await;
        self.enviar(req).await?;
        Ok(())
    }

    pub(crate) async fn put<B: Serialize>(&self, path: &str, corpo: &B) -> AppResult<()> {
        let req = self.requisicao(Method::PUT, path).await.json(corpo);
        self.enviar(req).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> AppResult<()> {
        let req = self.requisicao(Method::DELETE, path).await;
        self.enviar(req).await?;
        Ok(())
    }
}
