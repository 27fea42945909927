//! Cliente administrativo da frota
//!
//! Biblioteca cliente para a API REST de gestão de frota: tipos de entidade
//! fiéis ao wire, cliente HTTP autenticado (chave de API + bearer token) e a
//! camada de estado das páginas (listar / criar / atualizar / excluir) que o
//! painel administrativo usa.

pub mod client;
pub mod config;
pub mod dto;
pub mod models;
pub mod pages;
pub mod session;
pub mod utils;

pub use client::ApiClient;
pub use config::environment::ClientConfig;
pub use session::{ListasCompartilhadas, Sessao};
pub use utils::errors::{AppError, AppResult};
