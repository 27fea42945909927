//! Configuração do cliente

pub mod environment;

pub use environment::ClientConfig;
