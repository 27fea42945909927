//! Configuração de variáveis de ambiente
//!
//! Este módulo carrega a configuração do cliente a partir do ambiente.
//! Os padrões são os mesmos da configuração de desenvolvimento do painel.

use std::env;

/// Configuração do cliente da API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: env::var("FROTA_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/v1".to_string()),
            api_key: env::var("FROTA_API_KEY").unwrap_or_else(|_| "dev-key-local".to_string()),
            timeout_secs: env::var("FROTA_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl ClientConfig {
    /// Monta a URL completa de um caminho da API.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_concatena_base_e_caminho() {
        let config = ClientConfig {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            api_key: "dev-key-local".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(
            config.url("/veiculos"),
            "http://localhost:3000/api/v1/veiculos"
        );
    }
}
