//! Sistema de tratamento de erros
//!
//! Este módulo define os tipos de erro do cliente e a redução de qualquer
//! falha à única string que a interface exibe ao lado do formulário ou da
//! tabela afetada.

use thiserror::Error;

/// Erros principais do cliente
#[derive(Error, Debug)]
pub enum AppError {
    /// Resposta não-2xx da API, já com a mensagem do envelope `erro`/`message`.
    #[error("{mensagem}")]
    Api { status: u16, mensagem: String },

    #[error("Falha de rede: {0}")]
    Rede(#[from] reqwest::Error),

    #[error("Dados inválidos: {0}")]
    Validacao(#[from] validator::ValidationErrors),

    /// Valor de formulário que não pôde ser convertido para o wire.
    #[error("{0}")]
    Formulario(String),
}

/// Resultado tipado para operações que podem falhar
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Mensagem única exibida ao usuário. A interface não distingue falha de
    /// rede, de autorização ou de validação além do texto.
    pub fn mensagem_usuario(&self) -> String {
        match self {
            AppError::Api { mensagem, .. } => mensagem.clone(),
            AppError::Rede(_) => "Erro na requisição".to_string(),
            AppError::Validacao(e) => e.to_string(),
            AppError::Formulario(m) => m.clone(),
        }
    }
}

/// Helper para erros de conversão de formulário
pub fn erro_formulario(mensagem: impl Into<String>) -> AppError {
    AppError::Formulario(mensagem.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensagem_da_api_e_repassada_sem_alteracao() {
        let erro = AppError::Api {
            status: 403,
            mensagem: "Sem permissão para aprovar".to_string(),
        };
        assert_eq!(erro.mensagem_usuario(), "Sem permissão para aprovar");
    }
}
