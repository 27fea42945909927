//! Página de documentos
//!
//! Documentos não mexem nas listas compartilhadas: a escrita recarrega só a
//! própria lista.

use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::dto::NovoDocumento;
use crate::models::{Documento, TipoDocumento};
use crate::utils::errors::{erro_formulario, AppResult};

#[derive(Debug, Clone)]
pub struct FormularioDocumento {
    pub veiculo: String,
    pub tipo: TipoDocumento,
    pub path: String,
    /// Valor do input `date` (AAAA-MM-DD); vazio significa sem vencimento.
    pub vencimento: String,
}

impl Default for FormularioDocumento {
    fn default() -> Self {
        Self {
            veiculo: String::new(),
            tipo: TipoDocumento::Crlv,
            path: String::new(),
            vencimento: String::new(),
        }
    }
}

impl FormularioDocumento {
    fn montar(&self) -> AppResult<NovoDocumento> {
        let vencimento = if self.vencimento.trim().is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(self.vencimento.trim(), "%Y-%m-%d")
                    .map_err(|_| erro_formulario("Data de vencimento inválida"))?,
            )
        };
        Ok(NovoDocumento {
            veiculo: self.veiculo.clone(),
            tipo: self.tipo,
            path: self.path.clone(),
            vencimento,
        })
    }
}

#[derive(Debug)]
pub struct PaginaDocumentos {
    client: ApiClient,
    pub documentos: Vec<Documento>,
    pub erro: String,
    pub form: FormularioDocumento,
}

impl PaginaDocumentos {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            documentos: Vec::new(),
            erro: String::new(),
            form: FormularioDocumento::default(),
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_documentos().await {
            Ok(documentos) => {
                self.documentos = documentos;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn criar(&mut self) {
        let payload = match self.form.montar() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.criar_documento(&payload).await {
            Ok(()) => {
                self.form = FormularioDocumento::default();
                self.carregar().await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    /// A confirmação ("Excluir documento?") fica a cargo de quem chama.
    pub async fn excluir(&mut self, id: &str) {
        match self.client.excluir_documento(id).await {
            Ok(()) => self.carregar().await,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vencimento_em_data_pura() {
        let form = FormularioDocumento {
            veiculo: "v1".to_string(),
            path: "/docs/crlv.pdf".to_string(),
            vencimento: "2026-12-31".to_string(),
            ..FormularioDocumento::default()
        };
        let payload = form.montar().unwrap();
        assert_eq!(
            payload.vencimento,
            NaiveDate::from_ymd_opt(2026, 12, 31)
        );

        let sem_vencimento = FormularioDocumento {
            veiculo: "v1".to_string(),
            path: "/docs/crlv.pdf".to_string(),
            ..FormularioDocumento::default()
        };
        assert!(sem_vencimento.montar().unwrap().vencimento.is_none());
    }
}
