//! Página de eventos de veículo

use chrono::Utc;

use crate::client::ApiClient;
use crate::dto::NovoEvento;
use crate::models::{Evento, TipoEvento, Usuario};
use crate::utils::errors::AppResult;

use super::{datetime_para_input, opt_numero, opt_texto, parse_datetime_local};

#[derive(Debug, Clone)]
pub struct FormularioEvento {
    pub veiculo: String,
    pub responsavel: String,
    pub tipo: TipoEvento,
    pub data: String,
    pub local: String,
    pub valor: String,
    pub detalhes: String,
    pub comprovante: String,
    pub tipo_logradouro: String,
    pub nome_logradouro: String,
    pub numero_logradouro: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl Default for FormularioEvento {
    fn default() -> Self {
        Self {
            veiculo: String::new(),
            responsavel: String::new(),
            tipo: TipoEvento::Manutencao,
            data: String::new(),
            local: String::new(),
            valor: String::new(),
            detalhes: String::new(),
            comprovante: String::new(),
            tipo_logradouro: String::new(),
            nome_logradouro: String::new(),
            numero_logradouro: String::new(),
            bairro: String::new(),
            cidade: String::new(),
            estado: String::new(),
            cep: String::new(),
        }
    }
}

impl FormularioEvento {
    fn montar(&self) -> AppResult<NovoEvento> {
        let data = if self.data.trim().is_empty() {
            Utc::now()
        } else {
            parse_datetime_local(&self.data)?
        };
        Ok(NovoEvento {
            veiculo: self.veiculo.clone(),
            responsavel: self.responsavel.clone(),
            tipo: self.tipo,
            data,
            local: opt_texto(&self.local),
            valor: opt_numero(&self.valor)?,
            detalhes: opt_texto(&self.detalhes),
            comprovante: opt_texto(&self.comprovante),
            tipo_logradouro: opt_texto(&self.tipo_logradouro),
            nome_logradouro: opt_texto(&self.nome_logradouro),
            numero_logradouro: opt_texto(&self.numero_logradouro),
            bairro: opt_texto(&self.bairro),
            cidade: opt_texto(&self.cidade),
            estado: opt_texto(&self.estado),
            cep: opt_texto(&self.cep),
        })
    }
}

#[derive(Debug)]
pub struct PaginaEventos {
    client: ApiClient,
    pub eventos: Vec<Evento>,
    pub erro: String,
    pub form: FormularioEvento,
}

impl PaginaEventos {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            eventos: Vec::new(),
            erro: String::new(),
            form: FormularioEvento::default(),
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_eventos().await {
            Ok(eventos) => self.eventos = eventos,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    /// O usuário logado entra como responsável e a data sugerida é agora.
    pub fn preencher_responsavel(&mut self, usuario: &Usuario) {
        self.form.responsavel = usuario.id.clone();
        self.form.data = datetime_para_input(&Utc::now());
    }

    pub async fn registrar(&mut self) {
        self.erro.clear();
        if self.form.veiculo.is_empty() {
            self.erro = "Selecione o veículo do evento.".to_string();
            return;
        }
        if self.form.responsavel.is_empty() {
            self.erro = "Selecione o responsável pelo evento.".to_string();
            return;
        }

        let payload = match self.form.montar() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.criar_evento(&payload).await {
            Ok(()) => {
                self.carregar().await;
                let responsavel = std::mem::take(&mut self.form.responsavel);
                self.form = FormularioEvento {
                    responsavel,
                    data: datetime_para_input(&Utc::now()),
                    ..FormularioEvento::default()
                };
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registrar_sem_veiculo_nem_chama_a_api() {
        let config = crate::config::environment::ClientConfig {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            api_key: "dev-key-local".to_string(),
            timeout_secs: 5,
        };
        let mut pagina = PaginaEventos::nova(ApiClient::new(config).unwrap());
        pagina.form.responsavel = "u1".to_string();
        pagina.registrar().await;
        assert_eq!(pagina.erro, "Selecione o veículo do evento.");
    }

    #[test]
    fn data_vazia_vira_agora() {
        let form = FormularioEvento {
            veiculo: "v1".to_string(),
            responsavel: "u1".to_string(),
            ..FormularioEvento::default()
        };
        let payload = form.montar().unwrap();
        assert!(payload.data <= Utc::now());
        assert!(payload.valor.is_none());
    }
}
