//! Página de benefícios (alocação permanente)
//!
//! Só admin e gestor de frota gerenciam alocações; os demais perfis apenas
//! consultam a lista.

use chrono::Utc;

use crate::client::ApiClient;
use crate::dto::{AtualizaBeneficio, NovoBeneficio};
use crate::models::{Beneficio, Usuario};
use crate::utils::errors::AppResult;

use super::{datetime_para_input, opt_datetime, opt_texto, parse_datetime_local};

#[derive(Debug, Clone, Default)]
pub struct FormularioBeneficio {
    pub usuario: String,
    pub veiculo: String,
    pub motorista_exclusivo: String,
    pub fim_de_semana: bool,
    pub local_estacionamento: String,
    pub prioridade: String,
    pub justificativa: String,
    pub inicio: String,
    pub fim: String,
}

impl FormularioBeneficio {
    fn prioridade(&self) -> i32 {
        self.prioridade.trim().parse().unwrap_or(0)
    }

    fn montar_criacao(&self) -> AppResult<NovoBeneficio> {
        let inicio = if self.inicio.trim().is_empty() {
            Utc::now()
        } else {
            parse_datetime_local(&self.inicio)?
        };
        Ok(NovoBeneficio {
            usuario: self.usuario.clone(),
            veiculo: self.veiculo.clone(),
            motorista_exclusivo: opt_texto(&self.motorista_exclusivo),
            fim_de_semana: self.fim_de_semana,
            local_estacionamento: opt_texto(&self.local_estacionamento),
            prioridade: self.prioridade(),
            justificativa: opt_texto(&self.justificativa),
            inicio,
            fim: opt_datetime(&self.fim)?,
        })
    }

    fn montar_edicao(&self) -> AppResult<AtualizaBeneficio> {
        Ok(AtualizaBeneficio {
            usuario: self.usuario.clone(),
            veiculo: self.veiculo.clone(),
            // None aqui vira null no wire e desfaz o vínculo no backend
            motorista_exclusivo: opt_texto(&self.motorista_exclusivo),
            fim_de_semana: self.fim_de_semana,
            local_estacionamento: opt_texto(&self.local_estacionamento),
            prioridade: self.prioridade(),
            justificativa: opt_texto(&self.justificativa),
            inicio: opt_datetime(&self.inicio)?,
            fim: opt_datetime(&self.fim)?,
        })
    }
}

#[derive(Debug)]
pub struct PaginaBeneficios {
    client: ApiClient,
    pub beneficios: Vec<Beneficio>,
    pub erro: String,
    pub form: FormularioBeneficio,
    pub editando: Option<String>,
}

impl PaginaBeneficios {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            beneficios: Vec::new(),
            erro: String::new(),
            form: FormularioBeneficio::default(),
            editando: None,
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_beneficios().await {
            Ok(beneficios) => {
                self.beneficios = beneficios;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    fn limpar_formulario(&mut self) {
        self.form = FormularioBeneficio::default();
        self.editando = None;
    }

    pub async fn criar(&mut self, usuario_logado: &Usuario) {
        if !usuario_logado.perfil.gerencia_beneficios() {
            self.erro = "Seu perfil não pode criar alocação.".to_string();
            return;
        }
        let payload = match self.form.montar_criacao() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.criar_beneficio(&payload).await {
            Ok(()) => {
                self.carregar().await;
                self.limpar_formulario();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn salvar_edicao(&mut self) {
        let Some(id) = self.editando.clone() else {
            return;
        };
        let payload = match self.form.montar_edicao() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.atualizar_beneficio(&id, &payload).await {
            Ok(()) => {
                self.carregar().await;
                self.limpar_formulario();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub fn editar(&mut self, beneficio: &Beneficio) {
        self.editando = Some(beneficio.id.clone());
        self.form = FormularioBeneficio {
            usuario: beneficio.usuario.id().to_string(),
            veiculo: beneficio.veiculo.id().to_string(),
            motorista_exclusivo: beneficio
                .motorista_exclusivo
                .as_ref()
                .map(|m| m.id().to_string())
                .unwrap_or_default(),
            fim_de_semana: beneficio.fim_de_semana,
            local_estacionamento: beneficio.local_estacionamento.clone().unwrap_or_default(),
            prioridade: beneficio.prioridade.to_string(),
            justificativa: beneficio.justificativa.clone().unwrap_or_default(),
            inicio: beneficio
                .inicio
                .as_ref()
                .map(datetime_para_input)
                .unwrap_or_default(),
            fim: beneficio
                .fim
                .as_ref()
                .map(datetime_para_input)
                .unwrap_or_default(),
        };
    }

    /// A confirmação ("Encerrar esta alocação?") fica a cargo de quem chama.
    pub async fn encerrar(&mut self, id: &str, usuario_logado: &Usuario) {
        if !usuario_logado.perfil.gerencia_beneficios() {
            return;
        }
        match self.client.encerrar_beneficio(id).await {
            Ok(()) => self.carregar().await,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::ClientConfig;
    use crate::models::{PerfilUsuario, StatusUsuario};

    fn usuario(perfil: PerfilUsuario) -> Usuario {
        Usuario {
            id: "u1".to_string(),
            nome: None,
            email: "x@empresa.com".to_string(),
            telefone: None,
            cargo: None,
            perfil,
            status: StatusUsuario::Ativo,
            supervisor: None,
        }
    }

    #[tokio::test]
    async fn solicitante_nao_cria_alocacao() {
        let config = ClientConfig {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            api_key: "dev-key-local".to_string(),
            timeout_secs: 5,
        };
        let mut pagina = PaginaBeneficios::nova(ApiClient::new(config).unwrap());
        pagina.criar(&usuario(PerfilUsuario::Solicitante)).await;
        assert_eq!(pagina.erro, "Seu perfil não pode criar alocação.");
    }

    #[test]
    fn prioridade_invalida_vira_zero() {
        let form = FormularioBeneficio {
            usuario: "u1".to_string(),
            veiculo: "v1".to_string(),
            prioridade: "alta".to_string(),
            ..FormularioBeneficio::default()
        };
        let payload = form.montar_criacao().unwrap();
        assert_eq!(payload.prioridade, 0);
    }
}
