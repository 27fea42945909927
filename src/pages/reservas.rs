//! Página de reservas

use crate::client::ApiClient;
use crate::dto::{AtualizaReserva, NovaReserva};
use crate::models::{Reserva, Usuario};
use crate::session::ListasCompartilhadas;
use crate::utils::errors::AppResult;

use super::{datetime_para_input, opt_datetime, opt_numero, opt_texto};

/// Formulário de reserva. Solicitante e supervisor são pré-preenchidos a
/// partir do usuário logado e sobrevivem ao envio; os demais campos são
/// limpos a cada criação.
#[derive(Debug, Clone, Default)]
pub struct FormularioReserva {
    pub solicitante: String,
    pub supervisor: String,
    pub veiculo: String,
    pub data_uso: String,
    pub devolucao_prevista: String,
    pub destino: String,
    pub finalidade: String,
    pub km_estimado: String,
    pub combustivel_estimado: String,
    pub observacoes: String,
}

impl FormularioReserva {
    fn montar_criacao(&self) -> AppResult<NovaReserva> {
        Ok(NovaReserva {
            solicitante: self.solicitante.clone(),
            supervisor: opt_texto(&self.supervisor),
            veiculo: self.veiculo.clone(),
            data_uso: opt_datetime(&self.data_uso)?,
            devolucao_prevista: opt_datetime(&self.devolucao_prevista)?,
            destino: opt_texto(&self.destino),
            finalidade: opt_texto(&self.finalidade),
            km_estimado: opt_numero(&self.km_estimado)?,
            combustivel_estimado: opt_numero(&self.combustivel_estimado)?,
            observacoes: opt_texto(&self.observacoes),
        })
    }

    fn montar_edicao(&self) -> AppResult<AtualizaReserva> {
        Ok(AtualizaReserva {
            supervisor: opt_texto(&self.supervisor),
            veiculo: self.veiculo.clone(),
            data_uso: opt_datetime(&self.data_uso)?,
            devolucao_prevista: opt_datetime(&self.devolucao_prevista)?,
            destino: opt_texto(&self.destino),
            finalidade: opt_texto(&self.finalidade),
            km_estimado: opt_numero(&self.km_estimado)?,
            combustivel_estimado: opt_numero(&self.combustivel_estimado)?,
            observacoes: opt_texto(&self.observacoes),
        })
    }

    fn limpar_campos_mutaveis(&mut self) {
        self.veiculo.clear();
        self.data_uso.clear();
        self.devolucao_prevista.clear();
        self.destino.clear();
        self.finalidade.clear();
        self.km_estimado.clear();
        self.combustivel_estimado.clear();
        self.observacoes.clear();
    }
}

/// Perfis que podem figurar como supervisor de aprovação.
pub fn supervisores(usuarios: &[Usuario]) -> Vec<&Usuario> {
    usuarios.iter().filter(|u| u.perfil.pode_aprovar()).collect()
}

#[derive(Debug)]
pub struct PaginaReservas {
    client: ApiClient,
    pub reservas: Vec<Reserva>,
    pub erro: String,
    pub form: FormularioReserva,
    pub editando: Option<String>,
}

impl PaginaReservas {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            reservas: Vec::new(),
            erro: String::new(),
            form: FormularioReserva::default(),
            editando: None,
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_reservas().await {
            Ok(reservas) => {
                self.reservas = reservas;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    /// Pré-preenche solicitante e supervisor com o usuário logado, sem
    /// sobrescrever o que já estiver selecionado igual.
    pub fn preencher_solicitante(&mut self, usuario: &Usuario) {
        self.form.solicitante = usuario.id.clone();
        self.form.supervisor = usuario
            .supervisor
            .as_ref()
            .map(|s| s.id().to_string())
            .unwrap_or_default();
    }

    pub async fn criar(&mut self, listas: &ListasCompartilhadas) {
        let payload = match self.form.montar_criacao() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.criar_reserva(&payload).await {
            Ok(()) => {
                self.carregar().await;
                listas.atualizar(&self.client).await;
                self.form.limpar_campos_mutaveis();
                self.editando = None;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn salvar_edicao(&mut self, listas: &ListasCompartilhadas) {
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
        match self.client.atualizar_reserva(&id, &payload).await {
            Ok(()) => {
                self.carregar().await;
                listas.atualizar(&self.client).await;
                self.editando = None;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub fn editar(&mut self, reserva: &Reserva) {
        self.editando = Some(reserva.id.clone());
        self.form = FormularioReserva {
            solicitante: reserva.solicitante.id().to_string(),
            supervisor: reserva
                .supervisor
                .as_ref()
                .map(|s| s.id().to_string())
                .unwrap_or_default(),
            veiculo: reserva
                .veiculo
                .as_ref()
                .map(|v| v.id().to_string())
                .unwrap_or_default(),
            data_uso: reserva
                .data_uso
                .as_ref()
                .map(datetime_para_input)
                .unwrap_or_default(),
            devolucao_prevista: reserva
                .devolucao_prevista
                .as_ref()
                .map(datetime_para_input)
                .unwrap_or_default(),
            destino: reserva.destino.clone().unwrap_or_default(),
            finalidade: reserva.finalidade.clone().unwrap_or_default(),
            km_estimado: reserva
                .km_estimado
                .map(|v| v.to_string())
                .unwrap_or_default(),
            combustivel_estimado: reserva
                .combustivel_estimado
                .map(|v| v.to_string())
                .unwrap_or_default(),
            observacoes: reserva.observacoes.clone().unwrap_or_default(),
        };
    }

    /// Aprova em nome do usuário logado. As transições de status recarregam
    /// só a lista da página.
    pub async fn aprovar(&mut self, id: &str, aprovador: &Usuario) {
        match self.client.aprovar_reserva(id, &aprovador.id).await {
            Ok(()) => self.carregar().await,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn rejeitar(&mut self, id: &str) {
        match self.client.rejeitar_reserva(id).await {
            Ok(()) => self.carregar().await,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn cancelar(&mut self, id: &str) {
        match self.client.cancelar_reserva(id).await {
            Ok(()) => self.carregar().await,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PerfilUsuario, StatusUsuario};

    fn usuario(perfil: PerfilUsuario) -> Usuario {
        Usuario {
            id: format!("{perfil:?}"),
            nome: None,
            email: "x@empresa.com".to_string(),
            telefone: None,
            cargo: None,
            perfil,
            status: StatusUsuario::Ativo,
            supervisor: None,
        }
    }

    #[test]
    fn solicitantes_nao_aparecem_como_supervisores() {
        let usuarios = vec![
            usuario(PerfilUsuario::Solicitante),
            usuario(PerfilUsuario::Supervisor),
            usuario(PerfilUsuario::GestorFrota),
            usuario(PerfilUsuario::Admin),
        ];
        let aprovadores = supervisores(&usuarios);
        assert_eq!(aprovadores.len(), 3);
        assert!(aprovadores
            .iter()
            .all(|u| u.perfil != PerfilUsuario::Solicitante));
    }

    #[test]
    fn criar_mantem_solicitante_e_limpa_o_resto() {
        let mut form = FormularioReserva {
            solicitante: "u1".to_string(),
            supervisor: "u2".to_string(),
            veiculo: "v1".to_string(),
            destino: "Campinas".to_string(),
            ..FormularioReserva::default()
        };
        form.limpar_campos_mutaveis();
        assert_eq!(form.solicitante, "u1");
        assert_eq!(form.supervisor, "u2");
        assert!(form.veiculo.is_empty());
        assert!(form.destino.is_empty());
    }
}
