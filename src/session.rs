//! Sessão do painel
//!
//! Guarda o usuário autenticado e as listas compartilhadas pelos seletores
//! de várias páginas (usuários, veículos e reservas). As listas são sempre
//! recarregadas por inteiro; o painel não mantém cache incremental.

use tokio::sync::RwLock;
use tracing::warn;

use crate::client::ApiClient;
use crate::models::{Reserva, Usuario, Veiculo};

/// Listas que alimentam os dropdowns de solicitante, veículo e reserva.
#[derive(Debug, Default)]
pub struct ListasCompartilhadas {
    pub usuarios: RwLock<Vec<Usuario>>,
    pub veiculos: RwLock<Vec<Veiculo>>,
    pub reservas: RwLock<Vec<Reserva>>,
}

impl ListasCompartilhadas {
    /// Recarrega as três listas de uma vez. Falha em uma delas vira lista
    /// vazia com aviso no log; a atualização nunca propaga erro.
    pub async fn atualizar(&self, client: &ApiClient) {
        let (usuarios, veiculos, reservas) = tokio::join!(
            client.listar_usuarios(),
            client.listar_veiculos(),
            client.listar_reservas(),
        );
        *self.usuarios.write().await = usuarios.unwrap_or_else(|e| {
            warn!("falha ao carregar usuários compartilhados: {e}");
            Vec::new()
        });
        *self.veiculos.write().await = veiculos.unwrap_or_else(|e| {
            warn!("falha ao carregar veículos compartilhados: {e}");
            Vec::new()
        });
        *self.reservas.write().await = reservas.unwrap_or_else(|e| {
            warn!("falha ao carregar reservas compartilhadas: {e}");
            Vec::new()
        });
    }
}

/// Estado de autenticação do painel.
#[derive(Debug)]
pub struct Sessao {
    pub client: ApiClient,
    pub usuario: Option<Usuario>,
    /// Mensagem exibida na tela de login (erro ou aviso do seed).
    pub erro_global: String,
}

impl Sessao {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            usuario: None,
            erro_global: String::new(),
        }
    }

    pub fn autenticado(&self) -> bool {
        self.usuario.is_some()
    }

    /// Faz login e, em caso de sucesso, já carrega as listas compartilhadas.
    /// Falha deixa a sessão intocada e preenche `erro_global`.
    pub async fn entrar(&mut self, email: &str, senha: &str, listas: &ListasCompartilhadas) {
        self.erro_global.clear();
        match self.client.login(email, senha).await {
            Ok(usuario) => {
                self.usuario = Some(usuario);
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro_global = e.mensagem_usuario(),
        }
    }

    pub async fn sair(&mut self) {
        self.client.limpar_token().await;
        self.usuario = None;
    }

    /// Cria o admin inicial em base vazia e avisa para logar em seguida.
    pub async fn criar_admin_seed(&mut self) {
        match self.client.seed_admin().await {
            Ok(()) => self.erro_global = "Admin criado. Faça login.".to_string(),
            Err(e) => self.erro_global = e.mensagem_usuario(),
        }
    }
}
