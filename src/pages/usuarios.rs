//! Página de usuários

use crate::client::ApiClient;
use crate::dto::{AtualizaUsuario, NovoUsuario};
use crate::models::{PerfilUsuario, StatusUsuario, Usuario};
use crate::session::ListasCompartilhadas;

use super::opt_texto;

/// Campos do formulário como os inputs entregam. A senha fica vazia na
/// edição; o hash nunca volta ao formulário.
#[derive(Debug, Clone)]
pub struct FormularioUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: String,
    pub cargo: String,
    pub perfil: PerfilUsuario,
    pub status: StatusUsuario,
    pub supervisor: String,
}

impl Default for FormularioUsuario {
    fn default() -> Self {
        Self {
            nome: String::new(),
            email: String::new(),
            senha: String::new(),
            telefone: String::new(),
            cargo: String::new(),
            perfil: PerfilUsuario::Solicitante,
            status: StatusUsuario::Ativo,
            supervisor: String::new(),
        }
    }
}

#[derive(Debug)]
pub struct PaginaUsuarios {
    client: ApiClient,
    pub usuarios: Vec<Usuario>,
    pub erro: String,
    pub form: FormularioUsuario,
    pub editando: Option<String>,
}

impl PaginaUsuarios {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            usuarios: Vec::new(),
            erro: String::new(),
            form: FormularioUsuario::default(),
            editando: None,
        }
    }

    /// Falha de carga preserva a lista anterior; só a mensagem muda.
    pub async fn carregar(&mut self) {
        match self.client.listar_usuarios().await {
            Ok(usuarios) => {
                self.usuarios = usuarios;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn criar(&mut self, listas: &ListasCompartilhadas) {
        let payload = NovoUsuario {
            nome: self.form.nome.clone(),
            email: self.form.email.clone(),
            senha: self.form.senha.clone(),
            telefone: opt_texto(&self.form.telefone),
            cargo: opt_texto(&self.form.cargo),
            perfil: self.form.perfil,
            status: self.form.status,
            supervisor: opt_texto(&self.form.supervisor),
        };
        match self.client.criar_usuario(&payload).await {
            Ok(()) => {
                self.form = FormularioUsuario::default();
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    /// Só roda com `editando` preenchido; a senha vazia fica fora do corpo.
    pub async fn salvar_edicao(&mut self, listas: &ListasCompartilhadas) {
        let Some(id) = self.editando.clone() else {
            return;
        };
        let payload = AtualizaUsuario {
            nome: self.form.nome.clone(),
            email: self.form.email.clone(),
            senha: opt_texto(&self.form.senha),
            telefone: opt_texto(&self.form.telefone),
            cargo: opt_texto(&self.form.cargo),
            perfil: self.form.perfil,
            status: self.form.status,
            supervisor: opt_texto(&self.form.supervisor),
        };
        match self.client.atualizar_usuario(&id, &payload).await {
            Ok(()) => {
                self.editando = None;
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    /// A confirmação ("Excluir este usuário?") fica a cargo de quem chama.
    pub async fn excluir(&mut self, id: &str, listas: &ListasCompartilhadas) {
        match self.client.excluir_usuario(id).await {
            Ok(()) => {
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub fn editar(&mut self, usuario: &Usuario) {
        self.editando = Some(usuario.id.clone());
        self.form = FormularioUsuario {
            nome: usuario.nome.clone().unwrap_or_default(),
            email: usuario.email.clone(),
            senha: String::new(),
            telefone: usuario.telefone.clone().unwrap_or_default(),
            cargo: usuario.cargo.clone().unwrap_or_default(),
            perfil: usuario.perfil,
            status: usuario.status,
            supervisor: usuario
                .supervisor
                .as_ref()
                .map(|s| s.id().to_string())
                .unwrap_or_default(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ref;

    fn usuario_exemplo() -> Usuario {
        Usuario {
            id: "u1".to_string(),
            nome: Some("Aline Silva".to_string()),
            email: "aline@empresa.com".to_string(),
            telefone: None,
            cargo: Some("Analista".to_string()),
            perfil: PerfilUsuario::Supervisor,
            status: StatusUsuario::Ativo,
            supervisor: Some(Ref::Id("u9".to_string())),
        }
    }

    #[test]
    fn editar_preenche_o_formulario_sem_senha() {
        let config = crate::config::environment::ClientConfig {
            api_base_url: "http://localhost:3000/api/v1".to_string(),
            api_key: "dev-key-local".to_string(),
            timeout_secs: 5,
        };
        let mut pagina = PaginaUsuarios::nova(ApiClient::new(config).unwrap());
        pagina.form.senha = "antiga".to_string();

        pagina.editar(&usuario_exemplo());

        assert_eq!(pagina.editando.as_deref(), Some("u1"));
        assert_eq!(pagina.form.nome, "Aline Silva");
        assert!(pagina.form.senha.is_empty());
        assert_eq!(pagina.form.supervisor, "u9");
    }
}
