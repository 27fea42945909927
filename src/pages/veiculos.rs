//! Página de veículos

use crate::client::ApiClient;
use crate::dto::NovoVeiculo;
use crate::models::{Combustivel, StatusVeiculo, TipoVeiculo, Veiculo};
use crate::session::ListasCompartilhadas;
use crate::utils::errors::{erro_formulario, AppResult};

use super::opt_texto;

/// Formulário de veículo. Os opcionais são digitados separados por vírgula
/// e viram lista no envio; as portas chegam como texto do input numérico.
#[derive(Debug, Clone)]
pub struct FormularioVeiculo {
    pub fabricante: String,
    pub modelo: String,
    pub placa: String,
    pub cor: String,
    pub combustivel: Combustivel,
    pub tipo: TipoVeiculo,
    pub portas: String,
    pub opcionais: String,
    pub restricao: String,
    pub habilitacao: String,
    pub status: StatusVeiculo,
}

impl Default for FormularioVeiculo {
    fn default() -> Self {
        Self {
            fabricante: String::new(),
            modelo: String::new(),
            placa: String::new(),
            cor: String::new(),
            combustivel: Combustivel::Gasolina,
            tipo: TipoVeiculo::Carro,
            portas: "4".to_string(),
            opcionais: String::new(),
            restricao: String::new(),
            habilitacao: String::new(),
            status: StatusVeiculo::Disponivel,
        }
    }
}

impl FormularioVeiculo {
    fn montar(&self) -> AppResult<NovoVeiculo> {
        let portas = if self.portas.trim().is_empty() {
            4
        } else {
            self.portas
                .trim()
                .parse()
                .map_err(|_| erro_formulario("Quantidade de portas inválida"))?
        };
        Ok(NovoVeiculo {
            fabricante: self.fabricante.clone(),
            modelo: self.modelo.clone(),
            placa: opt_texto(&self.placa),
            cor: opt_texto(&self.cor),
            combustivel: self.combustivel,
            tipo: self.tipo,
            portas,
            opcionais: self
                .opcionais
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            restricao: opt_texto(&self.restricao),
            habilitacao: opt_texto(&self.habilitacao),
            status: self.status,
        })
    }
}

#[derive(Debug)]
pub struct PaginaVeiculos {
    client: ApiClient,
    pub veiculos: Vec<Veiculo>,
    pub erro: String,
    pub form: FormularioVeiculo,
    pub editando: Option<String>,
}

impl PaginaVeiculos {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            veiculos: Vec::new(),
            erro: String::new(),
            form: FormularioVeiculo::default(),
            editando: None,
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_veiculos().await {
            Ok(veiculos) => {
                self.veiculos = veiculos;
                self.erro.clear();
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn criar(&mut self, listas: &ListasCompartilhadas) {
        let payload = match self.form.montar() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.criar_veiculo(&payload).await {
            Ok(()) => {
                self.form = FormularioVeiculo::default();
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn salvar_edicao(&mut self, listas: &ListasCompartilhadas) {
        let Some(id) = self.editando.clone() else {
            return;
        };
        let payload = match self.form.montar() {
            Ok(p) => p,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        match self.client.atualizar_veiculo(&id, &payload).await {
            Ok(()) => {
                self.editando = None;
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub async fn excluir(&mut self, id: &str, listas: &ListasCompartilhadas) {
        match self.client.excluir_veiculo(id).await {
            Ok(()) => {
                self.carregar().await;
                listas.atualizar(&self.client).await;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }

    pub fn editar(&mut self, veiculo: &Veiculo) {
        self.editando = Some(veiculo.id.clone());
        self.form = FormularioVeiculo {
            fabricante: veiculo.fabricante.clone().unwrap_or_default(),
            modelo: veiculo.modelo.clone().unwrap_or_default(),
            placa: veiculo.placa.clone().unwrap_or_default(),
            cor: veiculo.cor.clone().unwrap_or_default(),
            combustivel: veiculo.combustivel,
            tipo: veiculo.tipo,
            portas: veiculo.portas.to_string(),
            opcionais: veiculo.opcionais.join(", "),
            restricao: veiculo.restricao.clone().unwrap_or_default(),
            habilitacao: veiculo.habilitacao.clone().unwrap_or_default(),
            status: veiculo.status,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcionais_separados_por_virgula_viram_lista() {
        let form = FormularioVeiculo {
            fabricante: "Fiat".to_string(),
            modelo: "Toro".to_string(),
            opcionais: "ar, direção , , vidro elétrico".to_string(),
            ..FormularioVeiculo::default()
        };
        let payload = form.montar().unwrap();
        assert_eq!(payload.opcionais, vec!["ar", "direção", "vidro elétrico"]);
        assert_eq!(payload.portas, 4);
    }

    #[test]
    fn portas_nao_numericas_dao_erro() {
        let form = FormularioVeiculo {
            fabricante: "Fiat".to_string(),
            modelo: "Toro".to_string(),
            portas: "quatro".to_string(),
            ..FormularioVeiculo::default()
        };
        assert!(form.montar().is_err());
    }
}
