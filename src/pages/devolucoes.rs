//! Página de devoluções
//!
//! A página mantém duas listas: as reservas (para o seletor e o contexto da
//! reserva escolhida) e as devoluções já registradas. Só reservas que ainda
//! não foram encerradas aparecem no seletor.

use chrono::Utc;
use tracing::warn;

use crate::client::ApiClient;
use crate::dto::NovaDevolucao;
use crate::models::{Devolucao, Reserva, Usuario};

use super::{datetime_para_input, opt_numero, opt_texto, parse_datetime_local};

#[derive(Debug, Clone, Default)]
pub struct FormularioDevolucao {
    pub reserva: String,
    pub usuario: String,
    pub data: String,
    pub local: String,
    pub km_percorrido: String,
    pub combustivel_final: String,
    pub lataria: String,
    pub pneus: String,
    pub motor: String,
    pub observacoes: String,
    pub feedback: String,
}

#[derive(Debug)]
pub struct PaginaDevolucoes {
    client: ApiClient,
    pub reservas: Vec<Reserva>,
    pub devolucoes: Vec<Devolucao>,
    pub erro: String,
    pub form: FormularioDevolucao,
    /// Reserva escolhida no seletor, para exibir funcionário/veículo/datas.
    pub reserva_selecionada: Option<Reserva>,
}

impl PaginaDevolucoes {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            reservas: Vec::new(),
            devolucoes: Vec::new(),
            erro: String::new(),
            form: FormularioDevolucao::default(),
            reserva_selecionada: None,
        }
    }

    pub async fn carregar(&mut self) {
        match self.client.listar_reservas().await {
            Ok(reservas) => self.reservas = reservas,
            Err(e) => self.erro = e.mensagem_usuario(),
        }
        // a rota de listagem pode não estar exposta; a página funciona sem ela
        match self.client.listar_devolucoes().await {
            Ok(devolucoes) => self.devolucoes = devolucoes,
            Err(e) => warn!("GET /devolucoes não disponível: {e}"),
        }
    }

    /// Reservas que ainda aceitam devolução.
    pub fn reservas_ativas(&self) -> Vec<&Reserva> {
        self.reservas
            .iter()
            .filter(|r| !r.status.encerrada())
            .collect()
    }

    /// O usuário logado é quem devolve; a data sugerida é agora.
    pub fn preencher_usuario(&mut self, usuario: &Usuario) {
        self.form.usuario = usuario.id.clone();
        self.form.data = datetime_para_input(&Utc::now());
    }

    pub fn selecionar_reserva(&mut self, reserva_id: &str) {
        self.form.reserva = reserva_id.to_string();
        self.reserva_selecionada = self
            .reservas
            .iter()
            .find(|r| r.id == reserva_id)
            .cloned();
    }

    pub async fn registrar(&mut self) {
        self.erro.clear();
        if self.form.reserva.is_empty() {
            self.erro = "Selecione a reserva que está sendo devolvida.".to_string();
            return;
        }
        if self.form.usuario.is_empty() {
            self.erro = "Não foi possível identificar o usuário que está devolvendo.".to_string();
            return;
        }

        let data = if self.form.data.trim().is_empty() {
            Utc::now()
        } else {
            match parse_datetime_local(&self.form.data) {
                Ok(d) => d,
                Err(e) => {
                    self.erro = e.mensagem_usuario();
                    return;
                }
            }
        };
        let km_percorrido = match opt_numero(&self.form.km_percorrido) {
            Ok(v) => v,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };
        let combustivel_final = match opt_numero(&self.form.combustivel_final) {
            Ok(v) => v,
            Err(e) => {
                self.erro = e.mensagem_usuario();
                return;
            }
        };

        let payload = NovaDevolucao {
            reserva: self.form.reserva.clone(),
            usuario: self.form.usuario.clone(),
            data,
            local: opt_texto(&self.form.local),
            km_percorrido,
            combustivel_final,
            lataria: opt_texto(&self.form.lataria),
            pneus: opt_texto(&self.form.pneus),
            motor: opt_texto(&self.form.motor),
            observacoes: opt_texto(&self.form.observacoes),
            feedback: opt_texto(&self.form.feedback),
        };

        match self.client.registrar_devolucao(&payload).await {
            Ok(()) => {
                // a reserva devolvida muda de status, então as duas listas voltam
                self.carregar().await;
                let usuario = std::mem::take(&mut self.form.usuario);
                let data = std::mem::take(&mut self.form.data);
                self.form = FormularioDevolucao {
                    usuario,
                    data,
                    ..FormularioDevolucao::default()
                };
                self.reserva_selecionada = None;
            }
            Err(e) => self.erro = e.mensagem_usuario(),
        }
    }
}
