//! Visão geral

use crate::client::ApiClient;
use crate::models::CardsResumo;

/// Cards de resumo exibidos na entrada do painel.
#[derive(Debug)]
pub struct PaginaDashboard {
    client: ApiClient,
    pub cards: Option<CardsResumo>,
    pub erro: String,
}

impl PaginaDashboard {
    pub fn nova(client: ApiClient) -> Self {
        Self {
            client,
            cards: None,
            erro: String::new(),
        }
    }

    /// A rota pode estar restrita a admin/gestor; nesse caso os cards ficam
    /// vazios e o aviso orienta o usuário.
    pub async fn carregar(&mut self) {
        match self.client.cards_resumo_atual().await {
            Ok(cards) => {
                self.cards = Some(cards);
                self.erro.clear();
            }
            Err(_) => {
                self.erro = "Não foi possível carregar os indicadores. Verifique se o usuário \
                             tem permissão ou se a rota existe."
                    .to_string();
            }
        }
    }
}
