mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use frota_client::models::{PerfilUsuario, StatusUsuario, Usuario};
use frota_client::pages::reservas::PaginaReservas;

use common::{cliente_para, iniciar_stub};

fn supervisora() -> Usuario {
    Usuario {
        id: "u-sup".to_string(),
        nome: Some("Bruna Costa".to_string()),
        email: "bruna@empresa.com".to_string(),
        telefone: None,
        cargo: None,
        perfil: PerfilUsuario::Supervisor,
        status: StatusUsuario::Ativo,
        supervisor: None,
    }
}

#[tokio::test]
async fn aprovar_manda_o_aprovador_no_corpo_e_recarrega_a_lista() {
    let gets = Arc::new(AtomicUsize::new(0));
    let corpo_post: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let gets_rota = gets.clone();
    let corpo_rota = corpo_post.clone();
    let app = Router::new()
        .route(
            "/api/v1/reservas",
            get(move || {
                let gets = gets_rota.clone();
                async move {
                    gets.fetch_add(1, Ordering::SeqCst);
                    Json(json!([{
                        "_id": "r1",
                        "idSolicitUsuar": "u1",
                        "indStatReserva": "aprovada"
                    }]))
                }
            }),
        )
        .route(
            "/api/v1/reservas/:id/aprovar",
            post(move |Json(corpo): Json<serde_json::Value>| {
                let guardado = corpo_rota.clone();
                async move {
                    *guardado.lock().unwrap() = Some(corpo);
                    Json(json!({"ok": true}))
                }
            }),
        );

    let addr = iniciar_stub(app).await;
    let mut pagina = PaginaReservas::nova(cliente_para(addr));

    pagina.aprovar("r1", &supervisora()).await;

    assert!(pagina.erro.is_empty());
    assert_eq!(gets.load(Ordering::SeqCst), 1);
    assert_eq!(pagina.reservas.len(), 1);

    let corpo = corpo_post.lock().unwrap().clone().unwrap();
    assert_eq!(corpo["idSupervAprov"], "u-sup");
}

#[tokio::test]
async fn rejeicao_negada_mostra_a_mensagem_do_backend() {
    let app = Router::new().route(
        "/api/v1/reservas/:id/rejeitar",
        post(|| async {
            (
                StatusCode::FORBIDDEN,
                Json(json!({"erro": "Sem permissão para rejeitar"})),
            )
        }),
    );

    let addr = iniciar_stub(app).await;
    let mut pagina = PaginaReservas::nova(cliente_para(addr));

    pagina.rejeitar("r1").await;

    assert_eq!(pagina.erro, "Sem permissão para rejeitar");
    assert!(pagina.reservas.is_empty());
}

#[tokio::test]
async fn lista_em_envelope_tambem_e_aceita() {
    let app = Router::new().route(
        "/api/v1/reservas",
        get(|| async {
            Json(json!({
                "reservas": [{
                    "_id": "r1",
                    "idSolicitUsuar": {"_id": "u1", "dscEmailUsuar": "x@empresa.com",
                                        "indPerfUsuar": "solicitante", "indStatUsuar": "ativo"},
                    "indStatResrv": "pendente"
                }]
            }))
        }),
    );

    let addr = iniciar_stub(app).await;
    let mut pagina = PaginaReservas::nova(cliente_para(addr));

    pagina.carregar().await;

    assert!(pagina.erro.is_empty(), "{}", pagina.erro);
    assert_eq!(pagina.reservas.len(), 1);
    assert_eq!(pagina.reservas[0].solicitante.id(), "u1");
}
