mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use frota_client::pages::documentos::PaginaDocumentos;
use frota_client::pages::usuarios::PaginaUsuarios;
use frota_client::ListasCompartilhadas;

use common::{cliente_para, iniciar_stub};

#[tokio::test]
async fn criar_documento_recarrega_a_lista_exatamente_uma_vez() {
    let gets = Arc::new(AtomicUsize::new(0));
    let corpo_post: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let gets_rota = gets.clone();
    let corpo_rota = corpo_post.clone();
    let app = Router::new().route(
        "/api/v1/documentos",
        get(move || {
            let gets = gets_rota.clone();
            async move {
                gets.fetch_add(1, Ordering::SeqCst);
                Json(json!([]))
            }
        })
        .post(move |Json(corpo): Json<serde_json::Value>| {
            let guardado = corpo_rota.clone();
            async move {
                *guardado.lock().unwrap() = Some(corpo);
                (StatusCode::CREATED, Json(json!({"ok": true})))
            }
        }),
    );

    let addr = iniciar_stub(app).await;
    let mut pagina = PaginaDocumentos::nova(cliente_para(addr));

    pagina.carregar().await;
    assert_eq!(gets.load(Ordering::SeqCst), 1);

    pagina.form.veiculo = "v1".to_string();
    pagina.form.path = "/docs/crlv.pdf".to_string();
    pagina.criar().await;

    assert!(pagina.erro.is_empty());
    assert_eq!(gets.load(Ordering::SeqCst), 2);

    let corpo = corpo_post.lock().unwrap().clone().unwrap();
    assert_eq!(corpo["idVeicDoc"], "v1");
    assert_eq!(corpo["dscTipoDoc"], "crlv");
    // vencimento vazio fica fora do wire
    assert!(corpo.get("datVencDoc").is_none());
    // formulário limpo após o sucesso
    assert!(pagina.form.veiculo.is_empty());
}

#[tokio::test]
async fn falha_de_carga_preserva_a_lista_anterior() {
    let chamadas = Arc::new(AtomicUsize::new(0));
    let chamadas_rota = chamadas.clone();
    let app = Router::new().route(
        "/api/v1/documentos",
        get(move || {
            let chamadas = chamadas_rota.clone();
            async move {
                if chamadas.fetch_add(1, Ordering::SeqCst) == 0 {
                    (
                        StatusCode::OK,
                        Json(json!([{
                            "_id": "d1",
                            "idVeicDoc": "v1",
                            "dscTipoDoc": "ipva",
                            "dscPathDoc": "/docs/ipva.pdf"
                        }])),
                    )
                } else {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"erro": "Banco fora do ar"})),
                    )
                }
            }
        }),
    );

    let addr = iniciar_stub(app).await;
    let mut pagina = PaginaDocumentos::nova(cliente_para(addr));

    pagina.carregar().await;
    assert_eq!(pagina.documentos.len(), 1);
    assert!(pagina.erro.is_empty());

    pagina.carregar().await;
    assert_eq!(pagina.documentos.len(), 1);
    assert_eq!(pagina.erro, "Banco fora do ar");
}

#[tokio::test]
async fn criar_usuario_tambem_atualiza_as_listas_compartilhadas() {
    let gets_usuarios = Arc::new(AtomicUsize::new(0));
    let gets_veiculos = Arc::new(AtomicUsize::new(0));
    let corpo_post: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let gets_u = gets_usuarios.clone();
    let corpo_rota = corpo_post.clone();
    let gets_v = gets_veiculos.clone();
    let app = Router::new()
        .route(
            "/api/v1/usuarios",
            get(move || {
                let gets = gets_u.clone();
                async move {
                    gets.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"usuarios": []}))
                }
            })
            .post(move |Json(corpo): Json<serde_json::Value>| {
                let guardado = corpo_rota.clone();
                async move {
                    *guardado.lock().unwrap() = Some(corpo);
                    (StatusCode::CREATED, Json(json!({"ok": true})))
                }
            }),
        )
        .route(
            "/api/v1/veiculos",
            get(move || {
                let gets = gets_v.clone();
                async move {
                    gets.fetch_add(1, Ordering::SeqCst);
                    Json(json!([]))
                }
            }),
        )
        .route("/api/v1/reservas", get(|| async { Json(json!([])) }));

    let addr = iniciar_stub(app).await;
    let listas = ListasCompartilhadas::default();
    let mut pagina = PaginaUsuarios::nova(cliente_para(addr));

    pagina.form.nome = "Aline Silva".to_string();
    pagina.form.email = "aline@empresa.com".to_string();
    pagina.form.senha = "segredo".to_string();
    pagina.form.supervisor = "u9".to_string();
    pagina.criar(&listas).await;

    assert!(pagina.erro.is_empty(), "{}", pagina.erro);
    // recarga da página + recarga compartilhada
    assert_eq!(gets_usuarios.load(Ordering::SeqCst), 2);
    assert_eq!(gets_veiculos.load(Ordering::SeqCst), 1);

    let corpo = corpo_post.lock().unwrap().clone().unwrap();
    assert_eq!(corpo["nomUsuar"], "Aline Silva");
    assert_eq!(corpo["idSupervUsuar"], "u9");
    // telefone vazio não vai ao wire
    assert!(corpo.get("numTelUsuar").is_none());
}

#[tokio::test]
async fn payload_invalido_nem_chega_na_api() {
    let posts = Arc::new(AtomicUsize::new(0));
    let posts_rota = posts.clone();
    let app = Router::new().route(
        "/api/v1/usuarios",
        post(move || {
            let posts = posts_rota.clone();
            async move {
                posts.fetch_add(1, Ordering::SeqCst);
                StatusCode::CREATED
            }
        }),
    );

    let addr = iniciar_stub(app).await;
    let listas = ListasCompartilhadas::default();
    let mut pagina = PaginaUsuarios::nova(cliente_para(addr));

    pagina.form.nome = "Sem Email".to_string();
    pagina.form.email = "não-é-email".to_string();
    pagina.form.senha = "x".to_string();
    pagina.criar(&listas).await;

    assert!(!pagina.erro.is_empty());
    assert_eq!(posts.load(Ordering::SeqCst), 0);
}
