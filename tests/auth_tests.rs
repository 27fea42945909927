mod common;

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use frota_client::{ListasCompartilhadas, Sessao};

use common::{cliente_para, iniciar_stub};

fn usuario_admin() -> serde_json::Value {
    json!({
        "_id": "u-admin",
        "nomUsuar": "Admin",
        "dscEmailUsuar": "admin@empresa.com",
        "indPerfUsuar": "admin",
        "indStatUsuar": "ativo"
    })
}

#[tokio::test]
async fn login_guarda_token_e_manda_bearer_nas_proximas_requisicoes() {
    let headers_vistos: Arc<Mutex<Vec<(Option<String>, Option<String>)>>> =
        Arc::new(Mutex::new(Vec::new()));
    let vistos = headers_vistos.clone();

    let app = Router::new()
        .route(
            "/api/v1/auth/login",
            post(|| async {
                Json(json!({"token": "tok-123", "usuario": usuario_admin()}))
            }),
        )
        .route(
            "/api/v1/usuarios",
            get(move |headers: HeaderMap| {
                let vistos = vistos.clone();
                async move {
                    let pegar = |nome: &str| {
                        headers
                            .get(nome)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    vistos
                        .lock()
                        .unwrap()
                        .push((pegar("authorization"), pegar("x-api-key")));
                    Json(json!({"usuarios": [usuario_admin()]}))
                }
            }),
        )
        .route("/api/v1/veiculos", get(|| async { Json(json!([])) }))
        .route("/api/v1/reservas", get(|| async { Json(json!([])) }));

    let addr = iniciar_stub(app).await;
    let listas = ListasCompartilhadas::default();
    let mut sessao = Sessao::nova(cliente_para(addr));

    sessao.entrar("admin@empresa.com", "admin123", &listas).await;

    assert!(sessao.autenticado());
    assert!(sessao.erro_global.is_empty());
    assert_eq!(sessao.client.token().await.as_deref(), Some("tok-123"));
    assert_eq!(listas.usuarios.read().await.len(), 1);

    let vistos = headers_vistos.lock().unwrap();
    let (auth, chave) = vistos.first().cloned().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer tok-123"));
    assert_eq!(chave.as_deref(), Some("chave-teste"));
}

#[tokio::test]
async fn login_recusado_nao_guarda_token_e_mostra_a_mensagem_do_backend() {
    let app = Router::new().route(
        "/api/v1/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"erro": "Credenciais inválidas"})),
            )
        }),
    );

    let addr = iniciar_stub(app).await;
    let listas = ListasCompartilhadas::default();
    let mut sessao = Sessao::nova(cliente_para(addr));

    sessao.entrar("admin@empresa.com", "senha-errada", &listas).await;

    assert!(!sessao.autenticado());
    assert_eq!(sessao.erro_global, "Credenciais inválidas");
    assert!(sessao.client.token().await.is_none());
}

#[tokio::test]
async fn seed_admin_avisa_para_fazer_login() {
    let app = Router::new().route(
        "/api/v1/auth/seed-admin",
        post(|| async { (StatusCode::CREATED, Json(json!({"ok": true}))) }),
    );

    let addr = iniciar_stub(app).await;
    let mut sessao = Sessao::nova(cliente_para(addr));

    sessao.criar_admin_seed().await;

    assert_eq!(sessao.erro_global, "Admin criado. Faça login.");
    assert!(!sessao.autenticado());
}

#[tokio::test]
async fn resposta_sem_envelope_vira_mensagem_generica() {
    let app = Router::new().route(
        "/api/v1/auth/login",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );

    let addr = iniciar_stub(app).await;
    let listas = ListasCompartilhadas::default();
    let mut sessao = Sessao::nova(cliente_para(addr));

    sessao.entrar("admin@empresa.com", "admin123", &listas).await;

    assert_eq!(sessao.erro_global, "Erro na requisição");
}
