//! Infra comum dos testes de integração: sobe um backend falso em porta
//! efêmera e devolve um cliente apontado para ele.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use frota_client::{ApiClient, ClientConfig};

pub async fn iniciar_stub(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn cliente_para(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig {
        api_base_url: format!("http://{addr}/api/v1"),
        api_key: "chave-teste".to_string(),
        timeout_secs: 5,
    };
    ApiClient::new(config).unwrap()
}
