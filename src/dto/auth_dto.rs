use serde::{Deserialize, Serialize};

use crate::models::Usuario;

/// Corpo de `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Resposta de login: token bearer + usuário autenticado
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: Usuario,
}
