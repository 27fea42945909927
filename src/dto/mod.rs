//! Payloads de escrita
//!
//! Este módulo contém os corpos de requisição que os formulários montam.
//! Campos opcionais vazios são omitidos do wire; os obrigatórios carregam
//! as regras de `validator` que as telas aplicavam.

pub mod auth_dto;
pub mod beneficio_dto;
pub mod devolucao_dto;
pub mod documento_dto;
pub mod evento_dto;
pub mod reserva_dto;
pub mod usuario_dto;
pub mod veiculo_dto;

pub use auth_dto::*;
pub use beneficio_dto::*;
pub use devolucao_dto::*;
pub use documento_dto::*;
pub use evento_dto::*;
pub use reserva_dto::*;
pub use usuario_dto::*;
pub use veiculo_dto::*;
