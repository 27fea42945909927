//! Utilidades compartilhadas

pub mod errors;
