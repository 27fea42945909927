//! Estado das páginas do painel
//!
//! Cada página é uma struct com o formulário em campos de texto cru (como
//! os inputs HTML entregam) e métodos que convertem, validam e chamam a
//! API. A regra geral de escrita é: sucesso limpa o formulário e recarrega
//! a lista da página exatamente uma vez; falha preserva o que o usuário
//! digitou e mostra a mensagem em `erro`.

pub mod beneficios;
pub mod dashboard;
pub mod devolucoes;
pub mod documentos;
pub mod eventos;
pub mod relatorios;
pub mod reservas;
pub mod usuarios;
pub mod veiculos;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::utils::errors::{erro_formulario, AppResult};

/// Converte o valor de um input `datetime-local` (AAAA-MM-DDTHH:MM),
/// tratado como UTC.
pub fn parse_datetime_local(valor: &str) -> AppResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(valor.trim(), "%Y-%m-%dT%H:%M")
        .map(|dt| dt.and_utc())
        .map_err(|_| erro_formulario(format!("Data/hora inválida: {valor}")))
}

/// Campo de data opcional: vazio vira `None` e fica fora do wire.
pub fn opt_datetime(valor: &str) -> AppResult<Option<DateTime<Utc>>> {
    if valor.trim().is_empty() {
        return Ok(None);
    }
    parse_datetime_local(valor).map(Some)
}

/// Campo de texto opcional: vazio ou só espaços vira `None`.
pub fn opt_texto(valor: &str) -> Option<String> {
    let limpo = valor.trim();
    if limpo.is_empty() {
        None
    } else {
        Some(limpo.to_string())
    }
}

/// Campo numérico opcional.
pub fn opt_numero(valor: &str) -> AppResult<Option<f64>> {
    let limpo = valor.trim();
    if limpo.is_empty() {
        return Ok(None);
    }
    limpo
        .parse()
        .map(Some)
        .map_err(|_| erro_formulario(format!("Número inválido: {valor}")))
}

/// Formata uma data para preencher um input `datetime-local` na edição.
pub fn datetime_para_input(data: &DateTime<Utc>) -> String {
    data.format("%Y-%m-%dT%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn datetime_local_vai_e_volta() {
        let data = parse_datetime_local("2026-03-15T08:30").unwrap();
        assert_eq!(data.hour(), 8);
        assert_eq!(datetime_para_input(&data), "2026-03-15T08:30");
    }

    #[test]
    fn campos_vazios_viram_none() {
        assert!(opt_datetime("  ").unwrap().is_none());
        assert!(opt_texto("").is_none());
        assert!(opt_numero(" ").unwrap().is_none());
    }

    #[test]
    fn numero_invalido_da_erro_de_formulario() {
        assert!(opt_numero("abc").is_err());
        assert_eq!(opt_numero("12.5").unwrap(), Some(12.5));
    }
}
