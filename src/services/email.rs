// src/services/email.rs

use std::{sync::LazyLock, time::Duration};

use regex::Regex;

use crate::{common::error::EmailError, ports::MxLookup};

pub const EMAIL_MIN_LENGTH: usize = 3;
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("regex de e-mail é estática e válida")
});

/// Só a parte sintática: vazio, tamanho e formato.
pub fn check_email_syntax(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::EmptyOrBadFormat);
    }
    if email.len() < EMAIL_MIN_LENGTH || email.len() > EMAIL_MAX_LENGTH {
        return Err(EmailError::EmptyOrBadFormat);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(EmailError::EmptyOrBadFormat);
    }
    Ok(())
}

/// Sintaxe + pelo menos um registro MX no domínio.
///
/// Erro de DNS, lista vazia e estouro do `timeout` contam como `NoMxRecord`.
///
/// Precisa rodar dentro de um runtime Tokio com o driver de tempo habilitado
/// (`tokio::time::timeout` entra em pânico fora dele).
pub async fn validate_email(
    email: &str,
    mx: &dyn MxLookup,
    timeout: Duration,
) -> Result<(), EmailError> {
    check_email_syntax(email)?;

    let Some((_, domain)) = email.split_once('@') else {
        return Err(EmailError::EmptyOrBadFormat);
    };

    match tokio::time::timeout(timeout, mx.lookup_mx(domain)).await {
        Ok(Ok(records)) if !records.is_empty() => Ok(()),
        Ok(Ok(_)) => {
            tracing::debug!(domain, "Domínio sem registros MX");
            Err(EmailError::NoMxRecord)
        }
        Ok(Err(e)) => {
            tracing::warn!(domain, error = %e, "Falha na consulta MX");
            Err(EmailError::NoMxRecord)
        }
        Err(_) => {
            tracing::warn!(domain, ?timeout, "Consulta MX excedeu o tempo limite");
            Err(EmailError::NoMxRecord)
        }
    }
}
