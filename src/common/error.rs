// src/common/error.rs

use thiserror::Error;

// Um tipo de erro por campo do cadastro. O `code()` é o identificador estável
// da regra que falhou; a mensagem é para humanos.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("O nome não pode ser vazio")]
    Empty,

    #[error("O nome deve ter pelo menos duas palavras")]
    SingleWord,

    #[error("O primeiro nome deve ter pelo menos duas letras")]
    FirstWordTooShort,

    #[error("O último nome deve ter pelo menos duas letras")]
    LastWordTooShort,
}

impl NameError {
    pub fn code(&self) -> &'static str {
        match self {
            NameError::Empty => "empty",
            NameError::SingleWord => "single-word",
            NameError::FirstWordTooShort => "first-word-too-short",
            NameError::LastWordTooShort => "last-word-too-short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("O documento deve ser um CPF ou CNPJ válido")]
    Invalid,
}

impl DocumentError {
    pub fn code(&self) -> &'static str {
        match self {
            DocumentError::Invalid => "invalid-document",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("O e-mail deve ter um formato de endereço válido")]
    EmptyOrBadFormat,

    // Inclui falha e timeout da consulta DNS
    #[error("O domínio do e-mail não possui registro MX")]
    NoMxRecord,
}

impl EmailError {
    pub fn code(&self) -> &'static str {
        match self {
            EmailError::EmptyOrBadFormat => "empty-or-bad-format",
            EmailError::NoMxRecord => "no-mx-record",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("O telefone deve ter um número válido")]
    Invalid,
}

impl PhoneError {
    pub fn code(&self) -> &'static str {
        match self {
            PhoneError::Invalid => "invalid-phone",
        }
    }
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("A senha não pode ser vazia")]
    Empty,

    #[error("A senha já está criptografada")]
    AlreadyHashed,

    // Falha do hasher, repassada sem alteração
    #[error("Erro ao gerar o hash da senha: {0}")]
    Hashing(#[from] anyhow::Error),
}

impl PasswordError {
    pub fn code(&self) -> &'static str {
        match self {
            PasswordError::Empty => "empty",
            PasswordError::AlreadyHashed => "already-hashed",
            PasswordError::Hashing(_) => "hashing-failed",
        }
    }
}

// Erro "guarda-chuva" das operações agregadas do cadastro.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error(transparent)]
    Phone(#[from] PhoneError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("Um ou mais campos são inválidos.")]
    Validation(#[from] validator::ValidationErrors),
}

impl CustomerError {
    pub fn code(&self) -> &'static str {
        match self {
            CustomerError::Name(e) => e.code(),
            CustomerError::Document(e) => e.code(),
            CustomerError::Email(e) => e.code(),
            CustomerError::Phone(e) => e.code(),
            CustomerError::Password(e) => e.code(),
            CustomerError::Validation(_) => "validation",
        }
    }
}

// Monta o erro de campo no formato do `validator`, como no motor de validação do CRM.
pub(crate) fn field_error(code: &'static str, message: String) -> validator::ValidationError {
    let mut err = validator::ValidationError::new(code);
    err.message = Some(message.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(NameError::SingleWord.code(), "single-word");
        assert_eq!(NameError::LastWordTooShort.code(), "last-word-too-short");
        assert_eq!(EmailError::NoMxRecord.code(), "no-mx-record");
        assert_eq!(PasswordError::AlreadyHashed.code(), "already-hashed");
        assert_eq!(
            PasswordError::Hashing(anyhow::anyhow!("boom")).code(),
            "hashing-failed"
        );
    }

    #[test]
    fn umbrella_keeps_inner_message_and_code() {
        let err: CustomerError = NameError::Empty.into();
        assert_eq!(err.code(), "empty");
        assert_eq!(err.to_string(), NameError::Empty.to_string());
    }

    #[test]
    fn field_error_carries_message() {
        let err = field_error("required", "campo obrigatório".to_string());
        assert_eq!(err.code, "required");
        assert_eq!(err.message.as_deref(), Some("campo obrigatório"));
    }
}
