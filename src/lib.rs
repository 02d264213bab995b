//! Validação e normalização dos dados cadastrais de um cliente: nome,
//! documento (CPF/CNPJ), e-mail, telefone e senha.
//!
//! As regras puras ficam em [`services`]; as que dependem de DNS, metadados
//! telefônicos ou hash de senha recebem a capacidade por trait ([`ports`]) e
//! são agregadas em [`CustomerService`].

pub mod adapters;
pub mod common;
pub mod config;
pub mod models;
pub mod ports;
pub mod services;
pub mod telemetry;

pub use common::error::{
    CustomerError, DocumentError, EmailError, NameError, PasswordError, PhoneError,
};
pub use config::{RequiredFields, Settings};
pub use models::CustomerRecord;
pub use ports::{IdGenerator, MxLookup, MxRecord, PasswordHasher, PhoneMetadata};
pub use services::CustomerService;
pub use services::checksum::{is_valid_cnpj, is_valid_cpf, is_valid_document};
