// src/ports.rs

//! Capacidades externas que o cadastro consome.
//!
//! A aplicação que usa o crate decide a implementação concreta (resolvedor DNS
//! real, base de metadados telefônicos, hash criptográfico). O módulo
//! `adapters` traz implementações determinísticas prontas para uso e testes.

use async_trait::async_trait;

/// Um registro MX retornado pela consulta DNS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Consulta de registros MX de um domínio.
#[async_trait]
pub trait MxLookup: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> anyhow::Result<Vec<MxRecord>>;
}

/// Metadados de plano de numeração telefônica.
pub trait PhoneMetadata: Send + Sync {
    /// País (ISO-3166 alfa-2) deduzido pelo prefixo dos dígitos, se houver.
    fn infer_country(&self, raw_digits: &str) -> Option<String>;

    /// Número completo (com código do país) segundo o plano do país informado.
    fn canonicalize(&self, raw_digits: &str, country: &str) -> anyhow::Result<String>;
}

/// Hash irreversível de senha com fator de custo embutido.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str, cost: u32) -> anyhow::Result<String>;

    /// Fator de custo codificado no hash; erro se o valor não for um hash.
    fn cost_of(&self, encoded: &str) -> anyhow::Result<u32>;
}

pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}
