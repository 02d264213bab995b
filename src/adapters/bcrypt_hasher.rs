// src/adapters/bcrypt_hasher.rs

use std::str::FromStr;

use bcrypt::HashParts;

use crate::ports::PasswordHasher;

#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptHasher;

impl PasswordHasher for BcryptHasher {
    fn hash(&self, plaintext: &str, cost: u32) -> anyhow::Result<String> {
        Ok(bcrypt::hash(plaintext, cost)?)
    }

    fn cost_of(&self, encoded: &str) -> anyhow::Result<u32> {
        // Valida o formato "$2b$<custo>$<salt+hash>" antes de ler o custo
        let parts = HashParts::from_str(encoded)?;
        Ok(parts.get_cost())
    }
}
