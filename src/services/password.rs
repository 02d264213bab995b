use crate::{common::error::PasswordError, ports::PasswordHasher};

// Só conta como hash o que foi gerado com o custo do sistema
pub fn is_password_hashed(password: &str, hasher: &dyn PasswordHasher, cost: u32) -> bool {
    if password.is_empty() {
        return false;
    }
    matches!(hasher.cost_of(password), Ok(found) if found == cost)
}

pub fn validate_password(
    password: &str,
    hasher: &dyn PasswordHasher,
    cost: u32,
) -> Result<(), PasswordError> {
    if password.is_empty() {
        return Err(PasswordError::Empty);
    }
    if is_password_hashed(password, hasher, cost) {
        return Err(PasswordError::AlreadyHashed);
    }
    Ok(())
}

/// Valida e devolve o hash da senha em texto puro.
pub fn hash_password(
    password: &str,
    hasher: &dyn PasswordHasher,
    cost: u32,
) -> Result<String, PasswordError> {
    validate_password(password, hasher, cost)?;
    tracing::debug!(cost, "Gerando hash de senha");
    Ok(hasher.hash(password, cost)?)
}
