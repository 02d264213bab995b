// src/config.rs

use anyhow::{Context, bail};
use std::{env, time::Duration};

// Campos que a validação agregada exige preenchidos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFields {
    pub name: bool,
    pub document: bool,
    pub email: bool,
    pub phone: bool,
    pub password: bool,
}

impl Default for RequiredFields {
    fn default() -> Self {
        Self {
            name: true,
            document: false,
            email: false,
            phone: false,
            password: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_phone_country: String,
    pub mx_lookup_timeout: Duration,
    /// Custo fixo do sistema para o hash de senha
    pub password_cost: u32,
    pub required: RequiredFields,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_phone_country: "BR".to_string(),
            mx_lookup_timeout: Duration::from_millis(3000),
            password_cost: bcrypt::DEFAULT_COST,
            required: RequiredFields::default(),
        }
    }
}

impl Settings {
    // Carrega o .env (se existir) e depois as variáveis do processo
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let settings = Self::from_lookup(|key| env::var(key).ok())?;

        tracing::info!(
            default_phone_country = %settings.default_phone_country,
            password_cost = settings.password_cost,
            "✅ Configuração do cadastro carregada"
        );
        Ok(settings)
    }

    // Mesma regra do `from_env`, mas lendo de qualquer fonte chave -> valor
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_phone_country = match lookup("DEFAULT_PHONE_COUNTRY") {
            Some(country) => parse_country(&country)?,
            None => defaults.default_phone_country,
        };

        let mx_lookup_timeout = match lookup("MX_LOOKUP_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("MX_LOOKUP_TIMEOUT_MS inválido: {ms:?}"))?,
            ),
            None => defaults.mx_lookup_timeout,
        };

        let password_cost = match lookup("PASSWORD_HASH_COST") {
            Some(cost) => cost
                .trim()
                .parse()
                .with_context(|| format!("PASSWORD_HASH_COST inválido: {cost:?}"))?,
            None => defaults.password_cost,
        };

        let flag = |key: &str, default: bool| -> anyhow::Result<bool> {
            lookup(key).map_or(Ok(default), |value| parse_bool(key, &value))
        };
        let required = RequiredFields {
            name: flag("REQUIRE_NAME", defaults.required.name)?,
            document: flag("REQUIRE_DOCUMENT", defaults.required.document)?,
            email: flag("REQUIRE_EMAIL", defaults.required.email)?,
            phone: flag("REQUIRE_PHONE", defaults.required.phone)?,
            password: flag("REQUIRE_PASSWORD", defaults.required.password)?,
        };

        Ok(Self {
            default_phone_country,
            mx_lookup_timeout,
            password_cost,
            required,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => bail!("{key} deve ser booleano, recebido {value:?}"),
    }
}

fn parse_country(value: &str) -> anyhow::Result<String> {
    let country = value.trim();
    if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_alphabetic()) {
        bail!("DEFAULT_PHONE_COUNTRY deve ser um código ISO-3166 de duas letras, recebido {value:?}");
    }
    Ok(country.to_ascii_uppercase())
}
