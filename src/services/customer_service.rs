// src/services/customer_service.rs

use std::sync::Arc;

use crate::{
    adapters::{BcryptHasher, DialingPlanTable, UuidGenerator},
    common::error::{CustomerError, EmailError, PasswordError, PhoneError, field_error},
    config::Settings,
    models::customer::CustomerRecord,
    ports::{IdGenerator, MxLookup, PasswordHasher, PhoneMetadata},
    services::{email, password, phone},
};

#[derive(Clone)]
pub struct CustomerService {
    mx: Arc<dyn MxLookup>,
    phones: Arc<dyn PhoneMetadata>,
    hasher: Arc<dyn PasswordHasher>,
    ids: Arc<dyn IdGenerator>,
    settings: Settings,
}

impl CustomerService {
    pub fn new(
        mx: Arc<dyn MxLookup>,
        phones: Arc<dyn PhoneMetadata>,
        hasher: Arc<dyn PasswordHasher>,
        ids: Arc<dyn IdGenerator>,
        settings: Settings,
    ) -> Self {
        Self { mx, phones, hasher, ids, settings }
    }

    // Adaptadores do crate para telefone, senha e ID; o DNS vem de fora
    pub fn with_defaults(mx: Arc<dyn MxLookup>, settings: Settings) -> Self {
        Self::new(
            mx,
            Arc::new(DialingPlanTable::default()),
            Arc::new(BcryptHasher),
            Arc::new(UuidGenerator),
            settings,
        )
    }

    pub fn new_customer(&self) -> CustomerRecord {
        CustomerRecord::new(self.ids.new_id())
    }

    // =========================================================================
    //  E-MAIL
    // =========================================================================

    pub async fn validate_email(&self, record: &CustomerRecord) -> Result<(), EmailError> {
        email::validate_email(&record.email, self.mx.as_ref(), self.settings.mx_lookup_timeout)
            .await
    }

    // =========================================================================
    //  TELEFONE
    // =========================================================================

    pub fn get_formatted_phone(&self, record: &CustomerRecord) -> (u64, String) {
        phone::formatted_phone(
            record.phone_number,
            &record.phone_country,
            self.phones.as_ref(),
            &self.settings.default_phone_country,
        )
    }

    pub fn validate_phone(&self, record: &CustomerRecord) -> Result<(), PhoneError> {
        match self.get_formatted_phone(record) {
            (0, _) => Err(PhoneError::Invalid),
            _ => Ok(()),
        }
    }

    /// Normaliza ou apaga: em qualquer falha número e país ficam vazios.
    pub fn format_phone(&self, record: &mut CustomerRecord) -> Result<(), PhoneError> {
        let (number, country) = self.get_formatted_phone(record);
        record.phone_number = number;
        record.phone_country = country;

        if number == 0 {
            return Err(PhoneError::Invalid);
        }
        Ok(())
    }

    // =========================================================================
    //  SENHA
    // =========================================================================

    pub fn is_password_hashed(&self, record: &CustomerRecord) -> bool {
        password::is_password_hashed(
            &record.password,
            self.hasher.as_ref(),
            self.settings.password_cost,
        )
    }

    pub fn validate_password(&self, record: &CustomerRecord) -> Result<(), PasswordError> {
        password::validate_password(
            &record.password,
            self.hasher.as_ref(),
            self.settings.password_cost,
        )
    }

    pub fn format_password(&self, record: &mut CustomerRecord) -> Result<(), PasswordError> {
        record.password = password::hash_password(
            &record.password,
            self.hasher.as_ref(),
            self.settings.password_cost,
        )?;
        Ok(())
    }

    // =========================================================================
    //  CADASTRO COMPLETO
    // =========================================================================

    /// Valida todos os campos e junta as falhas, chave = nome do campo.
    ///
    /// Campo vazio só é erro ("required") se a configuração o exigir.
    pub async fn validate(&self, record: &CustomerRecord) -> Result<(), CustomerError> {
        let required = self.settings.required;
        let mut errors = validator::ValidationErrors::new();

        let mut check = |field: &'static str,
                         is_empty: bool,
                         must: bool,
                         result: Option<(&'static str, String)>| {
            if is_empty {
                if must {
                    errors.add(field, field_error("required", "Campo obrigatório".to_string()));
                }
            } else if let Some((code, message)) = result {
                errors.add(field, field_error(code, message));
            }
        };

        let name = record.validate_name().err().map(|e| (e.code(), e.to_string()));
        check("name", record.name.is_empty(), required.name, name);

        let document = record.validate_document().err().map(|e| (e.code(), e.to_string()));
        check("document", record.document == 0, required.document, document);

        let email = if record.email.is_empty() {
            None
        } else {
            self.validate_email(record).await.err().map(|e| (e.code(), e.to_string()))
        };
        check("email", record.email.is_empty(), required.email, email);

        let phone = self.validate_phone(record).err().map(|e| (e.code(), e.to_string()));
        check("phone_number", record.phone_number == 0, required.phone, phone);

        // Senha já com hash do sistema é um estado válido do cadastro
        let password = if self.is_password_hashed(record) {
            None
        } else {
            self.validate_password(record).err().map(|e| (e.code(), e.to_string()))
        };
        check("password", record.password.is_empty(), required.password, password);

        if !errors.is_empty() {
            tracing::debug!(
                id = record.id(),
                fields = ?errors.errors().keys().collect::<Vec<_>>(),
                "Cadastro inválido"
            );
            return Err(CustomerError::Validation(errors));
        }
        Ok(())
    }

    /// Formata nome, telefone e senha numa cópia do cadastro.
    ///
    /// Em erro o original fica intacto; não há mutação parcial entre campos.
    pub fn normalize(&self, record: &CustomerRecord) -> Result<CustomerRecord, CustomerError> {
        let mut normalized = record.clone();

        if !normalized.name.is_empty() {
            normalized.format_name()?;
        }
        if normalized.phone_number == 0 {
            normalized.phone_country.clear();
        } else {
            self.format_phone(&mut normalized)?;
        }
        if !normalized.password.is_empty() && !self.is_password_hashed(&normalized) {
            self.format_password(&mut normalized)?;
        }

        Ok(normalized)
    }
}
