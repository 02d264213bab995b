// src/models/customer.rs

use serde::{Deserialize, Serialize};

use crate::{
    common::error::{DocumentError, NameError},
    services::{checksum, name},
};

// Cadastro básico de um cliente. Campos vazios/zero significam "não informado".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    // Atribuído na criação e nunca alterado
    id: String,

    pub name: String,
    /// CPF ou CNPJ sem formatação; 0 = ausente
    pub document: u64,
    pub email: String,
    /// ISO-3166 alfa-2; vazio = deduzir pelo número
    pub phone_country: String,
    /// 0 = ausente
    pub phone_number: u64,
    /// Texto puro ou hash gerado com o custo do sistema
    pub password: String,
}

impl CustomerRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn validate_name(&self) -> Result<(), NameError> {
        name::validate_name(&self.name)
    }

    // Só altera o nome se ele for válido
    pub fn format_name(&mut self) -> Result<(), NameError> {
        self.name = name::format_name(&self.name)?;
        Ok(())
    }

    pub fn is_document_cpf(&self) -> bool {
        checksum::is_valid_cpf(self.document)
    }

    pub fn is_document_cnpj(&self) -> bool {
        checksum::is_valid_cnpj(self.document)
    }

    pub fn is_valid_document(&self) -> bool {
        checksum::is_valid_document(self.document)
    }

    pub fn validate_document(&self) -> Result<(), DocumentError> {
        if !self.is_valid_document() {
            return Err(DocumentError::Invalid);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_name(name: &str) -> CustomerRecord {
        CustomerRecord {
            name: name.to_string(),
            ..CustomerRecord::new("id-1")
        }
    }

    fn with_document(document: u64) -> CustomerRecord {
        CustomerRecord {
            document,
            ..CustomerRecord::new("id-1")
        }
    }

    #[test]
    fn new_record_is_empty() {
        let record = CustomerRecord::new("abc");
        assert_eq!(record.id(), "abc");
        assert!(record.name.is_empty());
        assert_eq!(record.document, 0);
        assert_eq!(record.phone_number, 0);
        assert!(record.phone_country.is_empty());
        assert!(record.password.is_empty());
    }

    #[test]
    fn format_name_mutates_only_on_success() {
        let mut record = with_name("test name");
        record.format_name().unwrap();
        assert_eq!(record.name, "Test Name");

        let mut record = with_name("test");
        assert_eq!(record.format_name(), Err(NameError::SingleWord));
        assert_eq!(record.name, "test");
    }

    #[test]
    fn document_predicates() {
        assert!(with_document(66946202848).is_document_cpf());
        assert!(!with_document(66946202848).is_document_cnpj());
        assert!(with_document(74112977000137).is_document_cnpj());
        assert!(with_document(74112977000137).validate_document().is_ok());
        assert_eq!(
            with_document(0).validate_document(),
            Err(DocumentError::Invalid)
        );
    }

    #[test]
    fn serializes_with_field_names() {
        let record = CustomerRecord {
            name: "Test Name".to_string(),
            document: 66946202848,
            phone_country: "BR".to_string(),
            phone_number: 551197776755,
            ..CustomerRecord::new("id-1")
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "id-1",
                "name": "Test Name",
                "document": 66946202848u64,
                "email": "",
                "phone_country": "BR",
                "phone_number": 551197776755u64,
                "password": "",
            })
        );

        let back: CustomerRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
