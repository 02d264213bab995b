use std::collections::HashMap;

use async_trait::async_trait;

use crate::ports::{MxLookup, MxRecord};

// Resolvedor MX em memória. Domínio desconhecido resolve para lista vazia.
#[derive(Debug, Clone, Default)]
pub struct StaticMxLookup {
    records: HashMap<String, Vec<MxRecord>>,
}

impl StaticMxLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, domain: &str, records: Vec<MxRecord>) -> Self {
        self.records.insert(domain.to_ascii_lowercase(), records);
        self
    }
}

#[async_trait]
impl MxLookup for StaticMxLookup {
    async fn lookup_mx(&self, domain: &str) -> anyhow::Result<Vec<MxRecord>> {
        Ok(self
            .records
            .get(&domain.to_ascii_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let mx = StaticMxLookup::new()
            .with_domain("Gmail.com", vec![MxRecord::new(5, "gmail-smtp-in.l.google.com")]);

        let records = mx.lookup_mx("GMAIL.COM").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].exchange, "gmail-smtp-in.l.google.com");
    }

    #[tokio::test]
    async fn unknown_domain_has_no_records() {
        let mx = StaticMxLookup::new();
        assert!(mx.lookup_mx("example.invalid").await.unwrap().is_empty());
    }
}
