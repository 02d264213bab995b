// src/services/phone.rs

use crate::ports::PhoneMetadata;

/// Número completo e país resolvido, ou `(0, "")` em qualquer falha.
///
/// Sem país informado: se os dígitos já servem no plano de `default_country`,
/// fica ele; senão deduz pelo prefixo e, sem dedução, volta ao `default_country`.
/// País informado que não bate com o número é rejeitado, não corrigido.
pub fn formatted_phone(
    number: u64,
    country: &str,
    metadata: &dyn PhoneMetadata,
    default_country: &str,
) -> (u64, String) {
    if number == 0 {
        return (0, String::new());
    }

    let raw = number.to_string();
    let country = if country.is_empty() {
        // Número nacional do país padrão (ex: celular com DDD) não passa pela dedução
        if metadata.canonicalize(&raw, default_country).is_ok() {
            default_country.to_string()
        } else {
            metadata
                .infer_country(&raw)
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_country.to_string())
        }
    } else {
        country.to_string()
    };

    let canonical = match metadata.canonicalize(&raw, &country) {
        Ok(canonical) => canonical,
        Err(e) => {
            tracing::debug!(number, %country, error = %e, "Telefone não normalizado");
            return (0, String::new());
        }
    };

    match canonical.parse::<u64>() {
        Ok(n) if n != 0 => (n, country),
        _ => {
            tracing::debug!(number, %country, %canonical, "Número canônico não numérico");
            (0, String::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DialingPlanTable;
    use rstest::rstest;

    #[rstest]
    #[case(1197776755, "", 551197776755, "BR")]
    #[case(97776755, "", 0, "")]
    #[case(2015550123, "US", 12015550123, "US")]
    #[case(551197776755, "US", 0, "")]
    #[case(551197776755, "", 551197776755, "BR")]
    #[case(447400123456, "", 447400123456, "GB")]
    #[case(11987654321, "", 5511987654321, "BR")]
    #[case(33987654321, "", 5533987654321, "BR")]
    #[case(12015550123, "", 12015550123, "US")]
    #[case(0, "BR", 0, "")]
    fn normalizes_numbers(
        #[case] number: u64,
        #[case] country: &str,
        #[case] expected: u64,
        #[case] expected_country: &str,
    ) {
        let table = DialingPlanTable::default();
        assert_eq!(
            formatted_phone(number, country, &table, "BR"),
            (expected, expected_country.to_string())
        );
    }

    #[test]
    fn fallback_country_comes_from_caller() {
        let table = DialingPlanTable::default();
        assert_eq!(
            formatted_phone(2015550123, "", &table, "US"),
            (12015550123, "US".to_string())
        );
    }

    #[test]
    fn canonical_input_is_a_fixed_point() {
        let table = DialingPlanTable::default();
        let (n, c) = formatted_phone(1197776755, "", &table, "BR");
        assert_eq!(formatted_phone(n, &c, &table, "BR"), (n, c));
    }

    struct GarbageMetadata;

    impl PhoneMetadata for GarbageMetadata {
        fn infer_country(&self, _raw: &str) -> Option<String> {
            Some(String::new())
        }

        fn canonicalize(&self, _raw: &str, _country: &str) -> anyhow::Result<String> {
            Ok("+55 (11) 9777".to_string())
        }
    }

    #[test]
    fn unparseable_canonical_form_fails() {
        assert_eq!(
            formatted_phone(1197776755, "", &GarbageMetadata, "BR"),
            (0, String::new())
        );
    }
}
