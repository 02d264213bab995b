// src/adapters/dialing_plan.rs

//! Tabela de planos de numeração em memória.
//!
//! Cobre só o necessário para inferir o país pelo prefixo e montar o número
//! completo (código do país + número nacional). As regras nacionais olham só
//! os primeiros dígitos (DDD, código de área, marcador de celular).

use anyhow::{anyhow, bail};

use crate::ports::PhoneMetadata;

#[derive(Debug, Clone)]
pub struct DialingPlan {
    /// ISO-3166 alfa-2
    pub country: &'static str,
    pub calling_code: &'static str,
    /// Tamanhos aceitos do número nacional, sem o código do país
    pub national_lengths: &'static [usize],
    /// Regra dos dígitos iniciais do número nacional (tamanho já conferido)
    pub national_rule: fn(&str) -> bool,
}

impl DialingPlan {
    fn accepts_national(&self, national: &str) -> bool {
        self.national_lengths.contains(&national.len()) && (self.national_rule)(national)
    }

    // Parte nacional quando os dígitos já vêm com o código do país
    fn strip_calling_code<'a>(&self, digits: &'a str) -> Option<&'a str> {
        digits
            .strip_prefix(self.calling_code)
            .filter(|national| self.accepts_national(national))
    }
}

fn digit_at(national: &str, index: usize) -> Option<u8> {
    national.as_bytes().get(index).map(|b| b.wrapping_sub(b'0'))
}

fn leading_non_zero(national: &str) -> bool {
    matches!(digit_at(national, 0), Some(1..=9))
}

// DDD sem zero; com 11 dígitos é celular e começa com 9 após o DDD
fn brazil(national: &str) -> bool {
    let ddd = matches!(digit_at(national, 0), Some(1..=9))
        && matches!(digit_at(national, 1), Some(1..=9));
    ddd && (national.len() == 10 || digit_at(national, 2) == Some(9))
}

// Plano norte-americano: área e central não começam com 0 nem 1
fn nanp(national: &str) -> bool {
    matches!(digit_at(national, 0), Some(2..=9)) && matches!(digit_at(national, 3), Some(2..=9))
}

const DEFAULT_PLANS: &[DialingPlan] = &[
    DialingPlan { country: "BR", calling_code: "55", national_lengths: &[10, 11], national_rule: brazil },
    DialingPlan { country: "US", calling_code: "1", national_lengths: &[10], national_rule: nanp },
    DialingPlan { country: "CA", calling_code: "1", national_lengths: &[10], national_rule: nanp },
    DialingPlan { country: "GB", calling_code: "44", national_lengths: &[10], national_rule: leading_non_zero },
    DialingPlan { country: "PT", calling_code: "351", national_lengths: &[9], national_rule: leading_non_zero },
    DialingPlan { country: "AR", calling_code: "54", national_lengths: &[10], national_rule: leading_non_zero },
    DialingPlan { country: "DE", calling_code: "49", national_lengths: &[10, 11], national_rule: leading_non_zero },
    DialingPlan { country: "FR", calling_code: "33", national_lengths: &[9], national_rule: leading_non_zero },
    DialingPlan { country: "IN", calling_code: "91", national_lengths: &[10], national_rule: leading_non_zero },
];

#[derive(Debug, Clone)]
pub struct DialingPlanTable {
    plans: Vec<DialingPlan>,
}

impl Default for DialingPlanTable {
    fn default() -> Self {
        Self::new(DEFAULT_PLANS.to_vec())
    }
}

impl DialingPlanTable {
    // A ordem importa: em códigos compartilhados (ex: "1") o primeiro vence
    pub fn new(plans: Vec<DialingPlan>) -> Self {
        Self { plans }
    }

    fn plan_for(&self, country: &str) -> Option<&DialingPlan> {
        self.plans
            .iter()
            .find(|plan| plan.country.eq_ignore_ascii_case(country))
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl PhoneMetadata for DialingPlanTable {
    fn infer_country(&self, raw_digits: &str) -> Option<String> {
        if !is_digit_string(raw_digits) {
            return None;
        }
        self.plans
            .iter()
            .find(|plan| plan.strip_calling_code(raw_digits).is_some())
            .map(|plan| plan.country.to_string())
    }

    fn canonicalize(&self, raw_digits: &str, country: &str) -> anyhow::Result<String> {
        let plan = self
            .plan_for(country)
            .ok_or_else(|| anyhow!("país sem plano de numeração: {country:?}"))?;

        // Remove o prefixo de tronco (zeros à esquerda)
        let digits = raw_digits.trim_start_matches('0');
        if !is_digit_string(digits) {
            bail!("número de telefone inválido: {raw_digits:?}");
        }

        if plan.strip_calling_code(digits).is_some() {
            return Ok(digits.to_string());
        }
        if plan.accepts_national(digits) {
            return Ok(format!("{}{}", plan.calling_code, digits));
        }

        bail!("número {digits} incompatível com o plano de {}", plan.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("551197776755", Some("BR"))]
    #[case("447400123456", Some("GB"))]
    #[case("12015550123", Some("US"))]
    #[case("1197776755", None)]
    #[case("11987654321", None)] // DDD 11: área norte-americana não começa com 1
    #[case("33987654321", Some("FR"))]
    #[case("97776755", None)]
    #[case("", None)]
    fn infers_country_by_prefix_and_length(#[case] digits: &str, #[case] expected: Option<&str>) {
        let table = DialingPlanTable::default();
        assert_eq!(table.infer_country(digits).as_deref(), expected);
    }

    #[rstest]
    #[case("1197776755", "BR", "551197776755")]
    #[case("11997776755", "BR", "5511997776755")]
    #[case("551197776755", "BR", "551197776755")]
    #[case("2015550123", "US", "12015550123")]
    #[case("12015550123", "us", "12015550123")]
    #[case("07400123456", "GB", "447400123456")]
    fn canonicalizes_numbers(#[case] digits: &str, #[case] country: &str, #[case] expected: &str) {
        let table = DialingPlanTable::default();
        assert_eq!(table.canonicalize(digits, country).unwrap(), expected);
    }

    #[rstest]
    #[case("97776755", "BR")]
    #[case("551197776755", "US")]
    #[case("2015550123", "ZZ")]
    #[case("20155a0123", "US")]
    #[case("000", "US")]
    #[case("1987654321", "US")]
    #[case("12035550123", "BR")] // 11 dígitos sem o 9 de celular
    fn rejects_incompatible_numbers(#[case] digits: &str, #[case] country: &str) {
        let table = DialingPlanTable::default();
        assert!(table.canonicalize(digits, country).is_err());
    }

    #[test]
    fn custom_table_order_decides_shared_codes() {
        let table = DialingPlanTable::new(vec![
            DialingPlan { country: "CA", calling_code: "1", national_lengths: &[10], national_rule: nanp },
            DialingPlan { country: "US", calling_code: "1", national_lengths: &[10], national_rule: nanp },
        ]);
        assert_eq!(table.infer_country("14165550123").as_deref(), Some("CA"));
    }
}
