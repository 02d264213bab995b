// src/services/checksum.rs

//! Dígitos verificadores de CPF e CNPJ (módulo 11).
//!
//! O documento chega como inteiro, então zeros à esquerda já foram perdidos.
//! Por isso as faixas de tamanho aceitas são mais largas que os 11 (CPF) e
//! 14 (CNPJ) dígitos nominais.

use std::ops::RangeInclusive;

pub const CPF_LENGTH: RangeInclusive<usize> = 8..=12;
pub const CNPJ_LENGTH: RangeInclusive<usize> = 12..=16;

// Pesos do CNPJ ciclam de 2 a 9
const CNPJ_WEIGHT_CYCLE: usize = 8;

// Documento separado em payload e dígitos verificadores.
// `payload` vem da unidade para cima: payload[0] é o dígito logo à esquerda de d1.
struct Split {
    payload: Vec<u64>,
    d1: u64,
    d2: u64,
}

fn split(document: u64, length: &RangeInclusive<usize>) -> Option<Split> {
    if document == 0 {
        return None;
    }

    let mut digits = Vec::with_capacity(16);
    let mut rest = document;
    while rest > 0 {
        digits.push(rest % 10);
        rest /= 10;
    }
    if !length.contains(&digits.len()) {
        return None;
    }

    let d2 = digits[0];
    let d1 = digits[1];
    digits.drain(..2);
    Some(Split { payload: digits, d1, d2 })
}

/// CPF: pesos crescentes a partir de 2; dígito = (soma * 10) mod 11.
///
/// Um resto 10 nunca coincide com um dígito, então o documento é rejeitado.
pub fn is_valid_cpf(document: u64) -> bool {
    let Some(Split { payload, d1, d2 }) = split(document, &CPF_LENGTH) else {
        return false;
    };

    let mut sum1 = 0;
    let mut sum2 = d1 * 2;
    for (i, digit) in payload.iter().enumerate() {
        let weight = i as u64 + 2;
        sum1 += digit * weight;
        sum2 += digit * (weight + 1);
    }

    (sum1 * 10) % 11 == d1 && (sum2 * 10) % 11 == d2
}

fn cnpj_digit(sum: u64) -> u64 {
    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

/// CNPJ: pesos ciclando 2..=9; resto < 2 vira 0, senão 11 - resto.
pub fn is_valid_cnpj(document: u64) -> bool {
    let Some(Split { payload, d1, d2 }) = split(document, &CNPJ_LENGTH) else {
        return false;
    };

    let weight = |position: usize| (position % CNPJ_WEIGHT_CYCLE) as u64 + 2;

    let mut sum1 = 0;
    let mut sum2 = d1 * weight(0);
    for (i, digit) in payload.iter().enumerate() {
        sum1 += digit * weight(i);
        sum2 += digit * weight(i + 1);
    }

    cnpj_digit(sum1) == d1 && cnpj_digit(sum2) == d2
}

/// Aceita se qualquer uma das regras passar (12 dígitos testa as duas).
pub fn is_valid_document(document: u64) -> bool {
    is_valid_cpf(document) || is_valid_cnpj(document)
}
