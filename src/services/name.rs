use crate::common::error::NameError;

const MIN_WORD_CHARS: usize = 2;

// Pelo menos duas palavras; primeira e última com duas letras ou mais
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let words: Vec<&str> = name.split(' ').collect();
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return Err(NameError::Empty);
    };
    if words.len() < 2 {
        return Err(NameError::SingleWord);
    }
    if first.chars().count() < MIN_WORD_CHARS {
        return Err(NameError::FirstWordTooShort);
    }
    if last.chars().count() < MIN_WORD_CHARS {
        return Err(NameError::LastWordTooShort);
    }
    Ok(())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Nome validado e em "Title Case". Erro de validação é devolvido sem formatar.
pub fn format_name(name: &str) -> Result<String, NameError> {
    validate_name(name)?;
    Ok(name.split(' ').map(title_case).collect::<Vec<_>>().join(" "))
}
