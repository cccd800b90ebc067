use crate::pinyin::{combining_tone, plain_char};

/// Remove all digits, ni3hao3 -> nihao.
/// Note that this also removes numbers which are not tones.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Remove all tone marks, nǐhǎo -> nihao. ü stays as it is.
pub fn strip_diacritics(text: &str) -> String {
    text.chars()
        .filter(|&c| combining_tone(c).is_none())
        .map(plain_char)
        .collect()
}

/// Replace v with ü as it is common when typing pinyin, nv3 -> nü3
pub fn umlaut_substitute(text: &str) -> String {
    text.replace('v', "ü").replace('V', "Ü")
}
