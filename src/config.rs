use serde::Deserialize;

pub const APOSTROPHE: char = '\'';

/// Syllables starting with one of these get an apostrophe when they follow another syllable
pub const APOSTROPHE_CHARS: &[char] = &['a', 'e', 'o'];

/// Length (in chars) of the longest entry in `FINALS`
pub const MAX_FINAL_LEN: usize = 4;

/// Finals of standard pinyin, including the v spellings of ü and the rhotic r
pub const FINALS: &[&str] = &[
    "a", "o", "e", "ai", "ei", "ao", "ou", "an", "en", "ang", "eng", "ong", "er", // plain
    "i", "ia", "ie", "iao", "iu", "iou", "ian", "in", "iang", "ing", "iong", // i-
    "u", "ua", "uo", "uai", "ui", "uei", "uan", "un", "uen", "uang", "ueng", // u-
    "ü", "üe", "üan", "ün", "ue", "v", "ve", "van", "vn", // ü-
    "ê", "r",
];

pub const INITIALS: &[&str] = &[
    "zh", "ch", "sh", "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Combining marks for tone 1 to 4, used where no precomposed character exists (n̄, ê̌)
pub const COMBINING_TONE_MARKS: [char; 4] = ['\u{0304}', '\u{0301}', '\u{030C}', '\u{0300}'];

/// Vowels which can carry a tone mark
pub const MARKABLE_VOWELS: [char; 14] = [
    'a', 'e', 'ê', 'i', 'o', 'u', 'ü', 'A', 'E', 'Ê', 'I', 'O', 'U', 'Ü',
];

/// Syllables consisting of a nasal only (lower case), `n` can be followed by `g`
pub const NASAL_SYLLABLES: [char; 2] = ['n', 'm'];

/// Get the forms of a vowel for tone 0 to 5 (0 and 5 are both neutral, so unmarked).
/// ê has no precomposed form for tone 1 and 3, these use a combining mark.
pub const fn tone_marks(vowel: char) -> Option<[&'static str; 6]> {
    Some(match vowel {
        'a' => ["a", "ā", "á", "ǎ", "à", "a"],
        'A' => ["A", "Ā", "Á", "Ǎ", "À", "A"],
        'e' => ["e", "ē", "é", "ě", "è", "e"],
        'E' => ["E", "Ē", "É", "Ě", "È", "E"],
        'ê' => ["ê", "ê\u{0304}", "ế", "ê\u{030C}", "ề", "ê"],
        'Ê' => ["Ê", "Ê\u{0304}", "Ế", "Ê\u{030C}", "Ề", "Ê"],
        'i' => ["i", "ī", "í", "ǐ", "ì", "i"],
        'I' => ["I", "Ī", "Í", "Ǐ", "Ì", "I"],
        'o' => ["o", "ō", "ó", "ǒ", "ò", "o"],
        'O' => ["O", "Ō", "Ó", "Ǒ", "Ò", "O"],
        'u' => ["u", "ū", "ú", "ǔ", "ù", "u"],
        'U' => ["U", "Ū", "Ú", "Ǔ", "Ù", "U"],
        'ü' => ["ü", "ǖ", "ǘ", "ǚ", "ǜ", "ü"],
        'Ü' => ["Ü", "Ǖ", "Ǘ", "Ǚ", "Ǜ", "Ü"],
        _ => {
            return None;
        }
    })
}

/// Get the forms of a nasal-only syllable, tone 0 to 5 for lower case followed by tone 0 to 5 for upper case.
/// Not all of them exist precomposed, the others use a combining mark.
pub const fn nasal_tone_marks(nasal: char) -> Option<[&'static str; 12]> {
    Some(match nasal {
        'n' | 'N' => [
            "n", "n\u{0304}", "ń", "ň", "ǹ", "n", //
            "N", "N\u{0304}", "Ń", "Ň", "Ǹ", "N",
        ],
        'm' | 'M' => [
            "m", "m\u{0304}", "ḿ", "m\u{030C}", "m\u{0300}", "m", //
            "M", "M\u{0304}", "Ḿ", "M\u{030C}", "M\u{0300}", "M",
        ],
        _ => {
            return None;
        }
    })
}

/// Options for the conversion of tone numbers to tone marks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Read `v` as `ü` before converting (lve4 -> lüè)
    pub v_to_umlaut: bool,
    /// Separate syllables starting with a, e or o from the previous syllable (quan2ai1 -> quán'āi)
    pub apostrophes: bool,
}
