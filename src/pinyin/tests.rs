#[cfg(test)]
use super::*;

fn mark(pinyin_num: &str) -> String {
    pinyin_mark_from_num(pinyin_num, &ConvertOptions::default())
}

fn mark_v(pinyin_num: &str) -> String {
    let options = ConvertOptions {
        v_to_umlaut: true,
        ..ConvertOptions::default()
    };
    pinyin_mark_from_num(pinyin_num, &options)
}

#[test]
fn test_mark_index() {
    assert_eq!(mark_index("ao1"), Some(0));
    assert_eq!(mark_index("lang4"), Some(1));
    assert_eq!(mark_index("quan"), Some(2));
    assert_eq!(mark_index(""), None);
    assert_eq!(mark_index("5"), None);
    assert_eq!(mark_index("hei"), Some(1));
    assert_eq!(mark_index("gou3"), Some(1));
    assert_eq!(mark_index("long"), Some(1));
    assert_eq!(mark_index("xiong2"), Some(2));
    assert_eq!(mark_index("jin1"), Some(1));
    assert_eq!(mark_index("liu2"), Some(2));
    assert_eq!(mark_index("gui4"), Some(2));
    assert_eq!(mark_index("LUO"), Some(2));
}

#[test]
fn test_mark_index_initial_n() {
    assert_eq!(mark_index("niu"), Some(2));
    assert_eq!(mark_index("nü"), Some(1));
    assert_eq!(mark_index("nin"), Some(1));
    assert_eq!(mark_index("n"), Some(0));
}

#[test]
fn test_syllable_mark_from_num() {
    assert_eq!(syllable_mark_from_num("long3"), Ok("lǒng".to_owned()));
    assert_eq!(syllable_mark_from_num("er2"), Ok("ér".to_owned()));
    assert_eq!(syllable_mark_from_num("lü4"), Ok("lǜ".to_owned()));
    assert_eq!(syllable_mark_from_num("ma5"), Ok("ma".to_owned()));
    assert_eq!(syllable_mark_from_num("ma0"), Ok("ma".to_owned()));
    assert_eq!(syllable_mark_from_num("niu2"), Ok("niú".to_owned()));
    assert_eq!(syllable_mark_from_num("Xi4"), Ok("Xì".to_owned()));
    assert_eq!(syllable_mark_from_num(""), Ok(String::new()));
}

#[test]
fn test_syllable_mark_from_num_nasal() {
    assert_eq!(syllable_mark_from_num("n2"), Ok("ń".to_owned()));
    assert_eq!(syllable_mark_from_num("N4"), Ok("Ǹ".to_owned()));
    assert_eq!(syllable_mark_from_num("n1"), Ok("n\u{0304}".to_owned()));
    assert_eq!(syllable_mark_from_num("ng3"), Ok("ňg".to_owned()));
    assert_eq!(syllable_mark_from_num("m2"), Ok("ḿ".to_owned()));
    assert_eq!(syllable_mark_from_num("M1"), Ok("M\u{0304}".to_owned()));
    assert_eq!(syllable_mark_from_num("n5"), Ok("n".to_owned()));
}

#[test]
fn test_syllable_mark_from_num_circumflex() {
    assert_eq!(mark_index("ê2"), Some(0));
    assert_eq!(syllable_mark_from_num("ê2"), Ok("ế".to_owned()));
    assert_eq!(syllable_mark_from_num("ê4"), Ok("ề".to_owned()));
    assert_eq!(syllable_mark_from_num("ê1"), Ok("ê\u{0304}".to_owned()));
    assert_eq!(syllable_mark_from_num("Ê3"), Ok("Ê\u{030C}".to_owned()));
    assert_eq!(syllable_mark_from_num("ê5"), Ok("ê".to_owned()));
}

#[test]
fn test_syllable_mark_from_num_errors() {
    assert_eq!(
        syllable_mark_from_num("long"),
        Err(ToneError::Malformed("long".to_owned()))
    );
    assert_eq!(
        syllable_mark_from_num("lo3ng"),
        Err(ToneError::Malformed("lo3ng".to_owned()))
    );
    assert_eq!(
        syllable_mark_from_num("3"),
        Err(ToneError::Malformed("3".to_owned()))
    );
    assert_eq!(
        syllable_mark_from_num("long7"),
        Err(ToneError::ToneOutOfRange {
            syllable: "long7".to_owned(),
            tone: 7
        })
    );
}

#[test]
fn test_syllable_without_mark_letter() {
    // no tone mark exists for these letters, keep the tone number
    assert_eq!(syllable_mark_from_num("r4"), Ok("r4".to_owned()));
    assert_eq!(syllable_mark_from_num("nv3"), Ok("nv3".to_owned()));
    assert_eq!(syllable_mark_from_num("r5"), Ok("r".to_owned()));
}

#[test]
fn test_get_mark() {
    assert_eq!(mark("ni3hao3"), "nǐhǎo");
    assert_eq!(mark("zhong1guo2"), "zhōngguó");
    assert_eq!(mark("lü4"), "lǜ");
    assert_eq!(mark("er2"), "ér");
    assert_eq!(mark("hen3"), "hěn");
    assert_eq!(mark("ma5"), "ma");
    assert_eq!(mark("ma5li5"), "mali");
    assert_eq!(mark("a1i5"), "āi");
    assert_eq!(mark("ou3"), "ǒu");
    assert_eq!(mark("m2"), "ḿ");
    assert_eq!(mark("N4"), "Ǹ");
    assert_eq!(mark("ng2"), "ńg");
    assert_eq!(mark("jue2"), "jué");
    assert_eq!(mark("xiong2"), "xióng");
    assert_eq!(mark("pinyin"), "pinyin"); // No tone number
    assert_eq!(mark(""), ""); // Empty string
    assert_eq!(mark("lian3"), "liǎn");
    assert_eq!(mark("gui4"), "guì");
    assert_eq!(mark("shui3"), "shuǐ");
    assert_eq!(mark("cuan1"), "cuān");
    assert_eq!(mark("yun2"), "yún");
    assert_eq!(mark("yuan4"), "yuàn");
    assert_eq!(mark("you3"), "yǒu");
    assert_eq!(mark("liu2"), "liú");
    assert_eq!(mark("Qing1"), "Qīng");
    assert_eq!(mark("LUO2"), "LUÓ");
    assert_eq!(mark("BA5"), "BA");
    assert_eq!(mark("N3"), "Ň");
    assert_eq!(mark("M1"), "M\u{0304}");
    assert_eq!(mark("zhuang4"), "zhuàng");
    assert_eq!(mark("kuang4"), "kuàng");
    assert_eq!(mark("weng3"), "wěng");
}

#[test]
fn test_get_mark_sentence() {
    assert_eq!(mark("ni3hao3, ni3 shi4 shei2?"), "nǐhǎo, nǐ shì shéi?");
    assert_eq!(mark("Wo3 ai4 Bei3jing1 Tian1an1men2!"), "Wǒ ài Běijīng Tiānānmén!");
    assert_eq!(mark("(ta1) 123 ma5?"), "(tā) 123 ma?");
}

#[test]
fn test_get_mark_untoned_prefix() {
    // letters in front of the final stay as they are
    assert_eq!(mark("mali3"), "malǐ");
    assert_eq!(mark("xxhao3"), "xxhǎo");
}

#[test]
fn test_get_mark_keeps_other_digits() {
    assert_eq!(mark("ni37"), "nǐ7");
    assert_eq!(mark("ni8"), "ni8");
    assert_eq!(mark("2024nian2"), "2024nián");
}

#[test]
fn test_get_mark_rhotic() {
    assert_eq!(mark("hua1r5"), "huār");
    assert_eq!(mark("yi1dian3r5"), "yīdiǎnr");
    assert_eq!(mark("wan2r0"), "wánr");
    assert_eq!(mark("R5"), "R");
}

#[test]
fn test_get_mark_v() {
    assert_eq!(mark("nv3"), "nv3");
    assert_eq!(mark_v("nv3"), "nǚ");
    assert_eq!(mark_v("lve4"), "lüè");
    assert_eq!(mark_v("nv5"), "nü");
    assert_eq!(mark_v("Nv3"), "Nǚ");
    assert_eq!(mark_v("V3"), "Ǚ");
}

#[test]
fn test_get_mark_apostrophes() {
    let options = ConvertOptions {
        apostrophes: true,
        ..ConvertOptions::default()
    };
    assert_eq!(pinyin_mark_from_num("quan2ai1", &options), "quán'āi");
    assert_eq!(pinyin_mark_from_num("Xi1an1", &options), "Xī'ān");
    assert_eq!(pinyin_mark_from_num("nü3er2", &options), "nǚ'ér");
    assert_eq!(pinyin_mark_from_num("ni3hao3", &options), "nǐhǎo");
    assert_eq!(pinyin_mark_from_num("ni3 ai4", &options), "nǐ ài");
    assert_eq!(pinyin_mark_from_num("a1i5", &options), "āi");
}

#[test]
fn test_get_mark_circumflex() {
    assert_eq!(mark("ê2"), "ế");
    assert_eq!(mark("Ê4 hao3"), "Ề hǎo");
    assert_eq!(mark("ê3"), "ê\u{030C}");
}

#[test]
fn test_tone_of_char() {
    for (tone, marks) in [(1, "āēīōūǖĀ"), (2, "áéíóúǘḿń"), (3, "ǎěǐǒǔǚň"), (4, "àèìòùǜǹ")] {
        for c in marks.chars() {
            assert_eq!(tone_of_char(c), tone, "{c}");
        }
    }
    assert_eq!(tone_of_char('\u{0304}'), 1);
    assert_eq!(tone_of_char('\u{0300}'), 4);
    for c in "aeiouüAn?1 ".chars() {
        assert_eq!(tone_of_char(c), 0, "{c}");
    }
}

#[test]
fn test_tone_from_char_str() {
    assert_eq!(tone_from_char_str("ǎ"), Some(3));
    assert_eq!(tone_from_char_str("Ǜ"), Some(4));
    assert_eq!(tone_from_char_str("a"), Some(0));
    assert_eq!(tone_from_char_str(""), None);
    assert_eq!(tone_from_char_str("hǎo"), None);
    assert_eq!(tone_from_char_str("n\u{0304}"), None);
}

#[test]
fn test_get_num() {
    assert_eq!(pinyin_num_from_mark("nǐhǎo, nǐ shì shéi?"), "ni3hao3, ni3 shi4 shei2?");
    assert_eq!(pinyin_num_from_mark("Zhōngguó"), "Zhong1guo2");
    assert_eq!(pinyin_num_from_mark("Běijīng"), "Bei3jing1");
    assert_eq!(pinyin_num_from_mark("lǜ"), "lü4");
    assert_eq!(pinyin_num_from_mark("NǏ HǍO"), "NI3 HAO3");
    assert_eq!(pinyin_num_from_mark("xièxie"), "xie4xie");
    assert_eq!(pinyin_num_from_mark(""), "");
    assert_eq!(pinyin_num_from_mark("hello, 123!"), "hello, 123!");
}

#[test]
fn test_get_num_neutral_tone() {
    // no tone mark, no number
    assert_eq!(pinyin_num_from_mark("māma"), "ma1ma");
    assert_eq!(pinyin_num_from_mark(&mark("ma5")), "ma");
    assert_eq!(pinyin_num_from_mark(&mark("ma0")), "ma");
}

#[test]
fn test_get_num_nasal() {
    assert_eq!(pinyin_num_from_mark("ńg"), "ng2");
    assert_eq!(pinyin_num_from_mark("ḿ"), "m2");
    assert_eq!(pinyin_num_from_mark("n\u{0304}"), "n1");
    assert_eq!(pinyin_num_from_mark("M\u{030C} ok"), "M3 ok");
}

#[test]
fn test_get_num_syllable_boundaries() {
    assert_eq!(pinyin_num_from_mark("mǎnián"), "ma3nian2");
    assert_eq!(pinyin_num_from_mark("xīnán"), "xi1nan2");
    assert_eq!(pinyin_num_from_mark("fāngàn"), "fan1gan4");
    assert_eq!(pinyin_num_from_mark("Xī'ān"), "Xi1'an1");
    assert_eq!(pinyin_num_from_mark("nǚ'ér"), "nü3'er2");
    assert_eq!(pinyin_num_from_mark("gèrén"), "ge4ren2");
    assert_eq!(pinyin_num_from_mark("èrén"), "e4ren2");
    assert_eq!(pinyin_num_from_mark("huār"), "hua1r");
}

#[test]
fn test_get_num_two_marks_in_one_match() {
    assert_eq!(pinyin_num_from_mark("xīān"), "xi1an1");
    assert_eq!(pinyin_num_from_mark("nǐài"), "ni3ai4");
    assert_eq!(pinyin_num_from_mark("shìér"), "shi4er2");
    assert_eq!(pinyin_num_from_mark("nǐōu"), "ni3ou1");
    assert_eq!(pinyin_num_from_mark("lǜān"), "lü4an1");
    assert_eq!(pinyin_num_from_mark("hūài"), "hu1ai4");
}

#[test]
fn test_get_num_circumflex() {
    assert_eq!(pinyin_num_from_mark("ế"), "ê2");
    assert_eq!(pinyin_num_from_mark("Ề"), "Ê4");
    assert_eq!(pinyin_num_from_mark("ê\u{0304}"), "ê1");
    assert_eq!(pinyin_num_from_mark("ê\u{030C} hǎo"), "ê3 hao3");
    assert_eq!(tone_of_char('ế'), 2);
}

#[test]
fn test_get_num_keeps_surrounding_text() {
    assert_eq!(
        pinyin_num_from_mark("«Nǐ hǎo», 你好 (2x)."),
        "«Ni3 hao3», 你好 (2x)."
    );
    assert_eq!(pinyin_num_from_mark("\tshì\n"), "\tshi4\n");
}

#[test]
fn test_round_trip() {
    for pinyin_num in [
        "ni3hao3, ni3 shi4 shei2?",
        "zhong1guo2",
        "lü4 nü3",
        "Bei3jing1 huan1ying2 ni3",
        "xian1gai3",
        "men2gou3",
        "zhuang4 jiong3 shui3",
        "ni3, wo3, ta1!",
    ] {
        assert_eq!(pinyin_num_from_mark(&mark(pinyin_num)), pinyin_num);
    }
}

#[test]
fn test_round_trip_vowel_initial() {
    let options = ConvertOptions {
        apostrophes: true,
        ..ConvertOptions::default()
    };
    for pinyin_num in ["Tian1an1men2", "xi1an1", "fang1an4", "an1an1", "nü3er2", "ni3ai4"] {
        let pinyin_mark = pinyin_mark_from_num(pinyin_num, &options);
        let pinyin_num_again = pinyin_num_from_mark(&pinyin_mark);
        assert_eq!(pinyin_num_again.replace(config::APOSTROPHE, ""), pinyin_num);
    }
    assert_eq!(pinyin_num_from_mark("Tiān'ānmén"), "Tian1'an1men2");
    // a vowel after a vowel needs no apostrophe, the tone marks separate the syllables
    for pinyin_num in ["ni3ai4", "hao3ou1", "shi4er2", "hu1ang1", "xue2e4", "dui4a1"] {
        assert_eq!(pinyin_num_from_mark(&mark(pinyin_num)), pinyin_num);
    }
}

#[test]
fn test_syllable_pattern_is_valid() {
    assert!(SYLLABLE_REGEX.is_match("zhuang"));
    assert!(SYLLABLE_EXACT_REGEX.is_match("er"));
    assert!(SYLLABLE_EXACT_REGEX.is_match("ng"));
    assert!(!SYLLABLE_EXACT_REGEX.is_match("zh"));
}
