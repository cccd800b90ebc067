use std::borrow::Cow;
use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use nom::{
    IResult, Parser, bytes::complete::take_while1, character::complete::anychar,
    combinator::all_consuming, sequence::pair,
};
use regex::Regex;
use tracing::{debug, trace};

use crate::common::{MAX_TONE, Tone, ToneError, is_neutral};
use crate::config::{self, ConvertOptions};
use crate::normalize::umlaut_substitute;

static FINALS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| config::FINALS.iter().copied().collect());

/// Letters directly followed by a tone number
static NUMBERED_SYLLABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-zÜüÊê]+)([0-5])").expect("valid numbered syllable regex")
});

/// One syllable in pinyin without tone marks
static SYLLABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&syllable_pattern()).expect("valid syllable regex"));

static SYLLABLE_EXACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^(?:{})$", syllable_pattern())).expect("valid syllable regex")
});

/// Builds the syllable regex: initial + final, "er", a final on its own, ê or a nasal syllable.
/// Finals are ordered longest first, the regex takes the first alternative that matches.
fn syllable_pattern() -> String {
    let mut finals: Vec<&str> = config::FINALS
        .iter()
        .copied()
        .filter(|f| !matches!(*f, "er" | "r" | "ê"))
        .collect();
    finals.sort_by_key(|f| std::cmp::Reverse(f.chars().count()));
    let finals = finals.join("|");
    let initials = config::INITIALS.join("|");
    let marks: String = config::COMBINING_TONE_MARKS.iter().collect();
    let standalone = format!("ê[{marks}]?|m[{marks}]?|n[{marks}]?g?");
    format!("(?i:(?:{initials})(?:{finals})|er|(?:{finals})|{standalone})")
}

/// Index of the letter which gets the tone mark, tone numbers are ignored.
/// Returns None if there are no letters.
pub fn mark_index(syllable: &str) -> Option<usize> {
    let letters: Vec<char> = syllable
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect();
    if letters.is_empty() {
        return None;
    }
    if let Some(idx) = letters.iter().position(|&c| c == 'a') {
        return Some(idx);
    }
    if let Some(idx) = letters.iter().position(|&c| matches!(c, 'e' | 'ê')) {
        return Some(idx);
    }
    if let Some(idx) = letters.windows(2).position(|w| w == ['o', 'u']) {
        return Some(idx);
    }
    // vowel before the final n, unless the n is the initial (niu, nü)
    if let Some(idx) = letters.iter().rposition(|&c| c == 'n').filter(|&idx| idx > 0) {
        return Some(idx - 1);
    }
    Some(letters.len() - 1)
}

fn parse_numbered_syllable(syllable: &str) -> IResult<&str, (&str, char)> {
    all_consuming(pair(take_while1(char::is_alphabetic), anychar)).parse(syllable)
}

fn parse_tone(tone_char: char, syllable: &str) -> Result<Tone, ToneError> {
    let Some(tone) = tone_char.to_digit(10) else {
        return Err(ToneError::Malformed(syllable.to_owned()));
    };
    match Tone::try_from(tone) {
        Ok(tone) if tone <= MAX_TONE => Ok(tone),
        _ => Err(ToneError::ToneOutOfRange {
            syllable: syllable.to_owned(),
            tone,
        }),
    }
}

/// Convert a single syllable with tone number to tone mark, e.g. long3 -> lǒng.
/// An empty syllable stays empty.
pub fn syllable_mark_from_num(syllable: &str) -> Result<String, ToneError> {
    if syllable.is_empty() {
        return Ok(String::new());
    }
    let Ok((_, (letters, tone_char))) = parse_numbered_syllable(syllable) else {
        return Err(ToneError::Malformed(syllable.to_owned()));
    };
    let tone = parse_tone(tone_char, syllable)?;

    if let Some(marked) = nasal_mark_from_num(letters, tone) {
        return Ok(marked);
    }

    let Some((byte_idx, target)) = mark_index(letters).and_then(|idx| letters.char_indices().nth(idx))
    else {
        return Ok(syllable.to_owned());
    };
    match config::tone_marks(target) {
        Some(marks) => {
            let (head, rest) = (&letters[..byte_idx], &letters[byte_idx + target.len_utf8()..]);
            Ok(format!("{head}{}{rest}", marks[usize::from(tone)]))
        }
        None if is_neutral(tone) => Ok(letters.to_owned()),
        None => {
            debug!(syllable, %target, "no tone mark for this letter, keeping tone number");
            Ok(syllable.to_owned())
        }
    }
}

/// n, ng and m without any vowel
fn nasal_mark_from_num(letters: &str, tone: Tone) -> Option<String> {
    let mut chars = letters.chars();
    let nasal = chars.next()?;
    let rest = chars.as_str();
    let is_nasal_syllable =
        rest.is_empty() || (nasal.eq_ignore_ascii_case(&'n') && rest.eq_ignore_ascii_case("g"));
    if !is_nasal_syllable {
        return None;
    }
    let marks = config::nasal_tone_marks(nasal)?;
    let case_offset = if nasal.is_uppercase() { 6 } else { 0 };
    Some(format!("{}{rest}", marks[usize::from(tone) + case_offset]))
}

/// Length in bytes of the longest final at the end of `letters`
fn final_len(letters: &str) -> Option<usize> {
    let starts: Vec<usize> = letters
        .char_indices()
        .rev()
        .take(config::MAX_FINAL_LEN)
        .map(|(i, _)| i)
        .collect();
    starts
        .into_iter()
        .rev()
        .find(|&start| FINALS_SET.contains(letters[start..].to_lowercase().as_str()))
        .map(|start| letters.len() - start)
}

/// Split a run of letters followed by a tone number into the untouched prefix and the marked syllable
fn mark_letters<'a>(letters: &'a str, tone_digit: &str) -> Option<(&'a str, String)> {
    let Some(len) = final_len(letters) else {
        // no final, only a nasal syllable can be converted
        let tone = tone_digit.parse::<Tone>().ok()?;
        return nasal_mark_from_num(letters, tone).map(|marked| ("", marked));
    };
    let (prefix, fin) = letters.split_at(letters.len() - len);
    if fin.eq_ignore_ascii_case("r") && matches!(tone_digit, "0" | "5") {
        return Some((prefix, fin.to_owned()));
    }
    match syllable_mark_from_num(&format!("{fin}{tone_digit}")) {
        Ok(marked) => Some((prefix, marked)),
        Err(err) => {
            debug!(letters, %err, "could not convert syllable");
            None
        }
    }
}

/// Convert pinyin with tone numbers to pinyin with tone marks, e.g. ni3hao3 -> nǐhǎo.
/// Text which is not a syllable with tone number is kept as it is.
pub fn pinyin_mark_from_num(pinyin_num: &str, options: &ConvertOptions) -> String {
    let pinyin_num = if options.v_to_umlaut {
        Cow::Owned(umlaut_substitute(pinyin_num))
    } else {
        Cow::Borrowed(pinyin_num)
    };
    let mut pinyin_mark = String::with_capacity(pinyin_num.len() + 8);
    let mut copied = 0;
    let mut prev_syllable_end = None;

    for caps in NUMBERED_SYLLABLE_REGEX.captures_iter(&pinyin_num) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let Some((prefix, marked)) = mark_letters(&caps[1], &caps[2]) else {
            continue;
        };
        pinyin_mark.push_str(&pinyin_num[copied..whole.start()]);
        if options.apostrophes
            && prefix.is_empty()
            && prev_syllable_end == Some(whole.start())
            && marked
                .chars()
                .next()
                .map(|c| plain_char(c).to_ascii_lowercase())
                .is_some_and(|c| config::APOSTROPHE_CHARS.contains(&c))
        {
            pinyin_mark.push(config::APOSTROPHE);
        }
        pinyin_mark.push_str(prefix);
        pinyin_mark.push_str(&marked);
        copied = whole.end();
        prev_syllable_end = Some(copied);
    }
    pinyin_mark.push_str(&pinyin_num[copied..]);
    pinyin_mark
}

/// Plain letter and tone of a precomposed character with tone mark
pub(crate) fn decompose_marked(c: char) -> Option<(char, Tone)> {
    for vowel in config::MARKABLE_VOWELS {
        let Some(marks) = config::tone_marks(vowel) else {
            continue;
        };
        if let Some(tone) = (1..=4).find(|&t: &Tone| is_single_char(marks[usize::from(t)], c)) {
            return Some((vowel, tone));
        }
    }
    for nasal in config::NASAL_SYLLABLES {
        let Some(marks) = config::nasal_tone_marks(nasal) else {
            continue;
        };
        for (case_offset, plain) in [(0, nasal), (6, nasal.to_ascii_uppercase())] {
            let is_mark = |t: &Tone| is_single_char(marks[case_offset + usize::from(*t)], c);
            if let Some(tone) = (1..=4).find(is_mark) {
                return Some((plain, tone));
            }
        }
    }
    None
}

fn is_single_char(s: &str, c: char) -> bool {
    let mut chars = s.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

pub(crate) fn combining_tone(c: char) -> Option<Tone> {
    let idx = config::COMBINING_TONE_MARKS.iter().position(|&m| m == c)?;
    Tone::try_from(idx + 1).ok()
}

/// The character without tone mark, combining marks are returned unchanged
pub(crate) fn plain_char(c: char) -> char {
    decompose_marked(c).map_or(c, |(plain, _)| plain)
}

/// Tone of a character, 1 to 4 for a tone mark and 0 for everything else
pub fn tone_of_char(c: char) -> Tone {
    decompose_marked(c)
        .map(|(_, tone)| tone)
        .or_else(|| combining_tone(c))
        .unwrap_or(0)
}

/// Tone of a string consisting of exactly one character, None otherwise
pub fn tone_from_char_str(s: &str) -> Option<Tone> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(tone_of_char(c)),
        _ => None,
    }
}

/// Position and tone of the first tone mark
fn find_tone_mark(syllable: &[char]) -> Option<(usize, Tone)> {
    syllable.iter().enumerate().find_map(|(i, &c)| {
        let tone = tone_of_char(c);
        (tone > 0).then_some((i, tone))
    })
}

fn is_vowel(c: char) -> bool {
    matches!(
        c.to_lowercase().next().unwrap_or(c),
        'a' | 'e' | 'ê' | 'i' | 'o' | 'u' | 'ü' | 'v'
    )
}

/// A syllable ending with n, g or r directly followed by a vowel gives up the consonant to the
/// next syllable, otherwise an apostrophe would be needed (mǎnián is mǎ nián, not mǎn ián)
fn shorten_before_vowel(skeleton: &str, start: usize, end: usize) -> usize {
    let followed_by_vowel = skeleton[end..].chars().next().is_some_and(is_vowel);
    if followed_by_vowel
        && end - start > 1
        && skeleton[start..end].ends_with(['n', 'N', 'g', 'G', 'r', 'R'])
        && SYLLABLE_EXACT_REGEX.is_match(&skeleton[start..end - 1])
    {
        end - 1
    } else {
        end
    }
}

/// A syllable carries at most one tone mark, a span with two is cut before the second one at
/// the last position where the first part is still a syllable (xīān is xī ān)
fn split_at_second_mark(
    chars: &[char],
    skeleton: &str,
    byte_offsets: &[usize],
    span: &Range<usize>,
) -> usize {
    let start_byte = byte_offsets[span.start];
    let mut marks = span.clone().filter(|&i| tone_of_char(chars[i]) > 0);
    let (Some(first), Some(second)) = (marks.next(), marks.next()) else {
        return span.end;
    };
    (first + 1..=second)
        .rev()
        .find(|&end| SYLLABLE_EXACT_REGEX.is_match(&skeleton[start_byte..byte_offsets[end]]))
        .unwrap_or(second)
}

/// Syllables of `skeleton` as ranges of chars. `chars` is the text with tone marks, it has the
/// same number of chars as `skeleton`, so the ranges index both.
fn syllable_spans(chars: &[char], skeleton: &str) -> Vec<Range<usize>> {
    let byte_offsets: Vec<usize> = skeleton
        .char_indices()
        .map(|(i, _)| i)
        .chain([skeleton.len()])
        .collect();
    let char_pos = |byte: usize| byte_offsets.partition_point(|&b| b < byte);
    let mut spans = vec![];
    let mut byte_pos = 0;
    while let Some(m) = SYLLABLE_REGEX.find_at(skeleton, byte_pos) {
        let end = shorten_before_vowel(skeleton, m.start(), m.end());
        let span = char_pos(m.start())..char_pos(end);
        let end = split_at_second_mark(chars, skeleton, &byte_offsets, &span);
        spans.push(span.start..end);
        byte_pos = byte_offsets[end];
    }
    spans
}

/// Convert pinyin with tone marks to pinyin with tone numbers, e.g. nǐhǎo -> ni3hao3.
/// Syllables without tone mark (neutral tone) don't get a number.
pub fn pinyin_num_from_mark(pinyin_mark: &str) -> String {
    let chars: Vec<char> = pinyin_mark.chars().collect();
    let skeleton: String = chars.iter().map(|&c| plain_char(c)).collect();

    let mut pinyin_num = String::with_capacity(pinyin_mark.len() + 8);
    let mut copied = 0;
    let mut inserted = 0;
    let mut removed = 0;
    for span in syllable_spans(&chars, &skeleton) {
        let syllable = &chars[span.clone()];
        let Some((mark_pos, tone)) = find_tone_mark(syllable) else {
            continue;
        };
        pinyin_num.extend(&chars[copied..span.start]);
        for (i, &c) in syllable.iter().enumerate() {
            if i != mark_pos {
                pinyin_num.push(c);
            } else if let Some((plain, _)) = decompose_marked(c) {
                pinyin_num.push(plain);
            } else {
                // combining mark
                removed += 1;
            }
        }
        pinyin_num.push(char::from(b'0' + tone));
        inserted += 1;
        trace!(start = span.start, end = span.end, tone, inserted, "tone number added");
        copied = span.end;
    }
    pinyin_num.extend(&chars[copied..]);
    debug_assert_eq!(pinyin_num.chars().count() + removed, chars.len() + inserted);
    pinyin_num
}

#[cfg(test)]
mod tests;
