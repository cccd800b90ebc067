//! The conversions for loosely typed JSON values.
//!
//! Conversions of whole strings return anything that is not a string unchanged. Conversions of a
//! single syllable need a string and fail with [`ToneError::NotText`] otherwise. The normalizing
//! functions also accept numbers and booleans, which are converted to a string first.

use std::borrow::Cow;

use serde_json::Value;

use crate::common::{Tone, ToneError};
use crate::config::ConvertOptions;
use crate::normalize;
use crate::pinyin;

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Text of a string, number or boolean
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

fn map_text(value: &Value, f: impl Fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(f(s)),
        _ => value.clone(),
    }
}

fn map_scalar(value: &Value, f: impl Fn(&str) -> String) -> Value {
    match scalar_text(value) {
        Some(text) => Value::String(f(&text)),
        None => value.clone(),
    }
}

pub fn pinyin_mark_from_num(value: &Value, options: &ConvertOptions) -> Value {
    map_text(value, |s| pinyin::pinyin_mark_from_num(s, options))
}

pub fn pinyin_num_from_mark(value: &Value) -> Value {
    map_text(value, pinyin::pinyin_num_from_mark)
}

/// Null is returned unchanged, like an empty string
pub fn syllable_mark_from_num(value: &Value) -> Result<Value, ToneError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::String(s) => pinyin::syllable_mark_from_num(s).map(Value::String),
        _ => Err(ToneError::NotText(type_name(value).to_owned())),
    }
}

pub fn mark_index(value: &Value) -> Result<Option<usize>, ToneError> {
    match value {
        Value::String(s) => Ok(pinyin::mark_index(s)),
        _ => Err(ToneError::NotText(type_name(value).to_owned())),
    }
}

pub fn tone_from_char(value: &Value) -> Option<Tone> {
    value.as_str().and_then(pinyin::tone_from_char_str)
}

pub fn strip_digits(value: &Value) -> Value {
    map_scalar(value, normalize::strip_digits)
}

pub fn strip_diacritics(value: &Value) -> Value {
    map_scalar(value, normalize::strip_diacritics)
}

pub fn umlaut_substitute(value: &Value) -> Value {
    map_scalar(value, normalize::umlaut_substitute)
}
