//! Conversion of pinyin between tone numbers (ni3hao3) and tone marks (nǐhǎo).

pub mod common;
pub mod config;
pub mod json;
pub mod normalize;
pub mod pinyin;

pub use common::{Tone, ToneError};
pub use config::ConvertOptions;
