/// Tone of a syllable, 1 to 4 for the contour tones, 0 or 5 for the neutral tone
pub type Tone = u8;

pub const MAX_TONE: Tone = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToneError {
    #[error("no tone number at the end of syllable {0:?}")]
    Malformed(String),
    #[error("expected a syllable as text, got {0}")]
    NotText(String),
    #[error("tone {tone} out of range 0-{MAX_TONE} in syllable {syllable:?}")]
    ToneOutOfRange { syllable: String, tone: u32 },
}

pub fn is_neutral(tone: Tone) -> bool {
    tone == 0 || tone == MAX_TONE
}
