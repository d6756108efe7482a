//! Output filenames for letters.

use super::LetterEntry;

/// Extension shared by every audio output.
pub const AUDIO_EXTENSION: &str = "wav";

/// Native-script filename, e.g. `ب.wav`.
pub fn native_name(letter: &LetterEntry) -> String {
    format!("{}.{AUDIO_EXTENSION}", letter.glyph)
}

/// ASCII-safe filename, e.g. `02_baa.wav`.
pub fn ascii_name(letter: &LetterEntry) -> String {
    format!("{:02}_{}.{AUDIO_EXTENSION}", letter.ordinal, letter.translit)
}
