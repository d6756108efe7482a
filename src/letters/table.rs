//! The fixed Arabic letter table.

/// Number of letters in the table.
pub const LETTER_COUNT: usize = 28;

/// (glyph, transliteration) pairs in alphabet order.
///
/// Order is significant: it drives ordinals and therefore ASCII filenames.
const TABLE: [(char, &str); LETTER_COUNT] = [
    ('ا', "alif"),
    ('ب', "baa"),
    ('ت', "taa"),
    ('ث', "thaa"),
    ('ج', "jeem"),
    ('ح', "haa"),
    ('خ', "khaa"),
    ('د', "dal"),
    ('ذ', "dhal"),
    ('ر', "raa"),
    ('ز', "zaay"),
    ('س', "seen"),
    ('ش', "sheen"),
    ('ص', "saad"),
    ('ض', "daad"),
    ('ط', "taa_emph"),
    ('ظ', "dhaa_emph"),
    ('ع', "ain"),
    ('غ', "ghain"),
    ('ف', "faa"),
    ('ق', "qaaf"),
    ('ك', "kaaf"),
    ('ل', "laam"),
    ('م', "meem"),
    ('ن', "noon"),
    ('ه', "haa2"),
    ('و', "waaw"),
    ('ي', "yaa"),
];

/// A single letter of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    /// The Arabic letter itself.
    pub glyph: char,
    /// ASCII mnemonic used for ASCII-safe filenames.
    pub translit: &'static str,
    /// 1-based position in the table.
    pub ordinal: usize,
}

impl LetterEntry {
    fn at(index: usize) -> Self {
        let (glyph, translit) = TABLE[index];
        Self {
            glyph,
            translit,
            ordinal: index + 1,
        }
    }

    /// The glyph as synthesis input text.
    pub fn text(&self) -> String {
        self.glyph.to_string()
    }
}

/// Iterate over all letters in table order.
pub fn all() -> impl ExactSizeIterator<Item = LetterEntry> {
    (0..LETTER_COUNT).map(LetterEntry::at)
}

/// Find the entry for a glyph.
pub fn lookup(glyph: char) -> Option<LetterEntry> {
    TABLE
        .iter()
        .position(|(g, _)| *g == glyph)
        .map(LetterEntry::at)
}
