//! The Arabic letter table and its filename policy.
//!
//! The table is the single source of truth for letter order: ordinals,
//! index rows and ASCII filenames are all derived from a letter's position.

mod naming;
mod table;

pub use naming::{AUDIO_EXTENSION, ascii_name, native_name};
pub use table::{LETTER_COUNT, LetterEntry, all, lookup};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ===========================================
    // Table invariants
    // ===========================================

    #[test]
    fn test_table_has_28_letters() {
        assert_eq!(all().len(), LETTER_COUNT);
        assert_eq!(all().count(), 28);
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: HashSet<char> = all().map(|l| l.glyph).collect();
        assert_eq!(glyphs.len(), LETTER_COUNT);
    }

    #[test]
    fn test_translits_are_distinct_and_ascii() {
        let translits: HashSet<&str> = all().map(|l| l.translit).collect();
        assert_eq!(translits.len(), LETTER_COUNT);
        assert!(all().all(|l| l.translit.is_ascii()));
    }

    #[test]
    fn test_ordinals_are_positional() {
        let ordinals: Vec<usize> = all().map(|l| l.ordinal).collect();
        let expected: Vec<usize> = (1..=28).collect();
        assert_eq!(ordinals, expected);
    }

    #[test]
    fn test_first_and_last_letters() {
        let letters: Vec<LetterEntry> = all().collect();
        assert_eq!(letters[0].glyph, 'ا');
        assert_eq!(letters[0].translit, "alif");
        assert_eq!(letters[27].glyph, 'ي');
        assert_eq!(letters[27].translit, "yaa");
    }

    #[test]
    fn test_lookup_returns_ordinal() {
        let jeem = lookup('ج').unwrap();
        assert_eq!(jeem.ordinal, 5);
        assert_eq!(jeem.translit, "jeem");

        let haa2 = lookup('ه').unwrap();
        assert_eq!(haa2.ordinal, 26);
    }

    #[test]
    fn test_lookup_unknown_glyph() {
        assert!(lookup('x').is_none());
        assert!(lookup('ة').is_none());
    }

    #[test]
    fn test_text_is_single_glyph() {
        for letter in all() {
            assert_eq!(letter.text().chars().count(), 1);
        }
    }

    // ===========================================
    // Naming policy
    // ===========================================

    #[test]
    fn test_native_name() {
        let baa = lookup('ب').unwrap();
        assert_eq!(native_name(&baa), "ب.wav");
    }

    #[test]
    fn test_ascii_name_is_zero_padded() {
        let alif = lookup('ا').unwrap();
        assert_eq!(ascii_name(&alif), "01_alif.wav");

        let taa_emph = lookup('ط').unwrap();
        assert_eq!(ascii_name(&taa_emph), "16_taa_emph.wav");

        let yaa = lookup('ي').unwrap();
        assert_eq!(ascii_name(&yaa), "28_yaa.wav");
    }

    #[test]
    fn test_ascii_prefixes_cover_01_to_28() {
        let prefixes: Vec<String> = all().map(|l| ascii_name(&l)[..2].to_string()).collect();
        let expected: Vec<String> = (1..=28).map(|n| format!("{n:02}")).collect();
        assert_eq!(prefixes, expected);
    }

    #[test]
    fn test_native_names_are_injective() {
        let names: HashSet<String> = all().map(|l| native_name(&l)).collect();
        assert_eq!(names.len(), LETTER_COUNT);
    }

    #[test]
    fn test_ascii_names_are_stable() {
        let first: Vec<String> = all().map(|l| ascii_name(&l)).collect();
        let second: Vec<String> = all().map(|l| ascii_name(&l)).collect();
        assert_eq!(first, second);
    }
}
