//! Script-based source language detection.
//!
//! Used when the host sends "auto" as the source language. Detection is a
//! fixed sequence of Unicode-block checks, so it is coarse by design: any
//! Han ideograph resolves to Simplified Chinese even when kana is present,
//! and Latin-script languages other than English are not distinguished.

use regex::Regex;
use std::sync::OnceLock;

// Script-block patterns (cached for performance)
static HAN_REGEX: OnceLock<Regex> = OnceLock::new();
static KANA_REGEX: OnceLock<Regex> = OnceLock::new();
static HANGUL_REGEX: OnceLock<Regex> = OnceLock::new();
static ARABIC_REGEX: OnceLock<Regex> = OnceLock::new();
static THAI_REGEX: OnceLock<Regex> = OnceLock::new();
static CYRILLIC_REGEX: OnceLock<Regex> = OnceLock::new();

/// Detector for the source language of untagged text.
pub struct LanguageDetector;

impl LanguageDetector {
    /// Guess the language of `text` from the first matching script block.
    ///
    /// Checks run in a fixed order: Han, kana, Hangul, Arabic, Thai,
    /// Cyrillic. Anything that matches none of them (Latin text, digits,
    /// punctuation, the empty string) falls back to `"en"`.
    pub fn detect(text: &str) -> &'static str {
        let han = HAN_REGEX.get_or_init(|| Regex::new(r"[\u{4e00}-\u{9fff}]").unwrap());
        if han.is_match(text) {
            return "zh-Hans";
        }

        let kana =
            KANA_REGEX.get_or_init(|| Regex::new(r"[\u{3040}-\u{309f}\u{30a0}-\u{30ff}]").unwrap());
        if kana.is_match(text) {
            return "ja";
        }

        let hangul = HANGUL_REGEX.get_or_init(|| Regex::new(r"[\u{ac00}-\u{d7af}]").unwrap());
        if hangul.is_match(text) {
            return "ko";
        }

        let arabic = ARABIC_REGEX.get_or_init(|| Regex::new(r"[\u{0600}-\u{06ff}]").unwrap());
        if arabic.is_match(text) {
            return "ar";
        }

        let thai = THAI_REGEX.get_or_init(|| Regex::new(r"[\u{0e00}-\u{0e7f}]").unwrap());
        if thai.is_match(text) {
            return "th";
        }

        let cyrillic = CYRILLIC_REGEX.get_or_init(|| Regex::new(r"[\u{0400}-\u{04ff}]").unwrap());
        if cyrillic.is_match(text) {
            return "ru";
        }

        "en"
    }
}
