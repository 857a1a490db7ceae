//! EBCDIC-500 (cp500), the international Latin EBCDIC page. It has
//! no trigram data of its own: cp500 carries the same letters as
//! ISO-8859-1, so each language recognizer borrows the matching
//! western-European profile and only the byte folding is EBCDIC.

use crate::detector::types::{NormalizationTable, Script};
use crate::detector::Recognizer;
use crate::error::{CharScopeError, CsResult};
use crate::tables::latin;

pub static IBM500_TABLE: NormalizationTable = NormalizationTable::new(
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20,
        0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0xE2, 0xE4, 0xE0, 0xE1, 0xE3, 0xE5,
        0xE7, 0xF1, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0xE9, 0xEA, 0xEB,
        0xE8, 0xED, 0xEE, 0xEF, 0xEC, 0xDF, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0xE2, 0xE4, 0xE0, 0xE1, 0xE3, 0xE5, 0xE7, 0xF1, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0xF8, 0xE9, 0xEA, 0xEB, 0xE8, 0xED, 0xEE, 0xEF,
        0xEC, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0xD8, 0x61, 0x62, 0x63,
        0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78,
        0x79, 0x7A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x20, 0xF4,
        0xF6, 0xF2, 0xF3, 0xF5, 0x20, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70,
        0x71, 0x72, 0x20, 0xFB, 0xFC, 0xF9, 0xFA, 0xFF, 0x20, 0x20, 0x73, 0x74,
        0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x20, 0xF4, 0xF6, 0xF2, 0xF3, 0xF5,
        0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x20, 0xFB,
        0xFC, 0xF9, 0xFA, 0x20,
    ],
    0x20,
);

const IBM500_LANGUAGES: [&str; 6] = ["en", "de", "fr", "es", "it", "nl"];

pub fn ibm500(language: &'static str) -> CsResult<Recognizer> {
    let profile = latin::profile_for(language)
        .ok_or(CharScopeError::UnknownLanguage(language))?;
    Recognizer::new(
        "IBM500",
        None,
        Script::Latin,
        &IBM500_TABLE,
        vec![profile],
        false,
    )
}

pub fn recognizers() -> CsResult<Vec<Recognizer>> {
    IBM500_LANGUAGES.iter().copied().map(ibm500).collect()
}
