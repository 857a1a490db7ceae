use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{CharScopeError, CsResult};

/// Byte-level normalization table for one charset family.
///
/// Maps every raw byte to its folded class: `0` means "drop entirely",
/// the separator byte marks a word boundary, everything else is a
/// case-folded letter class fed to the trigram accumulator.
pub struct NormalizationTable {
    bytes: [u8; 256],
    separator: u8,
}

impl NormalizationTable {
    pub const fn new(bytes: [u8; 256], separator: u8) -> Self {
        NormalizationTable { bytes, separator }
    }

    #[inline]
    pub fn normalize(&self, raw: u8) -> u8 {
        self.bytes[raw as usize]
    }

    #[inline]
    pub fn separator(&self) -> u8 {
        self.separator
    }
}

/// One language's 64 most frequent trigrams, packed as 24-bit words
/// and sorted ascending so lookup is a binary search.
pub struct NGramProfile {
    language: Option<&'static str>,
    grams: [u32; 64],
}

impl NGramProfile {
    pub const fn tagged(language: &'static str, grams: [u32; 64]) -> Self {
        NGramProfile {
            language: Some(language),
            grams,
        }
    }

    pub fn language(&self) -> Option<&'static str> {
        self.language
    }

    pub fn grams(&self) -> &[u32; 64] {
        &self.grams
    }

    /// Checks the sort invariant the binary search relies on.
    pub fn validate(&self, charset: &'static str) -> CsResult<()> {
        for pair in self.grams.windows(2) {
            if pair[0] >= pair[1] {
                return Err(CharScopeError::Profile {
                    charset,
                    detail: format!(
                        "trigram list not strictly ascending near 0x{:06X}",
                        pair[1]
                    ),
                });
            }
        }
        if let Some(&last) = self.grams.last() {
            if last > 0xFF_FFFF {
                return Err(CharScopeError::Profile {
                    charset,
                    detail: format!("trigram 0x{last:X} exceeds 24 bits"),
                });
            }
        }
        Ok(())
    }
}

/// Input to a detection pass: the raw bytes plus a hint about whether
/// any byte in the C1 control range (0x80..=0x9F) was seen, which is
/// what separates the windows-125x supersets from their ISO bases.
pub struct DetectionInput<'a> {
    bytes: &'a [u8],
    high_bit_hint: bool,
}

impl<'a> DetectionInput<'a> {
    pub fn new(bytes: &'a [u8], high_bit_hint: bool) -> Self {
        DetectionInput {
            bytes,
            high_bit_hint,
        }
    }

    /// Scans the buffer once to derive the C1 hint.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        let hint = bytes.iter().any(|&b| (0x80..=0x9F).contains(&b));
        DetectionInput {
            bytes,
            high_bit_hint: hint,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn high_bit_hint(&self) -> bool {
        self.high_bit_hint
    }
}

/// A successful recognition: charset name, optional language tag and
/// the 0..=100 confidence score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharsetMatch {
    pub charset: &'static str,
    pub language: Option<&'static str>,
    pub confidence: u8,
}

/// Writing system a recognizer covers, used for CLI filtering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Hebrew,
    Arabic,
}
