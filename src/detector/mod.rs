mod engine;
mod shaping;
pub mod types;

use tracing::debug;

use crate::error::CsResult;
use engine::GramScanner;
use types::{CharsetMatch, DetectionInput, NGramProfile, NormalizationTable, Script};

/// A statistical recognizer for one single-byte charset.
///
/// Holds the charset's normalization table plus one trigram profile
/// per candidate language. Multi-language recognizers score every
/// profile and keep the best; single-language ones carry exactly one.
pub struct Recognizer {
    charset: &'static str,
    high_bit_alias: Option<&'static str>,
    script: Script,
    table: &'static NormalizationTable,
    profiles: Vec<&'static NGramProfile>,
    shaping: bool,
}

impl Recognizer {
    pub fn new(
        charset: &'static str,
        high_bit_alias: Option<&'static str>,
        script: Script,
        table: &'static NormalizationTable,
        profiles: Vec<&'static NGramProfile>,
        shaping: bool,
    ) -> CsResult<Self> {
        for profile in &profiles {
            profile.validate(charset)?;
        }
        debug!(
            charset,
            script = %script,
            profiles = profiles.len(),
            shaping,
            "recognizer ready"
        );
        Ok(Recognizer {
            charset,
            high_bit_alias,
            script,
            table,
            profiles,
            shaping,
        })
    }

    pub fn charset(&self) -> &'static str {
        self.charset
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Name reported for a match. When the input carried bytes in the
    /// C1 range the windows-125x alias is the better answer than the
    /// ISO base, since the ISO charsets leave that range undefined.
    pub fn reported_name(&self, input: &DetectionInput<'_>) -> &'static str {
        match self.high_bit_alias {
            Some(alias) if input.high_bit_hint() => alias,
            _ => self.charset,
        }
    }

    fn score(&self, profile: &NGramProfile, bytes: &[u8]) -> u8 {
        let mut scanner = GramScanner::new(self.table, profile);
        if self.shaping {
            shaping::scan_shaped(&mut scanner, bytes);
        } else {
            for &raw in bytes {
                scanner.push(raw);
            }
        }
        scanner.finish()
    }

    /// Runs the match and returns the best-scoring language, if any.
    ///
    /// Single-profile recognizers reject only a zero score.
    /// Multi-profile ones compare against a floor of -1 with a strict
    /// greater-than, so the first language in declaration order wins
    /// ties, and anything at or below zero is rejected.
    pub fn detect(&self, input: &DetectionInput<'_>) -> Option<CharsetMatch> {
        if let [profile] = self.profiles.as_slice() {
            let confidence = self.score(profile, input.bytes());
            if confidence == 0 {
                return None;
            }
            return Some(CharsetMatch {
                charset: self.reported_name(input),
                language: profile.language(),
                confidence,
            });
        }

        let mut best: i32 = -1;
        let mut best_language = None;
        for profile in &self.profiles {
            let confidence = self.score(profile, input.bytes());
            if i32::from(confidence) > best {
                best = i32::from(confidence);
                best_language = profile.language();
            }
        }
        if best <= 0 {
            return None;
        }
        Some(CharsetMatch {
            charset: self.reported_name(input),
            language: best_language,
            confidence: best as u8,
        })
    }
}
