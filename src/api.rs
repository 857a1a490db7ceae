//! High-level detection entry points.

use std::fs;
use std::path::Path;

use rayon::prelude::*;
use tracing::info;

use crate::detector::types::{CharsetMatch, DetectionInput, Script};
use crate::detector::Recognizer;
use crate::error::CsResult;
use crate::tables::{arabic, cyrillic, ebcdic, greek, hebrew, latin};

/// Builds the full recognizer bank: sixteen charset recognizers plus
/// the six per-language EBCDIC-500 ones.
pub fn recognizers() -> CsResult<Vec<Recognizer>> {
    let mut bank = vec![
        latin::iso_8859_1()?,
        latin::iso_8859_2()?,
        cyrillic::iso_8859_5()?,
        arabic::iso_8859_6()?,
        greek::iso_8859_7()?,
        hebrew::iso_8859_8_i()?,
        hebrew::iso_8859_8()?,
        latin::iso_8859_9()?,
        cyrillic::windows_1251()?,
        arabic::windows_1256()?,
        cyrillic::koi8_r()?,
        cyrillic::ibm866()?,
        hebrew::ibm424_rtl()?,
        hebrew::ibm424_ltr()?,
        arabic::ibm420_rtl()?,
        arabic::ibm420_ltr()?,
    ];
    bank.extend(ebcdic::recognizers()?);
    Ok(bank)
}

/// Runs the bank over the input in parallel, optionally restricted
/// to one script. Results come back sorted by confidence, best
/// first; the sort is stable so ties keep bank order.
pub fn scan(
    bank: &[Recognizer],
    input: &DetectionInput<'_>,
    script: Option<Script>,
) -> Vec<CharsetMatch> {
    let mut matches: Vec<CharsetMatch> = bank
        .par_iter()
        .filter(|r| script.is_none_or(|s| r.script() == s))
        .filter_map(|r| r.detect(input))
        .collect();
    matches.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    matches
}

/// Reads a file and scans it with the full bank.
pub fn detect_path(path: &Path) -> CsResult<Vec<CharsetMatch>> {
    let bytes = fs::read(path)?;
    let bank = recognizers()?;
    let input = DetectionInput::from_bytes(&bytes);
    info!(path = %path.display(), len = bytes.len(), "scanning");
    Ok(scan(&bank, &input, None))
}
