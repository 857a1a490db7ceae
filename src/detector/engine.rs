//! Trigram accumulation and scoring.
//!
//! The scanner keeps a rolling 24-bit window over the normalized byte
//! stream. Every normalized byte shifts into the window and bumps the
//! total; if the window matches one of the profile's 64 trigrams the
//! hit counter bumps too. The hit rate maps to a 0..=100 confidence.

use super::types::{NGramProfile, NormalizationTable};

const GRAM_MASK: u32 = 0xFF_FFFF;

/// Binary search over the sorted trigram list. Returns the entry's
/// index, or `None` when the value is not in the profile.
#[inline]
pub(crate) fn find_gram(grams: &[u32; 64], value: u32) -> Option<usize> {
    grams.binary_search(&value).ok()
}

/// Hit rate to confidence. Above one-in-three the score saturates at
/// 98 rather than 100, leaving room for detectors with harder
/// evidence (BOMs, escape sequences) to outrank a statistical guess.
pub(crate) fn confidence(hits: u32, total: u32) -> u8 {
    let rate = hits as f64 / total as f64;
    if rate > 0.33 {
        98
    } else {
        (rate * 300.0) as u8
    }
}

pub(crate) struct GramScanner<'a> {
    table: &'a NormalizationTable,
    profile: &'a NGramProfile,
    gram: u32,
    total: u32,
    hits: u32,
    skip_separator: bool,
}

impl<'a> GramScanner<'a> {
    pub(crate) fn new(table: &'a NormalizationTable, profile: &'a NGramProfile) -> Self {
        GramScanner {
            table,
            profile,
            gram: 0,
            total: 0,
            hits: 0,
            skip_separator: false,
        }
    }

    /// Feeds one raw byte through normalization. Zero-mapped bytes
    /// vanish; runs of separators collapse to a single one.
    pub(crate) fn push(&mut self, raw: u8) {
        let norm = self.table.normalize(raw);
        if norm == 0 {
            return;
        }
        if norm == self.table.separator() && self.skip_separator {
            return;
        }
        self.add(norm);
        self.skip_separator = norm == self.table.separator();
    }

    fn add(&mut self, norm: u8) {
        self.gram = ((self.gram << 8) | u32::from(norm)) & GRAM_MASK;
        self.total += 1;
        if find_gram(self.profile.grams(), self.gram).is_some() {
            self.hits += 1;
        }
    }

    /// Flushes the window with a final separator and scores. The
    /// flush byte is always counted, even right after a separator, so
    /// total is at least 1 and the rate is never 0/0.
    pub(crate) fn finish(mut self) -> u8 {
        self.add(self.table.separator());
        confidence(self.hits, self.total)
    }

    #[cfg(test)]
    pub(crate) fn counters(&self) -> (u32, u32) {
        (self.hits, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::latin;

    fn en_scanner() -> GramScanner<'static> {
        let profile = latin::profile_for("en").unwrap();
        GramScanner::new(&latin::LATIN1_TABLE, profile)
    }

    #[test]
    fn find_gram_locates_every_entry() {
        let grams = latin::profile_for("en").unwrap().grams();
        for (i, &g) in grams.iter().enumerate() {
            assert_eq!(find_gram(grams, g), Some(i));
        }
        assert_eq!(find_gram(grams, 0x000001), None);
        assert_eq!(find_gram(grams, 0xFF_FFFF), None);
        // absent value inside the covered range
        assert_eq!(find_gram(grams, grams[0] + 1), None);
    }

    #[test]
    fn confidence_clamps_above_one_third() {
        assert_eq!(confidence(34, 100), 98);
        assert_eq!(confidence(100, 100), 98);
        assert_eq!(confidence(33, 100), 99); // 0.33 * 300, not clamped
        assert_eq!(confidence(0, 1), 0);
        assert_eq!(confidence(1, 10), 30);
    }

    #[test]
    fn empty_input_scores_zero_with_one_counted_flush() {
        let scanner = en_scanner();
        assert_eq!(scanner.finish(), 0);
    }

    #[test]
    fn separator_runs_collapse() {
        let mut a = en_scanner();
        for &b in b"  a" {
            a.push(b);
        }
        let mut b = en_scanner();
        for &x in b" a" {
            b.push(x);
        }
        assert_eq!(a.counters(), b.counters());
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn zero_mapped_bytes_are_dropped() {
        // apostrophe folds to nothing in the latin-1 table
        let mut with_apostrophe = en_scanner();
        for &b in b"don't " {
            with_apostrophe.push(b);
        }
        let mut without = en_scanner();
        for &b in b"dont " {
            without.push(b);
        }
        assert_eq!(with_apostrophe.counters(), without.counters());
    }

    #[test]
    fn flush_counts_even_after_trailing_separator() {
        let mut scanner = en_scanner();
        for &b in b"the " {
            scanner.push(b);
        }
        let (hits, total) = scanner.counters();
        assert_eq!((hits, total), (2, 4));
        // finish adds exactly one more despite the trailing space:
        // 2 hits over 5 grams clears the 0.33 clamp
        assert_eq!(scanner.finish(), 98);
    }
}
