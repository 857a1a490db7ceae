//! Arabic presentation-form undo for the IBM420 EBCDIC family.
//!
//! IBM420 text may arrive with contextual letter shapes and lam-alef
//! ligatures baked in. Before trigram matching every byte is folded
//! back to its base letter, and each ligature is split into the lam
//! byte followed by the bare alef, so shaped and unshaped encodings
//! of the same text score identically.

use super::engine::GramScanner;
use crate::tables::arabic::IBM420_UNSHAPE;

const LAM: u8 = 0xB1;

/// Base alef byte for a lam-alef ligature, if `raw` is one.
#[inline]
fn lam_alef(raw: u8) -> Option<u8> {
    match raw {
        0xB2 | 0xB3 => Some(0x47),
        0xB4 | 0xB5 => Some(0x49),
        0xB8 | 0xB9 => Some(0x56),
        _ => None,
    }
}

/// Feeds `bytes` through the scanner with the shaping undo applied.
/// A raw NUL ends the stream early.
pub(crate) fn scan_shaped(scanner: &mut GramScanner<'_>, bytes: &[u8]) {
    for &raw in bytes {
        if raw == 0 {
            break;
        }
        if let Some(alef) = lam_alef(raw) {
            scanner.push(LAM);
            scanner.push(alef);
        } else {
            scanner.push(IBM420_UNSHAPE[raw as usize]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::engine::GramScanner;
    use crate::tables::arabic;

    fn scanner() -> GramScanner<'static> {
        GramScanner::new(&arabic::IBM420_TABLE, &arabic::IBM420_RTL_PROFILE)
    }

    #[test]
    fn ligature_expands_to_lam_plus_alef() {
        let mut lig = scanner();
        scan_shaped(&mut lig, &[0x40, 0xB2, 0x40]);
        let mut decomposed = scanner();
        scan_shaped(&mut decomposed, &[0x40, 0xB1, 0x47, 0x40]);
        assert_eq!(lig.counters(), decomposed.counters());
    }

    #[test]
    fn all_three_ligature_families_share_the_lam_prefix() {
        for (raw, alef) in [(0xB3u8, 0x47u8), (0xB4, 0x49), (0xB5, 0x49), (0xB8, 0x56), (0xB9, 0x56)] {
            let mut shaped = scanner();
            scan_shaped(&mut shaped, &[raw]);
            let mut expanded = scanner();
            scan_shaped(&mut expanded, &[0xB1, alef]);
            assert_eq!(shaped.counters(), expanded.counters(), "ligature 0x{raw:02X}");
        }
    }

    #[test]
    fn nul_byte_terminates_the_stream() {
        let mut truncated = scanner();
        scan_shaped(&mut truncated, &[0xB1, 0x47, 0x00, 0xB1, 0x47, 0xB1]);
        let mut short = scanner();
        scan_shaped(&mut short, &[0xB1, 0x47]);
        assert_eq!(truncated.counters(), short.counters());
    }
}
