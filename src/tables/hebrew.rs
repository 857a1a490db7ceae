//! Hebrew charsets. ISO-8859-8 text exists in both logical order
//! (the -I variant) and visual order, so two profiles run over the
//! same byte folding. The IBM424 EBCDIC pair works the same way with
//! 0x40 as the EBCDIC space.

use crate::detector::types::{NGramProfile, NormalizationTable, Script};
use crate::detector::Recognizer;
use crate::error::CsResult;

pub static ISO8_TABLE: NormalizationTable = NormalizationTable::new(
    [
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
        0x68, 0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x73,
        0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x6A, 0x6B,
        0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77,
        0x78, 0x79, 0x7A, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0xB5, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0xE0, 0xE1, 0xE2, 0xE3,
        0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
        0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0x20,
        0x20, 0x20, 0x20, 0x20,
    ],
    0x20,
);

static ISO8_LOGICAL_HE: NGramProfile = NGramProfile::tagged(
    "he",
    [
        0x20E0E5, 0x20E0E7, 0x20E0E9, 0x20E0FA, 0x20E1E9, 0x20E1EE,
        0x20E4E0, 0x20E4E5, 0x20E4E9, 0x20E4EE, 0x20E4F2, 0x20E4F9,
        0x20E4FA, 0x20ECE0, 0x20ECE4, 0x20EEE0, 0x20F2EC, 0x20F9EC,
        0xE0FA20, 0xE420E0, 0xE420E1, 0xE420E4, 0xE420EC, 0xE420EE,
        0xE420F9, 0xE4E5E0, 0xE5E020, 0xE5ED20, 0xE5EF20, 0xE5F820,
        0xE5FA20, 0xE920E4, 0xE9E420, 0xE9E5FA, 0xE9E9ED, 0xE9ED20,
        0xE9EF20, 0xE9F820, 0xE9FA20, 0xEC20E0, 0xEC20E4, 0xECE020,
        0xECE420, 0xED20E0, 0xED20E1, 0xED20E4, 0xED20EC, 0xED20EE,
        0xED20F9, 0xEEE420, 0xEF20E4, 0xF0E420, 0xF0E920, 0xF0E9ED,
        0xF2EC20, 0xF820E4, 0xF8E9ED, 0xF9EC20, 0xFA20E0, 0xFA20E1,
        0xFA20E4, 0xFA20EC, 0xFA20EE, 0xFA20F9,
    ],
);

static ISO8_VISUAL_HE: NGramProfile = NGramProfile::tagged(
    "he",
    [
        0x20E0E5, 0x20E0EC, 0x20E4E9, 0x20E4EC, 0x20E4EE, 0x20E4F0,
        0x20E9F0, 0x20ECF2, 0x20ECF9, 0x20EDE5, 0x20EDE9, 0x20EFE5,
        0x20EFE9, 0x20F8E5, 0x20F8E9, 0x20FAE0, 0x20FAE5, 0x20FAE9,
        0xE020E4, 0xE020EC, 0xE020ED, 0xE020FA, 0xE0E420, 0xE0E5E4,
        0xE0EC20, 0xE0EE20, 0xE120E4, 0xE120ED, 0xE120FA, 0xE420E4,
        0xE420E9, 0xE420EC, 0xE420ED, 0xE420EF, 0xE420F8, 0xE420FA,
        0xE4EC20, 0xE5E020, 0xE5E420, 0xE7E020, 0xE9E020, 0xE9E120,
        0xE9E420, 0xEC20E4, 0xEC20ED, 0xEC20FA, 0xECF220, 0xECF920,
        0xEDE9E9, 0xEDE9F0, 0xEDE9F8, 0xEE20E4, 0xEE20ED, 0xEE20FA,
        0xEEE120, 0xEEE420, 0xF2E420, 0xF920E4, 0xF920ED, 0xF920FA,
        0xF9E420, 0xFAE020, 0xFAE420, 0xFAE5E9,
    ],
);

pub static IBM424_TABLE: NormalizationTable = NormalizationTable::new(
    [
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
        0x48, 0x49, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x51, 0x52, 0x53,
        0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x71, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x40, 0x40, 0x40, 0x81, 0x82, 0x83,
        0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0xA0, 0x40, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7,
        0xA8, 0xA9, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97,
        0x98, 0x99, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0xA2, 0xA3,
        0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
        0x40, 0x40, 0x40, 0x40,
    ],
    0x40,
);

static IBM424_RTL_HE: NGramProfile = NGramProfile::tagged(
    "he",
    [
        0x404146, 0x404148, 0x404151, 0x404171, 0x404251, 0x404256,
        0x404541, 0x404546, 0x404551, 0x404556, 0x404562, 0x404569,
        0x404571, 0x405441, 0x405445, 0x405641, 0x406254, 0x406954,
        0x417140, 0x454041, 0x454042, 0x454045, 0x454054, 0x454056,
        0x454069, 0x454641, 0x464140, 0x465540, 0x465740, 0x466840,
        0x467140, 0x514045, 0x514540, 0x514671, 0x515155, 0x515540,
        0x515740, 0x516840, 0x517140, 0x544041, 0x544045, 0x544140,
        0x544540, 0x554041, 0x554042, 0x554045, 0x554054, 0x554056,
        0x554069, 0x564540, 0x574045, 0x584540, 0x585140, 0x585155,
        0x625440, 0x684045, 0x685155, 0x695440, 0x714041, 0x714042,
        0x714045, 0x714054, 0x714056, 0x714069,
    ],
);

static IBM424_LTR_HE: NGramProfile = NGramProfile::tagged(
    "he",
    [
        0x404146, 0x404154, 0x404551, 0x404554, 0x404556, 0x404558,
        0x405158, 0x405462, 0x405469, 0x405546, 0x405551, 0x405746,
        0x405751, 0x406846, 0x406851, 0x407141, 0x407146, 0x407151,
        0x414045, 0x414054, 0x414055, 0x414071, 0x414540, 0x414645,
        0x415440, 0x415640, 0x424045, 0x424055, 0x424071, 0x454045,
        0x454051, 0x454054, 0x454055, 0x454057, 0x454068, 0x454071,
        0x455440, 0x464140, 0x464540, 0x484140, 0x514140, 0x514240,
        0x514540, 0x544045, 0x544055, 0x544071, 0x546240, 0x546940,
        0x555151, 0x555158, 0x555168, 0x564045, 0x564055, 0x564071,
        0x564240, 0x564540, 0x624540, 0x694045, 0x694055, 0x694071,
        0x694540, 0x714140, 0x714540, 0x714651,
    ],
);

pub fn iso_8859_8_i() -> CsResult<Recognizer> {
    Recognizer::new(
        "ISO-8859-8-I",
        Some("windows-1255"),
        Script::Hebrew,
        &ISO8_TABLE,
        vec![&ISO8_LOGICAL_HE],
        false,
    )
}

pub fn iso_8859_8() -> CsResult<Recognizer> {
    Recognizer::new(
        "ISO-8859-8",
        Some("windows-1255"),
        Script::Hebrew,
        &ISO8_TABLE,
        vec![&ISO8_VISUAL_HE],
        false,
    )
}

pub fn ibm424_rtl() -> CsResult<Recognizer> {
    Recognizer::new(
        "IBM424_rtl",
        None,
        Script::Hebrew,
        &IBM424_TABLE,
        vec![&IBM424_RTL_HE],
        false,
    )
}

pub fn ibm424_ltr() -> CsResult<Recognizer> {
    Recognizer::new(
        "IBM424_ltr",
        None,
        Script::Hebrew,
        &IBM424_TABLE,
        vec![&IBM424_LTR_HE],
        false,
    )
}
