use charscope::api;
use charscope::tables::{arabic, cyrillic, ebcdic, greek, hebrew, latin};
use charscope::{CharScopeError, CsResult, DetectionInput, Recognizer};
use rstest::rstest;
use std::io::Write;

// Russian pangram, windows-1251 bytes
const RU_CP1251: &[u8] = &[
    0xD1, 0xFA, 0xE5, 0xF8, 0xFC, 0x20, 0xE6, 0xE5, 0x20, 0xE5, 0xF9, 0xB8,
    0x20, 0xFD, 0xF2, 0xE8, 0xF5, 0x20, 0xEC, 0xFF, 0xE3, 0xEA, 0xE8, 0xF5,
    0x20, 0xF4, 0xF0, 0xE0, 0xED, 0xF6, 0xF3, 0xE7, 0xF1, 0xEA, 0xE8, 0xF5,
    0x20, 0xE1, 0xF3, 0xEB, 0xEE, 0xEA, 0x20, 0xE4, 0xE0, 0x20, 0xE2, 0xFB,
    0xEF, 0xE5, 0xE9, 0x20, 0xF7, 0xE0, 0xFE, 0x2E, 0x20, 0xD8, 0xE8, 0xF0,
    0xEE, 0xEA, 0xE0, 0xFF, 0x20, 0xFD, 0xEB, 0xE5, 0xEA, 0xF2, 0xF0, 0xE8,
    0xF4, 0xE8, 0xEA, 0xE0, 0xF6, 0xE8, 0xFF, 0x20, 0xFE, 0xE6, 0xED, 0xFB,
    0xF5, 0x20, 0xE3, 0xF3, 0xE1, 0xE5, 0xF0, 0xED, 0xE8, 0xE9, 0x20, 0xE4,
    0xE0, 0xF1, 0xF2, 0x20, 0xEC, 0xEE, 0xF9, 0xED, 0xFB, 0xE9, 0x20, 0xF2,
    0xEE, 0xEB, 0xF7, 0xEE, 0xEA, 0x20, 0xEF, 0xEE, 0xE4, 0xFA, 0xB8, 0xEC,
    0xF3, 0x20, 0xF1, 0xE5, 0xEB, 0xFC, 0xF1, 0xEA, 0xEE, 0xE3, 0xEE, 0x20,
    0xF5, 0xEE, 0xE7, 0xFF, 0xE9, 0xF1, 0xF2, 0xE2, 0xE0, 0x2E,
];

// same text, KOI8-R bytes
const RU_KOI8: &[u8] = &[
    0xF3, 0xDF, 0xC5, 0xDB, 0xD8, 0x20, 0xD6, 0xC5, 0x20, 0xC5, 0xDD, 0xA3,
    0x20, 0xDC, 0xD4, 0xC9, 0xC8, 0x20, 0xCD, 0xD1, 0xC7, 0xCB, 0xC9, 0xC8,
    0x20, 0xC6, 0xD2, 0xC1, 0xCE, 0xC3, 0xD5, 0xDA, 0xD3, 0xCB, 0xC9, 0xC8,
    0x20, 0xC2, 0xD5, 0xCC, 0xCF, 0xCB, 0x20, 0xC4, 0xC1, 0x20, 0xD7, 0xD9,
    0xD0, 0xC5, 0xCA, 0x20, 0xDE, 0xC1, 0xC0, 0x2E, 0x20, 0xFB, 0xC9, 0xD2,
    0xCF, 0xCB, 0xC1, 0xD1, 0x20, 0xDC, 0xCC, 0xC5, 0xCB, 0xD4, 0xD2, 0xC9,
    0xC6, 0xC9, 0xCB, 0xC1, 0xC3, 0xC9, 0xD1, 0x20, 0xC0, 0xD6, 0xCE, 0xD9,
    0xC8, 0x20, 0xC7, 0xD5, 0xC2, 0xC5, 0xD2, 0xCE, 0xC9, 0xCA, 0x20, 0xC4,
    0xC1, 0xD3, 0xD4, 0x20, 0xCD, 0xCF, 0xDD, 0xCE, 0xD9, 0xCA, 0x20, 0xD4,
    0xCF, 0xCC, 0xDE, 0xCF, 0xCB, 0x20, 0xD0, 0xCF, 0xC4, 0xDF, 0xA3, 0xCD,
    0xD5, 0x20, 0xD3, 0xC5, 0xCC, 0xD8, 0xD3, 0xCB, 0xCF, 0xC7, 0xCF, 0x20,
    0xC8, 0xCF, 0xDA, 0xD1, 0xCA, 0xD3, 0xD4, 0xD7, 0xC1, 0x2E,
];

// same text, IBM866 bytes
const RU_CP866: &[u8] = &[
    0x91, 0xEA, 0xA5, 0xE8, 0xEC, 0x20, 0xA6, 0xA5, 0x20, 0xA5, 0xE9, 0xF1,
    0x20, 0xED, 0xE2, 0xA8, 0xE5, 0x20, 0xAC, 0xEF, 0xA3, 0xAA, 0xA8, 0xE5,
    0x20, 0xE4, 0xE0, 0xA0, 0xAD, 0xE6, 0xE3, 0xA7, 0xE1, 0xAA, 0xA8, 0xE5,
    0x20, 0xA1, 0xE3, 0xAB, 0xAE, 0xAA, 0x20, 0xA4, 0xA0, 0x20, 0xA2, 0xEB,
    0xAF, 0xA5, 0xA9, 0x20, 0xE7, 0xA0, 0xEE, 0x2E, 0x20, 0x98, 0xA8, 0xE0,
    0xAE, 0xAA, 0xA0, 0xEF, 0x20, 0xED, 0xAB, 0xA5, 0xAA, 0xE2, 0xE0, 0xA8,
    0xE4, 0xA8, 0xAA, 0xA0, 0xE6, 0xA8, 0xEF, 0x20, 0xEE, 0xA6, 0xAD, 0xEB,
    0xE5, 0x20, 0xA3, 0xE3, 0xA1, 0xA5, 0xE0, 0xAD, 0xA8, 0xA9, 0x20, 0xA4,
    0xA0, 0xE1, 0xE2, 0x20, 0xAC, 0xAE, 0xE9, 0xAD, 0xEB, 0xA9, 0x20, 0xE2,
    0xAE, 0xAB, 0xE7, 0xAE, 0xAA, 0x20, 0xAF, 0xAE, 0xA4, 0xEA, 0xF1, 0xAC,
    0xE3, 0x20, 0xE1, 0xA5, 0xAB, 0xEC, 0xE1, 0xAA, 0xAE, 0xA3, 0xAE, 0x20,
    0xE5, 0xAE, 0xA7, 0xEF, 0xA9, 0xE1, 0xE2, 0xA2, 0xA0, 0x2E,
];

// same text, ISO-8859-5 bytes
const RU_ISO5: &[u8] = &[
    0xC1, 0xEA, 0xD5, 0xE8, 0xEC, 0x20, 0xD6, 0xD5, 0x20, 0xD5, 0xE9, 0xF1,
    0x20, 0xED, 0xE2, 0xD8, 0xE5, 0x20, 0xDC, 0xEF, 0xD3, 0xDA, 0xD8, 0xE5,
    0x20, 0xE4, 0xE0, 0xD0, 0xDD, 0xE6, 0xE3, 0xD7, 0xE1, 0xDA, 0xD8, 0xE5,
    0x20, 0xD1, 0xE3, 0xDB, 0xDE, 0xDA, 0x20, 0xD4, 0xD0, 0x20, 0xD2, 0xEB,
    0xDF, 0xD5, 0xD9, 0x20, 0xE7, 0xD0, 0xEE, 0x2E, 0x20, 0xC8, 0xD8, 0xE0,
    0xDE, 0xDA, 0xD0, 0xEF, 0x20, 0xED, 0xDB, 0xD5, 0xDA, 0xE2, 0xE0, 0xD8,
    0xE4, 0xD8, 0xDA, 0xD0, 0xE6, 0xD8, 0xEF, 0x20, 0xEE, 0xD6, 0xDD, 0xEB,
    0xE5, 0x20, 0xD3, 0xE3, 0xD1, 0xD5, 0xE0, 0xDD, 0xD8, 0xD9, 0x20, 0xD4,
    0xD0, 0xE1, 0xE2, 0x20, 0xDC, 0xDE, 0xE9, 0xDD, 0xEB, 0xD9, 0x20, 0xE2,
    0xDE, 0xDB, 0xE7, 0xDE, 0xDA, 0x20, 0xDF, 0xDE, 0xD4, 0xEA, 0xF1, 0xDC,
    0xE3, 0x20, 0xE1, 0xD5, 0xDB, 0xEC, 0xE1, 0xDA, 0xDE, 0xD3, 0xDE, 0x20,
    0xE5, 0xDE, 0xD7, 0xEF, 0xD9, 0xE1, 0xE2, 0xD2, 0xD0, 0x2E,
];

// Greek sample, ISO-8859-7 bytes
const EL_ISO7: &[u8] = &[
    0xC7, 0x20, 0xE3, 0xF1, 0xDE, 0xE3, 0xEF, 0xF1, 0xE7, 0x20, 0xEA, 0xE1,
    0xF6, 0xDD, 0x20, 0xE1, 0xEB, 0xE5, 0xF0, 0xEF, 0xFD, 0x20, 0xF0, 0xE7,
    0xE4, 0xDC, 0xE5, 0xE9, 0x20, 0xF0, 0xDC, 0xED, 0xF9, 0x20, 0xE1, 0xF0,
    0xFC, 0x20, 0xF4, 0xEF, 0x20, 0xF4, 0xE5, 0xEC, 0xF0, 0xDD, 0xEB, 0xE9,
    0xEA, 0xEF, 0x20, 0xF3, 0xEA, 0xF5, 0xEB, 0xDF, 0x20, 0xEA, 0xE1, 0xE9,
    0x20, 0xF4, 0xF1, 0xDD, 0xF7, 0xE5, 0xE9, 0x20, 0xEC, 0xE1, 0xEA, 0xF1,
    0xE9, 0xDC, 0x20, 0xF3, 0xF4, 0xEF, 0x20, 0xE4, 0xDC, 0xF3, 0xEF, 0xF2,
];

// Arabic sample, windows-1256 bytes
const AR_CP1256: &[u8] = &[
    0xC7, 0xE1, 0xDA, 0xD1, 0xC8, 0xED, 0xC9, 0x20, 0xE5, 0xED, 0x20, 0xC3,
    0xDF, 0xCB, 0xD1, 0x20, 0xC7, 0xE1, 0xE1, 0xDB, 0xC7, 0xCA, 0x20, 0xC7,
    0xE1, 0xD3, 0xC7, 0xE3, 0xED, 0xC9, 0x20, 0xCA, 0xCD, 0xCF, 0xCB, 0xC7,
    0x20, 0xE6, 0xC5, 0xCD, 0xCF, 0xEC, 0x20, 0xC3, 0xDF, 0xCB, 0xD1, 0x20,
    0xC7, 0xE1, 0xE1, 0xDB, 0xC7, 0xCA, 0x20, 0xC7, 0xE4, 0xCA, 0xD4, 0xC7,
    0xD1, 0xC7, 0x20, 0xDD, 0xED, 0x20, 0xC7, 0xE1, 0xDA, 0xC7, 0xE1, 0xE3,
];

// same text, ISO-8859-6 bytes
const AR_ISO6: &[u8] = &[
    0xC7, 0xE4, 0xD9, 0xD1, 0xC8, 0xEA, 0xC9, 0x20, 0xE7, 0xEA, 0x20, 0xC3,
    0xE3, 0xCB, 0xD1, 0x20, 0xC7, 0xE4, 0xE4, 0xDA, 0xC7, 0xCA, 0x20, 0xC7,
    0xE4, 0xD3, 0xC7, 0xE5, 0xEA, 0xC9, 0x20, 0xCA, 0xCD, 0xCF, 0xCB, 0xC7,
    0x20, 0xE8, 0xC5, 0xCD, 0xCF, 0xE9, 0x20, 0xC3, 0xE3, 0xCB, 0xD1, 0x20,
    0xC7, 0xE4, 0xE4, 0xDA, 0xC7, 0xCA, 0x20, 0xC7, 0xE6, 0xCA, 0xD4, 0xC7,
    0xD1, 0xC7, 0x20, 0xE1, 0xEA, 0x20, 0xC7, 0xE4, 0xD9, 0xC7, 0xE4, 0xE5,
];

// German pangram, ISO-8859-1 bytes
const DE_LATIN1: &[u8] = &[
    0x5A, 0x77, 0xF6, 0x6C, 0x66, 0x20, 0x42, 0x6F, 0x78, 0x6B, 0xE4, 0x6D,
    0x70, 0x66, 0x65, 0x72, 0x20, 0x6A, 0x61, 0x67, 0x65, 0x6E, 0x20, 0x56,
    0x69, 0x6B, 0x74, 0x6F, 0x72, 0x20, 0x71, 0x75, 0x65, 0x72, 0x20, 0xFC,
    0x62, 0x65, 0x72, 0x20, 0x64, 0x65, 0x6E, 0x20, 0x67, 0x72, 0x6F, 0xDF,
    0x65, 0x6E, 0x20, 0x53, 0x79, 0x6C, 0x74, 0x65, 0x72, 0x20, 0x44, 0x65,
    0x69, 0x63, 0x68, 0x20, 0x75, 0x6E, 0x64, 0x20, 0x64, 0x69, 0x65, 0x20,
    0x73, 0x63, 0x68, 0xF6, 0x6E, 0x65, 0x20, 0x53, 0x74, 0x61, 0x64, 0x74,
];

// Turkish pangram, ISO-8859-9 bytes
const TR_ISO9: &[u8] = &[
    0x50, 0x69, 0x6A, 0x61, 0x6D, 0x61, 0x6C, 0xFD, 0x20, 0x68, 0x61, 0x73,
    0x74, 0x61, 0x20, 0x79, 0x61, 0xF0, 0xFD, 0x7A, 0x20, 0xFE, 0x6F, 0x66,
    0xF6, 0x72, 0x65, 0x20, 0xE7, 0x61, 0x62, 0x75, 0x63, 0x61, 0x6B, 0x20,
    0x67, 0xFC, 0x76, 0x65, 0x6E, 0x64, 0x69, 0x20, 0x76, 0x65, 0x20, 0x62,
    0x69, 0x72, 0x6C, 0x69, 0x6B, 0x74, 0x65, 0x20, 0xFE, 0x65, 0x68, 0x72,
    0x65, 0x20, 0x67, 0x69, 0x74, 0x74, 0x69, 0x6C, 0x65, 0x72,
];

// Hebrew sample in logical order, ISO-8859-8 bytes
const HE_ISO8: &[u8] = &[
    0xE0, 0xE1, 0xEC, 0x20, 0xE4, 0xF2, 0xE9, 0xF8, 0x20, 0xE4, 0xE2, 0xE3,
    0xE5, 0xEC, 0xE4, 0x20, 0xF9, 0xEC, 0x20, 0xE4, 0xE0, 0xF8, 0xF5, 0x20,
    0xE4, 0xE9, 0xE0, 0x20, 0xFA, 0xEC, 0x20, 0xE0, 0xE1, 0xE9, 0xE1, 0x20,
    0xE5, 0xE4, 0xE9, 0xE0, 0x20, 0xF0, 0xEE, 0xF6, 0xE0, 0xFA, 0x20, 0xF2,
    0xEC, 0x20, 0xE7, 0xE5, 0xF3, 0x20, 0xE4, 0xE9, 0xED,
];

// same text, IBM424 bytes
const HE_CP424: &[u8] = &[
    0x41, 0x42, 0x54, 0x40, 0x45, 0x62, 0x51, 0x68, 0x40, 0x45, 0x43, 0x44,
    0x46, 0x54, 0x45, 0x40, 0x69, 0x54, 0x40, 0x45, 0x41, 0x68, 0x65, 0x40,
    0x45, 0x51, 0x41, 0x40, 0x71, 0x54, 0x40, 0x41, 0x42, 0x51, 0x42, 0x40,
    0x46, 0x45, 0x51, 0x41, 0x40, 0x58, 0x56, 0x66, 0x41, 0x71, 0x40, 0x62,
    0x54, 0x40, 0x48, 0x46, 0x63, 0x40, 0x45, 0x51, 0x55,
];

// Czech pangram, ISO-8859-2 bytes
const CS_ISO2: &[u8] = &[
    0x50, 0xF8, 0xED, 0x6C, 0x69, 0xB9, 0x20, 0xBE, 0x6C, 0x75, 0xBB, 0x6F,
    0x75, 0xE8, 0x6B, 0xFD, 0x20, 0x6B, 0xF9, 0xF2, 0x20, 0xFA, 0x70, 0xEC,
    0x6C, 0x20, 0xEF, 0xE1, 0x62, 0x65, 0x6C, 0x73, 0x6B, 0xE9, 0x20, 0xF3,
    0x64, 0x79, 0x20, 0x61, 0x20, 0x6B, 0x6F, 0x68, 0x6F, 0x75, 0x74, 0x20,
    0x73, 0x65, 0x20, 0x70, 0x72, 0x6F, 0x62, 0x75, 0x64, 0x69, 0x6C, 0x20,
    0x62, 0x72, 0x7A, 0x79, 0x20, 0x72, 0xE1, 0x6E, 0x6F,
];

// English sample, EBCDIC cp500 bytes
const EN_CP500: &[u8] = &[
    0xE3, 0x88, 0x85, 0x40, 0x98, 0xA4, 0x89, 0x83, 0x92, 0x40, 0x82, 0x99,
    0x96, 0xA6, 0x95, 0x40, 0x86, 0x96, 0xA7, 0x40, 0x91, 0xA4, 0x94, 0x97,
    0xA2, 0x40, 0x96, 0xA5, 0x85, 0x99, 0x40, 0xA3, 0x88, 0x85, 0x40, 0x93,
    0x81, 0xA9, 0xA8, 0x40, 0x84, 0x96, 0x87, 0x40, 0x81, 0x95, 0x84, 0x40,
    0x99, 0xA4, 0x95, 0xA2, 0x40, 0x81, 0xA6, 0x81, 0xA8, 0x40,
];

// English with a cp1252 curly apostrophe (C1 byte)
const EN_CURLY: &[u8] = &[
    0x69, 0x74, 0x92, 0x73, 0x20, 0x74, 0x68, 0x65, 0x20, 0x71, 0x75, 0x69,
    0x63, 0x6B, 0x20, 0x62, 0x72, 0x6F, 0x77, 0x6E, 0x20, 0x66, 0x6F, 0x78,
    0x20, 0x6A, 0x75, 0x6D, 0x70, 0x73, 0x20, 0x6F, 0x76, 0x65, 0x72, 0x20,
    0x74, 0x68, 0x65, 0x20, 0x6C, 0x61, 0x7A, 0x79, 0x20, 0x64, 0x6F, 0x67,
    0x20,
];

// Each IBM420 word below is an alef-class letter followed by a
// lam-alef ligature (0xB8), which the unshaper expands to lam + alef.
const AR_CP420_LIGATURES: &[u8] = &[
    0x40, 0x56, 0xB8, 0x40, 0x56, 0xB8, 0x40, 0x56, 0xB8, 0x40, 0x56, 0xB8,
    0x40, 0x56, 0xB8, 0x40, 0x56, 0xB8, 0x40,
];

// Same words with the ligature already decomposed into lam + alef.
const AR_CP420_DECOMPOSED: &[u8] = &[
    0x40, 0x56, 0xB1, 0x56, 0x40, 0x56, 0xB1, 0x56, 0x40, 0x56, 0xB1, 0x56,
    0x40, 0x56, 0xB1, 0x56, 0x40, 0x56, 0xB1, 0x56, 0x40, 0x56, 0xB1, 0x56,
    0x40,
];

type Ctor = fn() -> CsResult<Recognizer>;

fn detect(ctor: Ctor, bytes: &[u8]) -> Option<charscope::CharsetMatch> {
    let recognizer = ctor().unwrap();
    recognizer.detect(&DetectionInput::from_bytes(bytes))
}

#[rstest]
#[case(cyrillic::windows_1251 as Ctor, RU_CP1251, "windows-1251", "ru", 19)]
#[case(cyrillic::koi8_r as Ctor, RU_KOI8, "KOI8-R", "ru", 19)]
#[case(cyrillic::ibm866 as Ctor, RU_CP866, "IBM866", "ru", 19)]
#[case(cyrillic::iso_8859_5 as Ctor, RU_ISO5, "ISO-8859-5", "ru", 19)]
#[case(greek::iso_8859_7 as Ctor, EL_ISO7, "ISO-8859-7", "el", 56)]
#[case(arabic::windows_1256 as Ctor, AR_CP1256, "windows-1256", "ar", 86)]
#[case(arabic::iso_8859_6 as Ctor, AR_ISO6, "ISO-8859-6", "ar", 86)]
#[case(latin::iso_8859_9 as Ctor, TR_ISO9, "ISO-8859-9", "tr", 54)]
#[case(hebrew::iso_8859_8_i as Ctor, HE_ISO8, "ISO-8859-8-I", "he", 87)]
#[case(hebrew::iso_8859_8 as Ctor, HE_ISO8, "ISO-8859-8", "he", 41)]
#[case(hebrew::ibm424_rtl as Ctor, HE_CP424, "IBM424_rtl", "he", 87)]
#[case(hebrew::ibm424_ltr as Ctor, HE_CP424, "IBM424_ltr", "he", 41)]
#[case(latin::iso_8859_1 as Ctor, DE_LATIN1, "ISO-8859-1", "de", 98)]
#[case(latin::iso_8859_2 as Ctor, CS_ISO2, "ISO-8859-2", "cs", 25)]
#[case(arabic::ibm420_rtl as Ctor, AR_CP420_LIGATURES, "IBM420_rtl", "ar", 98)]
fn recognizer_scores_native_sample(
    #[case] ctor: Ctor,
    #[case] bytes: &[u8],
    #[case] charset: &str,
    #[case] language: &str,
    #[case] confidence: u8,
) {
    let m = detect(ctor, bytes).expect("sample should match");
    assert_eq!(m.charset, charset);
    assert_eq!(m.language, Some(language));
    assert_eq!(m.confidence, confidence, "confidence for {}", charset);
}

#[test]
fn english_fox_wins_on_latin1() {
    let m = detect(latin::iso_8859_1, b"the quick brown fox jumps over the lazy dog ")
        .expect("fox should match");
    assert_eq!(m.language, Some("en"));
    assert_eq!(m.confidence, 46);
}

#[test]
fn language_tie_keeps_declaration_order() {
    // "de la " scores 98 for es, fr and it alike; the first declared
    // language must win
    let m = detect(latin::iso_8859_1, b"de la ").expect("should match");
    assert_eq!(m.language, Some("es"));
    assert_eq!(m.confidence, 98);
}

#[test]
fn repetitive_text_saturates_at_98() {
    let m = detect(latin::iso_8859_1, b"the the the the the the the the ")
        .expect("should match");
    assert_eq!(m.confidence, 98);
}

#[test]
fn c1_bytes_switch_report_to_windows_alias() {
    let with_hint = detect(latin::iso_8859_1, EN_CURLY).expect("should match");
    assert_eq!(with_hint.charset, "windows-1252");
    assert_eq!(with_hint.language, Some("en"));
    assert_eq!(with_hint.confidence, 54);

    let recognizer = latin::iso_8859_1().unwrap();
    let no_hint = recognizer
        .detect(&DetectionInput::new(EN_CURLY, false))
        .expect("should match");
    assert_eq!(no_hint.charset, "ISO-8859-1");
}

#[test]
fn empty_input_matches_nothing() {
    let bank = api::recognizers().unwrap();
    let input = DetectionInput::from_bytes(&[]);
    for r in &bank {
        assert!(r.detect(&input).is_none(), "{} matched empty input", r.charset());
    }
    assert!(api::scan(&bank, &input, None).is_empty());
}

#[test]
fn bank_holds_all_recognizers() {
    let bank = api::recognizers().unwrap();
    assert_eq!(bank.len(), 22);
}

#[test]
fn scan_ranks_best_first_and_keeps_bank_order_on_ties() {
    let bank = api::recognizers().unwrap();
    let input = DetectionInput::from_bytes(RU_CP866);
    let matches = api::scan(&bank, &input, None);

    for pair in matches.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    // cp866 text scores 19 for both the Greek recognizer and IBM866;
    // the Greek one sits earlier in the bank, and the raw 0x91/0x98
    // bytes flip its report to the windows alias
    assert_eq!(matches[0].charset, "windows-1253");
    assert_eq!(matches[0].confidence, 19);
    assert_eq!(matches[1].charset, "IBM866");
    assert_eq!(matches[1].confidence, 19);
}

#[test]
fn script_filter_narrows_the_scan() {
    let bank = api::recognizers().unwrap();
    let input = DetectionInput::from_bytes(RU_CP1251);
    let matches = api::scan(&bank, &input, Some(charscope::Script::Cyrillic));
    assert!(!matches.is_empty());
    for m in &matches {
        assert!(
            matches!(m.charset, "windows-1251" | "KOI8-R" | "IBM866" | "ISO-8859-5"),
            "unexpected charset {}",
            m.charset
        );
    }
    assert_eq!(matches[0].charset, "windows-1251");
}

#[test]
fn ebcdic_500_borrows_western_profiles() {
    let recognizer = ebcdic::ibm500("en").unwrap();
    let m = recognizer
        .detect(&DetectionInput::from_bytes(EN_CP500))
        .expect("cp500 english should match");
    assert_eq!(m.charset, "IBM500");
    assert_eq!(m.language, Some("en"));
    assert_eq!(m.confidence, 55);
}

#[test]
fn ebcdic_500_rejects_unknown_language() {
    match ebcdic::ibm500("xx") {
        Err(CharScopeError::UnknownLanguage(lang)) => assert_eq!(lang, "xx"),
        other => panic!("expected UnknownLanguage, got {:?}", other.map(|r| r.charset())),
    }
}

#[test]
fn shaped_and_decomposed_streams_score_identically() {
    let lig = detect(arabic::ibm420_rtl, AR_CP420_LIGATURES);
    let dec = detect(arabic::ibm420_rtl, AR_CP420_DECOMPOSED);
    assert_eq!(lig, dec);
    assert!(lig.is_some());
}

#[test]
fn nul_terminates_an_ibm420_stream() {
    let mut with_tail = AR_CP420_LIGATURES.to_vec();
    with_tail.push(0x00);
    with_tail.extend(std::iter::repeat(0x56).take(50));
    let truncated = detect(arabic::ibm420_rtl, &with_tail);
    assert_eq!(truncated, detect(arabic::ibm420_rtl, AR_CP420_LIGATURES));
}

#[test]
fn detect_path_reads_and_ranks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RU_CP1251).unwrap();
    let matches = api::detect_path(file.path()).unwrap();
    assert_eq!(matches[0].charset, "windows-1251");
    assert_eq!(matches[0].language, Some("ru"));
    assert_eq!(matches[0].confidence, 19);
}

#[test]
fn detect_path_propagates_io_errors() {
    let err = api::detect_path(std::path::Path::new("/nonexistent/charscope-input"))
        .unwrap_err();
    assert!(matches!(err, CharScopeError::Io(_)));
}
