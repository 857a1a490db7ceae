//! Latin-script charsets: ISO-8859-1 (western European, ten
//! languages), ISO-8859-2 (central European, four languages) and the
//! Turkish ISO-8859-9.

use crate::detector::types::{NGramProfile, NormalizationTable, Script};
use crate::detector::Recognizer;
use crate::error::CsResult;

pub static LATIN1_TABLE: NormalizationTable = NormalizationTable::new(
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
        0x20, 0x20, 0xAA, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0xB5, 0x20, 0x20, 0x20, 0x20, 0xBA, 0x20, 0x20, 0x20, 0x20, 0x20,
        0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB,
        0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20,
        0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
        0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
        0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20, 0xF8, 0xF9, 0xFA, 0xFB,
        0xFC, 0xFD, 0xFE, 0xFF,
    ],
    0x20,
);

static L1_DA: NGramProfile = NGramProfile::tagged(
    "da",
    [
        0x206166, 0x206174, 0x206465, 0x20656E, 0x206572, 0x20666F,
        0x206861, 0x206920, 0x206D65, 0x206F67, 0x2070E5, 0x207369,
        0x207374, 0x207469, 0x207669, 0x616620, 0x616E20, 0x616E64,
        0x617220, 0x617420, 0x646520, 0x64656E, 0x646572, 0x646574,
        0x652073, 0x656420, 0x656465, 0x656E20, 0x656E64, 0x657220,
        0x657265, 0x657320, 0x657420, 0x666F72, 0x676520, 0x67656E,
        0x676572, 0x696765, 0x696C20, 0x696E67, 0x6B6520, 0x6B6B65,
        0x6C6572, 0x6C6967, 0x6C6C65, 0x6D6564, 0x6E6465, 0x6E6520,
        0x6E6720, 0x6E6765, 0x6F6720, 0x6F6D20, 0x6F7220, 0x70E520,
        0x722064, 0x722065, 0x722073, 0x726520, 0x737465, 0x742073,
        0x746520, 0x746572, 0x74696C, 0x766572,
    ],
);

static L1_DE: NGramProfile = NGramProfile::tagged(
    "de",
    [
        0x20616E, 0x206175, 0x206265, 0x206461, 0x206465, 0x206469,
        0x206569, 0x206765, 0x206861, 0x20696E, 0x206D69, 0x207363,
        0x207365, 0x20756E, 0x207665, 0x20766F, 0x207765, 0x207A75,
        0x626572, 0x636820, 0x636865, 0x636874, 0x646173, 0x64656E,
        0x646572, 0x646965, 0x652064, 0x652073, 0x65696E, 0x656974,
        0x656E20, 0x657220, 0x657320, 0x67656E, 0x68656E, 0x687420,
        0x696368, 0x696520, 0x696E20, 0x696E65, 0x697420, 0x6C6963,
        0x6C6C65, 0x6E2061, 0x6E2064, 0x6E2073, 0x6E6420, 0x6E6465,
        0x6E6520, 0x6E6720, 0x6E6765, 0x6E7465, 0x722064, 0x726465,
        0x726569, 0x736368, 0x737465, 0x742064, 0x746520, 0x74656E,
        0x746572, 0x756E64, 0x756E67, 0x766572,
    ],
);

static L1_EN: NGramProfile = NGramProfile::tagged(
    "en",
    [
        0x206120, 0x20616E, 0x206265, 0x20636F, 0x20666F, 0x206861,
        0x206865, 0x20696E, 0x206D61, 0x206F66, 0x207072, 0x207265,
        0x207361, 0x207374, 0x207468, 0x20746F, 0x207768, 0x616964,
        0x616C20, 0x616E20, 0x616E64, 0x617320, 0x617420, 0x617465,
        0x617469, 0x642061, 0x642074, 0x652061, 0x652073, 0x652074,
        0x656420, 0x656E74, 0x657220, 0x657320, 0x666F72, 0x686174,
        0x686520, 0x686572, 0x696420, 0x696E20, 0x696E67, 0x696F6E,
        0x697320, 0x6E2061, 0x6E2074, 0x6E6420, 0x6E6720, 0x6E7420,
        0x6F6620, 0x6F6E20, 0x6F7220, 0x726520, 0x727320, 0x732061,
        0x732074, 0x736169, 0x737420, 0x742074, 0x746572, 0x746861,
        0x746865, 0x74696F, 0x746F20, 0x747320,
    ],
);

static L1_ES: NGramProfile = NGramProfile::tagged(
    "es",
    [
        0x206120, 0x206361, 0x20636F, 0x206465, 0x20656C, 0x20656E,
        0x206573, 0x20696E, 0x206C61, 0x206C6F, 0x207061, 0x20706F,
        0x207072, 0x207175, 0x207265, 0x207365, 0x20756E, 0x207920,
        0x612063, 0x612064, 0x612065, 0x61206C, 0x612070, 0x616369,
        0x61646F, 0x616C20, 0x617220, 0x617320, 0x6369F3, 0x636F6E,
        0x646520, 0x64656C, 0x646F20, 0x652064, 0x652065, 0x65206C,
        0x656C20, 0x656E20, 0x656E74, 0x657320, 0x657374, 0x69656E,
        0x69F36E, 0x6C6120, 0x6C6F73, 0x6E2065, 0x6E7465, 0x6F2064,
        0x6F2065, 0x6F6E20, 0x6F7220, 0x6F7320, 0x706172, 0x717565,
        0x726120, 0x726573, 0x732064, 0x732065, 0x732070, 0x736520,
        0x746520, 0x746F20, 0x756520, 0xF36E20,
    ],
);

static L1_FR: NGramProfile = NGramProfile::tagged(
    "fr",
    [
        0x206175, 0x20636F, 0x206461, 0x206465, 0x206475, 0x20656E,
        0x206574, 0x206C61, 0x206C65, 0x207061, 0x20706F, 0x207072,
        0x207175, 0x207365, 0x20736F, 0x20756E, 0x20E020, 0x616E74,
        0x617469, 0x636520, 0x636F6E, 0x646520, 0x646573, 0x647520,
        0x652061, 0x652063, 0x652064, 0x652065, 0x65206C, 0x652070,
        0x652073, 0x656E20, 0x656E74, 0x657220, 0x657320, 0x657420,
        0x657572, 0x696F6E, 0x697320, 0x697420, 0x6C6120, 0x6C6520,
        0x6C6573, 0x6D656E, 0x6E2064, 0x6E6520, 0x6E7320, 0x6E7420,
        0x6F6E20, 0x6F6E74, 0x6F7572, 0x717565, 0x72206C, 0x726520,
        0x732061, 0x732064, 0x732065, 0x73206C, 0x732070, 0x742064,
        0x746520, 0x74696F, 0x756520, 0x757220,
    ],
);

static L1_IT: NGramProfile = NGramProfile::tagged(
    "it",
    [
        0x20616C, 0x206368, 0x20636F, 0x206465, 0x206469, 0x206520,
        0x20696C, 0x20696E, 0x206C61, 0x207065, 0x207072, 0x20756E,
        0x612063, 0x612064, 0x612070, 0x612073, 0x61746F, 0x636865,
        0x636F6E, 0x64656C, 0x646920, 0x652061, 0x652063, 0x652064,
        0x652069, 0x65206C, 0x652070, 0x652073, 0x656C20, 0x656C6C,
        0x656E74, 0x657220, 0x686520, 0x692061, 0x692063, 0x692064,
        0x692073, 0x696120, 0x696C20, 0x696E20, 0x696F6E, 0x6C6120,
        0x6C6520, 0x6C6920, 0x6C6C61, 0x6E6520, 0x6E6920, 0x6E6F20,
        0x6E7465, 0x6F2061, 0x6F2064, 0x6F2069, 0x6F2073, 0x6F6E20,
        0x6F6E65, 0x706572, 0x726120, 0x726520, 0x736920, 0x746120,
        0x746520, 0x746920, 0x746F20, 0x7A696F,
    ],
);

static L1_NL: NGramProfile = NGramProfile::tagged(
    "nl",
    [
        0x20616C, 0x206265, 0x206461, 0x206465, 0x206469, 0x206565,
        0x20656E, 0x206765, 0x206865, 0x20696E, 0x206D61, 0x206D65,
        0x206F70, 0x207465, 0x207661, 0x207665, 0x20766F, 0x207765,
        0x207A69, 0x61616E, 0x616172, 0x616E20, 0x616E64, 0x617220,
        0x617420, 0x636874, 0x646520, 0x64656E, 0x646572, 0x652062,
        0x652076, 0x65656E, 0x656572, 0x656E20, 0x657220, 0x657273,
        0x657420, 0x67656E, 0x686574, 0x696520, 0x696E20, 0x696E67,
        0x697320, 0x6E2062, 0x6E2064, 0x6E2065, 0x6E2068, 0x6E206F,
        0x6E2076, 0x6E6465, 0x6E6720, 0x6F6E64, 0x6F6F72, 0x6F7020,
        0x6F7220, 0x736368, 0x737465, 0x742064, 0x746520, 0x74656E,
        0x746572, 0x76616E, 0x766572, 0x766F6F,
    ],
);

static L1_NO: NGramProfile = NGramProfile::tagged(
    "no",
    [
        0x206174, 0x206176, 0x206465, 0x20656E, 0x206572, 0x20666F,
        0x206861, 0x206920, 0x206D65, 0x206F67, 0x2070E5, 0x207365,
        0x20736B, 0x20736F, 0x207374, 0x207469, 0x207669, 0x20E520,
        0x616E64, 0x617220, 0x617420, 0x646520, 0x64656E, 0x646574,
        0x652073, 0x656420, 0x656E20, 0x656E65, 0x657220, 0x657265,
        0x657420, 0x657474, 0x666F72, 0x67656E, 0x696B6B, 0x696C20,
        0x696E67, 0x6B6520, 0x6B6B65, 0x6C6520, 0x6C6C65, 0x6D6564,
        0x6D656E, 0x6E2073, 0x6E6520, 0x6E6720, 0x6E6765, 0x6E6E65,
        0x6F6720, 0x6F6D20, 0x6F7220, 0x70E520, 0x722073, 0x726520,
        0x736F6D, 0x737465, 0x742073, 0x746520, 0x74656E, 0x746572,
        0x74696C, 0x747420, 0x747465, 0x766572,
    ],
);

static L1_PT: NGramProfile = NGramProfile::tagged(
    "pt",
    [
        0x206120, 0x20636F, 0x206461, 0x206465, 0x20646F, 0x206520,
        0x206573, 0x206D61, 0x206E6F, 0x206F20, 0x207061, 0x20706F,
        0x207072, 0x207175, 0x207265, 0x207365, 0x20756D, 0x612061,
        0x612063, 0x612064, 0x612070, 0x616465, 0x61646F, 0x616C20,
        0x617220, 0x617261, 0x617320, 0x636F6D, 0x636F6E, 0x646120,
        0x646520, 0x646F20, 0x646F73, 0x652061, 0x652064, 0x656D20,
        0x656E74, 0x657320, 0x657374, 0x696120, 0x696361, 0x6D656E,
        0x6E7465, 0x6E746F, 0x6F2061, 0x6F2063, 0x6F2064, 0x6F2065,
        0x6F2070, 0x6F7320, 0x706172, 0x717565, 0x726120, 0x726573,
        0x732061, 0x732064, 0x732065, 0x732070, 0x737461, 0x746520,
        0x746F20, 0x756520, 0xE36F20, 0xE7E36F,
    ],
);

static L1_SV: NGramProfile = NGramProfile::tagged(
    "sv",
    [
        0x206174, 0x206176, 0x206465, 0x20656E, 0x2066F6, 0x206861,
        0x206920, 0x20696E, 0x206B6F, 0x206D65, 0x206F63, 0x2070E5,
        0x20736B, 0x20736F, 0x207374, 0x207469, 0x207661, 0x207669,
        0x20E472, 0x616465, 0x616E20, 0x616E64, 0x617220, 0x617474,
        0x636820, 0x646520, 0x64656E, 0x646572, 0x646574, 0x656420,
        0x656E20, 0x657220, 0x657420, 0x66F672, 0x67656E, 0x696C6C,
        0x696E67, 0x6B6120, 0x6C6C20, 0x6D6564, 0x6E2073, 0x6E6120,
        0x6E6465, 0x6E6720, 0x6E6765, 0x6E696E, 0x6F6368, 0x6F6D20,
        0x6F6E20, 0x70E520, 0x722061, 0x722073, 0x726120, 0x736B61,
        0x736F6D, 0x742073, 0x746120, 0x746520, 0x746572, 0x74696C,
        0x747420, 0x766172, 0xE47220, 0xF67220,
    ],
);

static LATIN1_PROFILES: [&NGramProfile; 10] = [
    &L1_DA, &L1_DE, &L1_EN, &L1_ES, &L1_FR, &L1_IT, &L1_NL, &L1_NO, &L1_PT,
    &L1_SV,
];

pub static LATIN2_TABLE: NormalizationTable = NormalizationTable::new(
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
        0x20, 0x20, 0x20, 0x20, 0x20, 0xB1, 0x20, 0xB3, 0x20, 0xB5, 0xB6, 0x20,
        0x20, 0xB9, 0xBA, 0xBB, 0xBC, 0x20, 0xBE, 0xBF, 0x20, 0xB1, 0x20, 0xB3,
        0x20, 0xB5, 0xB6, 0xB7, 0x20, 0xB9, 0xBA, 0xBB, 0xBC, 0x20, 0xBE, 0xBF,
        0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB,
        0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20,
        0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0xFD, 0xFE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
        0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
        0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20, 0xF8, 0xF9, 0xFA, 0xFB,
        0xFC, 0xFD, 0xFE, 0x20,
    ],
    0x20,
);

static L2_CS: NGramProfile = NGramProfile::tagged(
    "cs",
    [
        0x206120, 0x206279, 0x20646F, 0x206A65, 0x206E61, 0x206E65,
        0x206F20, 0x206F64, 0x20706F, 0x207072, 0x2070F8, 0x20726F,
        0x207365, 0x20736F, 0x207374, 0x20746F, 0x207620, 0x207679,
        0x207A61, 0x612070, 0x636520, 0x636820, 0x652070, 0x652073,
        0x652076, 0x656D20, 0x656EED, 0x686F20, 0x686F64, 0x697374,
        0x6A6520, 0x6B7465, 0x6C6520, 0x6C6920, 0x6E6120, 0x6EE920,
        0x6EEC20, 0x6EED20, 0x6F2070, 0x6F646E, 0x6F6A69, 0x6F7374,
        0x6F7520, 0x6F7661, 0x706F64, 0x706F6A, 0x70726F, 0x70F865,
        0x736520, 0x736F75, 0x737461, 0x737469, 0x73746E, 0x746572,
        0x746EED, 0x746F20, 0x752070, 0xBE6520, 0xE16EED, 0xE9686F,
        0xED2070, 0xED2073, 0xED6D20, 0xF86564,
    ],
);

static L2_HU: NGramProfile = NGramProfile::tagged(
    "hu",
    [
        0x206120, 0x20617A, 0x206265, 0x206567, 0x20656C, 0x206665,
        0x206861, 0x20686F, 0x206973, 0x206B65, 0x206B69, 0x206BF6,
        0x206C65, 0x206D61, 0x206D65, 0x206D69, 0x206E65, 0x20737A,
        0x207465, 0x20E973, 0x612061, 0x61206B, 0x61206D, 0x612073,
        0x616B20, 0x616E20, 0x617A20, 0x62616E, 0x62656E, 0x656779,
        0x656B20, 0x656C20, 0x656C65, 0x656D20, 0x656E20, 0x657265,
        0x657420, 0x657465, 0x657474, 0x677920, 0x686F67, 0x696E74,
        0x697320, 0x6B2061, 0x6BF67A, 0x6D6567, 0x6D696E, 0x6E2061,
        0x6E616B, 0x6E656B, 0x6E656D, 0x6E7420, 0x6F6779, 0x732061,
        0x737A65, 0x737A74, 0x737AE1, 0x73E967, 0x742061, 0x747420,
        0x74E173, 0x7A6572, 0xE16E20, 0xE97320,
    ],
);

static L2_PL: NGramProfile = NGramProfile::tagged(
    "pl",
    [
        0x20637A, 0x20646F, 0x206920, 0x206A65, 0x206B6F, 0x206D61,
        0x206D69, 0x206E61, 0x206E69, 0x206F64, 0x20706F, 0x207072,
        0x207369, 0x207720, 0x207769, 0x207779, 0x207A20, 0x207A61,
        0x612070, 0x612077, 0x616E69, 0x636820, 0x637A65, 0x637A79,
        0x646F20, 0x647A69, 0x652070, 0x652073, 0x652077, 0x65207A,
        0x65676F, 0x656A20, 0x656D20, 0x656E69, 0x676F20, 0x696120,
        0x696520, 0x69656A, 0x6B6120, 0x6B6920, 0x6B6965, 0x6D6965,
        0x6E6120, 0x6E6961, 0x6E6965, 0x6F2070, 0x6F7761, 0x6F7769,
        0x706F6C, 0x707261, 0x70726F, 0x70727A, 0x727A65, 0x727A79,
        0x7369EA, 0x736B69, 0x737461, 0x776965, 0x796368, 0x796D20,
        0x7A6520, 0x7A6965, 0x7A7920, 0xF37720,
    ],
);

static L2_RO: NGramProfile = NGramProfile::tagged(
    "ro",
    [
        0x206120, 0x206163, 0x206361, 0x206365, 0x20636F, 0x206375,
        0x206465, 0x206469, 0x206C61, 0x206D61, 0x207065, 0x207072,
        0x207365, 0x2073E3, 0x20756E, 0x20BA69, 0x20EE6E, 0x612063,
        0x612064, 0x617265, 0x617420, 0x617465, 0x617520, 0x636172,
        0x636F6E, 0x637520, 0x63E320, 0x646520, 0x652061, 0x652063,
        0x652064, 0x652070, 0x652073, 0x656120, 0x656920, 0x656C65,
        0x656E74, 0x657374, 0x692061, 0x692063, 0x692064, 0x692070,
        0x696520, 0x696920, 0x696E20, 0x6C6120, 0x6C6520, 0x6C6F72,
        0x6C7569, 0x6E6520, 0x6E7472, 0x6F7220, 0x70656E, 0x726520,
        0x726561, 0x727520, 0x73E320, 0x746520, 0x747275, 0x74E320,
        0x756920, 0x756C20, 0xBA6920, 0xEE6E20,
    ],
);

static LATIN2_PROFILES: [&NGramProfile; 4] = [&L2_CS, &L2_HU, &L2_PL, &L2_RO];

pub static ISO9_TABLE: NormalizationTable = NormalizationTable::new(
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
        0x20, 0x20, 0xAA, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20,
        0x20, 0xB5, 0x20, 0x20, 0x20, 0x20, 0xBA, 0x20, 0x20, 0x20, 0x20, 0x20,
        0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB,
        0xEC, 0xED, 0xEE, 0xEF, 0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20,
        0xF8, 0xF9, 0xFA, 0xFB, 0xFC, 0x69, 0xFE, 0xDF, 0xE0, 0xE1, 0xE2, 0xE3,
        0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xEC, 0xED, 0xEE, 0xEF,
        0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0x20, 0xF8, 0xF9, 0xFA, 0xFB,
        0xFC, 0xFD, 0xFE, 0xFF,
    ],
    0x20,
);

static ISO9_TR: NGramProfile = NGramProfile::tagged(
    "tr",
    [
        0x206261, 0x206269, 0x206275, 0x206461, 0x206465, 0x206765,
        0x206861, 0x20696C, 0x206B61, 0x206B6F, 0x206D61, 0x206F6C,
        0x207361, 0x207461, 0x207665, 0x207961, 0x612062, 0x616B20,
        0x616C61, 0x616D61, 0x616E20, 0x616EFD, 0x617220, 0x617261,
        0x6172FD, 0x6173FD, 0x617961, 0x626972, 0x646120, 0x646520,
        0x646920, 0x652062, 0x65206B, 0x656469, 0x656E20, 0x657220,
        0x657269, 0x657369, 0x696C65, 0x696E20, 0x696E69, 0x697220,
        0x6C616E, 0x6C6172, 0x6C6520, 0x6C6572, 0x6E2061, 0x6E2062,
        0x6E206B, 0x6E6461, 0x6E6465, 0x6E6520, 0x6E6920, 0x6E696E,
        0x6EFD20, 0x72696E, 0x72FD6E, 0x766520, 0x796120, 0x796F72,
        0xFD6E20, 0xFD6E64, 0xFD6EFD, 0xFDF0FD,
    ],
);

/// Western-European profile for a language tag. EBCDIC-500 borrows
/// these, since cp500 covers the same letter repertoire.
pub fn profile_for(language: &str) -> Option<&'static NGramProfile> {
    LATIN1_PROFILES
        .iter()
        .copied()
        .find(|p| p.language() == Some(language))
}

pub fn iso_8859_1() -> CsResult<Recognizer> {
    Recognizer::new(
        "ISO-8859-1",
        Some("windows-1252"),
        Script::Latin,
        &LATIN1_TABLE,
        LATIN1_PROFILES.to_vec(),
        false,
    )
}

pub fn iso_8859_2() -> CsResult<Recognizer> {
    Recognizer::new(
        "ISO-8859-2",
        Some("windows-1250"),
        Script::Latin,
        &LATIN2_TABLE,
        LATIN2_PROFILES.to_vec(),
        false,
    )
}

pub fn iso_8859_9() -> CsResult<Recognizer> {
    Recognizer::new(
        "ISO-8859-9",
        Some("windows-1254"),
        Script::Latin,
        &ISO9_TABLE,
        vec![&ISO9_TR],
        false,
    )
}
