//! Per-script normalization tables and trigram profiles.

pub mod arabic;
pub mod cyrillic;
pub mod ebcdic;
pub mod greek;
pub mod hebrew;
pub mod latin;
