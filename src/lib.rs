pub mod api;
pub mod detector;
pub mod error;
pub mod tables;

pub use detector::types::{CharsetMatch, DetectionInput, Script};
pub use detector::Recognizer;
pub use error::{CharScopeError, CsResult};
