use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharScopeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile Data Error ({charset}): {detail}")]
    Profile {
        charset: &'static str,
        detail: String,
    },

    #[error("No donor profile for language tag '{0}'")]
    UnknownLanguage(&'static str),
}

pub type CsResult<T> = Result<T, CharScopeError>;
