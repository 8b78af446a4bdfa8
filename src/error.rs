use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Entropy error: {0}")]
    Entropy(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] uuid::Error),

    #[error("Identifier is not in 8-4-4-4-12 hyphenated form: {0}")]
    IdentifierFormat(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
