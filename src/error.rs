use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read link map: {0}")]
    Io(#[from] std::io::Error),

    #[error("Link map has no \"{0}\" section marker")]
    MissingSection(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
