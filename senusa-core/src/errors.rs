use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantFileError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("File is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("No valid variants found in the file: {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
