use thiserror::Error;

/// Everything that can go wrong in a single reflow or width estimate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("max width must be at least 1, got {0}")]
    InvalidWidth(usize),

    #[error("HTML to text conversion failed: {0}")]
    Html(String),

    #[error("division by zero: font size is zero")]
    DivideByZero,

    #[error("invalid unit scale: {0}")]
    InvalidScale(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
