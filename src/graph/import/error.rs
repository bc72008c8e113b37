use std::error::Error;
use std::fmt;

use crate::graph::BadGraphInput;

#[derive(Debug, PartialEq)]
pub enum ImportError {
    MissingFile(String),
    InvalidFormat(String),
    BadGraph(BadGraphInput),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFile(file) => write!(f, "Missing file: {}", file),
            Self::InvalidFormat(msg) => write!(f, "Invalid format on file: {}", msg),
            Self::BadGraph(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ImportError {}

impl From<BadGraphInput> for ImportError {
    fn from(err: BadGraphInput) -> Self {
        Self::BadGraph(err)
    }
}
