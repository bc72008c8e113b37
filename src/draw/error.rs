use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum DrawError {
    /// A draw call was made before a graph was supplied.
    MissingGraph,
    Template(tera::Error),
    Io(std::io::Error),
    InvalidConfig(serde_yaml::Error),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGraph => write!(f, "graph to draw is not set"),
            Self::Template(err) => write!(f, "could not render graph: {}", err),
            Self::Io(err) => write!(f, "could not write drawing: {}", err),
            Self::InvalidConfig(err) => write!(f, "invalid draw config: {}", err),
        }
    }
}

impl Error for DrawError {}

impl From<tera::Error> for DrawError {
    fn from(err: tera::Error) -> Self {
        Self::Template(err)
    }
}

impl From<std::io::Error> for DrawError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for DrawError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidConfig(err)
    }
}
