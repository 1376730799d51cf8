use crate::controllers::session::errors::SessionError;
use crate::presenters::file::factory::UnsupportedImageFormatError;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    Args(clap::Error),
    InvalidThreads,
    Session(SessionError),
    Format(UnsupportedImageFormatError),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Args(err) => write!(f, "{}", err),
            Self::InvalidThreads => write!(f, "thread count must be at least 1"),
            Self::Session(err) => write!(f, "{}", err),
            Self::Format(err) => write!(f, "{}", err),
            Self::Write { path, source } => {
                write!(f, "could not write '{}': {}", path.display(), source)
            }
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Args(err) => Some(err),
            Self::Session(err) => Some(err),
            Self::Format(err) => Some(err),
            Self::Write { source, .. } => Some(source),
            Self::InvalidThreads => None,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        Self::Args(err)
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<UnsupportedImageFormatError> for CliError {
    fn from(err: UnsupportedImageFormatError) -> Self {
        Self::Format(err)
    }
}
