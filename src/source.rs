//! Source content: the text the session starts from.
//!
//! Content is read once, fully, before the terminal is taken over.

use std::fmt;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Descriptor used in the replay line for standard input.
pub const STDIN_DESCRIPTOR: &str = "<source>";

/// Errors while acquiring source content.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The named file does not exist.
    #[error("{} is not exist", path.display())]
    NotFound {
        /// Requested file.
        path: PathBuf,
    },

    /// The named file could not be read.
    #[error("reading {} failed: {source}", path.display())]
    Read {
        /// Requested file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("reading from standard input failed: {0}")]
    Stdin(#[source] io::Error),

    /// Nothing to edit.
    #[error("Missing input")]
    NoInput,
}

/// Where the content came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A named file.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl Origin {
    /// The first element of the replay line.
    pub fn descriptor(&self) -> String {
        match self {
            Self::File(path) => format!("cat {}", path.display()),
            Self::Stdin => STDIN_DESCRIPTOR.to_string(),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

/// Content plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    origin: Origin,
    content: Vec<u8>,
}

impl Source {
    /// Read `path` if given, standard input otherwise.
    ///
    /// # Errors
    ///
    /// Fails when the file is missing or unreadable, when standard input
    /// is an interactive terminal, or when the content is empty.
    pub fn acquire(path: Option<&Path>) -> Result<Self, SourceError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(SourceError::NoInput);
                }
                Self::from_reader(stdin.lock())
            }
        }
    }

    /// Read a whole file.
    ///
    /// # Errors
    ///
    /// See [`SourceError`].
    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::checked(Origin::File(path.to_path_buf()), content)
    }

    /// Read everything from a stream standing in for standard input.
    ///
    /// # Errors
    ///
    /// See [`SourceError`].
    pub fn from_reader(mut reader: impl Read) -> Result<Self, SourceError> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .map_err(SourceError::Stdin)?;
        Self::checked(Origin::Stdin, content)
    }

    fn checked(origin: Origin, content: Vec<u8>) -> Result<Self, SourceError> {
        if content.is_empty() {
            return Err(SourceError::NoInput);
        }
        tracing::debug!(target: "session", source = %origin, bytes = content.len(), "source_loaded");
        Ok(Self { origin, content })
    }

    /// Where the content came from.
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The replay-line descriptor.
    pub fn descriptor(&self) -> String {
        self.origin.descriptor()
    }

    /// The content read.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Split into origin and content.
    pub fn into_parts(self) -> (Origin, Vec<u8>) {
        (self.origin, self.content)
    }
}
