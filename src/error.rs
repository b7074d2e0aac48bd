use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoContext {
    pub byte_pos: u64,
    pub line_num: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("stream ended {lines} line(s) into a record")]
    Truncated { lines: usize },
    #[error("blank line where a header was expected, with input remaining")]
    BlankHeader,
}

#[derive(Debug, Error)]
pub enum FixError {
    #[error("file name {name:?} has no '.' to split a compound extension from")]
    InvalidFilename { name: String },
    #[error("cannot open input {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("gzip read error at {ctx:?}: {source}")]
    Decompression {
        #[source]
        source: io::Error,
        ctx: IoContext,
    },
    #[error("malformed record at {ctx:?}: {source}")]
    MalformedRecord {
        #[source]
        source: FormatError,
        ctx: IoContext,
    },
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FixError {
    pub(crate) fn gz_err(source: io::Error, ctx: IoContext) -> Self {
        Self::Decompression { source, ctx }
    }
    pub(crate) fn fmt_err(source: FormatError, ctx: IoContext) -> Self {
        Self::MalformedRecord { source, ctx }
    }
    pub(crate) fn out_err(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error kind. `2` is left to argument parsing.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidFilename { .. } => 3,
            Self::FileNotFound { .. } => 4,
            Self::Decompression { .. } => 5,
            Self::MalformedRecord { .. } => 6,
            Self::OutputWrite { .. } => 7,
        }
    }
}
