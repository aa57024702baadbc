//! Error taxonomy for a bake run.
//!
//! Every variant except [`BakeError::Io`] and [`BakeError::Preview`] is a
//! structural parse error.  Singular matrices are *not* represented here:
//! [`crate::AffineMatrix::checked_inverse`] reports them through a flag.

use std::path::PathBuf;

use thiserror::Error;

pub type BakeResult<T> = Result<T, BakeError>;

#[derive(Debug, Error)]
pub enum BakeError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vector document: {0}")]
    Xml(String),

    #[error("viewBox must be exactly four integers, got {0:?}")]
    ViewBox(String),

    #[error("malformed number {0:?}")]
    Number(String),

    #[error("malformed transform {token:?}: {reason}")]
    Transform { token: String, reason: &'static str },

    #[error("unsupported path command {0:?}")]
    PathCommand(String),

    #[error("polygon points must come in pairs, got {0} coordinates")]
    Polygon(usize),

    #[error("invalid weight {0:?}")]
    Weight(String),

    #[error("malformed hex bitmap row {0:?}")]
    Hex(String),

    #[error("bitmap row {row:?} holds {bits} bits, glyph width is {width}")]
    BitmapRow { row: String, bits: usize, width: usize },

    #[error("glyph bitmap ended after {found} of {expected} rows")]
    BitmapRowCount { found: usize, expected: usize },

    #[error("malformed {keyword} record {line:?}")]
    Record { keyword: &'static str, line: String },

    #[error("character {name:?} maps outside the 0..128 range")]
    Character { name: String },

    #[error("{stem:?} is not a valid C identifier")]
    Identifier { stem: String },

    #[error("cannot write atlas preview {}: {source}", path.display())]
    Preview {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<BakeError>,
    },
}

impl BakeError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the input file a parse error came from.  Already-located
    /// errors are returned unchanged.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            e @ (Self::Io { .. } | Self::InFile { .. } | Self::Preview { .. }) => e,
            other => Self::InFile {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }
}
