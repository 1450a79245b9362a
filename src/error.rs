//! Error types for matrix construction.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// No documents, or documents without a single non-empty token.
    #[error("no tokens found in corpus at {}", root.display())]
    EmptyCorpus { root: PathBuf },

    /// Two document vectors disagree on their key set.
    /// Only reachable through a vocabulary-construction bug.
    #[error(
        "document `{document}` has {found} vocabulary keys, {matching} of the {expected} expected"
    )]
    InconsistentVocabulary {
        document: String,
        expected: usize,
        matching: usize,
        found: usize,
    },

    /// Requested SVD dimension is zero or larger than `min(rows, columns)`.
    #[error("cannot reduce to {requested} dimensions, matrix allows 1..={max}")]
    InvalidReductionDimension { requested: usize, max: usize },

    #[error("corpus root {} is not a directory", path.display())]
    CorpusLayout { path: PathBuf },

    #[error("failed to read document {}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
