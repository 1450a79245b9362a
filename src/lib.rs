//! This crate builds term-document matrices from a labeled text corpus.

pub mod config;
pub mod error;
pub mod matrix;
pub mod output;
pub mod pipeline;
pub mod utils;
pub mod vectorizer;

/// Run configuration
/// Explicit, plain-data description of one run: the corpus folder, the output
/// paths and the transform flags. `Config::branch` turns the flags into a
/// `TransformBranch` exactly once.
pub use config::{Config, TransformBranch};

/// Error type
/// Every fatal condition of a run. Flag combinations that make the
/// similarity CSV meaningless are not errors; they surface as warnings.
pub use error::{MatrixError, Result};

/// Corpus
/// All documents of a `root/topic/file` folder, loaded into memory.
/// Each document is identified by its topic and file name, rendered as
/// `"{topic} {file_name}"` in matrix rows.
pub use vectorizer::corpus::{Corpus, Document, DocumentId};

/// Token Frequency structure
/// Insertion-ordered token counts. Frequency rankings break ties by first
/// occurrence, which makes the top-M vocabulary reproducible.
pub use vectorizer::token::TokenFrequency;

/// Vocabulary and count vectors
/// - `Vocabulary`: the ordered term set that defines matrix columns
/// - `DocumentVector`: one count per vocabulary term for a document
/// - `CountVectorizer`: fits the vocabulary once and vectorizes every document
pub use vectorizer::{vectorize, CountVectorizer, DocumentVector, Vocabulary};

/// TF IDF Calculation Engine Trait
/// Pluggable weighting strategy. `SmoothedTfIdfEngine` implements the
/// conventional smoothed idf with per-row L2 normalization.
pub use vectorizer::tfidf::{apply_tfidf, SmoothedTfIdfEngine, TfIdfEngine};

/// Labeled matrices
/// `LabeledMatrix<N>` pairs a dense `ndarray` matrix with document row labels
/// and column labels. `build_matrix` assembles count vectors into one,
/// `collapse_duplicates` removes rows with identical vectors.
pub use matrix::{
    build_matrix, dedup::collapse_duplicates, CountMatrix, LabeledMatrix, WeightedMatrix,
};

/// Pipeline entry points
/// `run` loads, transforms and writes; `execute`/`build` stop before writing.
pub use pipeline::{run, OutputMatrix, Outcome, RunReport};
