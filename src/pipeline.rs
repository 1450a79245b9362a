//! End-to-end run: corpus → vocabulary → count vectors → matrix →
//! duplicate collapsing → transform branch → rendered outputs.

use std::fs;

use tracing::{info, warn};

use crate::{
    config::{Config, TransformBranch},
    error::Result,
    matrix::{build_matrix, dedup::collapse_duplicates, CountMatrix, WeightedMatrix},
    output,
    utils::math::svd::truncated_svd,
    vectorizer::{
        corpus::{Corpus, DocumentId},
        tfidf::{apply_tfidf, SmoothedTfIdfEngine},
        CountVectorizer,
    },
};

/// The terminal matrix of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMatrix {
    Counts(CountMatrix),
    Weighted(WeightedMatrix),
}

impl OutputMatrix {
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Counts(m) => m.shape(),
            Self::Weighted(m) => m.shape(),
        }
    }

    pub fn render_text(&self) -> String {
        match self {
            Self::Counts(m) => output::render_text(m),
            Self::Weighted(m) => output::render_text(m),
        }
    }
}

/// In-memory result of a run, before anything is written.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub branch: TransformBranch,
    /// Collapsed raw-count matrix every branch starts from.
    pub counts: CountMatrix,
    pub dropped: Vec<DocumentId>,
    pub output: OutputMatrix,
    pub warning: Option<&'static str>,
    /// Raw-count CSV, present only when requested and allowed.
    pub csv: Option<String>,
}

/// What [`run`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub branch: TransformBranch,
    pub dropped: Vec<DocumentId>,
    pub output_shape: (usize, usize),
    pub warning: Option<&'static str>,
    pub csv_written: bool,
}

/// Load the corpus named by `config` and compute everything in memory.
pub fn execute(config: &Config) -> Result<Outcome> {
    let corpus = Corpus::load(&config.corpus_root)?;
    build(&corpus, config)
}

/// Compute the outcome for an already loaded corpus.
pub fn build(corpus: &Corpus, config: &Config) -> Result<Outcome> {
    let branch = config.branch();

    let vectorizer = CountVectorizer::fit(corpus, config.base_vocab)?;
    let vectors = vectorizer.transform(corpus);
    let matrix = build_matrix(&vectors)?;
    let collapsed = collapse_duplicates(&matrix);
    let counts = collapsed.matrix;

    let output = match branch {
        TransformBranch::RawCounts => OutputMatrix::Counts(counts.clone()),
        TransformBranch::TfIdf => {
            OutputMatrix::Weighted(apply_tfidf::<_, SmoothedTfIdfEngine>(&counts))
        }
        TransformBranch::Svd { dims } => {
            OutputMatrix::Weighted(reduce(&counts.to_f64(), &counts, dims)?)
        }
        TransformBranch::TfIdfSvd { dims } => {
            let weighted = apply_tfidf::<_, SmoothedTfIdfEngine>(&counts);
            OutputMatrix::Weighted(reduce(&weighted.cells, &counts, dims)?)
        }
    };

    let csv_requested = config.csv_file.is_some();
    let warning = branch.csv_warning(csv_requested);
    if let Some(message) = warning {
        warn!(?branch, "{message}");
    }
    let csv = (csv_requested && branch.allows_csv()).then(|| output::render_csv(&counts));

    let (rows, columns) = output.shape();
    info!(?branch, rows, columns, dropped = collapsed.dropped.len(), "run computed");
    Ok(Outcome {
        branch,
        counts,
        dropped: collapsed.dropped,
        output,
        warning,
        csv,
    })
}

/// Run the whole pipeline and write the outputs.
///
/// Nothing is written unless every stage succeeded. The matrix dump goes to
/// `config.output_file`; the CSV is written only for the raw-count branch.
/// If the CSV cannot be written the matrix dump is removed again.
pub fn run(config: &Config) -> Result<RunReport> {
    let outcome = execute(config)?;
    let text = outcome.output.render_text();

    output::write_file(&config.output_file, &text)?;
    let csv_written = match (&config.csv_file, &outcome.csv) {
        (Some(path), Some(csv)) => {
            if let Err(err) = output::write_file(path, csv) {
                if let Err(cleanup) = fs::remove_file(&config.output_file) {
                    warn!(
                        path = %config.output_file.display(),
                        %cleanup,
                        "could not remove output"
                    );
                }
                return Err(err);
            }
            true
        }
        _ => false,
    };

    Ok(RunReport {
        branch: outcome.branch,
        output_shape: outcome.output.shape(),
        dropped: outcome.dropped,
        warning: outcome.warning,
        csv_written,
    })
}

/// SVD projection with component columns labelled `0..dims`.
fn reduce(
    cells: &ndarray::Array2<f64>,
    labels: &CountMatrix,
    dims: usize,
) -> Result<WeightedMatrix> {
    let projected = truncated_svd(cells, dims)?;
    let columns = (0..dims).map(|i| i.to_string()).collect();
    Ok(WeightedMatrix::new(labels.rows.clone(), columns, projected))
}
