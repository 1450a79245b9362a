use std::path::PathBuf;

/// Which transform a run applies. Selected once from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformBranch {
    /// Raw counts; the similarity CSV may be written.
    RawCounts,
    /// tf-idf weighted counts.
    TfIdf,
    /// SVD projection of raw counts.
    Svd { dims: usize },
    /// SVD projection of the tf-idf matrix.
    TfIdfSvd { dims: usize },
}

impl TransformBranch {
    /// A dimension of 0 counts as no SVD request.
    pub fn select(tfidf: bool, svd_dims: Option<usize>) -> Self {
        match (tfidf, svd_dims.filter(|&dims| dims > 0)) {
            (false, None) => Self::RawCounts,
            (true, None) => Self::TfIdf,
            (false, Some(dims)) => Self::Svd { dims },
            (true, Some(dims)) => Self::TfIdfSvd { dims },
        }
    }

    /// Warning to show when the similarity CSV cannot be produced.
    ///
    /// The combined branch always warns; the single-transform branches only
    /// warn when a CSV path was actually requested.
    pub fn csv_warning(self, csv_requested: bool) -> Option<&'static str> {
        match self {
            Self::RawCounts => None,
            Self::TfIdf if csv_requested => {
                Some("You can't calculate cosine similarity from tfidf values! No csv produced.")
            }
            Self::Svd { .. } if csv_requested => {
                Some("You can't calculate cosine similarity from svd matrix! No csv produced.")
            }
            Self::TfIdfSvd { .. } => {
                Some("You need raw counts to calculate cosine similarity! No csv produced.")
            }
            Self::TfIdf | Self::Svd { .. } => None,
        }
    }

    /// Cosine similarity is only derived from raw counts.
    pub fn allows_csv(self) -> bool {
        matches!(self, Self::RawCounts)
    }
}

/// Configuration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root folder holding one subfolder per topic.
    pub corpus_root: PathBuf,
    /// Destination of the printed matrix.
    pub output_file: PathBuf,
    /// Destination of the raw-count CSV, if wanted.
    pub csv_file: Option<PathBuf>,
    pub tfidf: bool,
    pub svd_dims: Option<usize>,
    /// Keep only the top `M` terms by raw corpus count.
    pub base_vocab: Option<usize>,
}

impl Config {
    pub fn new(corpus_root: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            output_file: output_file.into(),
            csv_file: None,
            tfidf: false,
            svd_dims: None,
            base_vocab: None,
        }
    }

    pub fn with_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_file = Some(path.into());
        self
    }

    pub fn with_tfidf(mut self, tfidf: bool) -> Self {
        self.tfidf = tfidf;
        self
    }

    pub fn with_svd(mut self, dims: usize) -> Self {
        self.svd_dims = Some(dims);
        self
    }

    pub fn with_base_vocab(mut self, terms: usize) -> Self {
        self.base_vocab = Some(terms);
        self
    }

    pub fn branch(&self) -> TransformBranch {
        TransformBranch::select(self.tfidf, self.svd_dims)
    }
}
