//! Labeled term-document matrices.

pub mod dedup;

use ndarray::Array2;
use num::{Num, ToPrimitive};
use tracing::info;

use crate::{
    error::{MatrixError, Result},
    utils::sort::argsort_stable,
    vectorizer::{corpus::DocumentId, DocumentVector},
};

/// Dense matrix with document rows and labeled columns.
///
/// `cells.dim() == (rows.len(), columns.len())` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledMatrix<N>
where
    N: Num + Copy,
{
    pub rows: Vec<DocumentId>,
    pub columns: Vec<String>,
    pub cells: Array2<N>,
}

pub type CountMatrix = LabeledMatrix<u64>;
pub type WeightedMatrix = LabeledMatrix<f64>;

impl<N> LabeledMatrix<N>
where
    N: Num + Copy,
{
    pub fn new(rows: Vec<DocumentId>, columns: Vec<String>, cells: Array2<N>) -> Self {
        debug_assert_eq!(cells.dim(), (rows.len(), columns.len()));
        Self { rows, columns, cells }
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn row_labels(&self) -> Vec<String> {
        self.rows.iter().map(DocumentId::label).collect()
    }

    pub fn row(&self, label: &str) -> Option<Vec<N>> {
        self.rows
            .iter()
            .position(|id| id.label() == label)
            .map(|i| self.cells.row(i).to_vec())
    }

    /// Same labels, new cells. Used by transforms that keep the column space.
    pub fn with_cells<M>(&self, cells: Array2<M>) -> LabeledMatrix<M>
    where
        M: Num + Copy,
    {
        LabeledMatrix::new(self.rows.clone(), self.columns.clone(), cells)
    }

    /// Cells widened to `f64`.
    pub fn to_f64(&self) -> Array2<f64>
    where
        N: ToPrimitive,
    {
        self.cells.mapv(|v| v.to_f64().unwrap_or(0.0))
    }
}

/// Assemble count vectors into a term-document matrix.
///
/// Columns are the vocabulary terms sorted lexicographically, rows are the
/// document labels sorted lexicographically.
///
/// # Errors
/// `InconsistentVocabulary` if any vector's key set differs from the first.
pub fn build_matrix(vectors: &[(DocumentId, DocumentVector)]) -> Result<CountMatrix> {
    let Some((_, first)) = vectors.first() else {
        return Ok(LabeledMatrix::new(Vec::new(), Vec::new(), Array2::zeros((0, 0))));
    };

    let mut columns: Vec<String> = first.counts.keys().cloned().collect();
    columns.sort();

    for (id, vector) in vectors {
        let consistent = vector.len() == columns.len()
            && columns.iter().all(|term| vector.counts.contains_key(term.as_str()));
        if !consistent {
            let matching = columns
                .iter()
                .filter(|term| vector.counts.contains_key(term.as_str()))
                .count();
            return Err(MatrixError::InconsistentVocabulary {
                document: id.label(),
                expected: columns.len(),
                matching,
                found: vector.len(),
            });
        }
    }

    let labels: Vec<String> = vectors.iter().map(|(id, _)| id.label()).collect();
    let order = argsort_stable(&labels);

    let mut cells = Array2::<u64>::zeros((vectors.len(), columns.len()));
    let mut rows = Vec::with_capacity(vectors.len());
    for (r, &src) in order.iter().enumerate() {
        let (id, vector) = &vectors[src];
        for (c, term) in columns.iter().enumerate() {
            cells[[r, c]] = vector.counts.get(term.as_str()).copied().unwrap_or(0);
        }
        rows.push(id.clone());
    }

    info!(rows = rows.len(), columns = columns.len(), "term-document matrix built");
    Ok(LabeledMatrix::new(rows, columns, cells))
}
