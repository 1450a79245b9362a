use ndarray::{Array2, ArrayView1, Axis};
use num::{Num, ToPrimitive};
use tracing::info;

use crate::{matrix::{LabeledMatrix, WeightedMatrix}, utils::math::l2_normalize_rows};

pub trait TfIdfEngine<N>
where
    N: Num + Copy,
{
    /// IDF vector over the matrix columns
    /// # Arguments
    /// * `doc_freq` - number of documents containing each term
    /// * `doc_num` - number of documents
    fn idf_vec(doc_freq: &[u64], doc_num: u64) -> Vec<f64>;

    /// Weighted row before normalization
    fn tf_vec(counts: ArrayView1<'_, N>, idf: &[f64]) -> Vec<f64>;
}

/// Smoothed TF-IDF
/// - idf = ln((1 + n) / (1 + df)) + 1
/// - tf = raw count
/// - rows are L2-normalized afterwards
#[derive(Debug, Default)]
pub struct SmoothedTfIdfEngine;

impl<N> TfIdfEngine<N> for SmoothedTfIdfEngine
where
    N: Num + Copy + ToPrimitive,
{
    fn idf_vec(doc_freq: &[u64], doc_num: u64) -> Vec<f64> {
        let n = doc_num as f64;
        doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect()
    }

    fn tf_vec(counts: ArrayView1<'_, N>, idf: &[f64]) -> Vec<f64> {
        counts
            .iter()
            .zip(idf)
            .map(|(count, idf)| count.to_f64().unwrap_or(0.0) * idf)
            .collect()
    }
}

/// Number of rows with a non-zero cell, per column.
pub fn document_frequency<N>(matrix: &LabeledMatrix<N>) -> Vec<u64>
where
    N: Num + Copy,
{
    matrix
        .cells
        .axis_iter(Axis(1))
        .map(|col| col.iter().filter(|v| !v.is_zero()).count() as u64)
        .collect()
}

/// Apply the engine `E` to a count matrix. Labels are preserved.
pub fn apply_tfidf<N, E>(matrix: &LabeledMatrix<N>) -> WeightedMatrix
where
    N: Num + Copy,
    E: TfIdfEngine<N>,
{
    let (rows, cols) = matrix.shape();
    let idf = E::idf_vec(&document_frequency(matrix), rows as u64);

    let mut cells = Array2::<f64>::zeros((rows, cols));
    for (mut out, counts) in cells.axis_iter_mut(Axis(0)).zip(matrix.cells.axis_iter(Axis(0))) {
        for (dst, v) in out.iter_mut().zip(E::tf_vec(counts, &idf)) {
            *dst = v;
        }
    }
    l2_normalize_rows(&mut cells);

    info!(rows, columns = cols, "applied tf-idf weighting");
    matrix.with_cells(cells)
}
