use std::hash::Hash;

use indexmap::IndexMap;
use ndarray::Axis;
use num::Num;
use tracing::info;

use crate::{matrix::LabeledMatrix, vectorizer::corpus::DocumentId};

/// Result of [`collapse_duplicates`].
#[derive(Debug, Clone, PartialEq)]
pub struct Collapsed<N>
where
    N: Num + Copy,
{
    pub matrix: LabeledMatrix<N>,
    /// Removed rows, in the order they were encountered.
    pub dropped: Vec<DocumentId>,
}

/// Keep one row per distinct cell vector.
///
/// Rows are grouped by their exact values in column order. The first row of
/// each group (in the current row order) is retained, the rest are dropped.
/// Groups are visited in order of first appearance. Columns never change.
pub fn collapse_duplicates<N>(matrix: &LabeledMatrix<N>) -> Collapsed<N>
where
    N: Num + Copy + Eq + Hash,
{
    let mut groups: IndexMap<Vec<N>, Vec<usize>> = IndexMap::new();
    for (i, row) in matrix.cells.axis_iter(Axis(0)).enumerate() {
        groups.entry(row.to_vec()).or_default().push(i);
    }

    let mut keep = Vec::with_capacity(groups.len());
    let mut dropped = Vec::new();
    for members in groups.values() {
        keep.push(members[0]);
        dropped.extend(members[1..].iter().map(|&i| matrix.rows[i].clone()));
    }
    keep.sort_unstable();

    let rows = keep.iter().map(|&i| matrix.rows[i].clone()).collect();
    let cells = matrix.cells.select(Axis(0), &keep);

    if !dropped.is_empty() {
        info!(dropped = dropped.len(), kept = keep.len(), "collapsed duplicate documents");
    }
    Collapsed {
        matrix: LabeledMatrix::new(rows, matrix.columns.clone(), cells),
        dropped,
    }
}
