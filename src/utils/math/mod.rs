//! Dense math helpers over `ndarray` matrices.

pub mod svd;

use ndarray::{Array2, Axis};

/// Scale every row to unit L2 norm. All-zero rows are left untouched.
pub fn l2_normalize_rows(cells: &mut Array2<f64>) {
    for mut row in cells.axis_iter_mut(Axis(0)) {
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row.mapv_inplace(|v| v / norm);
        }
    }
}

/// Squared L2 norm of each row.
pub fn row_norms_sq(cells: &Array2<f64>) -> Vec<f64> {
    cells
        .axis_iter(Axis(0))
        .map(|row| row.dot(&row))
        .collect()
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn normalizes_rows_and_keeps_zero_rows() {
        let mut m = array![[3.0, 4.0], [0.0, 0.0], [0.0, 2.0]];
        l2_normalize_rows(&mut m);
        assert_eq!(m, array![[0.6, 0.8], [0.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn squared_row_norms() {
        let m = array![[1.0, 2.0], [0.0, 3.0]];
        assert_eq!(row_norms_sq(&m), vec![5.0, 9.0]);
    }
}
