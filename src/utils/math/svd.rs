//! Truncated singular value decomposition.
//!
//! The projection `U_k Σ_k` of an `n × d` matrix is computed without centring,
//! from the eigen-decomposition of whichever Gram matrix is smaller:
//! `A Aᵀ` when `n <= d` (then `U Σ = U sqrt(Λ)`), otherwise `Aᵀ A`
//! (then `U Σ = A V`). The symmetric eigenproblem is solved with cyclic
//! Jacobi rotations, which is slow for big inputs but fully deterministic.

use ndarray::{s, Array1, Array2, Axis};
use tracing::debug;

use crate::{
    error::{MatrixError, Result},
    utils::math::row_norms_sq,
};

const MAX_SWEEPS: usize = 100;
const TOLERANCE: f64 = 1e-24;

/// Project the rows of `a` onto its top `k` right singular directions.
///
/// # Errors
/// `InvalidReductionDimension` unless `1 <= k <= min(rows, columns)`.
/// Checked before any arithmetic happens.
pub fn truncated_svd(a: &Array2<f64>, k: usize) -> Result<Array2<f64>> {
    let (n, d) = a.dim();
    let max = n.min(d);
    if k == 0 || k > max {
        return Err(MatrixError::InvalidReductionDimension { requested: k, max });
    }

    let mut projected = if n <= d {
        let gram = a.dot(&a.t());
        let (values, vectors) = symmetric_eigen(gram);
        let mut out = vectors.slice(s![.., ..k]).to_owned();
        for (mut col, &lambda) in out.axis_iter_mut(Axis(1)).zip(values.iter()) {
            let sigma = lambda.max(0.0).sqrt();
            col.mapv_inplace(|v| v * sigma);
        }
        out
    } else {
        let gram = a.t().dot(a);
        let (_, vectors) = symmetric_eigen(gram);
        a.dot(&vectors.slice(s![.., ..k]))
    };

    flip_signs(&mut projected);
    let total: f64 = row_norms_sq(a).iter().sum();
    let kept: f64 = row_norms_sq(&projected).iter().sum();
    let retained = if total > 0.0 { kept / total } else { 0.0 };
    debug!(rows = n, columns = d, components = k, retained, "truncated svd");
    Ok(projected)
}

/// Eigenvalues (descending) and matching eigenvectors (as columns)
/// of a symmetric matrix.
pub fn symmetric_eigen(mut a: Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n = a.nrows();
    let mut v = Array2::<f64>::eye(n);
    let scale: f64 = a.iter().map(|x| x * x).sum();

    for _ in 0..MAX_SWEEPS {
        let mut off = 0.0;
        for p in 0..n {
            for q in (p + 1)..n {
                off += a[[p, q]] * a[[p, q]];
            }
        }
        if off <= TOLERANCE * scale.max(f64::MIN_POSITIVE) {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[[p, q]];
                if apq == 0.0 {
                    continue;
                }
                let theta = (a[[q, q]] - a[[p, p]]) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let sn = t * c;
                rotate(&mut a, &mut v, p, q, c, sn);
            }
        }
    }

    let values: Vec<f64> = (0..n).map(|i| a[[i, i]]).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| values[j].total_cmp(&values[i]));

    let sorted_values = Array1::from_iter(order.iter().map(|&i| values[i]));
    let sorted_vectors = v.select(Axis(1), &order);
    (sorted_values, sorted_vectors)
}

/// Apply the rotation `Jᵀ A J` on the (p, q) plane and accumulate `V J`.
fn rotate(a: &mut Array2<f64>, v: &mut Array2<f64>, p: usize, q: usize, c: f64, s: f64) {
    let n = a.nrows();
    for k in 0..n {
        let akp = a[[k, p]];
        let akq = a[[k, q]];
        a[[k, p]] = c * akp - s * akq;
        a[[k, q]] = s * akp + c * akq;
    }
    for k in 0..n {
        let apk = a[[p, k]];
        let aqk = a[[q, k]];
        a[[p, k]] = c * apk - s * aqk;
        a[[q, k]] = s * apk + c * aqk;
    }
    for k in 0..n {
        let vkp = v[[k, p]];
        let vkq = v[[k, q]];
        v[[k, p]] = c * vkp - s * vkq;
        v[[k, q]] = s * vkp + c * vkq;
    }
}

/// Make the largest-magnitude entry of each column positive.
fn flip_signs(m: &mut Array2<f64>) {
    for mut col in m.axis_iter_mut(Axis(1)) {
        let mut pivot = 0.0f64;
        for &x in col.iter() {
            if x.abs() > pivot.abs() {
                pivot = x;
            }
        }
        if pivot < 0.0 {
            col.mapv_inplace(|x| -x);
        }
    }
}
