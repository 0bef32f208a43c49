// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Matrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversion between wire rows (`Vec<Vec<f64>>`) and dense `ndarray` matrices.
//!
//! The kernel only ever sees non-empty, rectangular, finite matrices; this
//! module is where those invariants are checked.

use ndarray::{Array1, Array2};

use crate::error::{KernelError, KernelResult};

/// Build a dense matrix from row-major wire rows.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> KernelResult<Array2<f64>> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
    if n_rows == 0 || n_cols == 0 {
        return Err(KernelError::InvalidMatrix(
            "matrix must have at least one row and one column".to_string(),
        ));
    }

    let mut flat = Vec::with_capacity(n_rows * n_cols);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != n_cols {
            return Err(KernelError::InvalidMatrix(format!(
                "row {i} has {} entries, expected {n_cols}",
                row.len()
            )));
        }
        for (j, &v) in row.iter().enumerate() {
            if !v.is_finite() {
                return Err(KernelError::InvalidMatrix(format!(
                    "non-finite entry at ({i}, {j})"
                )));
            }
            flat.push(v);
        }
    }

    Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| KernelError::InvalidMatrix(e.to_string()))
}

/// Flatten a dense matrix back into wire rows.
pub fn matrix_to_rows(m: &Array2<f64>) -> Vec<Vec<f64>> {
    m.rows().into_iter().map(|row| row.to_vec()).collect()
}

/// Build a dense vector from wire values, rejecting NaN/Infinity.
pub fn vector_from_slice(values: &[f64]) -> KernelResult<Array1<f64>> {
    if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
        return Err(KernelError::InvalidMatrix(format!(
            "non-finite vector entry at index {idx}"
        )));
    }
    Ok(Array1::from_vec(values.to_vec()))
}

/// Returns `n` for an `n x n` matrix, `SquareMatrixRequired` otherwise.
pub fn ensure_square(m: &Array2<f64>) -> KernelResult<usize> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(KernelError::SquareMatrixRequired { rows, cols });
    }
    Ok(rows)
}

/// True when every entry is finite.
pub fn all_finite(m: &Array2<f64>) -> bool {
    m.iter().all(|v| v.is_finite())
}
