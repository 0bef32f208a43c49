// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Determinant
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Determinant: cofactor closed forms up to 3x3, unpivoted LU beyond.
//!
//! The `n >= 4` path inherits the LU limitation: an exact zero pivot yields a
//! non-finite determinant even when the matrix is regular (e.g. a row swap of
//! the identity). The pivoted elimination in [`crate::inverse`] is separate
//! and not used here.

use linviz_types::error::KernelResult;
use linviz_types::matrix::ensure_square;
use ndarray::Array2;

use crate::lu::lu_with_progress;
use crate::progress::{report, NoProgress, ProgressSink};

pub fn determinant(a: &Array2<f64>) -> KernelResult<f64> {
    determinant_with_progress(a, &mut NoProgress)
}

pub fn determinant_with_progress(
    a: &Array2<f64>,
    progress: &mut dyn ProgressSink,
) -> KernelResult<f64> {
    let n = ensure_square(a)?;
    match n {
        0 => Ok(1.0),
        1 => Ok(a[[0, 0]]),
        2 => Ok(det2(a[[0, 0]], a[[0, 1]], a[[1, 0]], a[[1, 1]])),
        3 => Ok(det3(&[
            [a[[0, 0]], a[[0, 1]], a[[0, 2]]],
            [a[[1, 0]], a[[1, 1]], a[[1, 2]]],
            [a[[2, 0]], a[[2, 1]], a[[2, 2]]],
        ])),
        _ => {
            let factors = lu_with_progress(a, progress)?;
            report(progress, "determinant", n, n);
            Ok(factors.diagonal_product())
        }
    }
}

#[inline]
pub fn det2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// Cofactor expansion along the first row.
#[inline]
pub fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}
