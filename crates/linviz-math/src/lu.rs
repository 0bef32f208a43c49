// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — LU Decomposition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Doolittle LU factorization `A = LU` without row pivoting.
//!
//! `L` has a unit diagonal. A zero pivot `U[i][i]` is not trapped: the
//! affected entries of `L` become NaN/Infinity. Callers that need robustness
//! use the pivoted paths in [`crate::inverse`] and [`crate::solve`].

use linviz_types::error::KernelResult;
use linviz_types::matrix::ensure_square;
use ndarray::Array2;

use crate::progress::{report, NoProgress, ProgressSink};

#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors {
    pub l: Array2<f64>,
    pub u: Array2<f64>,
}

impl LuFactors {
    /// Product of the diagonal of `U`.
    pub fn diagonal_product(&self) -> f64 {
        self.u.diag().iter().product()
    }
}

pub fn lu(a: &Array2<f64>) -> KernelResult<LuFactors> {
    lu_with_progress(a, &mut NoProgress)
}

pub fn lu_with_progress(
    a: &Array2<f64>,
    progress: &mut dyn ProgressSink,
) -> KernelResult<LuFactors> {
    let n = ensure_square(a)?;
    let mut l = Array2::<f64>::zeros((n, n));
    let mut u = Array2::<f64>::zeros((n, n));

    for i in 0..n {
        report(progress, "lu", i, n);

        for k in i..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[[i, j]] * u[[j, k]];
            }
            u[[i, k]] = a[[i, k]] - sum;
        }

        if u[[i, i]] == 0.0 && i + 1 < n {
            log::debug!("lu: zero pivot at U[{i}][{i}], L column {i} is non-finite");
        }

        l[[i, i]] = 1.0;
        for k in (i + 1)..n {
            let mut sum = 0.0;
            for j in 0..i {
                sum += l[[k, j]] * u[[j, i]];
            }
            l[[k, i]] = (a[[k, i]] - sum) / u[[i, i]];
        }
    }

    Ok(LuFactors { l, u })
}
