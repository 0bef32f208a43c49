// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Inverse
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Matrix inverse by Gauss–Jordan elimination on `[A | I]` with partial pivoting.

use linviz_types::constants::PIVOT_EPS;
use linviz_types::error::{KernelError, KernelResult};
use linviz_types::matrix::ensure_square;
use ndarray::{s, Array2};

use crate::determinant::determinant_with_progress;
use crate::elimination::{find_pivot, subtract_row, swap_rows};
use crate::progress::{report, NoProgress, ProgressSink};

pub fn inverse(a: &Array2<f64>) -> KernelResult<Array2<f64>> {
    inverse_with_progress(a, &mut NoProgress)
}

/// Fails with `SingularMatrix` when `|det(A)| < 1e-10`.
///
/// A non-finite determinant (zero pivot in the unpivoted LU path) does not
/// trip that check; the pivoted elimination below decides instead.
pub fn inverse_with_progress(
    a: &Array2<f64>,
    progress: &mut dyn ProgressSink,
) -> KernelResult<Array2<f64>> {
    let n = ensure_square(a)?;
    let det = determinant_with_progress(a, progress)?;
    if det.abs() < PIVOT_EPS {
        return Err(KernelError::SingularMatrix {
            magnitude: det.abs(),
        });
    }

    let mut aug = Array2::<f64>::zeros((n, 2 * n));
    aug.slice_mut(s![.., ..n]).assign(a);
    for i in 0..n {
        aug[[i, n + i]] = 1.0;
    }

    for col in 0..n {
        report(progress, "inverse:gauss-jordan", col, n);

        let (best_row, best) = find_pivot(&aug, col, col);
        if best < PIVOT_EPS {
            return Err(KernelError::SingularMatrix { magnitude: best });
        }
        swap_rows(&mut aug, col, best_row);

        let pivot = aug[[col, col]];
        for j in col..2 * n {
            aug[[col, j]] /= pivot;
        }

        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = aug[[r, col]];
            if factor != 0.0 {
                subtract_row(&mut aug, r, col, factor, col);
            }
        }
    }

    Ok(aug.slice(s![.., n..]).to_owned())
}
