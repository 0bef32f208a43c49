// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Eigenvalues
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unshifted QR algorithm.
//!
//! `A_{k+1} = R_k Q_k` for a fixed number of iterations, no early exit; the
//! diagonal of the last iterate is returned. Converges for real, well
//! separated eigenvalues. Complex-conjugate pairs leave an unreduced 2x2
//! block and the corresponding diagonal entries are not eigenvalues.

use linviz_types::constants::DEFAULT_EIGEN_ITERATIONS;
use linviz_types::error::KernelResult;
use linviz_types::matrix::ensure_square;
use ndarray::{Array1, Array2};

use crate::progress::{report, NoProgress, ProgressSink};
use crate::qr::qr;

pub fn eigenvalues(a: &Array2<f64>) -> KernelResult<Array1<f64>> {
    eigenvalues_with_progress(a, DEFAULT_EIGEN_ITERATIONS, &mut NoProgress)
}

pub fn eigenvalues_with_progress(
    a: &Array2<f64>,
    max_iterations: usize,
    progress: &mut dyn ProgressSink,
) -> KernelResult<Array1<f64>> {
    ensure_square(a)?;
    let mut ak = a.to_owned();

    for iter in 0..max_iterations {
        report(progress, "eigen:iteration", iter, max_iterations);
        let f = qr(&ak);
        ak = f.r.dot(&f.q);
    }

    Ok(ak.diag().to_owned())
}
