// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — QR Decomposition
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! QR decomposition via Householder reflections.
//!
//! Decomposes an `m x n` matrix (any aspect ratio) into `A = QR` where
//! `Q` is `m x m` orthogonal and `R` is `m x n` upper triangular.
//! Reflections are applied for `j = 0 .. min(m, n) - 1`; a column whose
//! trailing norm is ~0 is left as is.

use linviz_types::constants::HOUSEHOLDER_EPS;
use ndarray::{Array1, Array2};

use crate::progress::{report, NoProgress, ProgressSink};

#[derive(Debug, Clone, PartialEq)]
pub struct QrFactors {
    pub q: Array2<f64>,
    pub r: Array2<f64>,
}

pub fn qr(a: &Array2<f64>) -> QrFactors {
    qr_with_progress(a, &mut NoProgress)
}

#[allow(clippy::many_single_char_names)]
pub fn qr_with_progress(a: &Array2<f64>, progress: &mut dyn ProgressSink) -> QrFactors {
    let (m, n) = a.dim();
    let mut r = a.to_owned();
    // Accumulates H_k ... H_1, i.e. Q^T.
    let mut qt = Array2::<f64>::eye(m);
    let steps = m.min(n);

    for j in 0..steps {
        report(progress, "qr:householder", j, steps);

        let x: Array1<f64> = r.column(j).slice(ndarray::s![j..]).to_owned();
        let norm = x.dot(&x).sqrt();
        if norm < HOUSEHOLDER_EPS {
            continue;
        }

        // Sign chosen to avoid cancellation in v[0].
        let mut v = x;
        if v[0] >= 0.0 {
            v[0] += norm;
        } else {
            v[0] -= norm;
        }
        let v_norm = v.dot(&v).sqrt();
        if v_norm < HOUSEHOLDER_EPS {
            continue;
        }
        v /= v_norm;

        reflect_rows(&mut r, &v, j, j);
        reflect_rows(&mut qt, &v, j, 0);
    }

    QrFactors { q: qt.t().to_owned(), r }
}

/// Apply `H = I - 2 v v^T` to rows `offset..` of `m`, columns `from_col..`.
fn reflect_rows(m: &mut Array2<f64>, v: &Array1<f64>, offset: usize, from_col: usize) {
    let rows = v.len();
    for k in from_col..m.ncols() {
        let mut dot = 0.0;
        for i in 0..rows {
            dot += v[i] * m[[offset + i, k]];
        }
        if dot == 0.0 {
            continue;
        }
        let scale = 2.0 * dot;
        for i in 0..rows {
            m[[offset + i, k]] -= scale * v[i];
        }
    }
}
