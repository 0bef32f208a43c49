// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Elimination
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Row reduction: row echelon form (REF) and reduced row echelon form (RREF).
//!
//! Both routines work on a private copy. Rank deficiency is not an error:
//! columns whose best pivot is below [`PIVOT_EPS`] are skipped and show up as
//! zero rows / missing leading entries in the output.

use linviz_types::constants::PIVOT_EPS;
use ndarray::Array2;

use crate::progress::{report, NoProgress, ProgressSink};

/// Row with the largest |value| in `col`, searching rows `from..`.
/// Returns (row, magnitude).
pub(crate) fn find_pivot(m: &Array2<f64>, col: usize, from: usize) -> (usize, f64) {
    let mut best_row = from;
    let mut best = m[[from, col]].abs();
    for r in (from + 1)..m.nrows() {
        let v = m[[r, col]].abs();
        if v > best {
            best = v;
            best_row = r;
        }
    }
    (best_row, best)
}

pub(crate) fn swap_rows(m: &mut Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for j in 0..m.ncols() {
        m.swap([a, j], [b, j]);
    }
}

/// `row[target] -= factor * row[source]`, starting at column `from_col`.
pub(crate) fn subtract_row(
    m: &mut Array2<f64>,
    target: usize,
    source: usize,
    factor: f64,
    from_col: usize,
) {
    for j in from_col..m.ncols() {
        let s = m[[source, j]];
        m[[target, j]] -= factor * s;
    }
}

/// Forward elimination with partial pivoting.
pub fn row_echelon(a: &Array2<f64>) -> Array2<f64> {
    row_echelon_with_progress(a, &mut NoProgress)
}

pub fn row_echelon_with_progress(a: &Array2<f64>, progress: &mut dyn ProgressSink) -> Array2<f64> {
    let mut m = a.to_owned();
    let (rows, cols) = m.dim();
    let mut pivot_row = 0;

    for col in 0..cols {
        if pivot_row >= rows {
            break;
        }
        report(progress, "ref:forward", col, cols);

        let (best_row, best) = find_pivot(&m, col, pivot_row);
        if best < PIVOT_EPS {
            continue;
        }
        swap_rows(&mut m, pivot_row, best_row);

        let pivot = m[[pivot_row, col]];
        for r in (pivot_row + 1)..rows {
            let factor = m[[r, col]] / pivot;
            if factor != 0.0 {
                subtract_row(&mut m, r, pivot_row, factor, col);
            }
            m[[r, col]] = 0.0;
        }
        pivot_row += 1;
    }

    m
}

/// REF followed by backward elimination with normalized pivots.
pub fn reduced_row_echelon(a: &Array2<f64>) -> Array2<f64> {
    reduced_row_echelon_with_progress(a, &mut NoProgress)
}

pub fn reduced_row_echelon_with_progress(
    a: &Array2<f64>,
    progress: &mut dyn ProgressSink,
) -> Array2<f64> {
    let mut m = row_echelon_with_progress(a, progress);
    let (rows, cols) = m.dim();

    for i in (0..rows).rev() {
        report(progress, "rref:backward", rows - 1 - i, rows);

        let lead = (0..cols).find(|&j| m[[i, j]].abs() > PIVOT_EPS);
        let Some(lead) = lead else {
            continue;
        };

        let pivot = m[[i, lead]];
        for j in lead..cols {
            m[[i, j]] /= pivot;
        }
        m[[i, lead]] = 1.0;

        for k in 0..i {
            let factor = m[[k, lead]];
            if factor != 0.0 {
                subtract_row(&mut m, k, i, factor, lead);
            }
            m[[k, lead]] = 0.0;
        }
    }

    m
}
