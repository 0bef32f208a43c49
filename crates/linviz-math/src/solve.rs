// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Linear System Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Solve `Ax = b` by Gaussian elimination with partial pivoting on `[A | b]`
//! followed by back substitution.

use linviz_types::constants::PIVOT_EPS;
use linviz_types::error::{KernelError, KernelResult};
use linviz_types::matrix::ensure_square;
use ndarray::{s, Array1, Array2};

use crate::elimination::{find_pivot, subtract_row, swap_rows};
use crate::progress::{report, NoProgress, ProgressSink};

pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> KernelResult<Array1<f64>> {
    solve_with_progress(a, b, &mut NoProgress)
}

pub fn solve_with_progress(
    a: &Array2<f64>,
    b: &Array1<f64>,
    progress: &mut dyn ProgressSink,
) -> KernelResult<Array1<f64>> {
    let n = ensure_square(a).map_err(|_| {
        KernelError::DimensionMismatch(format!(
            "solve requires a square matrix, got {}x{}",
            a.nrows(),
            a.ncols()
        ))
    })?;
    if b.len() != n {
        return Err(KernelError::DimensionMismatch(format!(
            "right-hand side has length {}, expected {n}",
            b.len()
        )));
    }

    let mut aug = Array2::<f64>::zeros((n, n + 1));
    aug.slice_mut(s![.., ..n]).assign(a);
    aug.slice_mut(s![.., n]).assign(b);

    for col in 0..n {
        report(progress, "solve:elimination", col, n);

        let (best_row, best) = find_pivot(&aug, col, col);
        if best < PIVOT_EPS {
            return Err(KernelError::SingularMatrix { magnitude: best });
        }
        swap_rows(&mut aug, col, best_row);

        let pivot = aug[[col, col]];
        for j in col..=n {
            aug[[col, j]] /= pivot;
        }

        for r in (col + 1)..n {
            let factor = aug[[r, col]];
            if factor != 0.0 {
                subtract_row(&mut aug, r, col, factor, col);
            }
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        report(progress, "solve:back-substitution", n - 1 - i, n);
        let mut sum = aug[[i, n]];
        for j in (i + 1)..n {
            sum -= aug[[i, j]] * x[j];
        }
        x[i] = sum;
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_solve_2x2_example() {
        let x = solve(&array![[2.0, 1.0], [1.0, 3.0]], &array![3.0, 5.0]).unwrap();
        assert!((x[0] - 0.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_solve_3x3() {
        // >>> np.linalg.solve([[1,2,3],[4,5,6],[7,8,10]], [1,2,3])
        // array([-0.33333333,  0.66666667,  0.        ])
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        let x = solve(&a, &array![1.0, 2.0, 3.0]).unwrap();
        let expected = [-1.0 / 3.0, 2.0 / 3.0, 0.0];
        for i in 0..3 {
            assert!((x[i] - expected[i]).abs() < 1e-12, "x[{i}] = {}", x[i]);
        }
    }

    #[test]
    fn test_solve_needs_pivoting() {
        let a = array![[0.0, 1.0], [1.0, 0.0]];
        let x = solve(&a, &array![2.0, 3.0]).unwrap();
        assert!((x[0] - 3.0).abs() < 1e-15);
        assert!((x[1] - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_residual_small() {
        let a = array![
            [10.0, -1.0, 2.0, 0.0],
            [-1.0, 11.0, -1.0, 3.0],
            [2.0, -1.0, 10.0, -1.0],
            [0.0, 3.0, -1.0, 8.0]
        ];
        let b = array![6.0, 25.0, -11.0, 15.0];
        let x = solve(&a, &b).unwrap();
        let r = a.dot(&x) - &b;
        assert!(r.iter().all(|v| v.abs() < 1e-10), "residual {r}");
    }

    #[test]
    fn test_singular_rejected() {
        let a = array![[1.0, 2.0], [2.0, 4.0]];
        assert!(matches!(
            solve(&a, &array![1.0, 2.0]),
            Err(KernelError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let a = Array2::<f64>::eye(2);
        assert!(matches!(
            solve(&a, &array![1.0, 2.0, 3.0]),
            Err(KernelError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_non_square_is_dimension_mismatch() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(matches!(
            solve(&a, &array![1.0, 2.0]),
            Err(KernelError::DimensionMismatch(_))
        ));
    }
}
