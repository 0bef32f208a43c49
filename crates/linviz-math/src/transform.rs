// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Transform
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Map vectors through a matrix: `result[i] = sum_j A[i][j] * v[j]`.

use linviz_types::error::{KernelError, KernelResult};
use ndarray::{Array1, Array2};

use crate::progress::{report, NoProgress, ProgressSink};

pub fn transform_vectors(
    a: &Array2<f64>,
    vectors: &[Array1<f64>],
) -> KernelResult<Vec<Array1<f64>>> {
    transform_vectors_with_progress(a, vectors, &mut NoProgress)
}

pub fn transform_vectors_with_progress(
    a: &Array2<f64>,
    vectors: &[Array1<f64>],
    progress: &mut dyn ProgressSink,
) -> KernelResult<Vec<Array1<f64>>> {
    let cols = a.ncols();
    if let Some((idx, v)) = vectors.iter().enumerate().find(|(_, v)| v.len() != cols) {
        return Err(KernelError::DimensionMismatch(format!(
            "vector {idx} has length {}, matrix has {cols} columns",
            v.len()
        )));
    }

    let total = vectors.len();
    Ok(vectors
        .iter()
        .enumerate()
        .map(|(i, v)| {
            report(progress, "transform", i, total);
            a.dot(v)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rotation_90() {
        let rot = array![[0.0, -1.0], [1.0, 0.0]];
        let out = transform_vectors(&rot, &[array![1.0, 0.0], array![0.0, 2.0]]).unwrap();
        assert_eq!(out, vec![array![0.0, 1.0], array![-2.0, 0.0]]);
    }

    #[test]
    fn test_rectangular_projection() {
        let proj = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let out = transform_vectors(&proj, &[array![3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(out[0], array![3.0, 4.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let a = Array2::<f64>::eye(3);
        let err = transform_vectors(&a, &[array![1.0, 2.0, 3.0], array![1.0]]).unwrap_err();
        match err {
            KernelError::DimensionMismatch(msg) => assert!(msg.contains("vector 1"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_list() {
        let a = Array2::<f64>::eye(2);
        assert!(transform_vectors(&a, &[]).unwrap().is_empty());
    }
}
