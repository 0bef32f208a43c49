// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Job Dispatcher
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Routes a [`JobRequest`] to its routine and turns the outcome into replies.
//!
//! Every request produces exactly one terminal reply. Routine failures become
//! error replies; nothing escapes as a panic or an `Err`.

use linviz_math::determinant::determinant_with_progress;
use linviz_math::eigen::eigenvalues_with_progress;
use linviz_math::elimination::{reduced_row_echelon_with_progress, row_echelon_with_progress};
use linviz_math::inverse::inverse_with_progress;
use linviz_math::lu::lu_with_progress;
use linviz_math::progress::ProgressSink;
use linviz_math::qr::qr_with_progress;
use linviz_math::solve::solve_with_progress;
use linviz_math::transform::transform_vectors_with_progress;
use linviz_types::config::KernelConfig;
use linviz_types::error::{KernelError, KernelResult};
use linviz_types::matrix::{all_finite, matrix_from_rows, matrix_to_rows, vector_from_slice};
use linviz_types::protocol::{JobReply, JobRequest, JobResult, Operation};
use ndarray::{Array1, Array2};
use serde_json::Value;

use crate::throttle::ThrottledProgress;

/// Runs one job, sending progress replies and finally the terminal reply to `send`.
pub fn dispatch(config: &KernelConfig, request: &JobRequest, send: &mut dyn FnMut(JobReply)) {
    log::debug!("job {}: {}", request.id, request.operation);

    let outcome = {
        let id = &request.id;
        let operation = &request.operation;
        let mut sink = ThrottledProgress::new(&config.progress, |event| {
            send(JobReply::progress(id.clone(), operation.clone(), event))
        });
        execute(config, request, &mut sink)
    };

    let reply = match outcome {
        Ok(result) => JobReply::result(request.id.clone(), request.operation.clone(), result),
        Err(err) => {
            log::warn!("job {} ({}) failed: {err}", request.id, request.operation);
            JobReply::error(
                request.id.clone(),
                request.operation.clone(),
                err.to_string(),
            )
        }
    };
    send(reply);
}

/// Collects all replies of one job, terminal reply last.
pub fn dispatch_collect(config: &KernelConfig, request: &JobRequest) -> Vec<JobReply> {
    let mut replies = Vec::new();
    dispatch(config, request, &mut |reply| replies.push(reply));
    replies
}

/// Decodes one request line.
///
/// A line that is not a valid request becomes the terminal error reply for it.
/// That reply keeps the line's `id` and `operation` when the line is a JSON
/// object carrying them, so the caller can still correlate it.
pub fn decode_request_line(line: &str) -> Result<JobRequest, JobReply> {
    let value: Value = serde_json::from_str(line).map_err(|err| {
        JobReply::error(Value::Null, "", format!("malformed request: {err}"))
    })?;

    let id = value.get("id").cloned().unwrap_or_default();
    let operation = value
        .get("operation")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    serde_json::from_value(value)
        .map_err(|err| JobReply::error(id, operation, format!("malformed request: {err}")))
}

/// Runs the routine for `request` and shapes its output.
pub fn execute(
    config: &KernelConfig,
    request: &JobRequest,
    progress: &mut dyn ProgressSink,
) -> KernelResult<JobResult> {
    let op: Operation = request.operation.parse()?;
    let a = matrix_from_rows(&request.matrix)?;

    let result = match op {
        Operation::Ref => {
            let m = row_echelon_with_progress(&a, progress);
            JobResult::Matrix(finite_rows(&m, "ref")?)
        }
        Operation::Rref => {
            let m = reduced_row_echelon_with_progress(&a, progress);
            JobResult::Matrix(finite_rows(&m, "rref")?)
        }
        Operation::Determinant => {
            let det = determinant_with_progress(&a, progress)?;
            if !det.is_finite() {
                return Err(KernelError::NonFiniteResult("determinant"));
            }
            JobResult::Scalar(det)
        }
        Operation::Inverse => {
            let m = inverse_with_progress(&a, progress)?;
            JobResult::Matrix(finite_rows(&m, "inverse")?)
        }
        Operation::Eigenvalues => {
            let iterations = request
                .max_iterations
                .unwrap_or(config.eigen.max_iterations);
            if iterations == 0 {
                return Err(KernelError::InvalidRequest("max_iterations must be >= 1".to_string()));
            }
            let values = eigenvalues_with_progress(&a, iterations, progress)?;
            JobResult::Vector(finite_vector(&values, "eigenvalues")?)
        }
        Operation::Lu => {
            let f = lu_with_progress(&a, progress)?;
            JobResult::Lu {
                l: finite_rows(&f.l, "lu")?,
                u: finite_rows(&f.u, "lu")?,
            }
        }
        Operation::Qr => {
            let f = qr_with_progress(&a, progress);
            JobResult::Qr {
                q: finite_rows(&f.q, "qr")?,
                r: finite_rows(&f.r, "qr")?,
            }
        }
        Operation::Transform => {
            let vectors = transform_inputs(request)?;
            let mapped = transform_vectors_with_progress(&a, &vectors, progress)?;
            let rows = mapped
                .iter()
                .map(|v| finite_vector(v, "transform"))
                .collect::<KernelResult<Vec<_>>>()?;
            JobResult::Matrix(rows)
        }
        Operation::Solve => {
            let rhs = request.vector.as_deref().ok_or_else(|| {
                KernelError::DimensionMismatch(
                    "solve requires a right-hand side `vector`".to_string(),
                )
            })?;
            let b = vector_from_slice(rhs)?;
            let x = solve_with_progress(&a, &b, progress)?;
            JobResult::Vector(finite_vector(&x, "solve")?)
        }
    };

    Ok(result)
}

fn transform_inputs(request: &JobRequest) -> KernelResult<Vec<Array1<f64>>> {
    match (&request.vectors, &request.vector) {
        (Some(vectors), _) => vectors.iter().map(|v| vector_from_slice(v)).collect(),
        (None, Some(vector)) => Ok(vec![vector_from_slice(vector)?]),
        (None, None) => Err(KernelError::DimensionMismatch(
            "transform requires `vectors` or `vector`".to_string(),
        )),
    }
}

fn finite_rows(m: &Array2<f64>, what: &'static str) -> KernelResult<Vec<Vec<f64>>> {
    if !all_finite(m) {
        return Err(KernelError::NonFiniteResult(what));
    }
    Ok(matrix_to_rows(m))
}

fn finite_vector(v: &Array1<f64>, what: &'static str) -> KernelResult<Vec<f64>> {
    if !v.iter().all(|x| x.is_finite()) {
        return Err(KernelError::NonFiniteResult(what));
    }
    Ok(v.to_vec())
}
