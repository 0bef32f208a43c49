// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Job Protocol
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Request/reply records exchanged with the compute worker.
//!
//! Every request gets exactly one terminal reply (`result` or `error`),
//! preceded by zero or more best-effort `progress` replies carrying the same `id`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::KernelError;

/// Closed set of operations the dispatcher can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Ref,
    Rref,
    Determinant,
    Inverse,
    Eigenvalues,
    Lu,
    Qr,
    Transform,
    Solve,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Ref,
        Operation::Rref,
        Operation::Determinant,
        Operation::Inverse,
        Operation::Eigenvalues,
        Operation::Lu,
        Operation::Qr,
        Operation::Transform,
        Operation::Solve,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Ref => "ref",
            Operation::Rref => "rref",
            Operation::Determinant => "determinant",
            Operation::Inverse => "inverse",
            Operation::Eigenvalues => "eigenvalues",
            Operation::Lu => "lu",
            Operation::Qr => "qr",
            Operation::Transform => "transform",
            Operation::Solve => "solve",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| KernelError::UnsupportedOperation(s.to_string()))
    }
}

/// A job as submitted by the caller.
///
/// `operation` stays a string on the wire so that an unknown tag can still be
/// echoed back in the error reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub id: Value,
    pub operation: String,
    pub matrix: Vec<Vec<f64>>,
    /// Right-hand side for `solve`, or a single vector for `transform`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<f64>>,
    /// Vectors mapped by `transform`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vectors: Option<Vec<Vec<f64>>>,
    /// Overrides the configured iteration count for `eigenvalues`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl JobRequest {
    pub fn new(id: impl Into<Value>, operation: Operation, matrix: Vec<Vec<f64>>) -> Self {
        JobRequest {
            id: id.into(),
            operation: operation.as_str().to_string(),
            matrix,
            vector: None,
            vectors: None,
            max_iterations: None,
        }
    }

    pub fn with_vector(mut self, vector: Vec<f64>) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn with_vectors(mut self, vectors: Vec<Vec<f64>>) -> Self {
        self.vectors = Some(vectors);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Payload of a successful reply. The shape depends on the operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobResult {
    /// `determinant`
    Scalar(f64),
    /// `eigenvalues`, `solve`
    Vector(Vec<f64>),
    /// `ref`, `rref`, `inverse`, and the list of vectors from `transform`
    Matrix(Vec<Vec<f64>>),
    Lu {
        #[serde(rename = "L")]
        l: Vec<Vec<f64>>,
        #[serde(rename = "U")]
        u: Vec<Vec<f64>>,
    },
    Qr {
        #[serde(rename = "Q")]
        q: Vec<Vec<f64>>,
        #[serde(rename = "R")]
        r: Vec<Vec<f64>>,
    },
}

/// Informational progress snapshot. Never required for correctness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: String,
    pub step: usize,
    pub total: usize,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(JobResult),
    Progress(ProgressEvent),
    Error(String),
}

/// Reply correlated to its request solely through `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobReply {
    pub id: Value,
    pub operation: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl JobReply {
    pub fn result(id: Value, operation: impl Into<String>, result: JobResult) -> Self {
        JobReply {
            id,
            operation: operation.into(),
            outcome: Outcome::Result(result),
        }
    }

    pub fn progress(id: Value, operation: impl Into<String>, event: ProgressEvent) -> Self {
        JobReply {
            id,
            operation: operation.into(),
            outcome: Outcome::Progress(event),
        }
    }

    pub fn error(id: Value, operation: impl Into<String>, message: impl Into<String>) -> Self {
        JobReply {
            id,
            operation: operation.into(),
            outcome: Outcome::Error(message.into()),
        }
    }

    /// Result and error replies end a job; progress replies do not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.outcome, Outcome::Progress(_))
    }
}
