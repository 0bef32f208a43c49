// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Property-Based Tests (proptest) for linviz-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for linviz-types using proptest.
//!
//! Covers: matrix conversion invariants, protocol request parsing,
//! configuration serialization roundtrip.

use linviz_types::config::KernelConfig;
use linviz_types::matrix::{ensure_square, matrix_from_rows, matrix_to_rows};
use linviz_types::protocol::{JobRequest, Operation};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..8, 1usize..8).prop_flat_map(|(m, n)| {
        prop::collection::vec(prop::collection::vec(-1e6f64..1e6, n), m)
    })
}

/// Integer-valued entries, so JSON text roundtrips are exact.
fn int_rows_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..6, 1usize..6).prop_flat_map(|(m, n)| {
        let entry = (-1000i32..1000).prop_map(f64::from);
        prop::collection::vec(prop::collection::vec(entry, n), m)
    })
}

// ── Matrix Conversion Invariants ─────────────────────────────────────

proptest! {
    /// Shape follows the rows, and conversion back is lossless.
    #[test]
    fn rows_roundtrip_preserves_shape_and_values(rows in rows_strategy()) {
        let m = matrix_from_rows(&rows).unwrap();
        prop_assert_eq!(m.dim(), (rows.len(), rows[0].len()));
        prop_assert_eq!(matrix_to_rows(&m), rows);
    }

    /// Square check agrees with the row/column counts.
    #[test]
    fn ensure_square_matches_dims(rows in rows_strategy()) {
        let m = matrix_from_rows(&rows).unwrap();
        let square = rows.len() == rows[0].len();
        prop_assert_eq!(ensure_square(&m).is_ok(), square);
    }

    /// Dropping the last entry of any row after the first makes the input ragged.
    #[test]
    fn ragged_input_always_rejected(rows in rows_strategy(), pick in 0usize..8) {
        prop_assume!(rows[0].len() > 1 && rows.len() > 1);
        let mut rows = rows;
        let idx = 1 + pick % (rows.len() - 1);
        rows[idx].pop();
        prop_assert!(matrix_from_rows(&rows).is_err());
    }
}

// ── Protocol Parsing ─────────────────────────────────────────────────

proptest! {
    /// Every known operation survives a request JSON roundtrip.
    #[test]
    fn request_roundtrip(idx in 0usize..9, id in any::<i64>(), rows in int_rows_strategy()) {
        let op = Operation::ALL[idx];
        let req = JobRequest::new(id, op, rows);
        let json = serde_json::to_string(&req).unwrap();
        let back: JobRequest = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.operation.parse::<Operation>().unwrap(), op);
        prop_assert_eq!(back, req);
    }

    /// Arbitrary lowercase words that are not operation tags are rejected.
    #[test]
    fn unknown_tags_rejected(tag in "[a-z]{1,12}") {
        let known = Operation::ALL.iter().any(|op| op.as_str() == tag);
        prop_assert_eq!(tag.parse::<Operation>().is_ok(), known);
    }
}

// ── Config Roundtrip ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn config_roundtrip(
        enabled in any::<bool>(),
        interval in 0u64..10_000,
        iterations in 1usize..10_000,
        timeout in 1u64..1_000_000,
    ) {
        let mut cfg = KernelConfig::default();
        cfg.progress.enabled = enabled;
        cfg.progress.min_interval_ms = interval;
        cfg.eigen.max_iterations = iterations;
        cfg.worker.reply_timeout_ms = timeout;
        let json = serde_json::to_string(&cfg).unwrap();
        let back = KernelConfig::from_json(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}
