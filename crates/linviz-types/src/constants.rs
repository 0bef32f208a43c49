// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Pivot magnitude below which a column is treated as rank-deficient during
/// elimination, and below which `inverse`/`solve` report a singular matrix.
pub const PIVOT_EPS: f64 = 1e-10;

/// Norm below which a Householder column or reflector is skipped.
pub const HOUSEHOLDER_EPS: f64 = 1e-10;

/// Cross-product length / determinant magnitude below which planes are
/// treated as parallel or not meeting in a unique point.
pub const PARALLEL_EPS: f64 = 1e-9;

/// Denominator magnitude below which the two-plane point formula is degenerate.
pub const DENOMINATOR_EPS: f64 = 1e-12;

/// Default number of unshifted QR iterations for eigenvalues.
pub const DEFAULT_EIGEN_ITERATIONS: usize = 100;

/// Default minimum spacing between two progress events of one job.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 200;
