// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dense linear-algebra routines for the compute worker, plus closed-form
//! hyperplane intersections for the geometry layer.
//!
//! Every routine takes its input by reference and returns a fresh result.

pub mod determinant;
pub mod eigen;
pub mod elimination;
pub mod hyperplane;
pub mod inverse;
pub mod lu;
pub mod progress;
pub mod qr;
pub mod solve;
pub mod transform;
