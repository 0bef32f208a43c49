// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Compute
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
pub mod dispatch;
pub mod throttle;
pub mod worker;

pub use dispatch::{decode_request_line, dispatch, dispatch_collect};
pub use worker::ComputeWorker;
