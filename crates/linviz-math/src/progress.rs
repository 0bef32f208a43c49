// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Progress
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Progress hooks injected into the long-running routines.
//!
//! Routines call [`ProgressSink::report`] once per outer step (column,
//! iteration, row). Sinks are free to drop events; throttling lives in the
//! dispatcher, not here.

/// One progress snapshot: `step` of `total` within `stage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub stage: &'static str,
    pub step: usize,
    pub total: usize,
}

pub trait ProgressSink {
    fn report(&mut self, update: ProgressUpdate);
}

impl<F: FnMut(ProgressUpdate)> ProgressSink for F {
    fn report(&mut self, update: ProgressUpdate) {
        self(update)
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _update: ProgressUpdate) {}
}

#[inline]
pub(crate) fn report(sink: &mut dyn ProgressSink, stage: &'static str, step: usize, total: usize) {
    sink.report(ProgressUpdate { stage, step, total });
}
