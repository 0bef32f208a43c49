// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Throttled Progress
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Self-throttling progress sink.
//!
//! Wraps an emitter and forwards at most one event per `min_interval`.
//! The first event of a job is always forwarded. Dropped events are lost;
//! progress is informational only.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use linviz_math::progress::{ProgressSink, ProgressUpdate};
use linviz_types::config::ProgressConfig;
use linviz_types::protocol::ProgressEvent;

pub struct ThrottledProgress<F>
where
    F: FnMut(ProgressEvent),
{
    emit: F,
    enabled: bool,
    min_interval: Duration,
    last_emit: Option<Instant>,
    emitted: usize,
}

impl<F> ThrottledProgress<F>
where
    F: FnMut(ProgressEvent),
{
    pub fn new(config: &ProgressConfig, emit: F) -> Self {
        ThrottledProgress {
            emit,
            enabled: config.enabled,
            min_interval: Duration::from_millis(config.min_interval_ms),
            last_emit: None,
            emitted: 0,
        }
    }

    /// Number of events forwarded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<F> ProgressSink for ThrottledProgress<F>
where
    F: FnMut(ProgressEvent),
{
    fn report(&mut self, update: ProgressUpdate) {
        if !self.enabled {
            return;
        }
        let now = Instant::now();
        if let Some(last) = self.last_emit {
            if now.duration_since(last) < self.min_interval {
                return;
            }
        }
        self.last_emit = Some(now);
        self.emitted += 1;
        (self.emit)(ProgressEvent {
            stage: update.stage.to_string(),
            step: update.step,
            total: update.total,
            timestamp: epoch_millis(),
        });
    }
}

/// Milliseconds since the UNIX epoch, 0 if the clock is before it.
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(step: usize) -> ProgressUpdate {
        ProgressUpdate {
            stage: "lu",
            step,
            total: 10,
        }
    }

    fn config(enabled: bool, min_interval_ms: u64) -> ProgressConfig {
        ProgressConfig {
            enabled,
            min_interval_ms,
        }
    }

    #[test]
    fn test_first_event_always_emitted() {
        let mut seen = Vec::new();
        let mut sink = ThrottledProgress::new(&config(true, 60_000), |e| seen.push(e));
        for step in 0..10 {
            sink.report(update(step));
        }
        assert_eq!(sink.emitted(), 1);
        drop(sink);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].step, 0);
        assert_eq!(seen[0].stage, "lu");
        assert_eq!(seen[0].total, 10);
    }

    #[test]
    fn test_zero_interval_forwards_everything() {
        let mut seen = Vec::new();
        let mut sink = ThrottledProgress::new(&config(true, 0), |e| seen.push(e.step));
        for step in 0..5 {
            sink.report(update(step));
        }
        drop(sink);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_disabled_emits_nothing() {
        let mut count = 0;
        let mut sink = ThrottledProgress::new(&config(false, 0), |_| count += 1);
        sink.report(update(0));
        sink.report(update(1));
        drop(sink);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_interval_elapsed_emits_again() {
        let mut seen = Vec::new();
        let mut sink = ThrottledProgress::new(&config(true, 5), |e| seen.push(e.step));
        sink.report(update(0));
        std::thread::sleep(Duration::from_millis(20));
        sink.report(update(1));
        drop(sink);
        assert_eq!(seen, vec![0, 1]);
    }

    #[test]
    fn test_timestamp_is_epoch_millis() {
        let before = epoch_millis();
        let mut stamp = 0;
        let mut sink = ThrottledProgress::new(&config(true, 0), |e| stamp = e.timestamp);
        sink.report(update(0));
        drop(sink);
        assert!(stamp >= before);
        // 2020-01-01T00:00:00Z
        assert!(stamp > 1_577_836_800_000);
    }
}
