// ─────────────────────────────────────────────────────────────────────
// LinViz Kernel — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EIGEN_ITERATIONS, DEFAULT_PROGRESS_INTERVAL_MS};
use crate::error::{KernelError, KernelResult};

/// Top-level compute kernel configuration.
/// Every section may be omitted from the JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub eigen: EigenConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// When false, no progress replies are emitted at all.
    #[serde(default = "default_progress_enabled")]
    pub enabled: bool,
    /// Minimum spacing between two progress replies of one job (default: 200).
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenConfig {
    /// Unshifted QR iterations when a request does not specify its own (default: 100).
    #[serde(default = "default_eigen_iterations")]
    pub max_iterations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Name of the background compute thread.
    #[serde(default = "default_worker_name")]
    pub name: String,
    /// Caller-side watchdog for a terminal reply.
    #[serde(default = "default_reply_timeout_ms")]
    pub reply_timeout_ms: u64,
}

fn default_progress_enabled() -> bool {
    true
}
fn default_min_interval_ms() -> u64 {
    DEFAULT_PROGRESS_INTERVAL_MS
}
fn default_eigen_iterations() -> usize {
    DEFAULT_EIGEN_ITERATIONS
}
fn default_worker_name() -> String {
    "linviz-compute".to_string()
}
fn default_reply_timeout_ms() -> u64 {
    30_000
}

impl Default for ProgressConfig {
    fn default() -> Self {
        ProgressConfig {
            enabled: default_progress_enabled(),
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

impl Default for EigenConfig {
    fn default() -> Self {
        EigenConfig {
            max_iterations: default_eigen_iterations(),
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        WorkerConfig {
            name: default_worker_name(),
            reply_timeout_ms: default_reply_timeout_ms(),
        }
    }
}

impl KernelConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> KernelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> KernelResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> KernelResult<()> {
        if self.eigen.max_iterations == 0 {
            return Err(KernelError::ConfigError(
                "eigen.max_iterations must be >= 1".to_string(),
            ));
        }
        if self.worker.name.trim().is_empty() {
            return Err(KernelError::ConfigError(
                "worker.name must not be empty".to_string(),
            ));
        }
        if self.worker.reply_timeout_ms == 0 {
            return Err(KernelError::ConfigError(
                "worker.reply_timeout_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let cfg = KernelConfig::from_json("{}").unwrap();
        assert_eq!(cfg, KernelConfig::default());
        assert!(cfg.progress.enabled);
        assert_eq!(cfg.progress.min_interval_ms, 200);
        assert_eq!(cfg.eigen.max_iterations, 100);
        assert_eq!(cfg.worker.name, "linviz-compute");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let cfg = KernelConfig::from_json(r#"{"progress": {"min_interval_ms": 50}}"#).unwrap();
        assert!(cfg.progress.enabled);
        assert_eq!(cfg.progress.min_interval_ms, 50);
        assert_eq!(cfg.eigen.max_iterations, 100);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let err = KernelConfig::from_json(r#"{"eigen": {"max_iterations": 0}}"#).unwrap_err();
        assert!(matches!(err, KernelError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = KernelConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, KernelError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let file_name = format!("linviz-config-{}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let contents = r#"{"worker": {"name": "bg", "reply_timeout_ms": 500}}"#;
        std::fs::write(&path, contents).unwrap();
        let cfg = KernelConfig::from_file(&path.to_string_lossy()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(cfg.worker.name, "bg");
        assert_eq!(cfg.worker.reply_timeout_ms, 500);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = KernelConfig::from_file("/nonexistent/linviz/config.json").unwrap_err();
        assert!(matches!(err, KernelError::Io(_)));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut cfg = KernelConfig::default();
        cfg.progress.enabled = false;
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2 = KernelConfig::from_json(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }
}
