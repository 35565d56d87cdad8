//! Submission port — the single seam between job generation and the remote
//! job-entry subsystem, with its live and mock implementations selected by
//! configuration.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::live::LiveSubmitter;
use crate::mock::MockSubmitter;
use crate::outcome::{OutcomeKind, SubmissionOutcome, SubmitContext};
use crate::primitive::NativePrimitive;
use crate::record::RecordSettings;
use crate::retcode;

/// Submits a job file and reports the outcome. Blocking.
pub trait SubmissionPort: Send + Sync {
    /// Submit the job in `job_file`. Every failure is an outcome value.
    fn submit(&self, job_file: &Path, ctx: &SubmitContext) -> SubmissionOutcome;

    /// Short name for logging.
    fn name(&self) -> &'static str;
}

/// Check the job file before anything is sent: it must exist and be
/// non-empty. Returns the file size.
pub(crate) fn preflight(job_file: &Path, tag: &str) -> Result<u64, SubmissionOutcome> {
    let meta = match std::fs::metadata(job_file) {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => {
            return Err(SubmissionOutcome::failure(
                OutcomeKind::FileMissing,
                retcode::FILE_MISSING,
                format!("{tag}Job file not found: {}", job_file.display()),
            ))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return Err(SubmissionOutcome::failure(
                OutcomeKind::FileInaccessible,
                retcode::FILE_INACCESSIBLE,
                format!("{tag}Job file inaccessible: {}", job_file.display()),
            ))
        }
        Err(_) => {
            return Err(SubmissionOutcome::failure(
                OutcomeKind::FileMissing,
                retcode::FILE_MISSING,
                format!("{tag}Job file not found: {}", job_file.display()),
            ))
        }
    };
    if meta.len() == 0 {
        return Err(SubmissionOutcome::failure(
            OutcomeKind::EmptyFile,
            retcode::FILE_EMPTY,
            format!("{tag}Job file is empty: {}", job_file.display()),
        ));
    }
    Ok(meta.len())
}

// ---------------------------------------------------------------------------
//  Configuration
// ---------------------------------------------------------------------------

/// Which port implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMode {
    /// Exchange records with the native transfer library.
    Live,
    /// Simulate submissions locally.
    #[default]
    Mock,
}

/// Submission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitterConfig {
    #[serde(default)]
    pub mode: SubmitMode,
    /// Control values written into each record.
    #[serde(flatten)]
    pub record: RecordSettings,
    /// Simulated network latency of the mock, in milliseconds.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// External timeout around the whole blocking call.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            mode: SubmitMode::default(),
            record: RecordSettings::default(),
            mock_delay_ms: default_mock_delay_ms(),
            timeout_secs: None,
        }
    }
}

fn default_mock_delay_ms() -> u64 {
    1500
}

impl SubmitterConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Build the configured port.
    pub fn build_port(&self) -> Box<dyn SubmissionPort> {
        match self.mode {
            SubmitMode::Live => Box::new(LiveSubmitter::new(NativePrimitive, self.record.clone())),
            SubmitMode::Mock => {
                let delay = Duration::from_millis(self.mock_delay_ms);
                Box::new(MockSubmitter::new(delay))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_preflight_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = preflight(&dir.path().join("nope.jcl"), "").unwrap_err();
        assert_eq!(err.kind, OutcomeKind::FileMissing);
        assert_eq!(err.return_code, "82");
        // A directory is not a job file either.
        let err = preflight(dir.path(), "").unwrap_err();
        assert_eq!(err.return_code, "82");
    }

    #[test]
    fn test_preflight_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = preflight(file.path(), "").unwrap_err();
        assert_eq!(err.kind, OutcomeKind::EmptyFile);
        assert_eq!(err.return_code, "A0");
    }

    #[test]
    fn test_preflight_ok() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "//JOB1 JOB").unwrap();
        assert_eq!(preflight(file.path(), "").unwrap(), 11);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = SubmitterConfig::default();
        assert_eq!(cfg.mode, SubmitMode::Mock);
        assert_eq!(cfg.mock_delay_ms, 1500);
        assert_eq!(cfg.record.system_id, "PYB");
        assert_eq!(cfg.timeout(), None);
        assert_eq!(cfg.build_port().name(), "mock");
    }

    #[test]
    fn test_config_live_port() {
        let cfg = SubmitterConfig {
            mode: SubmitMode::Live,
            ..SubmitterConfig::default()
        };
        assert_eq!(cfg.build_port().name(), "live");
    }
}
