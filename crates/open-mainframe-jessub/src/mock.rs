//! Mock submitter for environments without the transfer library.

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use tracing::info;

use crate::outcome::{OutcomeKind, SubmissionOutcome, SubmitContext};
use crate::port::{preflight, SubmissionPort};
use crate::retcode;

const TAG: &str = "[MOCK] ";

/// Accepts every well-formed job file after a simulated delay. Nothing is
/// sent anywhere.
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
}

impl MockSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl SubmissionPort for MockSubmitter {
    fn submit(&self, job_file: &Path, ctx: &SubmitContext) -> SubmissionOutcome {
        if let Err(outcome) = preflight(job_file, TAG) {
            return outcome;
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let job_number = format!("JOB{}", Local::now().format("%H%M%S"));
        let file_name = job_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(user = ctx.user_label(), %job_number, file = %file_name, "mock submission");

        SubmissionOutcome {
            kind: OutcomeKind::Submitted,
            success: true,
            message: format!(
                "{TAG}JCL was not submitted to the mainframe.\n\
                 Job file: {file_name}\n\
                 Simulated JOB: {job_number}"
            ),
            return_code: retcode::OK.to_string(),
            job_number,
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_accepts_job() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PYBCSD2T_20260101_120000.jcl");
        std::fs::write(&path, "//PYBCSD2T JOB\n").unwrap();

        let mock = MockSubmitter::new(Duration::ZERO);
        let out = mock.submit(&path, &SubmitContext::for_user("E38235"));
        assert!(out.success);
        assert_eq!(out.return_code, "00");
        assert!(out.job_number.starts_with("JOB"));
        assert_eq!(out.job_number.len(), 9);
        assert!(out.message.starts_with("[MOCK] "));
        assert!(out.message.contains("PYBCSD2T_20260101_120000.jcl"));
    }

    #[test]
    fn test_mock_checks_file() {
        let mock = MockSubmitter::new(Duration::ZERO);
        let empty = tempfile::NamedTempFile::new().unwrap();
        let out = mock.submit(empty.path(), &SubmitContext::default());
        assert_eq!(out.kind, OutcomeKind::EmptyFile);
        assert_eq!(out.return_code, "A0");
        assert!(out.message.starts_with("[MOCK] "));

        let out = mock.submit(Path::new("/no/such/file.jcl"), &SubmitContext::default());
        assert_eq!(out.return_code, "82");
    }
}
