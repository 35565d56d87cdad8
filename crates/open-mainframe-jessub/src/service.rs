//! Submission service — serializes calls into the transfer primitive and
//! applies the caller's timeout.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{info, warn};

use crate::error::JesSubmitError;
use crate::outcome::{OutcomeKind, SubmissionOutcome, SubmitContext};
use crate::port::SubmissionPort;
use crate::retcode;
use crate::spool::JobSpool;
use crate::Result;

/// At most one submission is in flight per process, whatever the number of
/// services or ports.
static SUBMISSION_SLOT: Mutex<()> = Mutex::new(());

/// Runs submissions through a [`SubmissionPort`] one at a time.
pub struct SubmissionService {
    port: Box<dyn SubmissionPort>,
}

impl SubmissionService {
    pub fn new(port: Box<dyn SubmissionPort>) -> Self {
        Self { port }
    }

    pub fn port_name(&self) -> &'static str {
        self.port.name()
    }

    /// Submit `job_file`, waiting for any submission already in flight.
    pub fn submit(&self, job_file: &Path, ctx: &SubmitContext) -> SubmissionOutcome {
        // A panic in an earlier submission leaves nothing to repair.
        let _slot = SUBMISSION_SLOT
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        info!(
            port = self.port.name(),
            user = ctx.user_label(),
            environment = ctx.environment.as_deref().unwrap_or("-"),
            requests = ?ctx.request_ids,
            file = %job_file.display(),
            "submitting job"
        );
        let outcome = self.port.submit(job_file, ctx);
        info!(
            success = outcome.success,
            return_code = %outcome.return_code,
            job_number = %outcome.job_number,
            "submission finished"
        );
        outcome
    }

    /// Spool `text` under `job_name` and submit the written file.
    pub fn spool_and_submit(
        &self,
        spool: &JobSpool,
        job_name: &str,
        text: &str,
        ctx: &SubmitContext,
    ) -> Result<(PathBuf, SubmissionOutcome)> {
        let path = spool.write(job_name, text)?;
        let outcome = self.submit(&path, ctx);
        Ok((path, outcome))
    }

    /// Submit on the blocking pool and give up waiting after `limit`.
    ///
    /// On timeout the call keeps running in the background and its result is
    /// discarded; the job may still have been accepted, so the caller gets
    /// [`JesSubmitError::OutcomeUnknown`] rather than a failure outcome.
    pub async fn submit_with_timeout(
        self: Arc<Self>,
        job_file: PathBuf,
        ctx: SubmitContext,
        limit: Duration,
    ) -> Result<SubmissionOutcome> {
        let task = tokio::task::spawn_blocking(move || self.submit(&job_file, &ctx));
        match tokio::time::timeout(limit, task).await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(join)) => {
                warn!(error = %join, "submission task failed");
                Ok(SubmissionOutcome::failure(
                    OutcomeKind::TransportFault,
                    retcode::TRANSPORT_FAULT,
                    format!("Transport error: {join}"),
                ))
            }
            Err(_) => {
                warn!(?limit, "no reply from submission within timeout");
                Err(JesSubmitError::OutcomeUnknown(limit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records the peak number of concurrent calls.
    struct Counting {
        active: AtomicUsize,
        peak: Arc<AtomicUsize>,
        hold: Duration,
    }

    impl SubmissionPort for Counting {
        fn submit(&self, _job_file: &Path, _ctx: &SubmitContext) -> SubmissionOutcome {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            std::thread::sleep(self.hold);
            self.active.fetch_sub(1, Ordering::SeqCst);
            SubmissionOutcome::from_reply("00", "J1", "")
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    fn counting(hold: Duration) -> (SubmissionService, Arc<AtomicUsize>) {
        let peak = Arc::new(AtomicUsize::new(0));
        let port = Counting {
            active: AtomicUsize::new(0),
            peak: peak.clone(),
            hold,
        };
        (SubmissionService::new(Box::new(port)), peak)
    }

    #[test]
    fn test_submissions_never_overlap() {
        let (service, peak) = counting(Duration::from_millis(20));
        let service = Arc::new(service);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = service.clone();
                std::thread::spawn(move || {
                    service.submit(Path::new("job.jcl"), &SubmitContext::default())
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().success);
        }
        assert_eq!(peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeout_reports_unknown_outcome() {
        let (service, _) = counting(Duration::from_millis(500));
        let result = Arc::new(service)
            .submit_with_timeout(
                PathBuf::from("job.jcl"),
                SubmitContext::default(),
                Duration::from_millis(20),
            )
            .await;
        assert!(matches!(result, Err(JesSubmitError::OutcomeUnknown(_))));
    }

    #[tokio::test]
    async fn test_reply_within_timeout() {
        let (service, _) = counting(Duration::ZERO);
        let outcome = Arc::new(service)
            .submit_with_timeout(
                PathBuf::from("job.jcl"),
                SubmitContext::default(),
                Duration::from_secs(5),
            )
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.job_number, "J1");
    }
}
