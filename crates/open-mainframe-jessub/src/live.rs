//! Live submitter — packs the submission record, calls the transfer
//! primitive, and interprets the reply.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::outcome::{OutcomeKind, SubmissionOutcome, SubmitContext};
use crate::port::{preflight, SubmissionPort};
use crate::primitive::{NativePrimitive, TransferPrimitive, TransportError, MESSAGE_LEN};
use crate::record::{decode_message, RecordSettings, SubmissionRecord};
use crate::retcode;

/// Submits through a [`TransferPrimitive`].
pub struct LiveSubmitter<P = NativePrimitive> {
    primitive: P,
    settings: RecordSettings,
}

impl<P: TransferPrimitive> LiveSubmitter<P> {
    pub fn new(primitive: P, settings: RecordSettings) -> Self {
        Self { primitive, settings }
    }

    fn exchange(&self, job_file: &Path) -> SubmissionOutcome {
        let path = job_file.to_string_lossy();
        let mut record = match SubmissionRecord::submit(&path, &self.settings).encode() {
            Ok(record) => record,
            Err(e) => {
                return SubmissionOutcome::failure(
                    OutcomeKind::FileInaccessible,
                    retcode::FILE_INACCESSIBLE,
                    format!("Job file path cannot be passed to the transfer service: {e}"),
                )
            }
        };
        let mut message = [0u8; MESSAGE_LEN];

        let result = catch_unwind(AssertUnwindSafe(|| {
            self.primitive.exchange(&mut record, &mut message)
        }));
        let status = match result {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => return transport_outcome(e),
            Err(_) => {
                let panicked = TransportError::Fault("transfer call panicked".into());
                return transport_outcome(panicked);
            }
        };

        let reply = match SubmissionRecord::decode(&record) {
            Ok(reply) => reply,
            Err(e) => return transport_outcome(TransportError::Fault(e.to_string())),
        };
        let text = decode_message(&message);
        debug!(
            status,
            return_code = %reply.return_code,
            job_number = %reply.job_number,
            reply = %text,
            "transfer reply"
        );
        if status != 0 && reply.return_code.trim() == retcode::OK {
            warn!(status, "non-zero call status with return code 00, treating as submitted");
        }
        SubmissionOutcome::from_reply(&reply.return_code, &reply.job_number, &text)
    }
}

fn transport_outcome(error: TransportError) -> SubmissionOutcome {
    let (kind, code) = match &error {
        TransportError::Unavailable(_) => {
            (OutcomeKind::TransportUnavailable, retcode::TRANSPORT_UNAVAILABLE)
        }
        TransportError::Incompatible(_) => {
            (OutcomeKind::Incompatible, retcode::TRANSPORT_INCOMPATIBLE)
        }
        TransportError::Fault(_) => (OutcomeKind::TransportFault, retcode::TRANSPORT_FAULT),
    };
    warn!(%error, code, "transfer primitive unusable");
    SubmissionOutcome::failure(kind, code, format!("Transport error: {error}"))
}

impl<P: TransferPrimitive> SubmissionPort for LiveSubmitter<P> {
    fn submit(&self, job_file: &Path, ctx: &SubmitContext) -> SubmissionOutcome {
        if let Err(outcome) = preflight(job_file, "") {
            return outcome;
        }
        debug!(user = ctx.user_label(), file = %job_file.display(), "submitting job file");
        self.exchange(job_file)
    }

    fn name(&self) -> &'static str {
        "live"
    }
}
