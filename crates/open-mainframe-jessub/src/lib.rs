//! # JES Job Submission
//!
//! Hands generated job files to the remote job-entry subsystem through a
//! native transfer primitive that exchanges a single 588-byte fixed-width
//! record.
//!
//! ## Features
//!
//! - **Record codec** — [`SubmissionRecord`] encodes and decodes the 13-field
//!   transfer record with space padding and single-byte text.
//! - **Outcomes** — every submission ends in a [`SubmissionOutcome`]; the
//!   record's return code alone decides success.
//! - **Return codes** — [`describe`] gives a readable text for any code.
//! - **Ports** — [`LiveSubmitter`] calls the primitive, [`MockSubmitter`]
//!   simulates it; both sit behind [`SubmissionPort`].
//! - **Serialization** — [`SubmissionService`] allows one call in flight per
//!   process and supports an external timeout.
//! - **Spool** — [`JobSpool`] writes job files named after the job and time.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use open_mainframe_jessub::{
//!     JobSpool, LineEnding, MockSubmitter, SubmissionService, SubmitContext,
//! };
//!
//! let dir = tempfile::tempdir().unwrap();
//! let spool = JobSpool::new(dir.path(), LineEnding::Lf);
//! let service = SubmissionService::new(Box::new(MockSubmitter::new(Duration::ZERO)));
//!
//! let ctx = SubmitContext::for_user("E38235");
//! let (path, outcome) = service
//!     .spool_and_submit(&spool, "PYBCSD2T", "//PYBCSD2T JOB\n", &ctx)
//!     .unwrap();
//! assert!(path.exists());
//! assert!(outcome.success);
//! ```

pub mod error;
pub mod live;
pub mod mock;
pub mod outcome;
pub mod port;
pub mod primitive;
pub mod record;
pub mod retcode;
pub mod service;
pub mod spool;

pub use error::JesSubmitError;
pub use live::LiveSubmitter;
pub use mock::MockSubmitter;
pub use outcome::{OutcomeKind, SubmissionOutcome, SubmitContext};
pub use port::{SubmissionPort, SubmitMode, SubmitterConfig};
pub use primitive::{NativePrimitive, TransferPrimitive, TransportError, MESSAGE_LEN};
pub use record::{decode_message, RecordSettings, SubmissionRecord, RECORD_LEN};
pub use retcode::describe;
pub use service::SubmissionService;
pub use spool::{JobSpool, LineEnding, SpoolConfig};

/// Result type for submission operations.
pub type Result<T> = std::result::Result<T, JesSubmitError>;
