//! Submission error types.
//!
//! Submission failures are reported as [`SubmissionOutcome`] values; these
//! errors cover record encoding, job file spooling, and timed-out calls.
//!
//! [`SubmissionOutcome`]: crate::outcome::SubmissionOutcome

use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced around a submission.
#[derive(Debug, Error, Diagnostic)]
pub enum JesSubmitError {
    /// A record field value does not fit its declared width.
    #[error("record field {field} is {len} characters, wider than {width}")]
    #[diagnostic(code(jessub::field_too_wide))]
    FieldTooWide {
        field: &'static str,
        width: usize,
        len: usize,
    },

    /// A record field contains a character outside the single-byte code page.
    #[error("record field {field} contains {ch:?}, which has no single-byte encoding")]
    #[diagnostic(code(jessub::unencodable))]
    Unencodable { field: &'static str, ch: char },

    /// A reply buffer is shorter than the record layout.
    #[error("record is {actual} bytes, expected {expected}")]
    #[diagnostic(code(jessub::short_record))]
    ShortRecord { expected: usize, actual: usize },

    /// The job file could not be written.
    #[error("cannot write job file {}", path.display())]
    #[diagnostic(code(jessub::spool))]
    Spool {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The call did not return within the caller's timeout. The job may or
    /// may not have been accepted.
    #[error("submission outcome unknown: no reply within {0:?}")]
    #[diagnostic(
        code(jessub::outcome_unknown),
        help("check the JES queue before submitting again; a resubmission creates a duplicate job")
    )]
    OutcomeUnknown(Duration),
}
