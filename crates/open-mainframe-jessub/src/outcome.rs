//! Submission outcomes and the caller context that accompanies a submission.

use serde::{Deserialize, Serialize};

use crate::retcode;

/// What happened to a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The remote side accepted the job (return code `00`).
    Submitted,
    /// The remote side answered with a failure return code.
    Rejected,
    /// The job file does not exist; nothing was sent.
    FileMissing,
    /// The job file is empty; nothing was sent.
    EmptyFile,
    /// The job file exists but cannot be read or passed on; nothing was sent.
    FileInaccessible,
    /// The transfer primitive is not installed.
    TransportUnavailable,
    /// The transfer primitive cannot be loaded by this process.
    Incompatible,
    /// The transfer primitive failed without producing a reply.
    TransportFault,
}

impl OutcomeKind {
    /// Whether the failure happened before anything reached the remote side.
    pub fn is_local(self) -> bool {
        matches!(
            self,
            Self::FileMissing | Self::EmptyFile | Self::FileInaccessible
        )
    }

    /// Whether the failure is a transport problem rather than a remote answer.
    pub fn is_transport(self) -> bool {
        matches!(
            self,
            Self::TransportUnavailable | Self::Incompatible | Self::TransportFault
        )
    }
}

/// Result of one submission attempt. Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub kind: OutcomeKind,
    pub success: bool,
    pub message: String,
    pub return_code: String,
    /// JES job number; empty unless the job was accepted.
    pub job_number: String,
}

impl SubmissionOutcome {
    /// Interpret a reply from the transfer primitive.
    ///
    /// The return-code field decides: `00` is success whatever the raw call
    /// status; anything else is a failure carrying the code's description and
    /// the primitive's own message.
    pub fn from_reply(return_code: &str, job_number: &str, reply: &str) -> Self {
        let return_code = return_code.trim();
        let job_number = job_number.trim();

        if return_code == retcode::OK {
            let mut message = String::from("JCL submitted successfully.");
            if !job_number.is_empty() {
                message.push_str("\nJOB: ");
                message.push_str(job_number);
            }
            if !reply.is_empty() {
                message.push('\n');
                message.push_str(reply);
            }
            return Self {
                kind: OutcomeKind::Submitted,
                success: true,
                message,
                return_code: return_code.to_string(),
                job_number: job_number.to_string(),
            };
        }

        let mut message = format!("JCL submission failed.\nCode: {return_code}");
        let description = retcode::describe(return_code);
        if !description.is_empty() {
            message.push('\n');
            message.push_str(&description);
        }
        if !reply.is_empty() {
            message.push_str("\n\n");
            message.push_str(reply);
        }
        Self {
            kind: OutcomeKind::Rejected,
            success: false,
            message,
            return_code: return_code.to_string(),
            job_number: String::new(),
        }
    }

    /// A failure decided before or instead of a remote reply.
    pub fn failure(kind: OutcomeKind, return_code: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            success: false,
            message: message.into(),
            return_code: return_code.to_string(),
            job_number: String::new(),
        }
    }
}

/// Who is submitting and why, passed explicitly into each submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitContext {
    /// Authenticated user on whose behalf the job is submitted.
    pub user: Option<String>,
    /// Target environment name.
    pub environment: Option<String>,
    /// Change requests the job implements.
    pub request_ids: Vec<u64>,
}

impl SubmitContext {
    pub fn for_user(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            ..Self::default()
        }
    }

    /// User name for log fields.
    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply() {
        let out = SubmissionOutcome::from_reply("00", "J1234", "");
        assert!(out.success);
        assert_eq!(out.kind, OutcomeKind::Submitted);
        assert_eq!(out.job_number, "J1234");
        assert_eq!(out.message, "JCL submitted successfully.\nJOB: J1234");
    }

    #[test]
    fn test_success_with_reply_text() {
        let out = SubmissionOutcome::from_reply("00", "", "QUEUED");
        assert!(out.success);
        assert_eq!(out.message, "JCL submitted successfully.\nQUEUED");
    }

    #[test]
    fn test_rejected_reply() {
        let out = SubmissionOutcome::from_reply("16", "J9", "NO SPACE");
        assert!(!out.success);
        assert_eq!(out.kind, OutcomeKind::Rejected);
        assert_eq!(out.return_code, "16");
        assert_eq!(out.job_number, "");
        assert_eq!(
            out.message,
            "JCL submission failed.\nCode: 16\nInsufficient space on the mainframe.\n\nNO SPACE"
        );
    }

    #[test]
    fn test_unknown_code_still_readable() {
        let out = SubmissionOutcome::from_reply("7Z", "", "");
        assert!(!out.success);
        assert!(out.message.ends_with("Unknown error (7Z)."));
    }

    #[test]
    fn test_kind_groups() {
        assert!(OutcomeKind::EmptyFile.is_local());
        assert!(!OutcomeKind::EmptyFile.is_transport());
        assert!(OutcomeKind::Incompatible.is_transport());
        assert!(!OutcomeKind::Rejected.is_local());
    }
}
