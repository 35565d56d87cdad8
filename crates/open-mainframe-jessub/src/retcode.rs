//! Return codes of the transfer primitive and their descriptions.

use std::borrow::Cow;

/// Return code of an accepted submission.
pub const OK: &str = "00";
/// Local job file missing or unreadable.
pub const FILE_MISSING: &str = "82";
/// Local job file inaccessible.
pub const FILE_INACCESSIBLE: &str = "90";
/// Local job file empty.
pub const FILE_EMPTY: &str = "A0";
/// Transfer primitive not found.
pub const TRANSPORT_UNAVAILABLE: &str = "99";
/// Transfer primitive cannot be loaded by this process.
pub const TRANSPORT_INCOMPATIBLE: &str = "98";
/// Any other fault while calling the transfer primitive.
pub const TRANSPORT_FAULT: &str = "97";

const DESCRIPTIONS: &[(&str, &str)] = &[
    (OK, ""),
    ("01", "Generic failure. Check the transfer log."),
    ("03", "Transfer not authorized for this system."),
    ("04", "File in use by another process."),
    ("11", "Transfer timed out."),
    ("14", "Server or directory not registered."),
    ("16", "Insufficient space on the mainframe."),
    ("18", "JES service unavailable."),
    (FILE_MISSING, "Failed to read the local job file."),
    (FILE_INACCESSIBLE, "Local job file inaccessible or permission denied."),
    (FILE_EMPTY, "Local job file is empty (0 bytes)."),
];

/// Describe a return code. `"00"` has an empty description; unlisted codes
/// get a generic one naming the code.
pub fn describe(code: &str) -> Cow<'static, str> {
    match DESCRIPTIONS.iter().find(|(c, _)| *c == code) {
        Some((_, text)) => Cow::Borrowed(*text),
        None => Cow::Owned(format!("Unknown error ({code}).")),
    }
}

/// Whether `code` is one of the documented return codes.
pub fn is_known(code: &str) -> bool {
    DESCRIPTIONS.iter().any(|(c, _)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_text() {
        assert_eq!(describe("00"), "");
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(describe("03"), "Transfer not authorized for this system.");
        assert_eq!(describe("A0"), "Local job file is empty (0 bytes).");
        assert!(is_known("18"));
        for code in ["01", "03", "04", "11", "14", "16", "18", "82", "90", "A0"] {
            assert!(!describe(code).is_empty(), "{code}");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe("42"), "Unknown error (42).");
        assert_eq!(describe(""), "Unknown error ().");
        assert!(!is_known("42"));
    }
}
