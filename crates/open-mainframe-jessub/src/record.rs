//! Submission record — the fixed-width parameter block exchanged with the
//! transfer primitive.
//!
//! Thirteen character fields laid end to end, each space-padded to its
//! declared width, 588 bytes in all. Characters are single-byte (ISO-8859-1);
//! encoding rejects values that do not fit instead of truncating them.

use serde::{Deserialize, Serialize};

use crate::error::JesSubmitError;
use crate::Result;

// ---------------------------------------------------------------------------
//  Layout
// ---------------------------------------------------------------------------

/// A field's position within the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
}

impl Field {
    const fn after(prev: Field, name: &'static str, width: usize) -> Field {
        Field {
            name,
            offset: prev.offset + prev.width,
            width,
        }
    }

    fn range(self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.width
    }
}

pub const VERSION: Field = Field {
    name: "version",
    offset: 0,
    width: 1,
};
pub const RETURN_CODE: Field = Field::after(VERSION, "return_code", 2);
pub const LOG_FLAG: Field = Field::after(RETURN_CODE, "log_flag", 1);
pub const REQUEST_CODE: Field = Field::after(LOG_FLAG, "request_code", 2);
pub const SYSTEM_ID: Field = Field::after(REQUEST_CODE, "system_id", 3);
pub const PERMISSION: Field = Field::after(SYSTEM_ID, "permission", 3);
pub const USER: Field = Field::after(PERMISSION, "user", 15);
pub const PASSWORD: Field = Field::after(USER, "password", 15);
pub const FILE_TYPE: Field = Field::after(PASSWORD, "file_type", 1);
pub const REMOTE_SERVER: Field = Field::after(FILE_TYPE, "remote_server", 20);
pub const LOCAL_PATH: Field = Field::after(REMOTE_SERVER, "local_path", 260);
pub const REMOTE_PATH: Field = Field::after(LOCAL_PATH, "remote_path", 260);
pub const JOB_NUMBER: Field = Field::after(REMOTE_PATH, "job_number", 5);

/// Total record length in bytes.
pub const RECORD_LEN: usize = JOB_NUMBER.offset + JOB_NUMBER.width;

/// Request code for "submit a job".
pub const REQUEST_SUBMIT: &str = "05";
/// File type for ASCII transfers.
pub const FILE_TYPE_ASCII: &str = "A";

// ---------------------------------------------------------------------------
//  Settings
// ---------------------------------------------------------------------------

/// Fixed control values written into every outbound record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSettings {
    /// Protocol version. Version 2 needs no format descriptor file.
    #[serde(default = "default_version")]
    pub version: String,
    /// Transfer log flag.
    #[serde(default = "default_log_flag")]
    pub log_flag: String,
    /// Calling system id, as registered with the transfer service.
    #[serde(default = "default_system_id")]
    pub system_id: String,
    #[serde(default = "default_permission")]
    pub permission: String,
    /// Remote server name as registered with the transfer service.
    #[serde(default = "default_remote_server")]
    pub remote_server: String,
}

impl Default for RecordSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            log_flag: default_log_flag(),
            system_id: default_system_id(),
            permission: default_permission(),
            remote_server: default_remote_server(),
        }
    }
}

fn default_version() -> String {
    "2".to_string()
}

fn default_log_flag() -> String {
    "S".to_string()
}

fn default_system_id() -> String {
    "PYB".to_string()
}

fn default_permission() -> String {
    "000".to_string()
}

fn default_remote_server() -> String {
    "ibm".to_string()
}

// ---------------------------------------------------------------------------
//  Record
// ---------------------------------------------------------------------------

/// Decoded view of a submission record, padding removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub version: String,
    pub return_code: String,
    pub log_flag: String,
    pub request_code: String,
    pub system_id: String,
    pub permission: String,
    pub user: String,
    pub password: String,
    pub file_type: String,
    pub remote_server: String,
    pub local_path: String,
    pub remote_path: String,
    pub job_number: String,
}

impl SubmissionRecord {
    /// Build the outbound record for submitting `local_path`.
    ///
    /// User and password stay blank (the transfer service authenticates the
    /// calling system), the return code starts at `"00"`, and the remote
    /// path and job number are left for the reply.
    pub fn submit(local_path: &str, settings: &RecordSettings) -> Self {
        Self {
            version: settings.version.clone(),
            return_code: crate::retcode::OK.to_string(),
            log_flag: settings.log_flag.clone(),
            request_code: REQUEST_SUBMIT.to_string(),
            system_id: settings.system_id.clone(),
            permission: settings.permission.clone(),
            file_type: FILE_TYPE_ASCII.to_string(),
            remote_server: settings.remote_server.clone(),
            local_path: local_path.to_string(),
            ..Self::default()
        }
    }

    fn fields(&self) -> [(Field, &str); 13] {
        [
            (VERSION, self.version.as_str()),
            (RETURN_CODE, self.return_code.as_str()),
            (LOG_FLAG, self.log_flag.as_str()),
            (REQUEST_CODE, self.request_code.as_str()),
            (SYSTEM_ID, self.system_id.as_str()),
            (PERMISSION, self.permission.as_str()),
            (USER, self.user.as_str()),
            (PASSWORD, self.password.as_str()),
            (FILE_TYPE, self.file_type.as_str()),
            (REMOTE_SERVER, self.remote_server.as_str()),
            (LOCAL_PATH, self.local_path.as_str()),
            (REMOTE_PATH, self.remote_path.as_str()),
            (JOB_NUMBER, self.job_number.as_str()),
        ]
    }

    /// Encode into a space-padded fixed-width buffer.
    pub fn encode(&self) -> Result<[u8; RECORD_LEN]> {
        let mut buf = [b' '; RECORD_LEN];
        for (field, value) in self.fields() {
            put_field(&mut buf, field, value)?;
        }
        Ok(buf)
    }

    /// Decode a record, stripping trailing space and NUL padding per field.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < RECORD_LEN {
            return Err(JesSubmitError::ShortRecord {
                expected: RECORD_LEN,
                actual: bytes.len(),
            });
        }
        let get = |field: Field| get_field(bytes, field);
        Ok(Self {
            version: get(VERSION),
            return_code: get(RETURN_CODE),
            log_flag: get(LOG_FLAG),
            request_code: get(REQUEST_CODE),
            system_id: get(SYSTEM_ID),
            permission: get(PERMISSION),
            user: get(USER),
            password: get(PASSWORD),
            file_type: get(FILE_TYPE),
            remote_server: get(REMOTE_SERVER),
            local_path: get(LOCAL_PATH),
            remote_path: get(REMOTE_PATH),
            job_number: get(JOB_NUMBER),
        })
    }
}

fn put_field(buf: &mut [u8; RECORD_LEN], field: Field, value: &str) -> Result<()> {
    let len = value.chars().count();
    if len > field.width {
        return Err(JesSubmitError::FieldTooWide {
            field: field.name,
            width: field.width,
            len,
        });
    }
    for (slot, ch) in buf[field.range()].iter_mut().zip(value.chars()) {
        *slot = u8::try_from(u32::from(ch)).map_err(|_| JesSubmitError::Unencodable {
            field: field.name,
            ch,
        })?;
    }
    Ok(())
}

fn get_field(bytes: &[u8], field: Field) -> String {
    let text: String = bytes[field.range()].iter().map(|&b| char::from(b)).collect();
    text.trim_end_matches([' ', '\0']).to_string()
}

/// Decode a NUL-terminated reply message buffer.
pub fn decode_message(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    let text: String = bytes[..end].iter().map(|&b| char::from(b)).collect();
    text.trim().to_string()
}
