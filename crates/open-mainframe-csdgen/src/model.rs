//! Change requests, target environments, and the tags that classify them.
//!
//! Requests and environments are supplied by the request-management side of
//! the system and are consumed read-only here. Optional fields that are absent
//! (or blank) fall back to the documented defaults at emission time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder written into job text when an environment value is missing.
pub const PLACEHOLDER: &str = "???";

// ---------------------------------------------------------------------------
//  Tags
// ---------------------------------------------------------------------------

/// The kind of CICS resource a request changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    File,
    Transaction,
    Program,
    /// BMS mapset.
    Map,
    /// Lookup table, defined to CICS as a program.
    Table,
}

impl ResourceType {
    /// Parse a resource tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "FILE" => Some(Self::File),
            "TRANSACTION" => Some(Self::Transaction),
            "PROGRAM" => Some(Self::Program),
            "MAP" | "MAPSET" => Some(Self::Map),
            "TABLE" => Some(Self::Table),
            _ => None,
        }
    }

    /// Canonical tag text.
    pub fn tag(self) -> &'static str {
        match self {
            Self::File => "FILE",
            Self::Transaction => "TRANSACTION",
            Self::Program => "PROGRAM",
            Self::Map => "MAP",
            Self::Table => "TABLE",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The DFHCSDUP command a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Define,
    Alter,
    Delete,
}

impl Operation {
    /// Parse an operation tag, case-insensitively. An absent or blank tag
    /// means `DEFINE`; an unrecognised one yields `None`.
    pub fn from_tag(tag: Option<&str>) -> Option<Self> {
        let tag = match tag.map(str::trim) {
            None | Some("") => return Some(Self::Define),
            Some(t) => t.to_ascii_uppercase(),
        };
        match tag.as_str() {
            "DEFINE" => Some(Self::Define),
            "ALTER" => Some(Self::Alter),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Command keyword as written to SYSIN.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Define => "DEFINE",
            Self::Alter => "ALTER",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How a file definition is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// VSAM file owned by the target region.
    Local,
    /// File owned by another region, reached over ISC.
    Remote,
    /// Branch-office (BNO) file family synthesized from a branch code.
    StandardPattern,
}

impl FileKind {
    /// Parse a file kind tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "LOCAL" => Some(Self::Local),
            "REMOTE" => Some(Self::Remote),
            "BNO" | "STANDARD" | "STANDARD BNO" => Some(Self::StandardPattern),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
//  Change request
// ---------------------------------------------------------------------------

/// One pending modification to a CICS resource.
///
/// Tags are kept as the text the request store supplied: the job orders
/// requests by that text, and classification parses it case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeRequest {
    /// Request number in the request store, for logging only.
    pub id: Option<u64>,
    /// Resource tag: `FILE`, `TRANSACTION`, `PROGRAM`, `MAP` or `TABLE`.
    pub resource_type: String,
    /// `DEFINE`, `ALTER` or `DELETE`; absent means `DEFINE`.
    pub operation: Option<String>,
    /// File kind tag (`LOCAL`, `REMOTE`, `BNO`); files only.
    pub file_kind: Option<String>,
    /// CSD group prefix of the owning application.
    pub css: Option<String>,
    /// Resource name, or a comma-separated list of names for deletes.
    pub names: Option<String>,
    /// Dataset name (local files) or the name of the owning environment
    /// (remote files).
    pub dataset_name: Option<String>,
    pub status: Option<String>,
    pub record_format: Option<String>,
    /// String-pool count (`STRINGS`).
    pub strings: Option<String>,
    /// Comma-separated file services, e.g. `ADD,BROWSE`.
    pub services: Option<String>,
    /// Branch code for BNO files.
    pub branch: Option<String>,
    /// Comma-separated BNO sub-type tokens (`I`, `O`, `P`, `S`, `X`).
    pub pattern_types: Option<String>,
    /// Program a transaction runs.
    pub program: Option<String>,
    pub twa_size: Option<String>,
    /// `TASKDATALOC` / `DATALOC` policy.
    pub data_location: Option<String>,
    /// Estimated executions per day, written into the transaction description.
    pub daily_executions: Option<String>,
    pub language: Option<String>,
    /// Link-edit name, written as the description of programs, mapsets and tables.
    pub link_name: Option<String>,
}

impl ChangeRequest {
    /// Create a request with only its tags set.
    pub fn new(resource_type: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            operation: Some(operation.into()),
            ..Self::default()
        }
    }

    /// Label used in log fields.
    pub fn label(&self) -> String {
        match self.id {
            Some(id) => format!("#{id}"),
            None => self.names.clone().unwrap_or_default(),
        }
    }
}

/// The value of an optional field, treating blank text as absent.
pub(crate) fn value(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// The value of an optional field, or `default` when absent.
pub(crate) fn value_or<'a>(field: &'a Option<String>, default: &'a str) -> &'a str {
    value(field).unwrap_or(default)
}

// ---------------------------------------------------------------------------
//  Environment
// ---------------------------------------------------------------------------

/// A target CICS region and the datasets its CSD job needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Lookup key used by remote file definitions.
    pub name: String,
    /// JES machine code, e.g. `A`.
    pub machine: Option<String>,
    /// CICS load library for the `STEPLIB` DD.
    pub steplib_csd: Option<String>,
    /// CSD dataset for the `DFHCSD` DD.
    pub csd_dataset: Option<String>,
    /// Suffix appended to the job name and to group names.
    pub suffix: Option<String>,
    /// Inter-system-communication id other regions use to reach this one.
    pub isc: Option<String>,
}

impl Environment {
    /// Machine code, or `None` when not configured.
    pub fn machine_code(&self) -> Option<&str> {
        value(&self.machine)
    }

    /// Machine code for job routing directives.
    pub fn machine_or_placeholder(&self) -> &str {
        value_or(&self.machine, PLACEHOLDER)
    }

    pub fn steplib_or_placeholder(&self) -> &str {
        value_or(&self.steplib_csd, PLACEHOLDER)
    }

    pub fn csd_or_placeholder(&self) -> &str {
        value_or(&self.csd_dataset, PLACEHOLDER)
    }

    /// Suffix, empty when not configured.
    pub fn suffix(&self) -> &str {
        value_or(&self.suffix, "")
    }

    /// Name of the generated DFHCSDUP job.
    pub fn job_name(&self) -> String {
        format!("PYBCSD2{}", self.suffix())
    }
}

/// Look up other environments by name.
pub trait EnvironmentLookup {
    fn find(&self, name: &str) -> Option<&Environment>;
}

/// A lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl EnvironmentLookup for NoLookup {
    fn find(&self, _name: &str) -> Option<&Environment> {
        None
    }
}

impl EnvironmentLookup for [Environment] {
    fn find(&self, name: &str) -> Option<&Environment> {
        let name = name.trim();
        self.iter().find(|e| e.name == name)
    }
}

impl EnvironmentLookup for Vec<Environment> {
    fn find(&self, name: &str) -> Option<&Environment> {
        self.as_slice().find(name)
    }
}

impl EnvironmentLookup for HashMap<String, Environment> {
    fn find(&self, name: &str) -> Option<&Environment> {
        self.get(name.trim())
    }
}

impl EnvironmentLookup for BTreeMap<String, Environment> {
    fn find(&self, name: &str) -> Option<&Environment> {
        self.get(name.trim())
    }
}
