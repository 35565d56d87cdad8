//! Job spool — writes generated job text to disk for submission.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::JesSubmitError;
use crate::Result;

/// Line terminator used in spooled job files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    #[default]
    Crlf,
}

/// Spool settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolConfig {
    #[serde(default = "default_jcl_dir")]
    pub jcl_dir: PathBuf,
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl Default for SpoolConfig {
    fn default() -> Self {
        Self {
            jcl_dir: default_jcl_dir(),
            line_ending: LineEnding::default(),
        }
    }
}

fn default_jcl_dir() -> PathBuf {
    PathBuf::from("DATA_PYB").join("JCL")
}

/// Directory of job files named `<JOBNAME>_<yyyymmdd_HHMMSS>.jcl`.
#[derive(Debug, Clone)]
pub struct JobSpool {
    dir: PathBuf,
    line_ending: LineEnding,
}

impl JobSpool {
    pub fn new(dir: impl Into<PathBuf>, line_ending: LineEnding) -> Self {
        Self {
            dir: dir.into(),
            line_ending,
        }
    }

    pub fn from_config(config: &SpoolConfig) -> Self {
        Self::new(config.jcl_dir.clone(), config.line_ending)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `text` as a new job file and return its path. Existing files
    /// are never overwritten; a numeric suffix is added on collision.
    pub fn write(&self, job_name: &str, text: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|source| JesSubmitError::Spool {
            path: self.dir.clone(),
            source,
        })?;

        let stem = format!("{job_name}_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let body = match self.line_ending {
            LineEnding::Lf => text.to_string(),
            LineEnding::Crlf => to_crlf(text),
        };

        let mut attempt = 0u32;
        loop {
            let name = if attempt == 0 {
                format!("{stem}.jcl")
            } else {
                format!("{stem}_{attempt}.jcl")
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(body.as_bytes())
                        .map_err(|source| JesSubmitError::Spool {
                            path: path.clone(),
                            source,
                        })?;
                    debug!(path = %path.display(), bytes = body.len(), "job spooled");
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(source) => return Err(JesSubmitError::Spool { path, source }),
            }
        }
    }
}

fn to_crlf(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for line in text.split_inclusive('\n') {
        match line.strip_suffix('\n') {
            Some(body) => {
                out.push_str(body.strip_suffix('\r').unwrap_or(body));
                out.push_str("\r\n");
            }
            None => out.push_str(line),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_dir_and_names_file() {
        let root = tempfile::tempdir().unwrap();
        let spool = JobSpool::new(root.path().join("DATA_PYB").join("JCL"), LineEnding::Lf);
        let path = spool.write("PYBCSD2T", "//PYBCSD2T JOB\n").unwrap();

        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("PYBCSD2T_"));
        assert!(name.ends_with(".jcl"));
        // PYBCSD2T_yyyymmdd_HHMMSS.jcl
        assert_eq!(name.len(), "PYBCSD2T_".len() + 15 + 4);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "//PYBCSD2T JOB\n");
    }

    #[test]
    fn test_collision_gets_suffix() {
        let root = tempfile::tempdir().unwrap();
        let spool = JobSpool::new(root.path(), LineEnding::Lf);
        let first = spool.write("J", "A\n").unwrap();
        let second = spool.write("J", "B\n").unwrap();
        assert_ne!(first, second);
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "A\n");
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "B\n");
    }

    #[test]
    fn test_crlf_conversion() {
        assert_eq!(to_crlf("A\nB\r\n\nC"), "A\r\nB\r\n\r\nC");
        let root = tempfile::tempdir().unwrap();
        let spool = JobSpool::new(root.path(), LineEnding::Crlf);
        let path = spool.write("J", "X\nY\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"X\r\nY\r\n");
    }

    #[test]
    fn test_unwritable_dir_is_spool_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let spool = JobSpool::new(file.path().join("sub"), LineEnding::Lf);
        let err = spool.write("J", "X\n").unwrap_err();
        assert!(matches!(err, JesSubmitError::Spool { .. }));
    }

    #[test]
    fn test_config_defaults() {
        let cfg = SpoolConfig::default();
        assert_eq!(cfg.jcl_dir, Path::new("DATA_PYB/JCL"));
        assert_eq!(cfg.line_ending, LineEnding::Crlf);
    }
}
