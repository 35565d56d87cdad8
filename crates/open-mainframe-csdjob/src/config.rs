//! csdjob configuration — submission mode, record fields, and job spool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use open_mainframe_jessub::{SpoolConfig, SubmitMode, SubmitterConfig};

use crate::error::ConfigError;

/// Top-level configuration, loaded from `csdjob.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsdJobConfig {
    /// Submission port and record settings.
    #[serde(default)]
    pub submission: SubmitterConfig,
    /// Where job files are written.
    #[serde(default)]
    pub spool: SpoolConfig,
}

/// Command-line settings that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<SubmitMode>,
    pub jcl_dir: Option<PathBuf>,
}

impl CsdJobConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(mode) = overrides.mode {
            self.submission.mode = mode;
        }
        if let Some(dir) = &overrides.jcl_dir {
            self.spool.jcl_dir = dir.clone();
        }
    }
}
