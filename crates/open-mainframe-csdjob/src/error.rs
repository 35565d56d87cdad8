//! Front-end error types: configuration and input loading.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors loading the TOML configuration file.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    #[diagnostic(code(csdjob::config_read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    #[diagnostic(code(csdjob::config_parse), help("see csdjob.toml for the accepted keys"))]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors loading change requests or environments.
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(csdjob::input_read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    #[diagnostic(code(csdjob::input_parse))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The named target environment is not in the environments file.
    #[error("environment '{name}' not found")]
    #[diagnostic(code(csdjob::unknown_environment))]
    UnknownEnvironment { name: String },

    /// Several environments were loaded and none was selected.
    #[error("{count} environments loaded, select one with --env")]
    #[diagnostic(code(csdjob::ambiguous_environment))]
    AmbiguousEnvironment { count: usize },
}
