//! csdjob library — configuration, input loading, and the commands behind
//! the `csdjob` binary.
//!
//! Wires JSON change requests and environments to the job generator and
//! hands the resulting job to the configured submission port.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use config::{CsdJobConfig, Overrides};
pub use error::{ConfigError, LoadError};
