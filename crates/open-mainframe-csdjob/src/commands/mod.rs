//! CLI command implementations.

pub mod explain;
pub mod generate;
pub mod run;
pub mod submit;
