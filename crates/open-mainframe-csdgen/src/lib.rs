//! # CICS CSD Job Generation
//!
//! Turns approved CICS resource change requests into a single DFHCSDUP batch
//! job for a target region.
//!
//! ## Features
//!
//! - **Change requests** — FILE, TRANSACTION, PROGRAM, MAP and TABLE
//!   resources with DEFINE, ALTER and DELETE operations
//! - **Classifier** — table-driven dispatch to one emitter per resource kind
//! - **Emitters** — byte-exact DFHCSDUP SYSIN statements, including the BNO
//!   branch file family and remote files resolved over ISC
//! - **Envelope** — JOB card, routing, and the DFHCSDUP step
//!
//! ## Example
//!
//! ```rust
//! use open_mainframe_csdgen::{generate_job, ChangeRequest, Environment};
//!
//! let env = Environment {
//!     name: "CICSTST1".into(),
//!     machine: Some("A".into()),
//!     ..Environment::default()
//! };
//! let request = ChangeRequest {
//!     css: Some("ABC".into()),
//!     names: Some("ABCP0001".into()),
//!     ..ChangeRequest::new("PROGRAM", "DEFINE")
//! };
//! let job = generate_job(&[request], Some(&env));
//! assert!(job.contains("DEFINE  PROGRAM(ABCP0001)"));
//! ```

pub mod classify;
pub mod emit;
pub mod envelope;
pub mod model;
pub mod pipeline;

pub use classify::{classify, Strategy};
pub use emit::{EmitContext, Emitter};
pub use model::{
    ChangeRequest, Environment, EnvironmentLookup, FileKind, NoLookup, Operation, ResourceType,
    PLACEHOLDER,
};
pub use pipeline::{generate_job, GeneratedJob, JobGenerator};
