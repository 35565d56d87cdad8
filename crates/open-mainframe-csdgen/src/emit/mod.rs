//! DFHCSDUP command emitters — one strategy per resource type and operation.
//!
//! Every emitter appends complete SYSIN lines to the job buffer. Commands
//! start in column 1 with the keyword padded to seven characters; operands
//! are indented eight spaces, one per line.

mod file;
mod program;
mod transaction;

use std::fmt::Write;

use crate::model::{ChangeRequest, Environment, EnvironmentLookup, Operation};

/// Operand indentation.
const INDENT: &str = "        ";

/// Everything an emitter may read besides the request itself.
pub struct EmitContext<'a> {
    pub environment: &'a Environment,
    /// Other environments, for resolving remote file owners.
    pub lookup: &'a dyn EnvironmentLookup,
}

impl<'a> EmitContext<'a> {
    pub fn new(environment: &'a Environment, lookup: &'a dyn EnvironmentLookup) -> Self {
        Self { environment, lookup }
    }

    fn suffix(&self) -> &str {
        self.environment.suffix()
    }

    /// Machine code as used inside group names (empty when unset).
    fn machine(&self) -> &str {
        self.environment.machine_code().unwrap_or("")
    }
}

/// The emission strategy selected for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emitter {
    DeleteFile,
    DefineLocalFile,
    DefineRemoteFile,
    DefinePatternFiles,
    DeleteTransaction,
    DefineTransaction,
    DeleteProgram,
    DefineProgram,
    DeleteMapset,
    DefineMapset,
    DeleteTable,
    DefineTable,
    /// Unknown resource or file kind: emits nothing.
    Noop,
}

impl Emitter {
    /// Append this emitter's lines for `request` to `out`.
    ///
    /// `operation` supplies the command keyword for define/alter emitters;
    /// delete emitters always write `DELETE`.
    pub fn emit(
        self,
        request: &ChangeRequest,
        operation: Operation,
        ctx: &EmitContext<'_>,
        out: &mut String,
    ) {
        let keyword = operation.keyword();
        match self {
            Self::DeleteFile => file::delete(request, ctx, out),
            Self::DefineLocalFile => file::define_local(request, keyword, ctx, out),
            Self::DefineRemoteFile => file::define_remote(request, keyword, ctx, out),
            Self::DefinePatternFiles => file::define_pattern(request, keyword, ctx, out),
            Self::DeleteTransaction => transaction::delete(request, ctx, out),
            Self::DefineTransaction => transaction::define(request, keyword, out),
            Self::DeleteProgram => program::delete_program(request, ctx, out),
            Self::DefineProgram => program::define_program(request, keyword, ctx, out),
            Self::DeleteMapset => program::delete_mapset(request, ctx, out),
            Self::DefineMapset => program::define_mapset(request, keyword, ctx, out),
            Self::DeleteTable => program::delete_table(request, out),
            Self::DefineTable => program::define_table(request, keyword, out),
            Self::Noop => {}
        }
    }

    /// Short name for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::DeleteFile => "delete-file",
            Self::DefineLocalFile => "define-local-file",
            Self::DefineRemoteFile => "define-remote-file",
            Self::DefinePatternFiles => "define-bno-files",
            Self::DeleteTransaction => "delete-transaction",
            Self::DefineTransaction => "define-transaction",
            Self::DeleteProgram => "delete-program",
            Self::DefineProgram => "define-program",
            Self::DeleteMapset => "delete-mapset",
            Self::DefineMapset => "define-mapset",
            Self::DeleteTable => "delete-table",
            Self::DefineTable => "define-table",
            Self::Noop => "noop",
        }
    }
}

// ---------------------------------------------------------------------------
//  Line helpers
// ---------------------------------------------------------------------------

/// `KEYWORD RESOURCE(name)` with the keyword padded to seven columns.
fn command(out: &mut String, keyword: &str, resource: &str, name: &str) {
    let _ = writeln!(out, "{keyword:<7} {resource}({name})");
}

/// An indented `KEYWORD(value)` operand line.
fn operand(out: &mut String, keyword: &str, value: &str) {
    let _ = writeln!(out, "{INDENT}{keyword}({value})");
}

/// Comma-separated list entries, trimmed, with empty entries dropped.
fn split_list(list: Option<&str>) -> impl Iterator<Item = &str> {
    list.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_padding() {
        let mut out = String::new();
        command(&mut out, "DELETE", "FILE", "A");
        command(&mut out, "ALTER", "PROGRAM", "P1");
        command(&mut out, "DEFINE", "MAPSET", "M1");
        assert_eq!(out, "DELETE  FILE(A)\nALTER   PROGRAM(P1)\nDEFINE  MAPSET(M1)\n");
    }

    #[test]
    fn test_operand_indent() {
        let mut out = String::new();
        operand(&mut out, "GROUP", "FCTX");
        assert_eq!(out, "        GROUP(FCTX)\n");
    }

    #[test]
    fn test_split_list() {
        let names: Vec<_> = split_list(Some("A, B ,C,, ,")).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(split_list(None).count(), 0);
    }
}
