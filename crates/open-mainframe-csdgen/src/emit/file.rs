//! FILE definitions: local VSAM files, remote files, and the BNO family.

use tracing::{debug, warn};

use super::{command, operand, split_list, EmitContext, INDENT};
use crate::model::{value, value_or, ChangeRequest, PLACEHOLDER};

/// `FCT<css><suffix>A`
fn fct_group(request: &ChangeRequest, ctx: &EmitContext<'_>) -> String {
    format!("FCT{}{}A", value_or(&request.css, ""), ctx.suffix())
}

/// First character of the record format (`F`, `V`, ...).
fn record_format(request: &ChangeRequest) -> String {
    let recfm = value_or(&request.record_format, "FIXED");
    recfm.trim().chars().next().unwrap_or('F').to_string()
}

pub(super) fn delete(request: &ChangeRequest, ctx: &EmitContext<'_>, out: &mut String) {
    let group = fct_group(request, ctx);
    for name in split_list(request.names.as_deref()) {
        command(out, "DELETE", "FILE", name);
        operand(out, "GROUP", &group);
    }
}

pub(super) fn define_local(
    request: &ChangeRequest,
    keyword: &str,
    ctx: &EmitContext<'_>,
    out: &mut String,
) {
    let name = value_or(&request.names, "").to_uppercase();

    command(out, keyword, "FILE", &name);
    operand(out, "DSNAME", value_or(&request.dataset_name, ""));
    operand(out, "STATUS", value_or(&request.status, "ENABLE"));
    operand(out, "RECORDFORMAT", &record_format(request));
    for service in split_list(request.services.as_deref()) {
        operand(out, &service.to_uppercase(), "YES");
    }
    operand(out, "STRINGS", value_or(&request.strings, "03"));
    operand(out, "LSRPOOLID", "NONE");
    operand(out, "GROUP", &fct_group(request, ctx));
}

pub(super) fn define_remote(
    request: &ChangeRequest,
    keyword: &str,
    ctx: &EmitContext<'_>,
    out: &mut String,
) {
    let name = value_or(&request.names, "").to_uppercase();
    let isc = remote_system(request, ctx);

    command(out, keyword, "FILE", &name);
    operand(out, "REMOTESYSTEM", &isc);
    operand(out, "LSRPOOLID", "NONE");
    operand(out, "GROUP", &fct_group(request, ctx));
}

/// Resolve the owning region's ISC id. The dataset-name field holds the
/// owner's environment name; when it cannot be resolved the name itself is
/// used as the ISC id.
fn remote_system(request: &ChangeRequest, ctx: &EmitContext<'_>) -> String {
    let Some(owner) = value(&request.dataset_name) else {
        warn!(request = %request.label(), "remote file without owning environment");
        return PLACEHOLDER.to_string();
    };
    match ctx.lookup.find(owner).and_then(|env| value(&env.isc)) {
        Some(isc) => isc.to_string(),
        None => {
            warn!(owner, "owning environment not resolved, using name as ISC id");
            owner.to_string()
        }
    }
}

const INPUT_SERVICES: &[&str] = &["BROWSE", "READ", "UPDATE"];
const OUTPUT_SERVICES: &[&str] = &["ADD", "BROWSE", "DELETE", "READ", "UPDATE"];
const SPOOL_SERVICES: &[&str] = &["ADD", "BROWSE", "READ", "UPDATE"];
const HISTORY_SERVICES: &[&str] = &["BROWSE", "READ"];

/// Dataset name and enabled services for one BNO sub-type.
fn pattern_member(token: &str, branch: &str) -> (String, &'static [&'static str]) {
    let (qualifier, services) = match token {
        "I" => ("DII001", INPUT_SERVICES),
        "O" => ("DOI001", OUTPUT_SERVICES),
        "P" => ("DPI001", SPOOL_SERVICES),
        "S" => ("DSI001", SPOOL_SERVICES),
        "X" => ("DHI001", HISTORY_SERVICES),
        _ => return ("?".to_string(), &[]),
    };
    (format!("BPDBNOA.{qualifier}.G00000.AGE{branch}"), services)
}

/// Branch code left-padded with zeros to four digits.
fn branch_code(request: &ChangeRequest) -> String {
    match request.branch.as_deref() {
        Some(branch) => format!("{:0>4}", branch.trim()),
        None => "0000".to_string(),
    }
}

pub(super) fn define_pattern(
    request: &ChangeRequest,
    keyword: &str,
    ctx: &EmitContext<'_>,
    out: &mut String,
) {
    let branch = branch_code(request);
    let status = value_or(&request.status, "ENABLE");
    let recfm = record_format(request);
    let strings = value_or(&request.strings, "03");
    let remote = if ctx.environment.machine_code() == Some("A") {
        "CICF"
    } else {
        "DCIF"
    };

    for token in split_list(request.pattern_types.as_deref()) {
        let name = format!("BNO{token}{branch}");
        let (dsname, services) = pattern_member(token, &branch);
        debug!(%name, %dsname, "BNO member");

        command(out, keyword, "FILE", &name);
        operand(out, "DSNAME", &dsname);
        operand(out, "STATUS", status);
        operand(out, "RECORDFORMAT", &recfm);
        for service in services {
            operand(out, service, "YES");
        }
        operand(out, "STRINGS", strings);
        operand(out, "LSRPOOLID", "NONE");
        operand(out, "GROUP", "FCTBNOX");
        out.push_str(INDENT);
        out.push_str("REMOTESystem(");
        out.push_str(remote);
        out.push_str(")\n");
    }
}
