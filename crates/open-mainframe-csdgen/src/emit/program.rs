//! PROGRAM, MAPSET and lookup-table definitions.
//!
//! Tables are defined to CICS as programs. Their group is the bare CSS
//! prefix, while programs and mapsets use `<css><machine><suffix>`.

use super::{command, operand, split_list, EmitContext};
use crate::model::{value_or, ChangeRequest};

/// `<css><machine><suffix>`
fn load_group(request: &ChangeRequest, ctx: &EmitContext<'_>) -> String {
    format!(
        "{}{}{}",
        value_or(&request.css, ""),
        ctx.machine(),
        ctx.suffix()
    )
}

fn delete_each(
    request: &ChangeRequest,
    resource: &str,
    threadsafe: bool,
    group: &str,
    out: &mut String,
) {
    for name in split_list(request.names.as_deref()) {
        command(out, "DELETE", resource, name);
        if threadsafe {
            operand(out, "CONCURRENCY", "THREADSAFE");
        }
        operand(out, "GROUP", group);
    }
}

pub(super) fn delete_program(request: &ChangeRequest, ctx: &EmitContext<'_>, out: &mut String) {
    delete_each(request, "PROGRAM", true, &load_group(request, ctx), out);
}

pub(super) fn define_program(
    request: &ChangeRequest,
    keyword: &str,
    ctx: &EmitContext<'_>,
    out: &mut String,
) {
    let name = value_or(&request.names, "").to_uppercase();

    command(out, keyword, "PROGRAM", &name);
    operand(out, "CONCURRENCY", "THREADSAFE");
    operand(out, "LANGUAGE", value_or(&request.language, "COBOL"));
    operand(out, "STATUS", value_or(&request.status, "ENABLE"));
    operand(out, "DATALOC", value_or(&request.data_location, "ANY"));
    operand(out, "RESIDENT", "NO");
    operand(out, "DESCRIPTION", value_or(&request.link_name, ""));
    operand(out, "GROUP", &load_group(request, ctx));
}

pub(super) fn delete_mapset(request: &ChangeRequest, ctx: &EmitContext<'_>, out: &mut String) {
    delete_each(request, "MAPSET", false, &load_group(request, ctx), out);
}

pub(super) fn define_mapset(
    request: &ChangeRequest,
    keyword: &str,
    ctx: &EmitContext<'_>,
    out: &mut String,
) {
    let name = value_or(&request.names, "").to_uppercase();

    command(out, keyword, "MAPSET", &name);
    operand(out, "STATUS", value_or(&request.status, "ENABLE"));
    operand(out, "RESIDENT", "NO");
    operand(out, "DESCRIPTION", value_or(&request.link_name, ""));
    operand(out, "GROUP", &load_group(request, ctx));
}

pub(super) fn delete_table(request: &ChangeRequest, out: &mut String) {
    delete_each(request, "PROGRAM", true, value_or(&request.css, ""), out);
}

pub(super) fn define_table(request: &ChangeRequest, keyword: &str, out: &mut String) {
    let name = value_or(&request.names, "").to_uppercase();

    command(out, keyword, "PROGRAM", &name);
    operand(out, "CONCURRENCY", "THREADSAFE");
    // No language default for tables.
    operand(out, "LANGUAGE", value_or(&request.language, ""));
    operand(out, "STATUS", value_or(&request.status, "ENABLE"));
    operand(out, "DATALOC", "ANY");
    operand(out, "RESIDENT", "NO");
    operand(out, "DESCRIPTION", value_or(&request.link_name, ""));
    operand(out, "GROUP", value_or(&request.css, ""));
}
