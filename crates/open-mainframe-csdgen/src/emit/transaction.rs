//! TRANSACTION definitions.

use super::{command, operand, split_list, EmitContext};
use crate::model::{value_or, ChangeRequest};

pub(super) fn delete(request: &ChangeRequest, ctx: &EmitContext<'_>, out: &mut String) {
    let group = format!("{}{}", value_or(&request.css, ""), ctx.suffix());
    for name in split_list(request.names.as_deref()) {
        command(out, "DELETE", "TRANSACTION", name);
        operand(out, "GROUP", &group);
    }
}

pub(super) fn define(request: &ChangeRequest, keyword: &str, out: &mut String) {
    let name = value_or(&request.names, "TRAN").to_uppercase();
    let executions = value_or(&request.daily_executions, "0");

    command(out, keyword, "TRANSACTION", &name);
    operand(out, "PROGRAM", value_or(&request.program, "PROGRAM"));
    operand(out, "TWASIZE", value_or(&request.twa_size, "0"));
    operand(out, "STATUS", value_or(&request.status, "ENABLE"));
    operand(out, "TASKDATALOC", value_or(&request.data_location, "ANY"));
    operand(
        out,
        "DESCRIPTION",
        &format!("Previsao: {executions} execucoes dia"),
    );
    operand(out, "SPURGE", "YES");
    operand(out, "TPURGE", "YES");
    operand(out, "ISOLATE", "NO");
    // Transaction groups carry no suffix.
    operand(out, "GROUP", value_or(&request.css, ""));
}
