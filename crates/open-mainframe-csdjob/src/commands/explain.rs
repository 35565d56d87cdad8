//! Explain command - describes a transfer return code.

use open_mainframe_jessub::retcode;

use crate::output::{print_json, ExplainOutput, OutputFormat};

/// Run the explain command.
pub fn run(code: &str, format: OutputFormat) {
    let code = code.trim().to_uppercase();
    let known = retcode::is_known(&code);
    let description = match retcode::describe(&code) {
        text if text.is_empty() => "Job accepted.".to_string(),
        text => text.into_owned(),
    };

    if format.is_json() {
        print_json(&ExplainOutput {
            code,
            known,
            description,
        });
    } else {
        println!("{code}: {description}");
    }
}
