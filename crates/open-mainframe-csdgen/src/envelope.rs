//! Job envelope — the JOB card and DFHCSDUP step that wrap the SYSIN commands.
//!
//! Only the job-name suffix, the JES machine, and the two dataset names vary;
//! the rest of the header is fixed text expected by the scheduler.

use std::fmt::Write;

use crate::model::Environment;

/// Append the job header, ending with `//SYSIN DD *` and a blank line.
pub fn write_header(env: &Environment, out: &mut String) {
    let machine = env.machine_or_placeholder();

    let _ = writeln!(
        out,
        "//{} JOB  PYB2-00952400-0019,'UAC-SAP',MSGCLASS=R,",
        env.job_name()
    );
    out.push_str("//         CLASS=S,TIME=3,REGION=4M\n");
    let _ = writeln!(out, "/*XEQ JES{machine}");
    let _ = writeln!(out, "/*ROUTE PRINT JES{machine}");
    out.push_str("//*        UPCASE=NAO\n");
    out.push_str("//         EXEC PGM=DFHCSDUP\n");
    let _ = writeln!(out, "//STEPLIB  DD   DSN={},DISP=SHR", env.steplib_or_placeholder());
    let _ = writeln!(out, "//DFHCSD   DD   DSN={},DISP=SHR", env.csd_or_placeholder());
    out.push_str("//SYSPRINT DD   SYSOUT=*\n");
    out.push_str("//SYSIN    DD   *\n");
    out.push('\n');
}

/// Close a resource block.
pub fn end_block(out: &mut String) {
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let env = Environment {
            name: "CICSTST1".into(),
            machine: Some("A".into()),
            steplib_csd: Some("CICSTS.V6R1.SDFHLOAD".into()),
            csd_dataset: Some("CICSTST1.DFHCSD".into()),
            suffix: Some("T".into()),
            isc: Some("CT01".into()),
        };
        let mut out = String::new();
        write_header(&env, &mut out);
        assert_eq!(
            out,
            "//PYBCSD2T JOB  PYB2-00952400-0019,'UAC-SAP',MSGCLASS=R,\n\
             //         CLASS=S,TIME=3,REGION=4M\n\
             /*XEQ JESA\n\
             /*ROUTE PRINT JESA\n\
             //*        UPCASE=NAO\n\
             //         EXEC PGM=DFHCSDUP\n\
             //STEPLIB  DD   DSN=CICSTS.V6R1.SDFHLOAD,DISP=SHR\n\
             //DFHCSD   DD   DSN=CICSTST1.DFHCSD,DISP=SHR\n\
             //SYSPRINT DD   SYSOUT=*\n\
             //SYSIN    DD   *\n\
             \n"
        );
    }

    #[test]
    fn test_header_placeholders() {
        let mut out = String::new();
        write_header(&Environment::default(), &mut out);
        assert!(out.starts_with("//PYBCSD2 JOB  "));
        assert!(out.contains("/*XEQ JES???\n"));
        assert!(out.contains("//STEPLIB  DD   DSN=???,DISP=SHR\n"));
        assert!(out.contains("//DFHCSD   DD   DSN=???,DISP=SHR\n"));
    }
}
