//! End-to-end job text tests for the DFHCSDUP generation pipeline.

use open_mainframe_csdgen::{generate_job, ChangeRequest, Environment, JobGenerator};

fn region() -> Environment {
    Environment {
        name: "CICSTST1".into(),
        machine: Some("A".into()),
        steplib_csd: Some("CICSTS.V6R1.SDFHLOAD".into()),
        csd_dataset: Some("CICSTST1.DFHCSD".into()),
        suffix: Some("T".into()),
        isc: Some("CT01".into()),
    }
}

const HEADER: &str = "//PYBCSD2T JOB  PYB2-00952400-0019,'UAC-SAP',MSGCLASS=R,
//         CLASS=S,TIME=3,REGION=4M
/*XEQ JESA
/*ROUTE PRINT JESA
//*        UPCASE=NAO
//         EXEC PGM=DFHCSDUP
//STEPLIB  DD   DSN=CICSTS.V6R1.SDFHLOAD,DISP=SHR
//DFHCSD   DD   DSN=CICSTST1.DFHCSD,DISP=SHR
//SYSPRINT DD   SYSOUT=*
//SYSIN    DD   *

";

#[test]
fn test_local_file_scenario() {
    let request = ChangeRequest {
        css: Some("CUS".into()),
        file_kind: Some("LOCAL".into()),
        names: Some("CUST01".into()),
        dataset_name: Some("CUS.VSAM.CUST01".into()),
        services: Some("ADD,BROWSE".into()),
        ..ChangeRequest::new("FILE", "DEFINE")
    };
    let job = generate_job(&[request], Some(&region()));
    let expected = format!(
        "{HEADER}DEFINE  FILE(CUST01)
        DSNAME(CUS.VSAM.CUST01)
        STATUS(ENABLE)
        RECORDFORMAT(F)
        ADD(YES)
        BROWSE(YES)
        STRINGS(03)
        LSRPOOLID(NONE)
        GROUP(FCTCUSTA)

"
    );
    assert_eq!(job, expected);
}

#[test]
fn test_bno_scenario() {
    let request = ChangeRequest {
        file_kind: Some("BNO".into()),
        branch: Some("12".into()),
        pattern_types: Some("O".into()),
        ..ChangeRequest::new("FILE", "DEFINE")
    };
    let job = generate_job(&[request], Some(&region()));
    let expected = format!(
        "{HEADER}DEFINE  FILE(BNOO0012)
        DSNAME(BPDBNOA.DOI001.G00000.AGE0012)
        STATUS(ENABLE)
        RECORDFORMAT(F)
        ADD(YES)
        BROWSE(YES)
        DELETE(YES)
        READ(YES)
        UPDATE(YES)
        STRINGS(03)
        LSRPOOLID(NONE)
        GROUP(FCTBNOX)
        REMOTESystem(CICF)

"
    );
    assert_eq!(job, expected);
}

#[test]
fn test_mixed_group_is_ordered() {
    let requests = vec![
        ChangeRequest {
            css: Some("ABC".into()),
            names: Some("ABCT".into()),
            program: Some("ABCP0001".into()),
            ..ChangeRequest::new("TRANSACTION", "DEFINE")
        },
        ChangeRequest {
            css: Some("ABC".into()),
            names: Some("ABCTB01".into()),
            ..ChangeRequest::new("TABLE", "DELETE")
        },
        ChangeRequest {
            css: Some("ABC".into()),
            names: Some("A, B ,C".into()),
            ..ChangeRequest::new("FILE", "DELETE")
        },
        ChangeRequest {
            css: Some("ABC".into()),
            names: Some("abcp0001".into()),
            link_name: Some("ABCL0001".into()),
            ..ChangeRequest::new("PROGRAM", "DEFINE")
        },
    ];
    let job = generate_job(&requests, Some(&region()));
    let expected = format!(
        "{HEADER}DELETE  FILE(A)
        GROUP(FCTABCTA)
DELETE  FILE(B)
        GROUP(FCTABCTA)
DELETE  FILE(C)
        GROUP(FCTABCTA)

DEFINE  PROGRAM(ABCP0001)
        CONCURRENCY(THREADSAFE)
        LANGUAGE(COBOL)
        STATUS(ENABLE)
        DATALOC(ANY)
        RESIDENT(NO)
        DESCRIPTION(ABCL0001)
        GROUP(ABCAT)

DELETE  PROGRAM(ABCTB01)
        CONCURRENCY(THREADSAFE)
        GROUP(ABC)

DEFINE  TRANSACTION(ABCT)
        PROGRAM(ABCP0001)
        TWASIZE(0)
        STATUS(ENABLE)
        TASKDATALOC(ANY)
        DESCRIPTION(Previsao: 0 execucoes dia)
        SPURGE(YES)
        TPURGE(YES)
        ISOLATE(NO)
        GROUP(ABC)

"
    );
    assert_eq!(job, expected);

    let mut reversed = requests.clone();
    reversed.reverse();
    assert_eq!(generate_job(&reversed, Some(&region())), job);
}

#[test]
fn test_remote_file_through_directory() {
    let peers = vec![
        region(),
        Environment {
            name: "CICSPRD2".into(),
            isc: Some("CP02".into()),
            ..Environment::default()
        },
    ];
    let request = ChangeRequest {
        css: Some("ABC".into()),
        file_kind: Some("REMOTE".into()),
        names: Some("rmt01".into()),
        dataset_name: Some("CICSPRD2".into()),
        ..ChangeRequest::new("FILE", "DEFINE")
    };
    let job = JobGenerator::new(&peers).generate(&[request.clone()], Some(&region()));
    assert!(job.contains("DEFINE  FILE(RMT01)\n        REMOTESYSTEM(CP02)\n"));

    let unresolved = generate_job(&[request], Some(&region()));
    assert!(unresolved.contains("        REMOTESYSTEM(CICSPRD2)\n"));
}

#[test]
fn test_requests_from_json() {
    let json = r#"[
        {"id": 7, "resource_type": "map", "operation": "alter", "css": "ABC",
         "names": "abcm001", "link_name": "ABCM001"},
        {"id": 8, "resource_type": "UNKNOWN", "operation": "DEFINE"}
    ]"#;
    let requests: Vec<ChangeRequest> = serde_json::from_str(json).unwrap();
    let job = generate_job(&requests, Some(&region()));
    assert!(job.contains("ALTER   MAPSET(ABCM001)\n        STATUS(ENABLE)\n"));
    assert!(job.contains("        GROUP(ABCAT)\n"));
}

#[test]
fn test_lowercase_tags_sort_like_uppercase() {
    let program = ChangeRequest {
        css: Some("ABC".into()),
        names: Some("ABCP0001".into()),
        ..ChangeRequest::new("PROGRAM", "DEFINE")
    };
    let map = |tag: &str, op: &str| ChangeRequest {
        css: Some("ABC".into()),
        names: Some("ABCM001".into()),
        ..ChangeRequest::new(tag, op)
    };

    let upper = generate_job(&[program.clone(), map("MAP", "DEFINE")], Some(&region()));
    let lower = generate_job(&[program, map("map", "define")], Some(&region()));
    assert_eq!(lower, upper);
    assert!(upper.find("MAPSET(ABCM001)").unwrap() < upper.find("PROGRAM(ABCP0001)").unwrap());
}
