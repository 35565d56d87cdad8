//! Job generation pipeline — one consolidated DFHCSDUP job per request group.

use tracing::{debug, info};

use crate::classify::classify;
use crate::emit::EmitContext;
use crate::envelope;
use crate::model::{ChangeRequest, Environment, EnvironmentLookup, NoLookup};

/// Builds job text for request groups against one environment directory.
///
/// Generation holds no state between calls; each call builds its own buffer.
pub struct JobGenerator<'a> {
    lookup: &'a dyn EnvironmentLookup,
}

/// A generated job and how many of its requests produced no statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedJob {
    pub text: String,
    pub skipped: usize,
}

impl Default for JobGenerator<'static> {
    fn default() -> Self {
        Self { lookup: &NoLookup }
    }
}

impl<'a> JobGenerator<'a> {
    /// Create a generator that resolves remote file owners through `lookup`.
    pub fn new(lookup: &'a dyn EnvironmentLookup) -> Self {
        Self { lookup }
    }

    /// Generate the consolidated job for `requests` on `environment`.
    ///
    /// Returns an empty string for an empty group or a missing environment.
    pub fn generate(
        &self,
        requests: &[ChangeRequest],
        environment: Option<&Environment>,
    ) -> String {
        self.generate_counted(requests, environment).text
    }

    /// Like [`generate`](Self::generate), also counting skipped requests.
    ///
    /// Requests are emitted ordered by resource type tag, then operation tag,
    /// compared trimmed and case-insensitively; requests that classify to
    /// nothing still close an (empty) block.
    pub fn generate_counted(
        &self,
        requests: &[ChangeRequest],
        environment: Option<&Environment>,
    ) -> GeneratedJob {
        let Some(env) = environment else {
            debug!("no environment, empty job");
            return GeneratedJob::default();
        };
        if requests.is_empty() {
            debug!(environment = %env.name, "empty request group, empty job");
            return GeneratedJob::default();
        }

        let mut ordered: Vec<&ChangeRequest> = requests.iter().collect();
        ordered.sort_by_cached_key(|r| sort_key(r));

        let ctx = EmitContext::new(env, self.lookup);
        let mut out = String::new();
        envelope::write_header(env, &mut out);

        let mut skipped = 0usize;
        for request in ordered {
            let strategy = classify(request);
            if strategy.is_noop() {
                skipped += 1;
            }
            debug!(
                request = %request.label(),
                emitter = strategy.emitter.name(),
                operation = %strategy.operation,
                "emitting request"
            );
            strategy.emit(request, &ctx, &mut out);
            envelope::end_block(&mut out);
        }

        info!(
            job = %env.job_name(),
            environment = %env.name,
            requests = requests.len(),
            skipped,
            bytes = out.len(),
            "job generated"
        );
        GeneratedJob { text: out, skipped }
    }
}

/// Resource type tag, then operation tag (absent first), case-folded.
fn sort_key(request: &ChangeRequest) -> (String, Option<String>) {
    let fold = |tag: &str| tag.trim().to_ascii_uppercase();
    (
        fold(&request.resource_type),
        request.operation.as_deref().map(fold),
    )
}

/// Generate a job without a peer environment directory. Remote files then
/// always fall back to the owner name as ISC id.
pub fn generate_job(requests: &[ChangeRequest], environment: Option<&Environment>) -> String {
    JobGenerator::default().generate(requests, environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment {
            name: "CICSTST1".into(),
            machine: Some("A".into()),
            steplib_csd: Some("CICSTS.SDFHLOAD".into()),
            csd_dataset: Some("CICSTST1.DFHCSD".into()),
            suffix: Some("T".into()),
            isc: None,
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_job() {
        assert_eq!(generate_job(&[], Some(&env())), "");
        assert_eq!(generate_job(&[ChangeRequest::new("PROGRAM", "DEFINE")], None), "");
    }

    #[test]
    fn test_noop_request_still_closes_block() {
        let job = generate_job(&[ChangeRequest::new("QUEUE", "DEFINE")], Some(&env()));
        assert!(job.ends_with("//SYSIN    DD   *\n\n\n"));
    }

    #[test]
    fn test_ordering_by_type_then_operation() {
        let mk = |rt: &str, op: &str, name: &str| ChangeRequest {
            css: Some("ABC".into()),
            names: Some(name.into()),
            file_kind: Some("LOCAL".into()),
            ..ChangeRequest::new(rt, op)
        };
        let requests = vec![
            mk("TRANSACTION", "DEFINE", "T001"),
            mk("PROGRAM", "DELETE", "P002"),
            mk("FILE", "DEFINE", "F001"),
            mk("PROGRAM", "ALTER", "P001"),
            mk("MAP", "DEFINE", "M001"),
        ];
        let job = generate_job(&requests, Some(&env()));
        let pos = |needle: &str| job.find(needle).unwrap();
        assert!(pos("FILE(F001)") < pos("MAPSET(M001)"));
        assert!(pos("MAPSET(M001)") < pos("ALTER   PROGRAM(P001)"));
        assert!(pos("ALTER   PROGRAM(P001)") < pos("DELETE  PROGRAM(P002)"));
        assert!(pos("DELETE  PROGRAM(P002)") < pos("TRANSACTION(T001)"));
    }

    #[test]
    fn test_generation_is_repeatable() {
        let requests = vec![
            ChangeRequest {
                names: Some("P1".into()),
                ..ChangeRequest::new("PROGRAM", "DEFINE")
            },
            ChangeRequest {
                names: Some("A,B".into()),
                ..ChangeRequest::new("FILE", "DELETE")
            },
        ];
        let env = env();
        assert_eq!(
            generate_job(&requests, Some(&env)),
            generate_job(&requests, Some(&env))
        );
    }

    #[test]
    fn test_ordering_ignores_tag_case() {
        let mk = |rt: &str, op: &str, name: &str| ChangeRequest {
            css: Some("ABC".into()),
            names: Some(name.into()),
            ..ChangeRequest::new(rt, op)
        };
        let upper = vec![mk("PROGRAM", "DEFINE", "P1"), mk("MAP", "DEFINE", "M1")];
        let lower = vec![mk("PROGRAM", "DEFINE", "P1"), mk("map", "define", "M1")];
        let padded = vec![mk("PROGRAM", "DEFINE", "P1"), mk(" Map ", "Define", "M1")];

        for requests in [upper, lower, padded] {
            let job = generate_job(&requests, Some(&env()));
            let pos = |needle: &str| job.find(needle).unwrap();
            assert!(pos("MAPSET(M1)") < pos("PROGRAM(P1)"), "{job}");
        }

        // Operation tags fold the same way.
        let requests = vec![mk("PROGRAM", "DELETE", "P2"), mk("PROGRAM", "alter", "P1")];
        let job = generate_job(&requests, Some(&env()));
        let alter = job.find("ALTER   PROGRAM(P1)").unwrap();
        let delete = job.find("DELETE  PROGRAM(P2)").unwrap();
        assert!(alter < delete);
    }

    #[test]
    fn test_skipped_requests_counted() {
        let requests = vec![
            ChangeRequest::new("QUEUE", "DEFINE"),
            ChangeRequest::new("PROGRAM", "RENAME"),
            ChangeRequest {
                names: Some("P1".into()),
                ..ChangeRequest::new("PROGRAM", "DEFINE")
            },
        ];
        let job = JobGenerator::default().generate_counted(&requests, Some(&env()));
        assert_eq!(job.skipped, 2);
        assert!(job.text.contains("DEFINE  PROGRAM(P1)"));
        assert_eq!(
            JobGenerator::default().generate_counted(&requests, None),
            GeneratedJob::default()
        );
    }
}
