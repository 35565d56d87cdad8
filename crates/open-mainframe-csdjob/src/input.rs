//! JSON loaders for change requests and environments.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use open_mainframe_csdgen::{ChangeRequest, Environment, EnvironmentLookup};

use crate::error::LoadError;

/// A file holding either one value or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    // Tried first: derived structs also accept sequences.
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: OneOrMany<T> = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed.into_vec())
}

/// Load the change requests of one group.
pub fn load_requests(path: &Path) -> Result<Vec<ChangeRequest>, LoadError> {
    let requests = read_json(path)?;
    tracing::debug!(path = %path.display(), count = requests.len(), "change requests loaded");
    Ok(requests)
}

/// Load the environment directory.
pub fn load_environments(path: &Path) -> Result<Vec<Environment>, LoadError> {
    read_json(path)
}

/// Pick the target environment: by name when given, otherwise the only one.
pub fn select_environment<'a>(
    environments: &'a [Environment],
    name: Option<&str>,
) -> Result<&'a Environment, LoadError> {
    match name {
        Some(name) => environments
            .find(name)
            .ok_or_else(|| LoadError::UnknownEnvironment {
                name: name.to_string(),
            }),
        None => match environments {
            [only] => Ok(only),
            _ => Err(LoadError::AmbiguousEnvironment {
                count: environments.len(),
            }),
        },
    }
}
