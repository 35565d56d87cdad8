//! Resource classifier — picks the emitter for a change request.
//!
//! Dispatch is a flat table keyed by resource type, operation class and file
//! kind. A new resource kind is one more row. Requests that match no row get
//! [`Emitter::Noop`] so the rest of the group is still generated.

use tracing::warn;

use crate::emit::{EmitContext, Emitter};
use crate::model::{ChangeRequest, FileKind, Operation, ResourceType};

/// Operations are dispatched as delete versus everything else; define and
/// alter share an emitter and differ only in the command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpClass {
    Delete,
    Define,
}

impl From<Operation> for OpClass {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Delete => Self::Delete,
            Operation::Define | Operation::Alter => Self::Define,
        }
    }
}

/// File kind constraint of a dispatch row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindMatch {
    /// The row applies whatever the file kind (or for non-file resources).
    Any,
    Is(FileKind),
}

impl KindMatch {
    fn matches(self, kind: Option<FileKind>) -> bool {
        match self {
            Self::Any => true,
            Self::Is(k) => kind == Some(k),
        }
    }
}

const DISPATCH: &[(ResourceType, OpClass, KindMatch, Emitter)] = &[
    (ResourceType::File, OpClass::Delete, KindMatch::Any, Emitter::DeleteFile),
    (ResourceType::File, OpClass::Define, KindMatch::Is(FileKind::Local), Emitter::DefineLocalFile),
    (
        ResourceType::File,
        OpClass::Define,
        KindMatch::Is(FileKind::Remote),
        Emitter::DefineRemoteFile,
    ),
    (
        ResourceType::File,
        OpClass::Define,
        KindMatch::Is(FileKind::StandardPattern),
        Emitter::DefinePatternFiles,
    ),
    (ResourceType::Transaction, OpClass::Delete, KindMatch::Any, Emitter::DeleteTransaction),
    (ResourceType::Transaction, OpClass::Define, KindMatch::Any, Emitter::DefineTransaction),
    (ResourceType::Program, OpClass::Delete, KindMatch::Any, Emitter::DeleteProgram),
    (ResourceType::Program, OpClass::Define, KindMatch::Any, Emitter::DefineProgram),
    (ResourceType::Map, OpClass::Delete, KindMatch::Any, Emitter::DeleteMapset),
    (ResourceType::Map, OpClass::Define, KindMatch::Any, Emitter::DefineMapset),
    (ResourceType::Table, OpClass::Delete, KindMatch::Any, Emitter::DeleteTable),
    (ResourceType::Table, OpClass::Define, KindMatch::Any, Emitter::DefineTable),
];

/// The emitter chosen for a request and the operation it runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub emitter: Emitter,
    pub operation: Operation,
}

impl Strategy {
    const NOOP: Self = Self {
        emitter: Emitter::Noop,
        operation: Operation::Define,
    };

    pub fn is_noop(&self) -> bool {
        self.emitter == Emitter::Noop
    }

    /// Append the request's lines to `out`.
    pub fn emit(&self, request: &ChangeRequest, ctx: &EmitContext<'_>, out: &mut String) {
        self.emitter.emit(request, self.operation, ctx, out);
    }
}

/// Select the emitter for `request`.
pub fn classify(request: &ChangeRequest) -> Strategy {
    let Some(resource) = ResourceType::from_tag(&request.resource_type) else {
        warn!(
            request = %request.label(),
            resource_type = %request.resource_type,
            "unknown resource type, request skipped"
        );
        return Strategy::NOOP;
    };
    let Some(operation) = Operation::from_tag(request.operation.as_deref()) else {
        warn!(
            request = %request.label(),
            operation = request.operation.as_deref().unwrap_or_default(),
            "unknown operation, request skipped"
        );
        return Strategy::NOOP;
    };
    let kind = request.file_kind.as_deref().and_then(FileKind::from_tag);
    let class = OpClass::from(operation);

    let row = DISPATCH
        .iter()
        .find(|(r, c, k, _)| *r == resource && *c == class && k.matches(kind));
    match row {
        Some(&(_, _, _, emitter)) => Strategy { emitter, operation },
        None => {
            warn!(
                request = %request.label(),
                %resource,
                file_kind = request.file_kind.as_deref().unwrap_or_default(),
                "no emitter for file kind, request skipped"
            );
            Strategy::NOOP
        }
    }
}
