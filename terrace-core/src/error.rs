//! Errors raised while building or evaluating a noise graph.

use thiserror::Error;

use crate::graph::NodeId;

/// An error raised by graph wiring, module configuration or evaluation.
///
/// All variants describe a malformed graph or an out-of-domain parameter; none
/// are transient, so retrying the same call fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A required source slot is empty, or the requested slot does not exist.
    #[error("module {node} has no source module at index {index}")]
    MissingSource {
        /// The node whose slot was read.
        node: NodeId,
        /// The slot index.
        index: usize,
    },
    /// `set_source` was called with an index outside `0..arity`.
    #[error("source index {index} is out of range for a module with {arity} sources")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// The module's arity.
        arity: usize,
    },
    /// A parameter was set outside its valid domain.
    #[error("invalid {parameter}: {reason}")]
    InvalidConfiguration {
        /// The parameter name.
        parameter: &'static str,
        /// What was wrong with the value.
        reason: String,
    },
    /// The handle was not issued by this graph.
    #[error("node {0} does not belong to this graph")]
    UnknownNode(NodeId),
    /// Typed settings access asked for the wrong module kind.
    #[error("expected a {expected} module, found {found}")]
    WrongModuleKind {
        /// The requested kind.
        expected: &'static str,
        /// The kind actually stored at the node.
        found: &'static str,
    },
    /// Wiring `upstream` into `node` would make `node` depend on itself.
    #[error("connecting {upstream} into {node} would create a cycle")]
    Cycle {
        /// The consumer being wired.
        node: NodeId,
        /// The proposed source.
        upstream: NodeId,
    },
}

impl NoiseError {
    /// Shorthand for [`NoiseError::InvalidConfiguration`].
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}
