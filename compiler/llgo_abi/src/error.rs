//! Internal-invariant violations.
//!
//! The classifier and namer are total over the type grammar they accept.
//! Reaching any other shape means the front-end handed the backend something
//! it promised never to produce, so none of these errors is recoverable:
//! callers are expected to abort the compilation and report the payload.

use std::panic::Location;

use llgo_types::{Idx, Pool, Tag};
use thiserror::Error;

/// A type reached an ABI operation that cannot handle it.
///
/// Every variant records the operation, the offending type (pre-formatted,
/// so the error outlives the pool) and the caller location of the public
/// entry point that was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("internal invariant violated: {operation} does not support {tag} type `{ty}` (called at {location})")]
    UnsupportedShape {
        operation: &'static str,
        tag: Tag,
        ty: String,
        location: &'static Location<'static>,
    },

    #[error("internal invariant violated: {operation} reached named type `{ty}` with no underlying type (called at {location})")]
    UnresolvedNamed {
        operation: &'static str,
        ty: String,
        location: &'static Location<'static>,
    },

    #[error("internal invariant violated: {operation} got {idx:?}, which is not in the type pool (called at {location})")]
    UnknownType {
        operation: &'static str,
        idx: Idx,
        location: &'static Location<'static>,
    },

    #[error("internal invariant violated: {operation} found `{ty}` nested inside itself without indirection (called at {location})")]
    InfiniteType {
        operation: &'static str,
        ty: String,
        location: &'static Location<'static>,
    },
}

impl AbiError {
    #[track_caller]
    pub(crate) fn unsupported(pool: &Pool, operation: &'static str, ty: Idx) -> Self {
        Self::UnsupportedShape {
            operation,
            tag: pool.tag(ty),
            ty: pool.format_type(ty),
            location: Location::caller(),
        }
        .logged()
    }

    #[track_caller]
    pub(crate) fn unresolved(pool: &Pool, operation: &'static str, ty: Idx) -> Self {
        Self::UnresolvedNamed {
            operation,
            ty: pool.format_type(ty),
            location: Location::caller(),
        }
        .logged()
    }

    #[track_caller]
    pub(crate) fn unknown(operation: &'static str, idx: Idx) -> Self {
        Self::UnknownType {
            operation,
            idx,
            location: Location::caller(),
        }
        .logged()
    }

    #[track_caller]
    pub(crate) fn infinite(pool: &Pool, operation: &'static str, ty: Idx) -> Self {
        Self::InfiniteType {
            operation,
            ty: pool.format_type(ty),
            location: Location::caller(),
        }
        .logged()
    }

    fn logged(self) -> Self {
        tracing::error!(error = %self, "ABI invariant violation");
        self
    }

    /// The ABI operation that raised the error.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::UnsupportedShape { operation, .. }
            | Self::UnresolvedNamed { operation, .. }
            | Self::UnknownType { operation, .. }
            | Self::InfiniteType { operation, .. } => operation,
        }
    }

    /// Where the failing public entry point was called from.
    pub fn location(&self) -> &'static Location<'static> {
        match self {
            Self::UnsupportedShape { location, .. }
            | Self::UnresolvedNamed { location, .. }
            | Self::UnknownType { location, .. }
            | Self::InfiniteType { location, .. } => location,
        }
    }
}
