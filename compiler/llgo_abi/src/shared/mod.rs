//! Mutex-serialized name builder.
//!
//! [`Builder`] reuses its hash state, so concurrent callers must either own
//! one builder each or funnel through a lock. `SharedBuilder` is the lock:
//! every call takes the mutex for its full duration, so resets and writes
//! from different threads never interleave.

use llgo_types::{Idx, Pool};
use parking_lot::Mutex;

use crate::{AbiError, AbiName, Builder};

/// A [`Builder`] that can be shared across threads.
#[derive(Debug)]
pub struct SharedBuilder {
    inner: Mutex<Builder>,
}

impl SharedBuilder {
    pub fn new(pkg: impl Into<String>) -> Self {
        Self::from(Builder::new(pkg))
    }

    /// Package path that scopes private names.
    pub fn pkg(&self) -> String {
        self.inner.lock().pkg().to_string()
    }

    /// See [`Builder::type_name`].
    ///
    /// # Errors
    ///
    /// Same as [`Builder::type_name`].
    #[track_caller]
    pub fn type_name(&self, pool: &Pool, ty: Idx) -> Result<AbiName, AbiError> {
        self.inner.lock().type_name(pool, ty)
    }

    /// See [`Builder::struct_name`].
    ///
    /// # Errors
    ///
    /// Same as [`Builder::struct_name`].
    #[track_caller]
    pub fn struct_name(&self, pool: &Pool, ty: Idx) -> Result<AbiName, AbiError> {
        self.inner.lock().struct_name(pool, ty)
    }

    /// Take the builder back for single-owner use.
    pub fn into_inner(self) -> Builder {
        self.inner.into_inner()
    }
}

impl From<Builder> for SharedBuilder {
    fn from(builder: Builder) -> Self {
        Self {
            inner: Mutex::new(builder),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
