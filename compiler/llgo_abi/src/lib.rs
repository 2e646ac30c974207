//! ABI representation layer for the llgo backend.
//!
//! This crate answers two questions for the code generator:
//!
//! - **How is a value boxed?** [`kind_of`] / [`KindClassifier`] map a type
//!   to a [`Kind`]: stored as a pointer, as an integer, bit-cast into an
//!   integer slot, or indirectly through a reference. Single-field structs
//!   and single-element arrays are transparent and classify as what they
//!   wrap.
//!
//! - **What is the type called across compilation units?** [`Builder`]
//!   produces structural, SHA-256-based names for struct types (and
//!   pointers to them). Names of structs that expose only exported
//!   structure are package-independent so the linker can merge them;
//!   anything touching unexported structure is scoped to its package.
//!
//! # Concurrency
//!
//! Classification is pure. Naming reuses hash scratch state, so every
//! [`Builder`] method takes `&mut self`; share one across threads through
//! [`SharedBuilder`] or give each worker its own builder.
//!
//! # Crate Dependencies
//!
//! `llgo_abi` depends only on `llgo_types` for descriptors. No code
//! generation happens here.

mod classify;
mod error;
mod name;
mod shared;
mod target;

use std::fmt;
use std::sync::Once;

pub use classify::{kind_of, Classification, KindClassifier};
pub use error::AbiError;
pub use name::{basic_name, AbiName, Builder, ABI_PREFIX, STRUCT_MARKER};
pub use shared::SharedBuilder;
pub use target::{Target, TargetError, WordSize};

/// How a value is stored inside a variant cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Not classified.
    #[default]
    Invalid,
    /// Memory is allocated for the value; the cell holds its address.
    Indirect,
    /// A pointer value stored directly in the cell.
    Pointer,
    /// An integer value stored directly in the cell.
    Integer,
    /// A non-integer scalar bit-cast into the cell's integer word.
    BitCast,
}

impl Kind {
    /// Whether the value itself lives in the cell (no allocation).
    #[inline]
    pub const fn is_direct(self) -> bool {
        matches!(self, Self::Pointer | Self::Integer | Self::BitCast)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Indirect => "indirect",
            Self::Pointer => "pointer",
            Self::Integer => "integer",
            Self::BitCast => "bitcast",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=llgo_abi=debug` or `RUST_LOG=llgo_abi=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host application may already own the global subscriber.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
