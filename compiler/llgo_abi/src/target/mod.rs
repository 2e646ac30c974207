//! Target configuration.
//!
//! The ABI layer only needs one fact about the target: its native word
//! size. It is derived from a target triple (`<arch>-<vendor>-<os>[-<env>]`)
//! or from the host.
//!
//! ```ignore
//! use llgo_abi::Target;
//!
//! let wasm = Target::from_triple("wasm32-unknown-unknown")?;
//! assert!(wasm.is_32bit());
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for target configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Target triple is not in `<arch>-<vendor>-<os>[-<env>]` form.
    #[error("invalid target triple '{triple}': {reason}")]
    InvalidTripleFormat { triple: String, reason: String },
}

/// Architectures whose native word is 32 bits wide.
///
/// Both LLVM-style arch names and Go-style `GOARCH` names are accepted.
const WORD32_ARCHES: &[&str] = &[
    "wasm32", "i386", "i586", "i686", "x86", "386", "arm", "armeb", "mips", "mipsel", "mipsle",
    "powerpc", "sparc", "hexagon", "m68k",
];

/// Arch prefixes that always denote 32-bit targets (`armv7`, `thumbv7em`, `riscv32imac`...).
const WORD32_PREFIXES: &[&str] = &["armv", "thumb", "riscv32"];

/// Native word size of a target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordSize {
    Bits32,
    Bits64,
}

impl WordSize {
    /// Word size of the machine running the compiler.
    pub const fn host() -> Self {
        if cfg!(target_pointer_width = "32") {
            Self::Bits32
        } else {
            Self::Bits64
        }
    }

    /// Word size for an architecture name. Unknown names default to 64-bit.
    pub fn for_arch(arch: &str) -> Self {
        if WORD32_ARCHES.contains(&arch) || WORD32_PREFIXES.iter().any(|p| arch.starts_with(p)) {
            Self::Bits32
        } else {
            Self::Bits64
        }
    }

    /// Pointer size in bytes.
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }
}

/// Target configuration consumed by the classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    arch: String,
    word_size: WordSize,
}

impl Target {
    /// A target known only by its word size.
    pub fn new(word_size: WordSize) -> Self {
        Self {
            arch: "unknown".to_string(),
            word_size,
        }
    }

    /// The host target.
    pub fn native() -> Self {
        Self {
            arch: std::env::consts::ARCH.to_string(),
            word_size: WordSize::host(),
        }
    }

    /// Parse a target triple.
    pub fn from_triple(triple: &str) -> Result<Self, TargetError> {
        let parts: Vec<&str> = triple.split('-').collect();

        if parts.len() < 3 {
            return Err(TargetError::InvalidTripleFormat {
                triple: triple.to_string(),
                reason: "expected at least 3 components: <arch>-<vendor>-<os>".to_string(),
            });
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(TargetError::InvalidTripleFormat {
                triple: triple.to_string(),
                reason: "empty component".to_string(),
            });
        }

        let arch = parts[0];
        let target = Self {
            arch: arch.to_string(),
            word_size: WordSize::for_arch(arch),
        };
        tracing::debug!(triple, word_size = ?target.word_size, "configured ABI target");
        Ok(target)
    }

    #[must_use]
    pub fn arch(&self) -> &str {
        &self.arch
    }

    #[must_use]
    pub fn word_size(&self) -> WordSize {
        self.word_size
    }

    /// Whether 64-bit scalars overflow a single variant-cell word.
    #[must_use]
    pub fn is_32bit(&self) -> bool {
        self.word_size == WordSize::Bits32
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}-bit)", self.arch, self.word_size.bytes() * 8)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
