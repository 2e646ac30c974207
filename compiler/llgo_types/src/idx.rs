//! Type index handle.
//!
//! All descriptors live in a [`Pool`](crate::Pool) and are referenced by a
//! 32-bit `Idx`. Structural types are hash-consed, so two structurally equal
//! descriptors share an index and compare equal in O(1).
//!
//! Every [`BasicKind`] is pre-interned at the index equal to its
//! discriminant, so basic types never need a pool lookup.

use std::fmt;

use crate::BasicKind;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic Types (indices 0-25) ===

    pub const INVALID: Self = Self::basic(BasicKind::Invalid);
    pub const BOOL: Self = Self::basic(BasicKind::Bool);
    pub const INT: Self = Self::basic(BasicKind::Int);
    pub const INT8: Self = Self::basic(BasicKind::Int8);
    pub const INT16: Self = Self::basic(BasicKind::Int16);
    pub const INT32: Self = Self::basic(BasicKind::Int32);
    pub const INT64: Self = Self::basic(BasicKind::Int64);
    pub const UINT: Self = Self::basic(BasicKind::Uint);
    pub const UINT8: Self = Self::basic(BasicKind::Uint8);
    pub const UINT16: Self = Self::basic(BasicKind::Uint16);
    pub const UINT32: Self = Self::basic(BasicKind::Uint32);
    pub const UINT64: Self = Self::basic(BasicKind::Uint64);
    pub const UINTPTR: Self = Self::basic(BasicKind::Uintptr);
    pub const FLOAT32: Self = Self::basic(BasicKind::Float32);
    pub const FLOAT64: Self = Self::basic(BasicKind::Float64);
    pub const COMPLEX64: Self = Self::basic(BasicKind::Complex64);
    pub const COMPLEX128: Self = Self::basic(BasicKind::Complex128);
    pub const STRING: Self = Self::basic(BasicKind::String);
    pub const UNSAFE_POINTER: Self = Self::basic(BasicKind::UnsafePointer);

    // === Reserved Range (26-63) ===

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 64;

    /// Sentinel value indicating no type (e.g. an unresolved underlying type).
    pub const NONE: Self = Self(u32::MAX);

    /// Index of the pre-interned basic type of the given kind.
    #[inline]
    pub const fn basic(kind: BasicKind) -> Self {
        Self(kind as u32)
    }

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned basic type.
    #[inline]
    pub const fn is_basic(self) -> bool {
        self.0 < BasicKind::COUNT
    }

    /// The basic kind for pre-interned indices.
    #[inline]
    pub const fn basic_kind(self) -> Option<BasicKind> {
        BasicKind::from_raw(self.0)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        match self.basic_kind() {
            Some(kind) => write!(f, "Idx::{kind:?}"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "<none>");
        }
        match self.basic_kind() {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_indices_match_kind_discriminants() {
        assert_eq!(Idx::INVALID.raw(), 0);
        assert_eq!(Idx::BOOL.raw(), 1);
        assert_eq!(Idx::INT64.raw(), 6);
        assert_eq!(Idx::UINTPTR.raw(), 12);
        assert_eq!(Idx::FLOAT64.raw(), 14);
        assert_eq!(Idx::UNSAFE_POINTER.raw(), 18);
        for kind in BasicKind::ALL {
            assert_eq!(Idx::basic(kind).basic_kind(), Some(kind));
        }
    }

    #[test]
    fn basic_check_works() {
        assert!(Idx::INT.is_basic());
        assert!(Idx::basic(BasicKind::UntypedNil).is_basic());
        assert!(!Idx::from_raw(Idx::FIRST_DYNAMIC).is_basic());
        assert!(!Idx::NONE.is_basic());
    }

    #[test]
    fn none_sentinel_works() {
        assert!(Idx::NONE.is_none());
        assert!(!Idx::INT.is_none());
        assert_eq!(Idx::NONE.basic_kind(), None);
    }

    #[test]
    fn debug_and_display() {
        assert_eq!(format!("{:?}", Idx::INT32), "Idx::Int32");
        assert_eq!(format!("{:?}", Idx::from_raw(100)), "Idx(100)");
        assert_eq!(Idx::UNSAFE_POINTER.to_string(), "unsafe.Pointer");
        assert_eq!(Idx::NONE.to_string(), "<none>");
    }
}
