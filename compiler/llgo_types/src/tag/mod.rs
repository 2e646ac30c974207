//! Type shape tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its shape. The tag
//! determines how to interpret the associated `data` field.
//!
//! # Tag Categories
//!
//! - 0-15: Basic types (data = `BasicKind` discriminant)
//! - 16-31: Single-child types (data = child Idx)
//! - 32-47: Fixed-arity types (data = extra index)
//! - 48-79: Variable-arity types (data = extra index with length prefix)
//! - 80-95: Defined types (data = extra index)
//! - 96-111: Generic parameters (data = name id)

use std::fmt;

/// Type shape discriminant.
///
/// The grammar is closed: consumers are expected to `match` exhaustively.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// Predeclared basic type.
    Basic = 0,

    // === Single-child (16-31) ===
    /// Pointer type `*T`.
    Pointer = 16,
    /// Slice type `[]T`.
    Slice = 17,

    // === Fixed arity (32-47) ===
    /// Array type `[N]T`. Extra layout: `[len_lo, len_hi, elem]`.
    Array = 32,
    /// Map type `map[K]V`. Extra layout: `[key, value]`.
    Map = 33,
    /// Channel type `chan T`. Extra layout: `[dir, elem]`.
    Chan = 34,

    // === Variable arity (48-79) ===
    /// Function signature.
    /// Extra layout: `[param_count, params.., result_count, results.., variadic]`.
    Signature = 48,
    /// Struct type. Extra layout: `[field_count, (name, type, flags)..]`.
    Struct = 49,
    /// Interface type. Extra layout: `[method_count, (name, signature)..]`.
    Interface = 50,
    /// Multi-value result list. Extra layout: `[count, elems..]`.
    Tuple = 51,

    // === Defined types (80-95) ===
    /// Defined type. Extra layout: `[pkg, name, underlying]`.
    Named = 80,

    // === Generic parameters (96-111) ===
    /// Uninstantiated type parameter.
    TypeParam = 96,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::Map
                | Self::Chan
                | Self::Signature
                | Self::Struct
                | Self::Interface
                | Self::Tuple
                | Self::Named
        )
    }

    /// Check if values of this shape are opaque reference-sized handles.
    #[inline]
    pub const fn is_handle(self) -> bool {
        matches!(self, Self::Pointer | Self::Signature | Self::Map | Self::Chan)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pointer => "pointer",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Chan => "chan",
            Self::Signature => "signature",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Tuple => "tuple",
            Self::Named => "named",
            Self::TypeParam => "type parameter",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Compile-time size assertion: Tag must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests;
