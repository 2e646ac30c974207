//! Predeclared basic type kinds.
//!
//! The declaration order is load-bearing: the ABI classifier tests
//! contiguous ranges (`Bool ..= Uintptr` is the integer-like range), so new
//! kinds must never be inserted inside an existing range.

use std::fmt;

/// Kind of a predeclared basic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BasicKind {
    /// Placeholder for a type that failed to resolve.
    Invalid = 0,

    // === Integer-like (Bool ..= Uintptr) ===
    Bool = 1,
    Int = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Uint = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Uintptr = 12,

    // === Floating point and complex ===
    Float32 = 13,
    Float64 = 14,
    Complex64 = 15,
    Complex128 = 16,

    String = 17,
    UnsafePointer = 18,

    // === Untyped constants ===
    UntypedBool = 19,
    UntypedInt = 20,
    UntypedRune = 21,
    UntypedFloat = 22,
    UntypedComplex = 23,
    UntypedString = 24,
    UntypedNil = 25,
}

impl BasicKind {
    /// Number of basic kinds. Each one is pre-interned in the pool.
    pub const COUNT: u32 = 26;

    /// Every basic kind, in declaration order.
    pub const ALL: [Self; Self::COUNT as usize] = [
        Self::Invalid,
        Self::Bool,
        Self::Int,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uintptr,
        Self::Float32,
        Self::Float64,
        Self::Complex64,
        Self::Complex128,
        Self::String,
        Self::UnsafePointer,
        Self::UntypedBool,
        Self::UntypedInt,
        Self::UntypedRune,
        Self::UntypedFloat,
        Self::UntypedComplex,
        Self::UntypedString,
        Self::UntypedNil,
    ];

    /// Recover a kind from its raw discriminant.
    #[inline]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw < Self::COUNT {
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Raw discriminant, as stored in a pool item.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Whether this kind fits the integer-like range `Bool ..= Uintptr`.
    #[inline]
    pub const fn is_integer_like(self) -> bool {
        let v = self as u8;
        v >= Self::Bool as u8 && v <= Self::Uintptr as u8
    }

    /// Whether this is a 64-bit integer width.
    #[inline]
    pub const fn is_64bit_integer(self) -> bool {
        matches!(self, Self::Int64 | Self::Uint64)
    }

    /// Intrinsic name of the kind.
    ///
    /// This is the name used to build ABI symbols, so `UnsafePointer` is
    /// just `Pointer` (its package qualifier is not part of the name).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid type",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::UnsafePointer => "Pointer",
            Self::UntypedBool => "untyped bool",
            Self::UntypedInt => "untyped int",
            Self::UntypedRune => "untyped rune",
            Self::UntypedFloat => "untyped float",
            Self::UntypedComplex => "untyped complex",
            Self::UntypedString => "untyped string",
            Self::UntypedNil => "untyped nil",
        }
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafePointer => f.write_str("unsafe.Pointer"),
            _ => f.write_str(self.name()),
        }
    }
}

// Compile-time size assertion: BasicKind must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<BasicKind>() == 1);
