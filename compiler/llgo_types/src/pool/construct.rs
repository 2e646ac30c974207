//! Type construction helpers for the Pool.
//!
//! Provides ergonomic methods for creating compound types.

use crate::{is_exported, ChanDir, FieldFlags, Idx, Pool, Tag};

/// Field declaration passed to [`Pool::structure`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldDef<'a> {
    pub name: &'a str,
    pub ty: Idx,
    pub embedded: bool,
}

impl<'a> FieldDef<'a> {
    /// A named field. Exportedness follows the name.
    pub const fn new(name: &'a str, ty: Idx) -> Self {
        Self {
            name,
            ty,
            embedded: false,
        }
    }

    /// An embedded field. `name` is the embedded type's name.
    pub const fn embedded(name: &'a str, ty: Idx) -> Self {
        Self {
            name,
            ty,
            embedded: true,
        }
    }

    fn flags(&self) -> FieldFlags {
        let mut flags = FieldFlags::empty();
        flags.set(FieldFlags::EXPORTED, is_exported(self.name));
        flags.set(FieldFlags::EMBEDDED, self.embedded);
        flags
    }
}

impl Pool {
    // === Single-child Constructors ===

    /// Create a pointer type `*elem`.
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Pointer, elem.raw())
    }

    /// Create a slice type `[]elem`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern(Tag::Slice, elem.raw())
    }

    // === Fixed-arity Constructors ===

    /// Create an array type `[len]elem`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn array(&mut self, len: u64, elem: Idx) -> Idx {
        // Layout: [len_lo, len_hi, elem]
        self.intern_complex(
            Tag::Array,
            &[(len & 0xFFFF_FFFF) as u32, (len >> 32) as u32, elem.raw()],
        )
    }

    /// Create a map type `map[key]value`.
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern_complex(Tag::Map, &[key.raw(), value.raw()])
    }

    /// Create a channel type with the given direction.
    pub fn chan(&mut self, dir: ChanDir, elem: Idx) -> Idx {
        self.intern_complex(Tag::Chan, &[dir.raw(), elem.raw()])
    }

    // === Signature Constructor ===

    /// Create a function signature `func(params...) (results...)`.
    ///
    /// For variadic signatures the last parameter is the `[]T` slice type.
    #[allow(clippy::cast_possible_truncation)]
    pub fn signature(&mut self, params: &[Idx], results: &[Idx], variadic: bool) -> Idx {
        debug_assert!(!variadic || !params.is_empty());
        // Layout: [param_count, params.., result_count, results.., variadic]
        let mut extra = Vec::with_capacity(params.len() + results.len() + 3);
        extra.push(params.len() as u32);
        extra.extend(params.iter().map(|p| p.raw()));
        extra.push(results.len() as u32);
        extra.extend(results.iter().map(|r| r.raw()));
        extra.push(u32::from(variadic));

        self.intern_complex(Tag::Signature, &extra)
    }

    // === Struct Constructor ===

    /// Create a struct type with the given fields, in declaration order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn structure(&mut self, fields: &[FieldDef<'_>]) -> Idx {
        // Layout: [field_count, (name, type, flags)..]
        let mut extra = Vec::with_capacity(fields.len() * Self::FIELD_WIDTH + 1);
        extra.push(fields.len() as u32);
        for field in fields {
            extra.push(self.intern_str(field.name));
            extra.push(field.ty.raw());
            extra.push(field.flags().bits());
        }

        self.intern_complex(Tag::Struct, &extra)
    }

    // === Interface Constructor ===

    /// Create an interface type from `(name, signature)` method pairs.
    #[allow(clippy::cast_possible_truncation)]
    pub fn interface(&mut self, methods: &[(&str, Idx)]) -> Idx {
        // Layout: [method_count, (name, signature)..]
        let mut extra = Vec::with_capacity(methods.len() * Self::METHOD_WIDTH + 1);
        extra.push(methods.len() as u32);
        for &(name, sig) in methods {
            debug_assert_eq!(self.tag(sig), Tag::Signature);
            extra.push(self.intern_str(name));
            extra.push(sig.raw());
        }

        self.intern_complex(Tag::Interface, &extra)
    }

    // === Tuple Constructor ===

    /// Create a multi-value tuple `(elems...)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        // Layout: [elem_count, elems..]
        let mut extra = Vec::with_capacity(elems.len() + 1);
        extra.push(elems.len() as u32);
        extra.extend(elems.iter().map(|e| e.raw()));

        self.intern_complex(Tag::Tuple, &extra)
    }

    // === Type Parameter Constructor ===

    /// Create a fresh type parameter. Two parameters with the same name are
    /// still distinct types.
    pub fn type_param(&mut self, name: &str) -> Idx {
        let name = self.intern_str(name);
        self.fresh(Tag::TypeParam, name)
    }

    // === Named Constructors ===

    /// Declare a defined type whose underlying type is not known yet.
    ///
    /// Complete it with [`set_underlying`](Self::set_underlying). This is how
    /// self-referential definitions are built.
    pub fn named(&mut self, pkg: &str, name: &str) -> Idx {
        let pkg = self.intern_str(pkg);
        let name = self.intern_str(name);
        // Layout: [pkg, name, underlying]
        self.fresh_complex(Tag::Named, &[pkg, name, Idx::NONE.raw()])
    }

    /// Declare a defined type with a known underlying type.
    pub fn named_with_underlying(&mut self, pkg: &str, name: &str, underlying: Idx) -> Idx {
        let named = self.named(pkg, name);
        self.set_underlying(named, underlying);
        named
    }

    /// Set the underlying type of a `Named` type.
    pub fn set_underlying(&mut self, named: Idx, underlying: Idx) {
        debug_assert_eq!(self.tag(named), Tag::Named);
        let slot = self.data(named) as usize + 2;
        self.extra[slot] = underlying.raw();
    }
}
