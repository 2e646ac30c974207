//! Type descriptor pool.
//!
//! Stores every descriptor as a compact [`Item`] plus an `extra` array for
//! variable-length payloads. Structural shapes are hash-consed on insertion;
//! defined (`Named`) types and type parameters are always fresh.
//!
//! The pool is built once by the front-end and then only read: every query
//! here takes `&self`, so a finished pool can be shared freely between
//! classifier and namer threads.

mod construct;
mod format;

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{BasicKind, ChanDir, FieldFlags, Idx, Item, Tag};

pub use construct::FieldDef;

/// A struct field as seen through the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Field<'pool> {
    /// Declared name (the type name for embedded fields).
    pub name: &'pool str,
    /// Field type.
    pub ty: Idx,
    pub flags: FieldFlags,
}

impl Field<'_> {
    #[inline]
    pub fn is_exported(&self) -> bool {
        self.flags.contains(FieldFlags::EXPORTED)
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.flags.contains(FieldFlags::EMBEDDED)
    }
}

/// An interface method as seen through the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Method<'pool> {
    pub name: &'pool str,
    /// The method's `Signature` type.
    pub sig: Idx,
}

/// Unified storage for resolved type descriptors.
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    /// Dedup map for single-word shapes (`Pointer`, `Slice`).
    simple: FxHashMap<(Tag, u32), Idx>,
    /// Dedup map for extra-backed structural shapes.
    complex: FxHashMap<(Tag, Box<[u32]>), Idx>,
    /// Interned identifiers (field, method, package and type names).
    strings: Vec<Box<str>>,
    string_ids: FxHashMap<Box<str>, u32>,
}

impl fmt::Debug for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("items", &self.items.len())
            .field("extra", &self.extra.len())
            .field("strings", &self.strings.len())
            .finish_non_exhaustive()
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl Pool {
    /// Width of a struct field entry in the extra array.
    const FIELD_WIDTH: usize = 3;
    /// Width of an interface method entry in the extra array.
    const METHOD_WIDTH: usize = 2;

    /// Create a pool with every basic kind pre-interned.
    pub fn new() -> Self {
        let mut items = Vec::with_capacity(Idx::FIRST_DYNAMIC as usize * 2);
        items.extend(BasicKind::ALL.into_iter().map(Item::basic));
        // Pad the reserved range so dynamic types start at FIRST_DYNAMIC.
        items.resize(Idx::FIRST_DYNAMIC as usize, Item::basic(BasicKind::Invalid));

        let mut pool = Self {
            items,
            extra: Vec::new(),
            simple: FxHashMap::default(),
            complex: FxHashMap::default(),
            strings: Vec::new(),
            string_ids: FxHashMap::default(),
        };
        // Name id 0 is always the empty string.
        pool.intern_str("");
        pool
    }

    /// Number of items, including the reserved basic range.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool always holds the basic types, so it is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `idx` refers to an item in this pool.
    #[inline]
    pub fn contains(&self, idx: Idx) -> bool {
        (idx.raw() as usize) < self.items.len()
    }

    /// Get the tag of a type.
    ///
    /// # Panics
    /// Panics if `idx` is not in the pool (including `Idx::NONE`).
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.raw() as usize].tag
    }

    /// Get the raw data word of a type.
    #[inline]
    pub fn data(&self, idx: Idx) -> u32 {
        self.items[idx.raw() as usize].data
    }

    // === Interning ===

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pool indices are bounded by u32 by construction"
    )]
    fn push(&mut self, item: Item) -> Idx {
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(item);
        idx
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "extra offsets are bounded by u32 by construction"
    )]
    fn push_extra(&mut self, tag: Tag, extra: &[u32]) -> Idx {
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(extra);
        self.push(Item::with_extra(tag, start))
    }

    /// Intern a single-word shape, returning the existing index if present.
    pub(crate) fn intern(&mut self, tag: Tag, data: u32) -> Idx {
        if let Some(&idx) = self.simple.get(&(tag, data)) {
            return idx;
        }
        let idx = self.push(Item::new(tag, data));
        self.simple.insert((tag, data), idx);
        idx
    }

    /// Intern an extra-backed shape, returning the existing index if present.
    pub(crate) fn intern_complex(&mut self, tag: Tag, extra: &[u32]) -> Idx {
        let key = (tag, Box::<[u32]>::from(extra));
        if let Some(&idx) = self.complex.get(&key) {
            return idx;
        }
        let idx = self.push_extra(tag, extra);
        self.complex.insert(key, idx);
        idx
    }

    /// Allocate a fresh single-word item that is never deduplicated.
    pub(crate) fn fresh(&mut self, tag: Tag, data: u32) -> Idx {
        self.push(Item::new(tag, data))
    }

    /// Allocate a fresh extra-backed item that is never deduplicated.
    pub(crate) fn fresh_complex(&mut self, tag: Tag, extra: &[u32]) -> Idx {
        self.push_extra(tag, extra)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "identifier count is bounded by u32 by construction"
    )]
    pub(crate) fn intern_str(&mut self, s: &str) -> u32 {
        if let Some(&id) = self.string_ids.get(s) {
            return id;
        }
        let id = self.strings.len() as u32;
        self.strings.push(s.into());
        self.string_ids.insert(s.into(), id);
        id
    }

    /// Resolve an interned identifier.
    #[inline]
    pub fn str(&self, id: u32) -> &str {
        &self.strings[id as usize]
    }

    #[inline]
    fn extra_at(&self, idx: Idx, offset: usize) -> u32 {
        self.extra[self.data(idx) as usize + offset]
    }

    // === Basic ===

    /// Kind of a `Basic` type.
    pub fn basic_kind(&self, idx: Idx) -> BasicKind {
        debug_assert_eq!(self.tag(idx), Tag::Basic);
        BasicKind::from_raw(self.data(idx)).unwrap_or(BasicKind::Invalid)
    }

    // === Single child ===

    /// Element type of a `Pointer`, `Slice`, `Array` or `Chan`.
    pub fn elem(&self, idx: Idx) -> Idx {
        match self.tag(idx) {
            Tag::Pointer | Tag::Slice => Idx::from_raw(self.data(idx)),
            Tag::Array => Idx::from_raw(self.extra_at(idx, 2)),
            Tag::Chan => Idx::from_raw(self.extra_at(idx, 1)),
            tag => panic!("elem() called on {tag} type"),
        }
    }

    // === Fixed arity ===

    /// Length of an `Array`.
    pub fn array_len(&self, idx: Idx) -> u64 {
        debug_assert_eq!(self.tag(idx), Tag::Array);
        let lo = u64::from(self.extra_at(idx, 0));
        let hi = u64::from(self.extra_at(idx, 1));
        (hi << 32) | lo
    }

    pub fn map_key(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra_at(idx, 0))
    }

    pub fn map_value(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Map);
        Idx::from_raw(self.extra_at(idx, 1))
    }

    pub fn chan_dir(&self, idx: Idx) -> ChanDir {
        debug_assert_eq!(self.tag(idx), Tag::Chan);
        ChanDir::from_raw(self.extra_at(idx, 0))
    }

    // === Signature ===

    /// Parameter types of a `Signature`.
    pub fn signature_params(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        let count = self.extra_at(idx, 0) as usize;
        self.idx_list(idx, 1, count)
    }

    /// Result types of a `Signature`.
    pub fn signature_results(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        let params = self.extra_at(idx, 0) as usize;
        let count = self.extra_at(idx, 1 + params) as usize;
        self.idx_list(idx, 2 + params, count)
    }

    /// Whether the last parameter of a `Signature` is variadic.
    pub fn signature_is_variadic(&self, idx: Idx) -> bool {
        debug_assert_eq!(self.tag(idx), Tag::Signature);
        let params = self.extra_at(idx, 0) as usize;
        let results = self.extra_at(idx, 1 + params) as usize;
        self.extra_at(idx, 2 + params + results) != 0
    }

    // === Struct ===

    /// Number of fields in a `Struct`.
    pub fn struct_field_count(&self, idx: Idx) -> usize {
        debug_assert_eq!(self.tag(idx), Tag::Struct);
        self.extra_at(idx, 0) as usize
    }

    /// The `i`-th field of a `Struct`, in declaration order.
    pub fn struct_field(&self, idx: Idx, i: usize) -> Field<'_> {
        debug_assert!(i < self.struct_field_count(idx));
        let base = 1 + i * Self::FIELD_WIDTH;
        Field {
            name: self.str(self.extra_at(idx, base)),
            ty: Idx::from_raw(self.extra_at(idx, base + 1)),
            flags: FieldFlags::from_bits_truncate(self.extra_at(idx, base + 2)),
        }
    }

    /// All fields of a `Struct`, in declaration order.
    pub fn struct_fields(&self, idx: Idx) -> impl ExactSizeIterator<Item = Field<'_>> + '_ {
        (0..self.struct_field_count(idx)).map(move |i| self.struct_field(idx, i))
    }

    // === Interface ===

    /// Methods of an `Interface`, in declaration order.
    pub fn interface_methods(&self, idx: Idx) -> impl ExactSizeIterator<Item = Method<'_>> + '_ {
        debug_assert_eq!(self.tag(idx), Tag::Interface);
        let count = self.extra_at(idx, 0) as usize;
        (0..count).map(move |i| {
            let base = 1 + i * Self::METHOD_WIDTH;
            Method {
                name: self.str(self.extra_at(idx, base)),
                sig: Idx::from_raw(self.extra_at(idx, base + 1)),
            }
        })
    }

    // === Tuple ===

    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        let count = self.extra_at(idx, 0) as usize;
        self.idx_list(idx, 1, count)
    }

    // === Named ===

    /// Package path of a `Named` type (empty for universe-scope types).
    pub fn named_pkg(&self, idx: Idx) -> &str {
        debug_assert_eq!(self.tag(idx), Tag::Named);
        self.str(self.extra_at(idx, 0))
    }

    /// Declared name of a `Named` type.
    pub fn named_name(&self, idx: Idx) -> &str {
        debug_assert_eq!(self.tag(idx), Tag::Named);
        self.str(self.extra_at(idx, 1))
    }

    /// Directly declared underlying type of a `Named` type.
    ///
    /// May itself be `Named`, or `Idx::NONE` if not yet set.
    pub fn named_underlying(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Named);
        Idx::from_raw(self.extra_at(idx, 2))
    }

    // === TypeParam ===

    pub fn type_param_name(&self, idx: Idx) -> &str {
        debug_assert_eq!(self.tag(idx), Tag::TypeParam);
        self.str(self.data(idx))
    }

    // === Underlying ===

    /// Strip every naming layer from a type.
    ///
    /// Non-`Named` types are their own underlying type. Returns `Idx::NONE`
    /// when a named chain ends in an unset underlying type or loops. An
    /// index outside this pool ends the walk and is returned unchanged.
    pub fn underlying(&self, idx: Idx) -> Idx {
        let mut current = idx;
        // A well-formed chain visits each item at most once.
        for _ in 0..self.items.len() {
            if current.is_none() || !self.contains(current) || self.tag(current) != Tag::Named
            {
                return current;
            }
            current = self.named_underlying(current);
        }
        Idx::NONE
    }

    fn idx_list(&self, idx: Idx, offset: usize, count: usize) -> Vec<Idx> {
        let start = self.data(idx) as usize + offset;
        self.extra[start..start + count]
            .iter()
            .copied()
            .map(Idx::from_raw)
            .collect()
    }
}

#[cfg(test)]
mod tests;
