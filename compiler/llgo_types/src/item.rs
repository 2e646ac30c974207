//! Compact type item storage.
//!
//! Each type in the pool is stored as an `Item` with a tag and data field.
//! The interpretation of `data` depends on the tag.

use crate::{BasicKind, Tag};

/// A single type item in the pool.
///
/// - `tag`: Identifies the type shape (see [`Tag`])
/// - `data`: Meaning depends on tag (basic kind, child index, extra index
///   or name id)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Item {
    /// Type shape discriminant.
    pub tag: Tag,
    /// Tag-dependent data field.
    pub data: u32,
}

impl Item {
    /// Create a new item with the given tag and data.
    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    /// Create a basic type item.
    #[inline]
    pub const fn basic(kind: BasicKind) -> Self {
        Self {
            tag: Tag::Basic,
            data: kind.raw(),
        }
    }

    /// Create an item that references the extra array.
    #[inline]
    pub const fn with_extra(tag: Tag, extra_idx: u32) -> Self {
        debug_assert!(tag.uses_extra());
        Self {
            tag,
            data: extra_idx,
        }
    }
}
