//! Resolved type descriptors for the llgo backend.
//!
//! The front-end hands the backend a fully checked type universe. This crate
//! is the backend-side view of it: a closed grammar of type shapes
//! ([`Tag`]), interned in a [`Pool`] and referenced by [`Idx`].
//!
//! # Type Grammar
//!
//! | Shape | Payload |
//! |-------|---------|
//! | `Basic` | a [`BasicKind`] |
//! | `Pointer`, `Slice` | element type |
//! | `Array` | length + element type |
//! | `Map` | key + value types |
//! | `Chan` | [`ChanDir`] + element type |
//! | `Signature` | params, results, variadic flag |
//! | `Struct` | ordered fields with [`FieldFlags`] |
//! | `Interface` | ordered methods |
//! | `Tuple` | multi-value result list |
//! | `Named` | package, name, underlying type |
//! | `TypeParam` | name |
//!
//! Structural shapes are hash-consed: two structurally equal descriptors
//! share one `Idx`. Defined types are identified by declaration, not
//! structure, and are never merged.

mod basic;
mod flags;
mod idx;
mod item;
mod pool;
mod tag;

pub use basic::BasicKind;
pub use flags::{is_exported, ChanDir, FieldFlags};
pub use idx::Idx;
pub use item::Item;
pub use pool::{Field, FieldDef, Method, Pool};
pub use tag::Tag;
