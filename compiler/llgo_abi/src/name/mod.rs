//! Structural ABI type names.
//!
//! Struct types have no declared name of their own, so the backend names
//! them by a SHA-256 digest over their shape:
//!
//! ```text
//! struct <field count>\n
//! <label> <field type name>\n      (once per field, in declaration order)
//! ```
//!
//! `label` is the field name, or `-` for embedded fields. The digest is
//! encoded as unpadded URL-safe base64 and placed after [`STRUCT_MARKER`].
//!
//! # Privacy
//!
//! A struct is private when any field is unexported or any field type is
//! private. Private names carry the defining package path
//! (`main.struct$…`) so structurally equal private types from different
//! packages never alias. Public names carry [`ABI_PREFIX`] instead
//! (`_llgo_struct$…`) and are identical in every compilation unit, which is
//! what lets the linker deduplicate them.
//!
//! # Coverage
//!
//! Only basic types, pointers and structs are nameable. Every other shape
//! (including defined types) is reported as an [`AbiError`]; callers must
//! not ask for them.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use llgo_types::{BasicKind, Idx, Pool, Tag};
use sha2::digest::Output;
use sha2::{Digest, Sha256};
use smallvec::SmallVec;

use crate::AbiError;

/// Reserved prefix for package-independent ABI names. No user identifier
/// can start with it.
pub const ABI_PREFIX: &str = "_llgo_";

/// Marker between the scope prefix and a struct digest.
pub const STRUCT_MARKER: &str = "struct$";

/// Hash label standing in for the name of an embedded field.
const EMBEDDED_LABEL: &str = "-";

/// An ABI type name and whether it is scoped to its package.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbiName {
    pub name: String,
    pub private: bool,
}

impl AbiName {
    fn public(name: String) -> Self {
        Self {
            name,
            private: false,
        }
    }
}

impl fmt::Display for AbiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// ABI name of a basic type. Basic names are never private.
pub fn basic_name(kind: BasicKind) -> String {
    format!("{ABI_PREFIX}{}", kind.name())
}

/// Helper for computing ABI type names within one package.
///
/// The hash accumulator and digest buffer are reused across calls. They hold no information between calls, but they are mutated
/// during one, hence `&mut self` everywhere.
pub struct Builder {
    pkg: String,
    hasher: Sha256,
    digest: Output<Sha256>,
}

impl Builder {
    /// Create a builder naming types on behalf of package `pkg`.
    pub fn new(pkg: impl Into<String>) -> Self {
        let pkg = pkg.into();
        tracing::debug!(pkg = %pkg, "new ABI name builder");
        Self {
            pkg,
            hasher: Sha256::new(),
            digest: Output::<Sha256>::default(),
        }
    }

    /// Re-target this builder to another package, keeping its buffers.
    pub fn init(&mut self, pkg: impl Into<String>) {
        self.pkg = pkg.into();
        Digest::reset(&mut self.hasher);
        tracing::debug!(pkg = %self.pkg, "re-initialized ABI name builder");
    }

    /// Package path that scopes private names.
    pub fn pkg(&self) -> &str {
        &self.pkg
    }

    /// ABI name of `ty`.
    ///
    /// - basic: `_llgo_<name>`, public
    /// - pointer: `*` + the element's name, with the element's privacy
    /// - struct: see [`struct_name`](Self::struct_name)
    ///
    /// # Errors
    ///
    /// Any other shape is an [`AbiError::UnsupportedShape`].
    #[track_caller]
    pub fn type_name(&mut self, pool: &Pool, ty: Idx) -> Result<AbiName, AbiError> {
        if !pool.contains(ty) {
            return Err(AbiError::unknown("type_name", ty));
        }

        match pool.tag(ty) {
            Tag::Basic => Ok(AbiName::public(basic_name(pool.basic_kind(ty)))),
            Tag::Pointer => {
                let elem = self.type_name(pool, pool.elem(ty))?;
                Ok(AbiName {
                    name: format!("*{}", elem.name),
                    private: elem.private,
                })
            }
            Tag::Struct => self.struct_name(pool, ty),
            Tag::Slice
            | Tag::Array
            | Tag::Map
            | Tag::Chan
            | Tag::Signature
            | Tag::Interface
            | Tag::Tuple
            | Tag::Named
            | Tag::TypeParam => Err(AbiError::unsupported(pool, "type_name", ty)),
        }
    }

    /// ABI name of a struct type.
    ///
    /// # Errors
    ///
    /// Fails if `ty` is not a struct, or if naming a field type fails.
    #[track_caller]
    pub fn struct_name(&mut self, pool: &Pool, ty: Idx) -> Result<AbiName, AbiError> {
        if !pool.contains(ty) {
            return Err(AbiError::unknown("struct_name", ty));
        }
        if pool.tag(ty) != Tag::Struct {
            return Err(AbiError::unsupported(pool, "struct_name", ty));
        }

        let private = self.struct_hash(pool, ty)?;
        let hash = URL_SAFE_NO_PAD.encode(self.digest.as_slice());
        let name = if private {
            format!("{}.{STRUCT_MARKER}{hash}", self.pkg)
        } else {
            format!("{ABI_PREFIX}{STRUCT_MARKER}{hash}")
        };

        tracing::trace!(ty = %pool.format_type(ty), name = %name, private, "named struct");
        Ok(AbiName { name, private })
    }

    /// Hash the struct's shape into `self.digest`, returning its privacy.
    #[track_caller]
    fn struct_hash(&mut self, pool: &Pool, ty: Idx) -> Result<bool, AbiError> {
        // Field type names come first: a nested struct field reuses the
        // accumulator, so nothing may be written to it until they are known.
        let mut entries: SmallVec<[(&str, String); 8]> =
            SmallVec::with_capacity(pool.struct_field_count(ty));
        let mut private = false;
        for field in pool.struct_fields(ty) {
            if !field.is_exported() {
                private = true;
            }
            let field_ty = self.type_name(pool, field.ty)?;
            if field_ty.private {
                private = true;
            }
            let label = if field.is_embedded() {
                EMBEDDED_LABEL
            } else {
                field.name
            };
            entries.push((label, field_ty.name));
        }

        Digest::reset(&mut self.hasher);
        self.write_line("struct", &entries.len().to_string());
        for (label, field_ty) in &entries {
            self.write_line(label, field_ty);
        }
        Digest::finalize_into_reset(&mut self.hasher, &mut self.digest);

        Ok(private)
    }

    /// Feed `"{head} {tail}\n"` to the accumulator.
    fn write_line(&mut self, head: &str, tail: &str) {
        for part in [head, " ", tail, "\n"] {
            Digest::update(&mut self.hasher, part.as_bytes());
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("pkg", &self.pkg)
            .finish_non_exhaustive()
    }
}
