//! Variant-cell kind classifier.
//!
//! Decides how a value is stored in a fixed-size polymorphic slot. The
//! decision looks at the type's underlying shape and the target word size;
//! single-field structs and single-element arrays are transparent and
//! classify as whatever they wrap.

use llgo_types::{BasicKind, Idx, Pool, Tag};

use crate::{AbiError, Kind, Target};

/// Result of classifying a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    /// How the value is stored in a variant cell.
    pub kind: Kind,
    /// The type classification stopped at. For transparent wrappers this is
    /// the innermost wrapped type, not the wrapper.
    pub ty: Idx,
    /// Starting level plus the number of wrappers that were unwrapped.
    pub level: u32,
}

const OPERATION: &str = "classify";

/// Classify `raw` for storage in a variant cell.
///
/// `level` is returned incremented once per transparent wrapper (saturating
/// at `u32::MAX`); it has no influence on the result otherwise.
///
/// # Errors
///
/// Returns an [`AbiError`] for shapes outside the boxable grammar (tuples,
/// type parameters, unresolved named types, indices from another pool, or
/// wrappers that contain themselves). All of these are front-end contract
/// breaches.
#[track_caller]
pub fn kind_of(
    pool: &Pool,
    raw: Idx,
    level: u32,
    is_32bit: bool,
) -> Result<Classification, AbiError> {
    classify_inner(pool, raw, level, is_32bit, 0)
}

#[track_caller]
fn classify_inner(
    pool: &Pool,
    raw: Idx,
    level: u32,
    is_32bit: bool,
    unwrapped: usize,
) -> Result<Classification, AbiError> {
    if !pool.contains(raw) {
        return Err(AbiError::unknown(OPERATION, raw));
    }
    // A finite type cannot have more nested wrappers than the pool has items.
    if unwrapped > pool.len() {
        return Err(AbiError::infinite(pool, OPERATION, raw));
    }

    let underlying = pool.underlying(raw);
    if underlying.is_none() {
        return Err(AbiError::unresolved(pool, OPERATION, raw));
    }
    if !pool.contains(underlying) {
        return Err(AbiError::unknown(OPERATION, underlying));
    }

    let kind = match pool.tag(underlying) {
        Tag::Basic => basic_kind(pool.basic_kind(underlying), is_32bit),

        // Opaque reference-sized handles.
        tag if tag.is_handle() => Kind::Pointer,

        Tag::Struct if pool.struct_field_count(underlying) == 1 => {
            let inner = pool.struct_field(underlying, 0).ty;
            let level = level.saturating_add(1);
            tracing::trace!(
                wrapper = %pool.format_type(raw),
                level,
                "unwrapping single-field struct"
            );
            return classify_inner(pool, inner, level, is_32bit, unwrapped + 1);
        }
        Tag::Array if pool.array_len(underlying) == 1 => {
            let inner = pool.elem(underlying);
            let level = level.saturating_add(1);
            tracing::trace!(
                wrapper = %pool.format_type(raw),
                level,
                "unwrapping single-element array"
            );
            return classify_inner(pool, inner, level, is_32bit, unwrapped + 1);
        }

        Tag::Struct | Tag::Array | Tag::Interface | Tag::Slice => Kind::Indirect,

        // `underlying` never stops on a named type.
        Tag::Named => return Err(AbiError::unresolved(pool, OPERATION, raw)),

        // Tuples and type parameters; handles were matched above.
        _ => return Err(AbiError::unsupported(pool, OPERATION, underlying)),
    };

    Ok(Classification {
        kind,
        ty: raw,
        level,
    })
}

fn basic_kind(kind: BasicKind, is_32bit: bool) -> Kind {
    match kind {
        k if k.is_integer_like() => {
            if is_32bit && k.is_64bit_integer() {
                Kind::Indirect
            } else {
                Kind::Integer
            }
        }
        BasicKind::Float32 => Kind::BitCast,
        BasicKind::Float64 | BasicKind::Complex64 => {
            if is_32bit {
                Kind::Indirect
            } else {
                Kind::BitCast
            }
        }
        BasicKind::UnsafePointer => Kind::Pointer,
        // Invalid, complex128, string and untyped constants never fit a word.
        _ => Kind::Indirect,
    }
}

/// Classifier bound to one pool and one target.
///
/// Holds no mutable state, so a single instance can be shared across
/// threads for as long as the pool is.
#[derive(Clone, Debug)]
pub struct KindClassifier<'pool> {
    pool: &'pool Pool,
    target: Target,
}

impl<'pool> KindClassifier<'pool> {
    pub fn new(pool: &'pool Pool, target: Target) -> Self {
        Self { pool, target }
    }

    /// Access the underlying pool.
    pub fn pool(&self) -> &'pool Pool {
        self.pool
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Classify a type starting at level 0.
    ///
    /// # Errors
    ///
    /// See [`kind_of`].
    #[track_caller]
    pub fn classify(&self, ty: Idx) -> Result<Classification, AbiError> {
        kind_of(self.pool, ty, 0, self.target.is_32bit())
    }

    /// Classify a type starting at an explicit level.
    ///
    /// # Errors
    ///
    /// See [`kind_of`].
    #[track_caller]
    pub fn classify_at(&self, ty: Idx, level: u32) -> Result<Classification, AbiError> {
        kind_of(self.pool, ty, level, self.target.is_32bit())
    }

    /// Just the kind of a type.
    ///
    /// # Errors
    ///
    /// See [`kind_of`].
    #[track_caller]
    pub fn kind(&self, ty: Idx) -> Result<Kind, AbiError> {
        self.classify(ty).map(|c| c.kind)
    }

    /// Whether values of `ty` are stored inline in the variant cell.
    ///
    /// # Errors
    ///
    /// See [`kind_of`].
    #[track_caller]
    pub fn is_direct(&self, ty: Idx) -> Result<bool, AbiError> {
        self.kind(ty).map(Kind::is_direct)
    }
}
