use pretty_assertions::assert_eq;

use super::*;

// ── Basic types ─────────────────────────────────────────────────

#[test]
fn basics_at_fixed_indices() {
    let pool = Pool::new();

    for kind in BasicKind::ALL {
        let idx = Idx::basic(kind);
        assert_eq!(pool.tag(idx), Tag::Basic);
        assert_eq!(pool.basic_kind(idx), kind);
    }
}

#[test]
fn pool_starts_with_reserved_range() {
    let pool = Pool::new();
    assert_eq!(pool.len(), Idx::FIRST_DYNAMIC as usize);
    assert!(!pool.contains(Idx::NONE));
}

// ── Hash-consing ────────────────────────────────────────────────

#[test]
fn structural_types_are_deduplicated() {
    let mut pool = Pool::new();

    let p1 = pool.pointer(Idx::INT32);
    let p2 = pool.pointer(Idx::INT32);
    assert_eq!(p1, p2);

    let s1 = pool.structure(&[FieldDef::new("A", Idx::INT32), FieldDef::new("B", Idx::BOOL)]);
    let s2 = pool.structure(&[FieldDef::new("A", Idx::INT32), FieldDef::new("B", Idx::BOOL)]);
    assert_eq!(s1, s2);

    let swapped = pool.structure(&[FieldDef::new("B", Idx::BOOL), FieldDef::new("A", Idx::INT32)]);
    assert_ne!(s1, swapped);
}

#[test]
fn embedding_distinguishes_struct_types() {
    let mut pool = Pool::new();
    let named = pool.structure(&[FieldDef::new("Inner", Idx::INT)]);
    let embedded = pool.structure(&[FieldDef::embedded("Inner", Idx::INT)]);
    assert_ne!(named, embedded);
}

#[test]
fn named_types_are_never_deduplicated() {
    let mut pool = Pool::new();
    let a = pool.named_with_underlying("main", "Celsius", Idx::FLOAT64);
    let b = pool.named_with_underlying("main", "Celsius", Idx::FLOAT64);
    assert_ne!(a, b);
}

#[test]
fn type_params_are_fresh() {
    let mut pool = Pool::new();
    let t1 = pool.type_param("T");
    let t2 = pool.type_param("T");
    assert_ne!(t1, t2);
    assert_eq!(pool.type_param_name(t1), "T");
}

// ── Accessors ───────────────────────────────────────────────────

#[test]
fn struct_fields_roundtrip() {
    let mut pool = Pool::new();
    let s = pool.structure(&[
        FieldDef::new("Exported", Idx::STRING),
        FieldDef::new("hidden", Idx::INT),
        FieldDef::embedded("Base", Idx::UINT8),
    ]);

    assert_eq!(pool.struct_field_count(s), 3);
    let fields: Vec<Field<'_>> = pool.struct_fields(s).collect();

    assert_eq!(fields[0].name, "Exported");
    assert_eq!(fields[0].ty, Idx::STRING);
    assert!(fields[0].is_exported());
    assert!(!fields[0].is_embedded());

    assert_eq!(fields[1].name, "hidden");
    assert!(!fields[1].is_exported());

    assert_eq!(fields[2].name, "Base");
    assert!(fields[2].is_exported());
    assert!(fields[2].is_embedded());
}

#[test]
fn array_len_survives_u32_overflow() {
    let mut pool = Pool::new();
    let huge = pool.array(u64::from(u32::MAX) + 7, Idx::UINT8);
    assert_eq!(pool.array_len(huge), u64::from(u32::MAX) + 7);
    assert_eq!(pool.elem(huge), Idx::UINT8);
}

#[test]
fn signature_accessors() {
    let mut pool = Pool::new();
    let strings = pool.slice(Idx::STRING);
    let sig = pool.signature(&[Idx::INT, strings], &[Idx::BOOL, Idx::STRING], true);

    assert_eq!(pool.signature_params(sig), vec![Idx::INT, strings]);
    assert_eq!(pool.signature_results(sig), vec![Idx::BOOL, Idx::STRING]);
    assert!(pool.signature_is_variadic(sig));
}

#[test]
fn map_and_chan_accessors() {
    let mut pool = Pool::new();
    let m = pool.map(Idx::STRING, Idx::INT);
    assert_eq!(pool.map_key(m), Idx::STRING);
    assert_eq!(pool.map_value(m), Idx::INT);

    let c = pool.chan(ChanDir::RecvOnly, Idx::BOOL);
    assert_eq!(pool.chan_dir(c), ChanDir::RecvOnly);
    assert_eq!(pool.elem(c), Idx::BOOL);
}

// ── Underlying ──────────────────────────────────────────────────

#[test]
fn underlying_strips_named_chains() {
    let mut pool = Pool::new();
    let inner = pool.named_with_underlying("p", "Inner", Idx::INT32);
    let outer = pool.named_with_underlying("p", "Outer", inner);

    assert_eq!(pool.underlying(outer), Idx::INT32);
    assert_eq!(pool.underlying(Idx::INT32), Idx::INT32);
    assert_eq!(pool.named_underlying(outer), inner);
}

#[test]
fn underlying_of_unset_named_is_none() {
    let mut pool = Pool::new();
    let pending = pool.named("p", "Pending");
    assert!(pool.underlying(pending).is_none());
}

#[test]
fn underlying_stops_at_foreign_link() {
    let mut pool = Pool::new();
    let foreign = Idx::from_raw(100_000);
    let dangling = pool.named_with_underlying("p", "Dangling", foreign);
    let outer = pool.named_with_underlying("p", "Outer", dangling);

    assert_eq!(pool.underlying(dangling), foreign);
    assert_eq!(pool.underlying(outer), foreign);
    assert_eq!(pool.underlying(foreign), foreign);
}

#[test]
fn debug_summarizes_sizes() {
    let pool = Pool::new();
    let debug = format!("{pool:?}");
    assert!(debug.starts_with("Pool { items: 64,"), "{debug}");
}

#[test]
fn self_referential_named_type() {
    let mut pool = Pool::new();
    let list = pool.named("p", "List");
    let next = pool.pointer(list);
    let body = pool.structure(&[FieldDef::new("next", next), FieldDef::new("Val", Idx::INT)]);
    pool.set_underlying(list, body);

    assert_eq!(pool.underlying(list), body);
    assert_eq!(pool.format_type(list), "p.List");
}

// ── Formatting ──────────────────────────────────────────────────

#[test]
fn format_composite_types() {
    let mut pool = Pool::new();

    let ptr = pool.pointer(Idx::UNSAFE_POINTER);
    assert_eq!(pool.format_type(ptr), "*unsafe.Pointer");

    let arr = pool.array(4, Idx::FLOAT32);
    assert_eq!(pool.format_type(arr), "[4]float32");

    let m = pool.map(Idx::STRING, arr);
    assert_eq!(pool.format_type(m), "map[string][4]float32");

    let send = pool.chan(ChanDir::SendOnly, Idx::INT);
    assert_eq!(pool.format_type(send), "chan<- int");

    let s = pool.structure(&[FieldDef::new("A", Idx::INT32), FieldDef::embedded("B", Idx::BOOL)]);
    assert_eq!(pool.format_type(s), "struct{A int32; bool}");

    let tuple = pool.tuple(&[Idx::INT, Idx::BOOL]);
    assert_eq!(pool.format_type(tuple), "(int, bool)");
}

#[test]
fn format_signatures_and_interfaces() {
    let mut pool = Pool::new();
    let args = pool.slice(Idx::STRING);
    let printf = pool.signature(&[Idx::STRING, args], &[Idx::INT, Idx::BOOL], true);
    assert_eq!(pool.format_type(printf), "func(string, ...string) (int, bool)");

    let read = pool.signature(&[], &[Idx::INT], false);
    let iface = pool.interface(&[("Len", read)]);
    assert_eq!(pool.format_type(iface), "interface{Len() int}");
}

#[test]
fn format_none_does_not_panic() {
    let pool = Pool::new();
    assert_eq!(pool.format_type(Idx::NONE), "<none>");
}
