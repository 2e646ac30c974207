use pretty_assertions::assert_eq;
use rayon::prelude::*;

use llgo_types::{FieldDef, Idx, Pool};

use super::*;

/// A spread of public and private struct shapes plus pointers to them.
fn sample_types(pool: &mut Pool) -> Vec<Idx> {
    let mut types = Vec::new();
    for ty in [Idx::INT, Idx::BOOL, Idx::STRING, Idx::FLOAT64] {
        let public = pool.structure(&[FieldDef::new("V", ty), FieldDef::new("N", Idx::INT)]);
        let private = pool.structure(&[FieldDef::new("v", ty)]);
        let nested = pool.structure(&[FieldDef::embedded("Inner", public), FieldDef::new("X", private)]);
        let ptr = pool.pointer(nested);
        types.extend([public, private, nested, ptr]);
    }
    types
}

fn sequential_names(pool: &Pool, types: &[Idx]) -> Vec<AbiName> {
    let mut builder = Builder::new("main");
    types
        .iter()
        .map(|&ty| builder.type_name(pool, ty).unwrap())
        .collect()
}

#[test]
fn scoped_threads_match_sequential_builder() {
    let mut pool = Pool::new();
    let types = sample_types(&mut pool);
    let expected = sequential_names(&pool, &types);

    let shared = SharedBuilder::new("main");
    let names: Vec<Vec<AbiName>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    types
                        .iter()
                        .map(|&ty| shared.type_name(&pool, ty).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for thread_names in names {
        assert_eq!(thread_names, expected);
    }
}

#[test]
fn per_worker_builders_agree() {
    let mut pool = Pool::new();
    let types = sample_types(&mut pool);
    let expected = sequential_names(&pool, &types);

    let names: Vec<AbiName> = types
        .par_iter()
        .map_init(
            || Builder::new("main"),
            |builder, &ty| builder.type_name(&pool, ty).unwrap(),
        )
        .collect();

    assert_eq!(names, expected);
}

#[test]
fn struct_name_through_lock() {
    let mut pool = Pool::new();
    let pair = pool.structure(&[FieldDef::new("A", Idx::INT32), FieldDef::new("B", Idx::BOOL)]);
    let ptr = pool.pointer(pair);

    let shared = SharedBuilder::from(Builder::new("main"));
    let direct = Builder::new("main").struct_name(&pool, pair).unwrap();

    assert_eq!(shared.struct_name(&pool, pair).unwrap(), direct);
    assert!(shared.struct_name(&pool, ptr).is_err());
}

#[test]
fn pkg_and_into_inner() {
    let shared = SharedBuilder::new("example.com/lib");
    assert_eq!(shared.pkg(), "example.com/lib");

    let mut builder = shared.into_inner();
    builder.init("main");
    assert_eq!(builder.pkg(), "main");
}
