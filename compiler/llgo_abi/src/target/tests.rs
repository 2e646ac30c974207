use pretty_assertions::assert_eq;

use super::*;

#[test]
fn sixty_four_bit_triples() {
    for triple in [
        "x86_64-unknown-linux-gnu",
        "aarch64-apple-darwin",
        "x86_64-pc-windows-msvc",
        "wasm64-unknown-unknown",
        "riscv64gc-unknown-linux-gnu",
    ] {
        let target = Target::from_triple(triple).unwrap();
        assert_eq!(target.word_size(), WordSize::Bits64, "{triple}");
        assert!(!target.is_32bit());
    }
}

#[test]
fn thirty_two_bit_triples() {
    for triple in [
        "wasm32-unknown-unknown",
        "wasm32-unknown-wasi",
        "i686-unknown-linux-gnu",
        "armv7-unknown-linux-gnueabihf",
        "thumbv7em-none-eabihf",
        "riscv32imac-unknown-none-elf",
        "mipsel-unknown-linux-gnu",
    ] {
        let target = Target::from_triple(triple).unwrap();
        assert_eq!(target.word_size(), WordSize::Bits32, "{triple}");
        assert!(target.is_32bit());
        assert_eq!(target.word_size().bytes(), 4);
    }
}

#[test]
fn goarch_names() {
    assert_eq!(WordSize::for_arch("386"), WordSize::Bits32);
    assert_eq!(WordSize::for_arch("mipsle"), WordSize::Bits32);
    assert_eq!(WordSize::for_arch("amd64"), WordSize::Bits64);
    assert_eq!(WordSize::for_arch("arm64"), WordSize::Bits64);
}

#[test]
fn arch_is_kept() {
    let target = Target::from_triple("aarch64-unknown-linux-musl").unwrap();
    assert_eq!(target.arch(), "aarch64");
    assert_eq!(target.to_string(), "aarch64 (64-bit)");
}

#[test]
fn invalid_triples() {
    let err = Target::from_triple("x86_64").unwrap_err();
    assert!(matches!(err, TargetError::InvalidTripleFormat { .. }));
    assert!(err.to_string().contains("expected at least 3 components"));

    let err = Target::from_triple("x86_64--linux").unwrap_err();
    assert!(err.to_string().contains("empty component"));
}

#[test]
fn native_matches_host_pointer_width() {
    let native = Target::native();
    assert_eq!(
        native.word_size().bytes() as usize,
        std::mem::size_of::<usize>()
    );
    assert_eq!(Target::default(), native);
}

#[test]
fn explicit_word_size() {
    assert!(Target::new(WordSize::Bits32).is_32bit());
    assert!(!Target::new(WordSize::Bits64).is_32bit());
}
