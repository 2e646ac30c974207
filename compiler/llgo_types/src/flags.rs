//! Per-field flags and channel direction.

use bitflags::bitflags;

bitflags! {
    /// Properties of a struct field, packed into the pool's extra array.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FieldFlags: u32 {
        /// Field name starts with an uppercase letter.
        const EXPORTED = 1 << 0;
        /// Field is embedded (anonymous); its name is the embedded type's name.
        const EMBEDDED = 1 << 1;
    }
}

/// Whether an identifier is exported from its package.
///
/// An identifier is exported when its first character is an uppercase
/// letter. The blank identifier `_` and empty names are never exported.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Direction of a channel type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum ChanDir {
    /// `chan T`
    SendRecv = 0,
    /// `chan<- T`
    SendOnly = 1,
    /// `<-chan T`
    RecvOnly = 2,
}

impl ChanDir {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            1 => Self::SendOnly,
            2 => Self::RecvOnly,
            _ => Self::SendRecv,
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exported_names() {
        assert!(is_exported("Name"));
        assert!(is_exported("Ärger"));
        assert!(!is_exported("name"));
        assert!(!is_exported("_"));
        assert!(!is_exported("_Hidden"));
        assert!(!is_exported(""));
    }

    #[test]
    fn chan_dir_roundtrips_through_extra() {
        for dir in [ChanDir::SendRecv, ChanDir::SendOnly, ChanDir::RecvOnly] {
            assert_eq!(ChanDir::from_raw(dir.raw()), dir);
        }
    }

    #[test]
    fn field_flags_are_independent() {
        let flags = FieldFlags::EXPORTED | FieldFlags::EMBEDDED;
        assert!(flags.contains(FieldFlags::EXPORTED));
        assert!(flags.contains(FieldFlags::EMBEDDED));
        assert!(!FieldFlags::default().contains(FieldFlags::EXPORTED));
    }
}
