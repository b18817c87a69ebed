//! Bidirectional enum <-> name registry.
//!
//! Every enumeration the guessers work with (subsampling, plane order,
//! packing order, channel order) needs three interchangeable views:
//!
//! - the typed value
//! - its canonical string name (used to synthesize and parse name tokens)
//! - its positional index in the canonical order
//!
//! The [`named_enum!`](crate::named_enum) macro declares the enum and its
//! name table in one place, so a member can't be left unregistered. A
//! `const` block emitted next to the table checks at compile time that entry
//! `i` holds the variant with discriminant `i` and that no two names collide.
//! [`NamedEnum::index`] is therefore a plain discriminant read and cannot fail.
//!
//! # Example
//!
//! ```rust
//! use rawvid_core::{NamedEnum, Subsampling};
//!
//! assert_eq!(Subsampling::Yuv420.name(), "420");
//! assert_eq!(Subsampling::from_name("422"), Some(Subsampling::Yuv422));
//! assert_eq!(Subsampling::from_name_or_index("0"), Some(Subsampling::Yuv444));
//! assert_eq!(Subsampling::Yuv400.index(), 3);
//! ```

/// An enumeration with a fixed, ordered table of canonical names.
///
/// Implemented by [`named_enum!`](crate::named_enum); do not implement by hand.
pub trait NamedEnum: Copy + Eq + 'static {
    /// `(value, name)` pairs in canonical order. Entry `i` is the variant
    /// whose index is `i`.
    const ENTRIES: &'static [(Self, &'static str)];

    /// Position of this value in [`ENTRIES`](NamedEnum::ENTRIES).
    fn index(self) -> usize;

    /// Canonical name of this value.
    #[inline]
    fn name(self) -> &'static str {
        Self::ENTRIES[self.index()].1
    }

    /// Number of registered members.
    #[inline]
    fn count() -> usize {
        Self::ENTRIES.len()
    }

    /// Looks up a value by exact name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(value, _)| *value)
    }

    /// Looks up a value by name, ignoring ASCII case.
    ///
    /// Lengths must match; no locale-aware folding is done.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(value, _)| *value)
    }

    /// Interprets `token` as an index if it is an unsigned integer below
    /// [`count`](NamedEnum::count), otherwise as an exact name.
    fn from_name_or_index(token: &str) -> Option<Self> {
        if let Some(index) = parse_unsigned(token) {
            if let Some(value) = Self::at(index as usize) {
                return Some(value);
            }
        }
        Self::from_name(token)
    }

    /// Value at `index`, if in range.
    #[inline]
    fn at(index: usize) -> Option<Self> {
        Self::ENTRIES.get(index).map(|(value, _)| *value)
    }

    /// All values in canonical order.
    fn values() -> impl Iterator<Item = Self> {
        Self::ENTRIES.iter().map(|(value, _)| *value)
    }

    /// All names in canonical order.
    fn names() -> impl Iterator<Item = &'static str> {
        Self::ENTRIES.iter().map(|(_, name)| *name)
    }
}

/// Strict unsigned parse: ASCII digits only (no sign, no whitespace),
/// must fit in `u32`.
fn parse_unsigned(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[doc(hidden)]
pub const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declares a fieldless enum together with its canonical name table.
///
/// Generates the enum (deriving `Debug, Clone, Copy, PartialEq, Eq, Hash`),
/// the [`NamedEnum`] impl, `Display` (canonical name) and `FromStr`
/// (case-insensitive name, failing with [`Error::UnknownName`](crate::Error)).
///
/// ```rust
/// use rawvid_core::{named_enum, NamedEnum};
///
/// named_enum! {
///     /// Test enum.
///     pub enum Corner {
///         /// Top left.
///         TopLeft => "tl",
///         /// Bottom right.
///         BottomRight => "br",
///     }
/// }
///
/// assert_eq!(Corner::BottomRight.to_string(), "br");
/// assert_eq!("TL".parse::<Corner>().unwrap(), Corner::TopLeft);
/// ```
#[macro_export]
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::named::NamedEnum for $name {
            const ENTRIES: &'static [(Self, &'static str)] = &[
                $( ($name::$variant, $text), )+
            ];

            #[inline]
            fn index(self) -> usize {
                self as usize
            }
        }

        const _: () = {
            let entries = <$name as $crate::named::NamedEnum>::ENTRIES;
            let mut i = 0;
            while i < entries.len() {
                assert!(
                    entries[i].0 as usize == i,
                    "named_enum table must list variants in declaration order"
                );
                let mut j = i + 1;
                while j < entries.len() {
                    assert!(
                        !$crate::named::const_str_eq(entries[i].1, entries[j].1),
                        "named_enum names must be unique"
                    );
                    j += 1;
                }
                i += 1;
            }
        };

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::named::NamedEnum::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::named::NamedEnum>::from_name_ignore_case(s)
                    .ok_or_else(|| $crate::Error::unknown_name(stringify!($name), s))
            }
        }
    };
}
