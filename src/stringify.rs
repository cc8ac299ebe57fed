//! Turning arbitrary log arguments into text.
//!
//! # Capability Order
//! ```text
//! 1. AsRef<str>                        borrowed as-is, no copy
//! 2. Clone + Into<String>              converted (char, …)
//! 3. AsRef<OsStr>                      lossy cast (Path, PathBuf, OsString, …)
//! 4. Numeric                           integer / float text
//! 5. Display                           to_string()
//! 6. Clone + IntoIterator, String: Extend<Item>
//!                                      appended into an empty buffer (Vec<char>, [&str; N], …)
//! ```
//! The first capability a type satisfies wins, even when a later one would also apply:
//! `String` is `Display` too but always takes path 1.
//!
//! # Design Decisions
//! - Dispatch is resolved at compile time by autoref method probing: each capability is a
//!   trait implemented on a wrapper behind a different number of references, and the
//!   `stringify_arg!` macro calls the method through the deepest reference, so the compiler
//!   picks the highest-priority impl whose bounds hold
//! - A type with none of the six capabilities fails to compile at the call site
//! - Probing only works on concrete types, so it is exposed as a macro, not a generic fn

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fmt::Display;

/// Borrowed argument under inspection. Constructed by `stringify_arg!`.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> Clone for Probe<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Probe<'_, T> {}

/// Types with a direct numeric-to-text conversion.
pub trait Numeric {
    fn to_text(&self) -> String;
}

macro_rules! numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Capability traits, one per priority tier. Brought into scope by `stringify_arg!`.
pub mod capability {
    use super::*;

    pub trait ViaStr<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T: AsRef<str> + ?Sized> ViaStr<'a> for &&&&&Probe<'a, T> {
        fn stringify_value(self) -> Cow<'a, str> {
            Cow::Borrowed(self.0.as_ref())
        }
    }

    pub trait ViaInto<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T: Clone + Into<String>> ViaInto<'a> for &&&&Probe<'a, T> {
        fn stringify_value(self) -> Cow<'a, str> {
            Cow::Owned(self.0.clone().into())
        }
    }

    pub trait ViaOsStr<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T: AsRef<OsStr> + ?Sized> ViaOsStr<'a> for &&&Probe<'a, T> {
        fn stringify_value(self) -> Cow<'a, str> {
            self.0.as_ref().to_string_lossy()
        }
    }

    pub trait ViaNumeric<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T: Numeric + ?Sized> ViaNumeric<'a> for &&Probe<'a, T> {
        fn stringify_value(self) -> Cow<'a, str> {
            Cow::Owned(self.0.to_text())
        }
    }

    pub trait ViaDisplay<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T: Display + ?Sized> ViaDisplay<'a> for &Probe<'a, T> {
        fn stringify_value(self) -> Cow<'a, str> {
            Cow::Owned(self.0.to_string())
        }
    }

    pub trait ViaAppend<'a> {
        fn stringify_value(self) -> Cow<'a, str>;
    }

    impl<'a, T> ViaAppend<'a> for Probe<'a, T>
    where
        T: Clone + IntoIterator,
        String: Extend<T::Item>,
    {
        fn stringify_value(self) -> Cow<'a, str> {
            let mut buffer = String::new();
            buffer.extend(self.0.clone());
            Cow::Owned(buffer)
        }
    }
}

/// Convert one argument to text using the first capability it satisfies.
///
/// Evaluates to a `Cow<str>` borrowing from the argument when it is already text.
#[macro_export]
macro_rules! stringify_arg {
    ($value:expr) => {{
        #[allow(unused_imports)]
        use $crate::stringify::capability::{
            ViaAppend as _, ViaDisplay as _, ViaInto as _, ViaNumeric as _, ViaOsStr as _, ViaStr as _,
        };
        (&&&&&$crate::stringify::Probe(&$value)).stringify_value()
    }};
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;
    use std::path::PathBuf;

    struct Celsius(f64);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}°C", self.0)
        }
    }

    #[test]
    fn test_string_like_is_borrowed() {
        let owned = String::from("Bob");
        assert!(matches!(stringify_arg!(owned), Cow::Borrowed("Bob")));
        assert!(matches!(stringify_arg!("Ann"), Cow::Borrowed("Ann")));

        let cow: Cow<'_, str> = Cow::Borrowed("Eve");
        assert_eq!(stringify_arg!(cow), "Eve");
    }

    #[test]
    fn test_into_string() {
        assert_eq!(stringify_arg!('x'), "x");
    }

    #[test]
    fn test_os_str_cast() {
        let path = PathBuf::from("/var/log/app");
        assert_eq!(stringify_arg!(path), "/var/log/app");
    }

    #[test]
    fn test_numeric() {
        assert_eq!(stringify_arg!(30), "30");
        assert_eq!(stringify_arg!(-7i64), "-7");
        assert_eq!(stringify_arg!(2.5f32), "2.5");
        assert_eq!(stringify_arg!(u128::MAX), u128::MAX.to_string());
    }

    #[test]
    fn test_display() {
        assert_eq!(stringify_arg!(Celsius(21.5)), "21.5°C");
        assert_eq!(stringify_arg!(true), "true");
    }

    #[test]
    fn test_append() {
        assert_eq!(stringify_arg!(vec!['o', 'k']), "ok");
        assert_eq!(stringify_arg!(["a", "b", "c"]), "abc");
    }

    #[test]
    fn test_temporaries() {
        assert_eq!(stringify_arg!(format!("{}-{}", 1, 2)), "1-2");
    }
}
