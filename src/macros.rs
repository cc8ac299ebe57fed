//! Call-site entry points.
//!
//! ```
//! daylog::warn!("Hello {}, you are {} years old", "Bob", 30);
//! daylog::critical!("disk {} is full", std::path::Path::new("/dev/sda1"));
//! ```
//!
//! # Macro List
//!
//! - `log!(severity, ...)` - explicit severity, global config
//! - `trace!`, `debug!`, `info!`, `warn!`, `error!`, `critical!` - fixed severity, global config
//! - `log_to!(dispatcher, severity, ...)` - explicit `Dispatcher`
//!
//! A template whose placeholder count differs from its argument count does not compile:
//!
//! ```compile_fail
//! daylog::warn!("{} and {}", 1);
//! ```
//!
//! Neither does an argument with no way to become text:
//!
//! ```compile_fail
//! struct Opaque;
//! daylog::error!("{}", Opaque);
//! ```
//!
//! The severity gate is checked before any argument is converted.

/// Strip a nested-item type name down to the enclosing function's own name.
#[doc(hidden)]
pub fn function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        $crate::macros::function_name(::std::any::type_name_of_val(&__here))
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __count_args {
    () => { 0usize };
    ($head:expr $(, $tail:expr)*) => { 1usize + $crate::__count_args!($($tail),*) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch {
    ($dispatcher:expr, $severity:expr, $template:literal $(, $arg:expr)*) => {{
        const _: () = ::core::assert!(
            $crate::template::placeholder_count($template) == $crate::__count_args!($($arg),*),
            "template placeholder count does not match argument count"
        );
        let __severity: $crate::Severity = $severity;
        let __dispatcher = &mut $dispatcher;
        if __dispatcher.enabled(__severity) {
            // count verified above, rendering cannot fail
            let _ = __dispatcher.dispatch_checked(
                __severity,
                &$crate::CallSite::new(::core::file!(), ::core::line!(), $crate::__function_name!()),
                $template,
                &[$($crate::stringify_arg!($arg)),*] as &[::std::borrow::Cow<'_, str>],
            );
        }
    }};
}

/// Log at an explicit severity through the global configuration.
#[macro_export]
macro_rules! log {
    ($severity:expr, $template:literal $(, $arg:expr)* $(,)?) => {
        $crate::__dispatch!($crate::engine::Dispatcher::from_global(), $severity, $template $(, $arg)*)
    };
}

/// Log through an explicit `Dispatcher`.
#[macro_export]
macro_rules! log_to {
    ($dispatcher:expr, $severity:expr, $template:literal $(, $arg:expr)* $(,)?) => {
        $crate::__dispatch!($dispatcher, $severity, $template $(, $arg)*)
    };
}

/// Log at `Trace`.
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Trace, $($arg)+) };
}

/// Log at `Debug`.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Debug, $($arg)+) };
}

/// Log at `Information`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Information, $($arg)+) };
}

/// Log at `Warning`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Warning, $($arg)+) };
}

/// Log at `Error`.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Error, $($arg)+) };
}

/// Log at `Critical`.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => { $crate::log!($crate::Severity::Critical, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerConfig;
    use crate::engine::Dispatcher;
    use crate::Severity;

    fn console_dispatcher(minimum_severity: Severity) -> Dispatcher<Vec<u8>> {
        let config = LoggerConfig {
            minimum_severity,
            write_to_console: true,
            write_to_file: false,
            ..LoggerConfig::default()
        };
        Dispatcher::new(config, Vec::new())
    }

    fn lines(d: Dispatcher<Vec<u8>>) -> Vec<String> {
        String::from_utf8(d.into_console())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_function_name() {
        assert_eq!(crate::__function_name!(), "test_function_name");
        let inner = || crate::__function_name!();
        assert_eq!(inner(), "test_function_name");
        assert_eq!(function_name("a::b::c::__here"), "c");
        assert_eq!(function_name("main"), "main");
    }

    #[test]
    fn test_count_args() {
        assert_eq!(crate::__count_args!(), 0);
        assert_eq!(crate::__count_args!(1, "two", 3.0), 3);
    }

    #[test]
    fn test_call_site_fields() {
        let mut d = console_dispatcher(Severity::Trace);
        let line = line!() + 1;
        crate::log_to!(d, Severity::Debug, "value {}", 7);

        let out = lines(d);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains(&format!("macros.rs:{} ", line)));
        assert!(out[0].contains("\t\ttest_call_site_fields "));
        assert!(out[0].ends_with("value 7"));
    }

    #[test]
    fn test_mixed_arguments() {
        let mut d = console_dispatcher(Severity::Warning);
        let name = String::from("Bob");
        crate::log_to!(d, Severity::Warning, "Hello {}, you are {} years old", name, 30);
        crate::log_to!(d, Severity::Error, "{}{}{}", 'a', vec!['b'], std::path::PathBuf::from("c"));

        let out = lines(d);
        assert!(out[0].ends_with("Hello Bob, you are 30 years old"));
        assert!(out[1].ends_with("abc"));
    }

    #[test]
    fn test_filtered_arguments_not_evaluated() {
        let mut d = console_dispatcher(Severity::Warning);
        let mut evaluated = false;
        crate::log_to!(d, Severity::Trace, "{}", {
            evaluated = true;
            1
        });
        assert!(!evaluated);
        assert!(lines(d).is_empty());
    }

    #[test]
    fn test_escaped_braces_through_macro() {
        let mut d = console_dispatcher(Severity::Warning);
        crate::log_to!(d, Severity::Error, "set {{}} is empty", "unused");
        crate::log_to!(d, Severity::Error, "a{b");
        let out = lines(d);
        assert!(out[0].ends_with("set {} is empty"));
        assert!(out[1].ends_with("ab"));
    }
}
