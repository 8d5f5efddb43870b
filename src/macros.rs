//! Logging macros with automatic caller identification.
//!
//! The macros are the ergonomic front door to the severity methods: they
//! capture the name of the enclosing function at the call site and gate on
//! the verbosity floor BEFORE evaluating the message expression, so
//! suppressed calls pay nothing for expensive-to-format arguments.
//!
//! # Examples
//!
//! ```
//! use dbglog::{debug, info, Logger};
//!
//! fn handle_request(logger: &Logger) {
//!     info!(logger, 0, "request accepted");
//!
//!     let payload_len = 512;
//!     debug!(logger, 4, "payload parsed", payload_len, "bytes");
//! }
//!
//! let logger = Logger::builder().verbosity_floor(2).build().unwrap();
//! handle_request(&logger);
//! ```

/// Capture the name of the enclosing function.
///
/// Resolution happens at the call site rather than by walking the stack at
/// runtime, so the result is exact regardless of inlining or call depth.
/// Inside a closure the enclosing named function is reported.
#[macro_export]
macro_rules! caller_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = name.trim_end_matches("::{{closure}}");
        match name.rfind("::") {
            ::std::option::Option::Some(pos) => &name[pos + 2..],
            ::std::option::Option::None => name,
        }
    }};
}

/// Log a message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use dbglog::{log, Logger, Severity};
/// # let logger = Logger::builder().verbosity_floor(1).build().unwrap();
/// log!(logger, Severity::Info, 1, "cache warmed");
/// log!(logger, Severity::Error, 0, "lookup failed", 404);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $level:expr, $message:expr $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(
                $severity,
                level,
                $crate::caller_name!(),
                ::std::convert::AsRef::<str>::as_ref(&$message),
                &[$(&$arg as &dyn ::std::fmt::Display),*],
            );
        } else {
            logger.metrics().record_suppressed();
        }
    }};
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use dbglog::{debug, Logger};
/// # let logger = Logger::builder().verbosity_floor(4).build().unwrap();
/// debug!(logger, 4, "verbose trace", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $level, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use dbglog::{info, Logger};
/// # let logger = Logger::builder().build().unwrap();
/// info!(logger, 0, "listener started");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $level, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// # Examples
///
/// ```
/// # use dbglog::{warning, Logger};
/// # let logger = Logger::builder().build().unwrap();
/// warning!(logger, 0, "retrying", 2, "of", 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $level, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use dbglog::{error, Logger};
/// # let logger = Logger::builder().build().unwrap();
/// error!(logger, 0, "connection refused");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $level, $($arg)+)
    };
}

/// Log a critical-severity message.
///
/// Severity is categorization only: a critical message with `level` above
/// the floor is suppressed like any other.
///
/// # Examples
///
/// ```
/// # use dbglog::{critical, Logger};
/// # let logger = Logger::builder().build().unwrap();
/// critical!(logger, 0, "data plane unreachable");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $level, $($arg)+)
    };
}
