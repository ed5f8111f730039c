/// Conditional logging module for development builds
///
/// The `log!` macro provides informational console logging that is compiled out
/// in production (release) builds by default. Warnings and errors always reach the
/// console through `log_warn!` and `log_error!`.
///
/// Logging is enabled when either:
/// - Building in debug mode (`cfg(debug_assertions)`)
/// - The `console_logging` feature is explicitly enabled
///
/// # Examples
///
/// ```ignore
/// use crate::logging::log;
///
/// log!("Traffic snapshot applied: {} segments", count);
/// ```
/// Conditionally log to console in development builds
///
/// This macro expands to `web_sys::console::log_1()` in debug builds or when
/// the `console_logging` feature is enabled. In production release builds,
/// it compiles to nothing (zero overhead).
#[macro_export]
macro_rules! log {
    ($($arg:tt)+) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            $crate::logging::write_log(&format!($($arg)+));
        }
    };
}

/// Log a warning to the console (stderr outside the browser)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::logging::write_warn(&format!($($arg)+))
    };
}

/// Log an error to the console (stderr outside the browser)
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::logging::write_error(&format!($($arg)+))
    };
}

pub use {log, log_error, log_warn};

#[cfg(target_arch = "wasm32")]
pub fn write_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn write_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub fn write_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

// Native builds (tests, tooling) have no console object
#[cfg(not(target_arch = "wasm32"))]
pub fn write_log(message: &str) {
    eprintln!("{message}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_warn(message: &str) {
    eprintln!("WARN {message}");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn write_error(message: &str) {
    eprintln!("ERROR {message}");
}
