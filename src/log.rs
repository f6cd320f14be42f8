//! Logging shims.
//!
//! On-target output goes through `esp-println` when the `esp32-log` feature
//! is enabled. Without it the macros still type-check their arguments but
//! emit nothing, so library code can log unconditionally.

/// Log an informational message.
#[cfg(feature = "esp32-log")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        esp_println::println!($($arg)*)
    };
}

/// Log an informational message (no-op without `esp32-log`).
#[cfg(not(feature = "esp32-log"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

/// Log a warning message.
#[cfg(feature = "esp32-log")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        esp_println::println!("WARNING: {}", format_args!($($arg)*))
    };
}

/// Log a warning message (no-op without `esp32-log`).
#[cfg(not(feature = "esp32-log"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}
