//! Debug output and logging
//!
//! `kprint!`/`kprintln!` render `core::fmt` output through the global
//! console. The leveled `log_*!` macros compile down to nothing when their
//! level is not enabled by a `log-*` cargo feature, so disabled levels cost
//! zero bytes in the binary.

use core::fmt::{self, Write};
use dbgu::ConsoleWriter;

/// Writer that routes `core::fmt` output to the global console.
pub struct DebugWriter;

impl fmt::Write for DebugWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        ConsoleWriter::new(&mut *crate::config::CONSOLE.lock()).write_str(s)
    }
}

/// Print to the console.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => ({
        use core::fmt::Write;
        let _ = write!($crate::debug::DebugWriter, $($arg)*);
    });
}

/// Print to the console, with newline.
#[macro_export]
macro_rules! kprintln {
    () => ($crate::kprint!("\n"));
    ($($arg:tt)*) => ({
        use core::fmt::Write;
        let _ = writeln!($crate::debug::DebugWriter, $($arg)*);
    });
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(any(
            feature = "log-error",
            feature = "log-warn",
            feature = "log-info",
            feature = "log-debug",
            feature = "log-trace"
        ))]
        {
            $crate::kprintln!("[ERROR] {}", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(any(
            feature = "log-warn",
            feature = "log-info",
            feature = "log-debug",
            feature = "log-trace"
        ))]
        {
            $crate::kprintln!("[WARN ] {}", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(any(feature = "log-info", feature = "log-debug", feature = "log-trace"))]
        {
            $crate::kprintln!("[INFO ] {}", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(any(feature = "log-debug", feature = "log-trace"))]
        {
            $crate::kprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    }};
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log-trace")]
        {
            $crate::kprintln!("[TRACE] {}", format_args!($($arg)*));
        }
    }};
}
