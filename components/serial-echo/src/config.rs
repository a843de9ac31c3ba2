//! Platform configuration and console composition
//!
//! Compile-time constants for the AT91RM9200 target and cargo-feature
//! selection of the console component:
//! - `console-dbgu`: DBGU serial console (default)
//! - `console-null`: no console output (production builds)

#[cfg(feature = "console-null")]
use dbgu::NullConsole;
#[cfg(not(feature = "console-null"))]
use dbgu::{Dbgu, Mmio};
use spin::Mutex;

/// DBGU register block base address
pub const DBGU_BASE: usize = 0xFFFF_F200;

/// Master clock feeding the baud rate generator (60 MHz)
pub const MASTER_CLOCK_HZ: u32 = 60_000_000;

/// Console baud rate
pub const BAUD_RATE: u32 = 115_200;

/// The process-wide console.
///
/// The mutex is uncontended by construction - there is exactly one execution
/// context - but it makes sharing the static sound.
#[cfg(not(feature = "console-null"))]
pub static CONSOLE: Mutex<Dbgu<Mmio>> = Mutex::new(unsafe { Dbgu::new(DBGU_BASE) });

#[cfg(feature = "console-null")]
pub static CONSOLE: Mutex<NullConsole> = Mutex::new(NullConsole);

/// Initialize the selected console component.
///
/// Must be called once, early, before any output.
pub fn init_console() {
    #[cfg(not(feature = "console-null"))]
    CONSOLE.lock().init(MASTER_CLOCK_HZ, BAUD_RATE);
}
