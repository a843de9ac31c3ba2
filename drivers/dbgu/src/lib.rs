//! AT91RM9200 DBGU debug console
//!
//! Register-level driver for the Debug Unit (DBGU) serial peripheral plus a
//! minimal formatted-output routine that renders directly through the
//! driver's character transmit primitive.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//! - `registers`: the DBGU register block model and volatile MMIO access
//! - `driver`: initialization and blocking byte-level I/O
//! - `console`: the byte-sink trait shared by real and null consoles
//! - `fmt`: the `%`-specifier formatter and its hex conversion helper
//!
//! The execution model is a single bare-metal context: no allocation, no
//! interrupts, no timeouts. Transmit and receive block by spinning on the
//! DBGU status register until the hardware reports ready.
//!
//! # Testing strategy
//!
//! All hardware interaction goes through the `DbguRegisters` trait, so unit
//! and integration tests drive the driver against in-test register blocks
//! that record writes and script received data. Only the `Mmio`
//! implementation touches real memory.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod console;
pub mod driver;
pub mod fmt;
pub mod registers;

pub use console::{Console, ConsoleWriter, NullConsole};
pub use driver::{baud_divisor, Dbgu};
pub use fmt::{format, Arg};
pub use registers::{Control, DbguRegisters, Mmio, Register, Status, MODE_PARITY_NONE};
