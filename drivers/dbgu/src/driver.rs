//! DBGU peripheral driver
//!
//! Sequences the hardware into a transmit/receive-capable state and provides
//! blocking byte-level I/O. There is no timeout anywhere: if the hardware
//! never reports ready, a call spins forever. That is the intended behavior
//! for a single-context debug console with no scheduler to yield to.

use crate::console::Console;
use crate::registers::{Control, DbguRegisters, Mmio, Register, Status, MODE_PARITY_NONE};

/// Compute the baud rate generator divisor for a master clock and baud rate.
///
/// Truncating integer division, as the generator expects. A baud rate too
/// high for the clock yields a divisor of zero; what the generator does with
/// that is hardware-defined and not guarded here.
pub const fn baud_divisor(clock_hz: u32, baud: u32) -> u32 {
    clock_hz / (16 * baud)
}

/// DBGU driver over a register block.
///
/// The driver holds no state of its own beyond the register handle; all
/// observable state lives in the hardware. Calls made before [`Dbgu::init`]
/// are the caller's responsibility.
pub struct Dbgu<R: DbguRegisters> {
    regs: R,
}

impl Dbgu<Mmio> {
    /// Driver over the memory-mapped register block at `base`.
    ///
    /// # Safety
    /// The caller must ensure `base` is the address of a mapped DBGU register
    /// block and that this is the only driver instance accessing it.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            regs: unsafe { Mmio::new(base) },
        }
    }
}

impl<R: DbguRegisters> Dbgu<R> {
    /// Driver over an arbitrary register-access implementation.
    pub const fn from_registers(regs: R) -> Self {
        Self { regs }
    }

    /// Consume the driver and hand back its register block.
    pub fn release(self) -> R {
        self.regs
    }

    /// Initialize the DBGU:
    /// - reset the receiver and transmitter
    /// - configure 8N1 framing (8 data bits, no parity, 1 stop bit)
    /// - program the baud rate divisor from `clock_hz` and `baud`
    /// - enable the receiver and transmitter
    ///
    /// After return the ready flags in the status register reflect genuine
    /// hardware state. This path has no failure mode to report.
    pub fn init(&mut self, clock_hz: u32, baud: u32) {
        self.regs.write(
            Register::Control,
            (Control::RESET_RX | Control::RESET_TX).bits(),
        );
        self.regs.write(Register::Mode, MODE_PARITY_NONE);
        self.regs
            .write(Register::BaudDivisor, baud_divisor(clock_hz, baud));
        self.regs.write(
            Register::Control,
            (Control::ENABLE_RX | Control::ENABLE_TX).bits(),
        );
    }

    fn status(&mut self) -> Status {
        Status::from_bits_truncate(self.regs.read(Register::Status))
    }

    /// Spin until the transmit holding register can accept a character.
    fn wait_tx_ready(&mut self) {
        while !self.status().contains(Status::TX_READY) {
            core::hint::spin_loop();
        }
    }

    /// Send a single character, blocking until the transmit holding register
    /// accepts it (not until it has left the wire).
    ///
    /// A newline is preceded by a carriage return so output renders correctly
    /// on a terminal; the ready flag is re-checked between the two writes.
    pub fn putc(&mut self, c: u8) {
        if c == b'\n' {
            self.wait_tx_ready();
            self.regs.write(Register::Transmit, b'\r' as u32);
        }
        self.wait_tx_ready();
        self.regs.write(Register::Transmit, c as u32);
    }

    /// Receive a single character, blocking until one is available.
    pub fn getc(&mut self) -> u8 {
        while !self.status().contains(Status::RX_READY) {
            core::hint::spin_loop();
        }
        (self.regs.read(Register::Receive) & 0xFF) as u8
    }

    /// Send every byte of `s`, in order, via [`Dbgu::putc`].
    pub fn puts(&mut self, s: &str) {
        for byte in s.bytes() {
            self.putc(byte);
        }
    }
}

impl<R: DbguRegisters> Console for Dbgu<R> {
    fn putc(&mut self, byte: u8) {
        Dbgu::putc(self, byte);
    }
}
