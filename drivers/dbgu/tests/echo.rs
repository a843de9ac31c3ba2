//! End-to-end console scenario
//!
//! Drives the full stack - init, blocking receive, formatter - against a
//! scripted register block and checks the exact byte sequence that reaches
//! the transmit holding register, carriage-return insertion included.

use dbgu::{baud_divisor, Arg, Control, Dbgu, DbguRegisters, Register, Status, MODE_PARITY_NONE};

/// Register block stand-in: records writes, scripts received characters.
struct ScriptedRegs {
    writes: Vec<(Register, u32)>,
    rx: Vec<u32>,
}

impl ScriptedRegs {
    fn with_rx(values: &[u32]) -> Self {
        Self {
            writes: Vec::new(),
            rx: values.to_vec(),
        }
    }

    fn tx_bytes(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(reg, _)| *reg == Register::Transmit)
            .map(|(_, value)| *value as u8)
            .collect()
    }

    fn writes_to(&self, target: Register) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|(reg, _)| *reg == target)
            .map(|(_, value)| *value)
            .collect()
    }
}

impl DbguRegisters for ScriptedRegs {
    fn read(&mut self, reg: Register) -> u32 {
        match reg {
            Register::Status => {
                let mut status = Status::TX_READY;
                if !self.rx.is_empty() {
                    status |= Status::RX_READY;
                }
                status.bits()
            }
            Register::Receive => {
                if self.rx.is_empty() {
                    0
                } else {
                    self.rx.remove(0)
                }
            }
            _ => 0,
        }
    }

    fn write(&mut self, reg: Register, value: u32) {
        self.writes.push((reg, value));
    }
}

#[test]
fn test_echo_round_trip() {
    let mut console = Dbgu::from_registers(ScriptedRegs::with_rx(&[0x41]));
    console.init(60_000_000, 115_200);

    // One received character, reported the way the firmware's echo loop does.
    let c = console.getc();
    assert_eq!(c, b'A');

    dbgu::format(&mut console, "Received character: '%c'\n", &[Arg::Char(c)]);

    let one = [c];
    let s = core::str::from_utf8(&one).unwrap();
    dbgu::format(
        &mut console,
        "%%c='%c'  %%s=\"%s\"  %%x=%x  %%p=%p\n",
        &[
            Arg::Char(c),
            Arg::Str(Some(s)),
            Arg::Hex(u32::from(c)),
            Arg::Ptr(c as usize),
        ],
    );

    let regs = console.release();
    assert_eq!(
        regs.tx_bytes(),
        b"Received character: 'A'\r\n%c='A'  %s=\"A\"  %x=41  %p=0x41\r\n"
    );
}

#[test]
fn test_init_programs_divisor_and_enables() {
    let mut console = Dbgu::from_registers(ScriptedRegs::with_rx(&[]));
    console.init(60_000_000, 115_200);

    let regs = console.release();
    assert_eq!(baud_divisor(60_000_000, 115_200), 32);
    assert_eq!(regs.writes_to(Register::BaudDivisor), [32]);
    assert_eq!(regs.writes_to(Register::Mode), [MODE_PARITY_NONE]);
    assert_eq!(
        regs.writes_to(Register::Control),
        [
            (Control::RESET_RX | Control::RESET_TX).bits(),
            (Control::ENABLE_RX | Control::ENABLE_TX).bits(),
        ]
    );
}

#[test]
fn test_banner_line_ending() {
    let mut console = Dbgu::from_registers(ScriptedRegs::with_rx(&[]));
    console.init(60_000_000, 115_200);
    console.puts("Ready\n");

    let regs = console.release();
    assert_eq!(regs.tx_bytes(), b"Ready\r\n");
}
