//! Minimal formatted output
//!
//! Renders a small grammar of `%` conversion specifiers against an explicit
//! argument slice, emitting each byte through a [`Console`] as it is
//! produced. There is no intermediate message buffer and no allocation.
//!
//! Supported specifiers:
//!
//! | specifier | argument       | output                                  |
//! |-----------|----------------|-----------------------------------------|
//! | `%%`      | none           | a literal `%`                           |
//! | `%c`      | [`Arg::Char`]  | the byte, as one character              |
//! | `%s`      | [`Arg::Str`]   | the string's bytes; `None` -> `(null)`  |
//! | `%x`      | [`Arg::Hex`]   | lowercase hex, no leading zeros         |
//! | `%p`      | [`Arg::Ptr`]   | `0x` followed by hex at pointer width   |
//!
//! Anything else after `%` passes through verbatim. A `%` as the final byte
//! is emitted literally. The specifier and argument cursors advance in
//! lock-step: each of `%c`/`%s`/`%x`/`%p` consumes exactly one argument, and
//! a missing or wrong-variant argument degrades to verbatim passthrough of
//! the specifier instead of failing.

use crate::console::Console;
use static_assertions::const_assert;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Scratch capacity for one hex conversion: one slot per nibble of the
/// widest accepted value.
const HEX_SCRATCH: usize = 2 * core::mem::size_of::<u64>();
const_assert!(HEX_SCRATCH >= 2 * core::mem::size_of::<usize>());

/// One formatter argument.
///
/// The variant is expected to match its specifier; the formatter trusts the
/// caller to line the two up and degrades to verbatim output when they do
/// not.
#[derive(Clone, Copy, Debug)]
pub enum Arg<'a> {
    /// For `%c`: emitted as a single byte.
    Char(u8),
    /// For `%s`: the string's bytes; `None` renders the `(null)` placeholder.
    Str(Option<&'a str>),
    /// For `%x`: unsigned value, rendered as lowercase hex.
    Hex(u32),
    /// For `%p`: pointer-sized value, rendered as `0x` + lowercase hex.
    Ptr(usize),
}

/// Emit `value` as lowercase hex with no leading zeros; zero is the single
/// digit `0`.
///
/// Digits are staged least-significant-first in a fixed scratch buffer, then
/// emitted in reverse. The buffer is reused per conversion and never
/// retained.
fn put_hex<C: Console>(out: &mut C, mut value: u64) {
    if value == 0 {
        out.putc(b'0');
        return;
    }
    let mut scratch = [0u8; HEX_SCRATCH];
    let mut len = 0;
    while value != 0 {
        scratch[len] = HEX_DIGITS[(value & 0xF) as usize];
        value >>= 4;
        len += 1;
    }
    for i in (0..len).rev() {
        out.putc(scratch[i]);
    }
}

/// Render `fmt` against `args`, emitting through `out` in strict
/// left-to-right order.
pub fn format<C: Console>(out: &mut C, fmt: &str, args: &[Arg<'_>]) {
    let mut args = args.iter();
    let mut bytes = fmt.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.putc(b);
            continue;
        }
        let spec = match bytes.next() {
            Some(spec) => spec,
            // lone trailing '%': emit it literally and stop
            None => {
                out.putc(b'%');
                return;
            }
        };
        match spec {
            b'%' => out.putc(b'%'),
            b'c' | b's' | b'x' | b'p' => match (spec, args.next()) {
                (b'c', Some(Arg::Char(c))) => out.putc(*c),
                (b's', Some(Arg::Str(Some(s)))) => out.puts(s),
                (b's', Some(Arg::Str(None))) => out.puts("(null)"),
                (b'x', Some(Arg::Hex(v))) => put_hex(out, u64::from(*v)),
                (b'p', Some(Arg::Ptr(v))) => {
                    out.puts("0x");
                    put_hex(out, *v as u64);
                }
                _ => {
                    out.putc(b'%');
                    out.putc(spec);
                }
            },
            other => {
                out.putc(b'%');
                out.putc(other);
            }
        }
    }
}
