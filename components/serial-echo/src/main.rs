//! DBGU echo firmware
//!
//! Initialize the console, print a banner, then run forever: block until a
//! character arrives and report it through the minimal formatter.

#![no_std]
#![no_main]

mod config;
mod debug;

use core::panic::PanicInfo;
#[cfg(not(feature = "console-null"))]
use dbgu::Arg;

#[no_mangle]
pub extern "C" fn _start() -> ! {
    config::init_console();
    run()
}

#[cfg(not(feature = "console-null"))]
fn run() -> ! {
    config::CONSOLE.lock().puts("Ready\n");
    log_info!("DBGU console up: {} baud", config::BAUD_RATE);

    loop {
        let c = config::CONSOLE.lock().getc();
        report(c);
    }
}

#[cfg(feature = "console-null")]
fn run() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Report one received character: once as prose, then once through every
/// conversion the formatter supports. The one-byte string handed to `%s` is
/// deliberately the same character `%c` already shows; a byte that is not
/// valid one-byte UTF-8 falls back to `"?"`.
#[cfg(not(feature = "console-null"))]
fn report(c: u8) {
    let console = &mut *config::CONSOLE.lock();
    dbgu::format(console, "Received character: '%c'\n", &[Arg::Char(c)]);

    let one = [c];
    let s = core::str::from_utf8(&one).unwrap_or("?");
    dbgu::format(
        console,
        "%%c='%c'  %%s=\"%s\"  %%x=%x  %%p=%p\n",
        &[
            Arg::Char(c),
            Arg::Str(Some(s)),
            Arg::Hex(u32::from(c)),
            Arg::Ptr(c as usize),
        ],
    );
}

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    loop {
        core::hint::spin_loop();
    }
}
