//! Interrupt handling
//!
//! SIGINT / SIGTERM terminate the process immediately with exit status 1.
//! Removals already performed stay in place.

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Exit status used when the run is interrupted
pub const INTERRUPTED_EXIT_CODE: i32 = 1;

/// Register the interrupt hooks.
pub fn install_interrupt_handler() -> io::Result<()> {
    // Always on: nothing clears this flag, so every interrupt exits.
    let armed = Arc::new(AtomicBool::new(true));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register_conditional_shutdown(
            signal,
            INTERRUPTED_EXIT_CODE,
            Arc::clone(&armed),
        )?;
    }
    Ok(())
}
