//! Ctrl-C handling
//!
//! The pipeline itself is synchronous, so the signal is awaited on a small
//! single-threaded runtime on its own thread.

use crate::types::HdtpError;
use std::thread;
use tracing::debug;

/// Exit code used for every failed or cancelled run
pub const EXIT_FAILURE: i32 = 1;

/// Start a watcher that ends the process with exit code 1 on Ctrl-C
pub fn install_interrupt_handler() -> Result<(), HdtpError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("hdtp-ctrlc".to_string())
        .spawn(move || {
            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    println!("\n{}.", HdtpError::Interrupted);
                    std::process::exit(EXIT_FAILURE);
                }
            });
        })?;

    debug!("interrupt handler installed");
    Ok(())
}
