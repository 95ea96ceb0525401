//! O# developer driver.
//!
//! Hosts the `osharp` binary's commands so they can be tested as a library.

pub mod commands;
mod error;

use std::sync::Once;

pub use error::DriverError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Only initializes when `RUST_LOG` is set, e.g.
/// `RUST_LOG=osharp_lexer=trace osharp lex file.os`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
