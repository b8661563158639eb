//! Process-wide logger setup for the demo binary.

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Install `env_logger` once at `Info`. `RUST_LOG` overrides the default.
/// Later calls, or a logger already installed elsewhere, are left alone.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        let _ = builder.try_init();
    });
}
