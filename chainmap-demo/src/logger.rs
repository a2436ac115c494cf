use std::env;
use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Builder with the crate defaults, then `filters` (RUST_LOG syntax) on top
fn logger_builder(filters: Option<&str>) -> Builder {
    let mut builder = Builder::new();

    builder
        .filter_level(LevelFilter::Warn)
        .filter_module("chainmap_core", LevelFilter::Info)
        .filter_module("chainmap_demo", LevelFilter::Info)
        .format_timestamp_millis();

    if let Some(filters) = filters {
        builder.parse_filters(filters);
    }

    builder
}

pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let filters = env::var("RUST_LOG").ok();

        // Another logger may already be installed (tests, embedding binaries).
        let _ = logger_builder(filters.as_deref()).try_init();
    });
}
