use chainmap_demo::logger::initialize_logger;
use chainmap_demo::{scenario, DemoConfig, DemoError};
use clap::Parser;
use log::info;
use std::io::{self, Write};

fn main() -> Result<(), DemoError> {
    initialize_logger();

    let config = DemoConfig::parse();
    config.apply_color();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let table = scenario::run(&config, &mut out)?;
    out.flush()?;

    info!(
        "walkthrough finished: {} entries, load factor {:.2}",
        table.len(),
        table.load_factor()
    );
    Ok(())
}
