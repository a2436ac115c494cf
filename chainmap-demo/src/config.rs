use chainmap_core::DEFAULT_CAPACITY;
use clap::Parser;

/// Walk through chained-hash-table operations and print the table after each step
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct DemoConfig {
    /// Number of buckets in the table
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Print without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Also list buckets that hold no entries
    #[arg(long)]
    pub show_empty: bool,
}

impl DemoConfig {
    /// Force colors off when requested; otherwise leave terminal detection alone
    pub fn apply_color(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            capacity: DEFAULT_CAPACITY,
            no_color: false,
            show_empty: false,
        }
    }
}
