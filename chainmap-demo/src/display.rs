//! Human-readable dump of a table's buckets and chains

use crate::error::DemoError;
use chainmap_core::{Chain, Table};
use colored::Colorize;
use std::fmt::{Display, Write as _};
use std::io::Write;

/// Renders the size/capacity header followed by one line per bucket
#[derive(Clone, Copy, Debug, Default)]
pub struct Printer {
    show_empty: bool,
}

impl Printer {
    pub fn new(show_empty: bool) -> Self {
        Printer { show_empty }
    }

    /// Write the table to `out`
    ///
    /// Bucket numbers are 1-based. Each chain is printed head to tail and
    /// terminated with `nil`.
    pub fn render<V, W>(&self, table: &Table<V>, out: &mut W) -> Result<(), DemoError>
    where
        V: Display,
        W: Write,
    {
        writeln!(
            out,
            "{} {}, {} {}",
            "Total size:".on_red(),
            table.len(),
            "Capacity:".on_blue(),
            table.capacity()
        )?;

        // One buffer for every `[key: value]` pair.
        let mut pair = String::new();
        for (index, bucket) in table.enumerate()?.iter().enumerate() {
            if bucket.is_none() && !self.show_empty {
                continue;
            }

            write!(out, "{} {}: ", "Bucket".on_yellow(), index + 1)?;
            for entry in Chain::new(bucket) {
                pair.clear();
                // Writing into a `String` cannot fail.
                let _ = write!(pair, "[{}: {}]", entry.key(), entry.value());
                write!(out, "{} -> ", pair.as_str().green())?;
            }
            writeln!(out, "nil")?;
        }

        Ok(())
    }

    /// Render into a `String`
    pub fn render_to_string<V: Display>(&self, table: &Table<V>) -> Result<String, DemoError> {
        let mut buffer = Vec::new();
        self.render(table, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_empty_table() {
        plain();
        let table: Table<u32> = Table::new(4).unwrap();

        let text = Printer::new(false).render_to_string(&table).unwrap();
        assert_eq!(text, "Total size: 0, Capacity: 4\n");
    }

    #[test]
    fn test_single_chain() {
        plain();
        let mut table = Table::new(1).unwrap();
        table.insert(1, "a");
        table.insert(2, "b");
        table.insert(3, "a");

        let text = Printer::default().render_to_string(&table).unwrap();
        assert_eq!(
            text,
            "Total size: 3, Capacity: 1\n\
             Bucket 1: [a: 1] -> [b: 2] -> [a: 3] -> nil\n"
        );
    }

    #[test]
    fn test_pairs_of_different_lengths() {
        plain();
        let mut table = Table::new(1).unwrap();
        table.insert("a much longer value", "k1");
        table.insert("v", "k2");

        let text = Printer::default().render_to_string(&table).unwrap();
        assert!(text.ends_with("Bucket 1: [k1: a much longer value] -> [k2: v] -> nil\n"));
    }

    #[test]
    fn test_show_empty() {
        plain();
        let mut table = Table::new(3).unwrap();
        table.insert("v", "key");
        let occupied = table.bucket_index("key");

        let text = Printer::new(true).render_to_string(&table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        for (index, line) in lines[1..].iter().enumerate() {
            if index == occupied {
                assert_eq!(*line, format!("Bucket {}: [key: v] -> nil", index + 1));
            } else {
                assert_eq!(*line, format!("Bucket {}: nil", index + 1));
            }
        }
    }

    #[test]
    fn test_hide_empty_skips_unused_buckets() {
        plain();
        let mut table = Table::new(8).unwrap();
        table.insert(1, "only");

        let text = Printer::new(false).render_to_string(&table).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains(&format!("Bucket {}:", table.bucket_index("only") + 1)));
    }
}
