//! Reference walkthrough: add, update, collide, delete

use crate::config::DemoConfig;
use crate::display::Printer;
use crate::error::DemoError;
use chainmap_core::Table;
use log::{info, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

/// Small string map stored as the table's value in the walkthrough
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    pub fn single(key: &str, value: &str) -> Self {
        let mut map = BTreeMap::new();
        map.insert(key.to_string(), value.to_string());
        Payload(map)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

fn section<W: Write>(
    out: &mut W,
    printer: &Printer,
    table: &Table<Payload>,
    title: &str,
) -> Result<(), DemoError> {
    writeln!(out, "\n--- {} ---", title)?;
    printer.render(table, out)
}

/// Run the walkthrough, printing the table after each phase
///
/// Lookup, update and delete failures are logged and the walkthrough
/// carries on. Returns the final table.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<Table<Payload>, DemoError> {
    let printer = Printer::new(config.show_empty);
    let mut table = Table::new(config.capacity)?;

    info!("adding entries");
    let value1 = Payload::single("value 1", "add");
    let value2 = Payload::single("value 2", "add");

    table.insert(value1.clone(), "firstKey");
    // Same key again: chained, not replaced
    table.insert(value1, "firstKey");
    table.insert(value2, "secondKey");
    section(out, &printer, &table, "After Adding")?;

    if let Err(err) = table.get("firstKey") {
        warn!("error getting key 'firstKey': {}", err);
    }

    info!("updating firstKey");
    if let Err(err) = table.update("firstKey", Payload::single("update", "update")) {
        warn!("error updating key 'firstKey': {}", err);
    }
    section(out, &printer, &table, "After Update")?;

    info!("adding entries that may collide");
    table.insert(Payload::single("collision 1", "collision"), "thirdKey");
    table.insert(Payload::single("collision 2", "collision"), "fifthKey");
    section(out, &printer, &table, "After Adding Collisions")?;

    info!("deleting firstKey");
    if let Err(err) = table.delete("firstKey") {
        warn!("error deleting key 'firstKey': {}", err);
    }
    section(out, &printer, &table, "After Deletion")?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config(capacity: usize) -> DemoConfig {
        colored::control::set_override(false);
        DemoConfig {
            capacity,
            no_color: true,
            show_empty: false,
        }
    }

    #[test]
    fn test_payload_display() {
        assert_eq!(Payload::single("value 1", "add").to_string(), "{value 1: add}");
        assert_eq!(Payload::default().to_string(), "{}");
    }

    #[test]
    fn test_final_table() {
        let mut out = Vec::new();
        let table = run(&plain_config(10), &mut out).unwrap();

        assert_eq!(table.len(), 4);
        // Updated duplicate was deleted; the untouched one is now first
        assert_eq!(table.get("firstKey").unwrap().get("value 1"), Some("add"));
        assert_eq!(table.get("secondKey").unwrap().get("value 2"), Some("add"));
        assert!(table.contains_key("thirdKey"));
        assert!(table.contains_key("fifthKey"));
    }

    #[test]
    fn test_sections_printed_in_order() {
        let mut out = Vec::new();
        run(&plain_config(10), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let positions: Vec<usize> = [
            "--- After Adding ---",
            "--- After Update ---",
            "--- After Adding Collisions ---",
            "--- After Deletion ---",
        ]
        .iter()
        .map(|title| text.find(title).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.contains("Total size: 3, Capacity: 10"));
        assert!(text.contains("[firstKey: {update: update}]"));
    }

    #[test]
    fn test_single_bucket_walkthrough() {
        let mut out = Vec::new();
        let table = run(&plain_config(1), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(table.chain_lengths(), vec![4]);
        assert!(text.ends_with(
            "Bucket 1: [firstKey: {value 1: add}] -> [secondKey: {value 2: add}] -> \
             [thirdKey: {collision 1: collision}] -> [fifthKey: {collision 2: collision}] -> nil\n"
        ));
    }

    #[test]
    fn test_zero_capacity_is_an_error() {
        let mut out = Vec::new();
        let result = run(&plain_config(0), &mut out);
        assert!(matches!(result, Err(DemoError::Table(_))));
        assert!(out.is_empty());
    }
}
