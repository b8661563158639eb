//! Fixed demonstration sequence for the contact table.
//!
//! Builds a ten-bucket table, inserts a handful of contacts (one of them
//! twice, to show update-in-place and an anagram pair to show chaining),
//! and prints the table and two lookups.

use std::io::{self, Write};

use log::info;

use crate::contact_table::ContactTable;
use crate::error::TableError;

pub const DEMO_TABLE_SIZE: usize = 10;

/// Insertions in order; "Rebecca" appears twice.
pub const DEMO_CONTACTS: [(&str, &str); 5] = [
    ("John", "909-876-1234"),
    ("Rebecca", "111-555-0002"),
    ("Amy", "111-222-3333"),
    ("May", "222-333-1111"),
    ("Rebecca", "999-444-9999"),
];

/// Lookups performed at the end; "Chris" is never inserted.
pub const DEMO_QUERIES: [&str; 2] = ["John", "Chris"];

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("failed to write demo output: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Run the demonstration, writing its transcript to `out`.
///
/// Returns the populated table so callers can inspect the final state.
pub fn run<W: Write>(out: &mut W) -> Result<ContactTable, DemoError> {
    let mut table = ContactTable::new(DEMO_TABLE_SIZE)?;
    write!(out, "{}", table)?;

    writeln!(out, "\nInserting contacts...\n")?;
    for (name, number) in DEMO_CONTACTS {
        info!("inserting {} into bucket {}", name, table.hash(name));
        table.insert(name, number);
    }
    write!(out, "{}", table)?;

    writeln!(out, "\nSearch results:")?;
    for name in DEMO_QUERIES {
        match table.search(name) {
            Some(contact) => writeln!(out, "{} -> {}", name, contact)?,
            None => writeln!(out, "{} -> None", name)?,
        }
    }
    Ok(table)
}
