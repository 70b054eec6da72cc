//! Report rendering
//!
//! The attachment index is printed as an ASCII grid table on stdout.
//! Logs go to stderr, so the table is the only thing a pipe sees.

use crate::attachments::AttachmentIndex;
use comfy_table::{presets::ASCII_FULL, Cell, Table};

/// Single line reported for a failed scan.
///
/// The alternate format joins the error's context chain with `: `, so
/// the whole cause lands on one line.
pub fn error_line(err: &anyhow::Error) -> String {
    format!("An error occurred: {err:#}")
}

/// Build the report table from a populated index.
pub fn render(index: &AttachmentIndex) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(vec![
        Cell::new("Resource Name"),
        Cell::new("Resource Type"),
        Cell::new("Resource ID"),
    ]);

    for (name, kind, id) in index.rows() {
        table.add_row(vec![Cell::new(name), Cell::new(kind.as_str()), Cell::new(id)]);
    }

    table
}

/// Print the report table to stdout.
pub fn print(index: &AttachmentIndex) {
    let table = render(index);
    println!("{table}");
}
