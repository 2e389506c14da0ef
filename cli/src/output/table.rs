//! Shared tab-aligned table writer for listing commands.
//!
//! Layout: one header row, then one row per entity. Columns are left-aligned
//! and separated by at least two spaces; the last column is never padded.

use std::io::Write;

use comfy_table::{CellAlignment, Table};

/// Minimum number of spaces between two columns.
const COLUMN_GAP: u16 = 2;

/// Borderless table with a fixed header.
pub struct TabularWriter {
    table: Table,
    columns: usize,
}

impl TabularWriter {
    /// Create a table with the given column headers.
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::NOTHING);
        table.set_header(headers.to_vec());
        Self {
            table,
            columns: headers.len(),
        }
    }

    /// Append one row. Rows are written in insertion order.
    pub fn add_row<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.table.add_row(fields);
    }

    /// Render the table into lines, header first.
    #[must_use]
    pub fn lines(mut self) -> Vec<String> {
        let last = self.columns.saturating_sub(1);
        for (index, column) in self.table.column_iter_mut().enumerate() {
            let right = if index == last { 0 } else { COLUMN_GAP };
            column.set_padding((0, right));
            column.set_cell_alignment(CellAlignment::Left);
        }
        self.table
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    /// Write the rendered table, one line per row.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(self, out: &mut impl Write) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()
    }
}
