use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvsel_core::Record;

/// Print the (index, value) table for the captured header record.
///
/// Prints nothing when the input had no records, so empty runs stay empty.
pub fn print_headers(headers: Option<&Record>) {
    let Some(headers) = headers else {
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("Index"), header_cell("Header")]);
    apply_header_table_style(&mut table);
    for (index, value) in headers.iter().enumerate() {
        table.add_row(vec![Cell::new(index).fg(Color::DarkGrey), Cell::new(value)]);
    }
    println!("{table}");
}

fn apply_header_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(table, 0, CellAlignment::Right);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
