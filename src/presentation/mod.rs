use prettytable::{Cell, Row, Table, format};

/// Account, book and analyzer models
pub mod account;
/// Quotes, depth, candle history and symbol models
pub mod market;
/// Option greeks, symbols, chains and synthetic futures
pub mod options;
/// Request enumerations: action, price type, product, option type
pub mod order;
/// Serialization utilities for API responses
pub mod serialization;
/// Market calendar models
pub mod utility;

/// Creates a box-drawn table with a header row
pub(crate) fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    table
}

/// Appends a row of already formatted cells
pub(crate) fn add_row(table: &mut Table, cells: Vec<String>) {
    table.add_row(Row::new(cells.iter().map(|c| Cell::new(c)).collect()));
}
