//! Text rendering of a grid.

use core::fmt::Write;

use crate::cell::Cell;
use crate::config::SymbolTable;
use crate::grid::Grid;

/// Render `grid` as a header of column numbers followed by one line per row.
///
/// With `reveal == false` ship cells are drawn with the water symbol, which
/// is how a player sees the opponent's field.
pub fn render(grid: &Grid, symbols: &SymbolTable, reveal: bool) -> String {
    let mut out = String::from("  ");
    for c in 0..grid.size() {
        let _ = write!(out, "{:<2}", c + 1);
    }
    for (r, row) in grid.rows().iter().enumerate() {
        out.push('\n');
        out.push((b'A' + r as u8) as char);
        out.push(' ');
        for &cell in row {
            let shown = if cell == Cell::Ship && !reveal {
                Cell::Water
            } else {
                cell
            };
            out.push_str(symbols.symbol(shown));
            out.push(' ');
        }
    }
    out
}
