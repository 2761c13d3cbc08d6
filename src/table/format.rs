// Display helpers for table cells and the totals footer

use rust_decimal::{Decimal, RoundingStrategy};

use super::cell::Cell;
use super::column::{CellFormat, Column};
use super::pipeline::Totals;

/// Rendered for cells with no value and for columns without a total.
pub const PLACEHOLDER: &str = "-";

/// First footer cell.
pub const TOTALS_LABEL: &str = "Totales";

/// Formats an amount as `$1,234.56`; negatives render as `-$1,234.56`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded: Decimal = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits: String = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped: String = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign: &str = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

pub fn render_cell(cell: &Cell<'_>, column: &Column) -> String {
    match (cell, column.format) {
        (Cell::Number(n), CellFormat::Currency) => format_currency(*n),
        (cell, _) => cell.to_string(),
    }
}

/// Footer row: the label in the first column, formatted totals under
/// currency columns, placeholders elsewhere.
pub fn footer(columns: &[Column], totals: &Totals) -> Vec<String> {
    columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            if idx == 0 {
                return TOTALS_LABEL.to_owned();
            }
            match totals.get(column.key) {
                Some(total) => render_cell(&Cell::Number(total), column),
                None => PLACEHOLDER.to_owned(),
            }
        })
        .collect()
}

pub fn summary(visible_rows: usize) -> String {
    format!("Mostrando {visible_rows} entradas")
}
