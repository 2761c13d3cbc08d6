// Filter -> sort -> aggregate -> paginate over an in-memory row set

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::cell::TableRow;
use super::column::Column;
use super::format::{footer, summary};
use super::state::{PageSize, SortDirection, TableQueryState};

/// Column sums over the filtered set, keyed by column key.
/// Only currency columns have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Totals(BTreeMap<&'static str, Decimal>);

impl Totals {
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.0.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Output of one pipeline run.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Rows of the requested page only.
    pub rows: Vec<&'a R>,
    /// Totals over every filtered row, independent of paging.
    pub totals: Totals,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page_count: usize,
}

/// Keeps rows where any field's value contains `filter_text`, ignoring
/// case. Hidden fields count too. An empty filter keeps everything in
/// input order.
pub fn filter_rows<'a, R: TableRow>(rows: &'a [R], filter_text: &str) -> Vec<&'a R> {
    if filter_text.is_empty() {
        return rows.iter().collect();
    }

    let needle: String = filter_text.to_lowercase();
    rows.iter()
        .filter(|row: &&R| {
            row.search_keys().into_iter().any(|key: &str| {
                row.cell(key)
                    .search_text()
                    .is_some_and(|haystack: String| haystack.contains(&needle))
            })
        })
        .collect()
}

/// Stable sort on one column; ties keep their incoming order.
pub fn sort_rows<R: TableRow>(rows: &mut [&R], key: &str, direction: SortDirection) {
    rows.sort_by(|a: &&R, b: &&R| direction.apply(a.cell(key).compare(&b.cell(key))));
}

/// Sums every aggregated column over `rows`. Non-numeric values are skipped.
pub fn aggregate<R: TableRow>(rows: &[&R], columns: &[Column]) -> Totals {
    let sums: BTreeMap<&'static str, Decimal> = columns
        .iter()
        .filter(|column: &&Column| column.is_aggregated())
        .map(|column: &Column| {
            let sum: Decimal = rows
                .iter()
                .filter_map(|row: &&R| row.cell(column.key).as_number())
                .sum();
            (column.key, sum)
        })
        .collect();
    Totals(sums)
}

/// Slices the current page. An index past the end yields an empty page.
pub fn paginate<'a, R>(rows: Vec<&'a R>, state: &TableQueryState) -> Vec<&'a R> {
    let (start, end) = state.page_bounds(rows.len());
    match state.page_size() {
        PageSize::All => rows,
        PageSize::Rows(_) => rows.into_iter().skip(start).take(end - start).collect(),
    }
}

/// Runs the full pipeline. Pure: the same rows and state always give the
/// same view.
pub fn run<'a, R: TableRow>(rows: &'a [R], columns: &[Column], state: &TableQueryState) -> TableView<'a, R> {
    let mut filtered: Vec<&'a R> = filter_rows(rows, state.filter_text());

    if let Some(key) = state.sort_key() {
        sort_rows(&mut filtered, key, state.sort_direction());
    }

    let totals: Totals = aggregate(&filtered, columns);
    let filtered_count: usize = filtered.len();

    TableView {
        rows: paginate(filtered, state),
        totals,
        total_count: rows.len(),
        filtered_count,
        page_count: state.page_size().page_count(filtered_count),
    }
}

/// Serializable page handed to API clients.
#[derive(Debug, Serialize)]
pub struct TablePage<'a, R> {
    pub columns: &'a [Column],
    pub rows: Vec<&'a R>,
    pub totals: Totals,
    pub footer: Vec<String>,
    pub summary: String,
    pub total_count: usize,
    pub filtered_count: usize,
    pub page: usize,
    pub page_size: PageSize,
    pub page_count: usize,
}

impl<'a, R> TablePage<'a, R> {
    pub fn new(view: TableView<'a, R>, columns: &'a [Column], state: &TableQueryState) -> Self {
        Self {
            columns,
            footer: footer(columns, &view.totals),
            summary: summary(view.rows.len()),
            rows: view.rows,
            totals: view.totals,
            total_count: view.total_count,
            filtered_count: view.filtered_count,
            page: state.page_index(),
            page_size: state.page_size(),
            page_count: view.page_count,
        }
    }
}
