// Generic list-screen pipeline: free-text filter, column sort, currency
// totals and paging over rows already fetched into memory.

pub mod cell;
pub mod column;
pub mod format;
pub mod pipeline;
pub mod state;

pub use cell::{Cell, TableRow};
pub use column::{sortable_column, Align, CellFormat, Column};
pub use pipeline::{run, TablePage, TableView, Totals};
pub use state::{PageSize, SortDirection, TableQueryState};
