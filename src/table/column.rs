// Column descriptors supplied by each list screen

use serde::Serialize;

/// Value-rendering rule for a column. Currency columns are also totalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    #[default]
    Text,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub format: CellFormat,
    pub align: Align,
}

impl Column {
    /// Sortable, left-aligned plain text column.
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            format: CellFormat::Text,
            align: Align::Left,
        }
    }

    /// Sortable, right-aligned currency column with a footer total.
    pub const fn currency(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            format: CellFormat::Currency,
            align: Align::Right,
        }
    }

    pub const fn unsortable(self) -> Self {
        Self { sortable: false, ..self }
    }

    pub const fn aligned(self, align: Align) -> Self {
        Self { align, ..self }
    }

    pub const fn is_aggregated(&self) -> bool {
        matches!(self.format, CellFormat::Currency)
    }
}

/// Finds the column a client asked to sort by, if it exists and allows sorting.
pub fn sortable_column<'c>(columns: &'c [Column], key: &str) -> Option<&'c Column> {
    columns.iter().find(|c: &&Column| c.key == key && c.sortable)
}
