// Client-held query state for a single list screen

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Rows per page. `All` disables slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    All,
    Rows(usize),
}

impl PageSize {
    /// Number of pages needed for `total` rows.
    pub fn page_count(self, total: usize) -> usize {
        match self {
            _ if total == 0 => 0,
            PageSize::All => 1,
            PageSize::Rows(0) => 0,
            PageSize::Rows(size) => total.div_ceil(size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPageSize(pub String);

impl fmt::Display for InvalidPageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid page size '{}'", self.0)
    }
}

impl std::error::Error for InvalidPageSize {}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    // "all" and the legacy "-1" sentinel both mean every row
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "-1" {
            return Ok(PageSize::All);
        }
        match trimmed.parse::<usize>() {
            Ok(size) if size > 0 => Ok(PageSize::Rows(size)),
            _ => Err(InvalidPageSize(s.to_owned())),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageSize::All => serializer.serialize_str("all"),
            PageSize::Rows(size) => serializer.serialize_u64(*size as u64),
        }
    }
}

/// Filter, sort and paging parameters of one table.
///
/// Changing the filter text, the sort column or the page size moves the
/// table back to its first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQueryState {
    filter_text: String,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: PageSize,
}

impl TableQueryState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            filter_text: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            page_index: 0,
            page_size,
        }
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        if text != self.filter_text {
            self.filter_text = text;
            self.page_index = 0;
        }
    }

    pub fn set_sort(&mut self, key: Option<String>, direction: SortDirection) {
        if key != self.sort_key {
            self.page_index = 0;
        }
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Header click: the active ascending column flips to descending,
    /// anything else sorts ascending on `key`.
    pub fn toggle_sort(&mut self, key: &str) {
        let flip: bool = self.sort_key() == Some(key) && self.sort_direction == SortDirection::Asc;
        let direction: SortDirection = if flip { SortDirection::Desc } else { SortDirection::Asc };
        self.set_sort(Some(key.to_owned()), direction);
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page_index = 0;
        }
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index;
    }

    /// Row range of the current page within a set of `total` rows.
    pub fn page_bounds(&self, total: usize) -> (usize, usize) {
        match self.page_size {
            PageSize::All => (0, total),
            PageSize::Rows(size) => {
                let start: usize = self.page_index.saturating_mul(size).min(total);
                let end: usize = start.saturating_add(size).min(total);
                (start, end)
            }
        }
    }
}
