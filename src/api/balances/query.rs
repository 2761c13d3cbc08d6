// Query-string parameters of the balance screens

use std::str::FromStr;

use serde::Deserialize;

use crate::models::BalanceType;
use crate::table::{sortable_column, Column, PageSize, SortDirection, TableQueryState};
use crate::utils::error_handler::DomainError;

/// `?q=&sort=&dir=&page=&page_size=&zones=&balance_type=`
#[derive(Debug, Default, Deserialize)]
pub struct BalanceParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<String>,
    pub zones: Option<String>,
    pub balance_type: Option<String>,
}

impl BalanceParams {
    /// Builds the table state for `columns`, collecting every invalid
    /// parameter into one validation error.
    pub fn table_state(&self, columns: &[Column], default_page_size: usize) -> Result<TableQueryState, DomainError> {
        let mut errors: Vec<(&'static str, String)> = Vec::new();

        let page_size: PageSize = match self.page_size.as_deref() {
            None => PageSize::Rows(default_page_size),
            Some(raw) => PageSize::from_str(raw).unwrap_or_else(|_| {
                errors.push(("page_size", format!("El tamaño de página '{raw}' debe ser un número positivo o 'all'")));
                PageSize::Rows(default_page_size)
            }),
        };

        let direction: SortDirection = match self.dir.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                errors.push(("dir", format!("La dirección '{other}' no es válida, use 'asc' o 'desc'")));
                SortDirection::Asc
            }
        };

        let sort_key: Option<String> = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(key) if sortable_column(columns, key).is_some() => Some(key.to_owned()),
            Some(key) => {
                errors.push(("sort", format!("La columna '{key}' no existe o no se puede ordenar")));
                None
            }
        };

        if let Err(message) = self.balance_type() {
            errors.push(("balance_type", message));
        }

        if !errors.is_empty() {
            return Err(DomainError::invalid_fields(errors));
        }

        let mut state: TableQueryState = TableQueryState::new(page_size);
        state.set_filter(self.q.as_deref().unwrap_or_default().trim());
        state.set_sort(sort_key, direction);
        state.set_page(self.page.unwrap_or(0));
        Ok(state)
    }

    /// Sign pre-filter; absent means every balance.
    pub fn balance_type(&self) -> Result<BalanceType, String> {
        match self.balance_type.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("all") => Ok(BalanceType::All),
            Some("positive") => Ok(BalanceType::Positive),
            Some("negative") => Ok(BalanceType::Negative),
            Some(other) => Err(format!(
                "El tipo de balance '{other}' no es válido, use 'all', 'positive' o 'negative'"
            )),
        }
    }

    /// Zone names from the comma separated `zones` parameter, blanks dropped.
    pub fn zones(&self) -> Vec<String> {
        self.zones
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|zone: &&str| !zone.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BETTING_POOL_COLUMNS;
    use crate::table::Column;

    const COLUMNS: &[Column] = &[
        Column::text("zona", "Zona"),
        Column::text("acciones", "Acciones").unsortable(),
        Column::currency("balance", "Balance"),
    ];

    #[test]
    fn defaults_when_nothing_is_given() {
        let state: TableQueryState = BalanceParams::default().table_state(COLUMNS, 25).unwrap();
        assert_eq!(state.page_size(), PageSize::Rows(25));
        assert_eq!(state.sort_key(), None);
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.filter_text(), "");
    }

    #[test]
    fn full_parameter_set_is_applied() {
        let params: BalanceParams = BalanceParams {
            q: Some(" norte ".into()),
            sort: Some("balance".into()),
            dir: Some("DESC".into()),
            page: Some(2),
            page_size: Some("all".into()),
            ..Default::default()
        };

        let state: TableQueryState = params.table_state(COLUMNS, 25).unwrap();
        assert_eq!(state.filter_text(), "norte");
        assert_eq!(state.sort_key(), Some("balance"));
        assert_eq!(state.sort_direction(), SortDirection::Desc);
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.page_size(), PageSize::All);
    }

    #[test]
    fn invalid_parameters_are_reported_per_field() {
        let params: BalanceParams = BalanceParams {
            sort: Some("acciones".into()),
            dir: Some("sideways".into()),
            page_size: Some("0".into()),
            balance_type: Some("zero".into()),
            ..Default::default()
        };

        let Err(DomainError::Validation { errors, .. }) = params.table_state(COLUMNS, 25) else {
            panic!("expected a validation error");
        };
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(fields, vec!["balance_type", "dir", "page_size", "sort"]);
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let params: BalanceParams = BalanceParams {
            sort: Some("saldo".into()),
            ..Default::default()
        };
        assert!(params.table_state(BETTING_POOL_COLUMNS, 25).is_err());
    }

    #[test]
    fn zones_are_split_and_trimmed() {
        let params: BalanceParams = BalanceParams {
            zones: Some("GRUPO GILBERTO TL, ,GRUPO KENDRICK TL ".into()),
            ..Default::default()
        };
        assert_eq!(params.zones(), vec!["GRUPO GILBERTO TL", "GRUPO KENDRICK TL"]);
        assert!(BalanceParams::default().zones().is_empty());
    }

    #[test]
    fn balance_type_is_case_insensitive() {
        let params: BalanceParams = BalanceParams {
            balance_type: Some("Negative".into()),
            ..Default::default()
        };
        assert_eq!(params.balance_type(), Ok(BalanceType::Negative));
    }
}
