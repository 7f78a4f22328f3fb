//! Translation of store list filters into a repository query description.
//!
//! [`StoreListQuery::from_filter`] is pure: it normalises the caller's
//! optional inputs into a predicate, an ordering and a clamped page window.
//! The Diesel repository turns the result into SQL.

use serde::Deserialize;

use crate::domain::store::StoreStatus;
use crate::pagination::PageWindow;

/// Columns a store listing may be ordered by.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum StoreSortField {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "kanaName")]
    KanaName,
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "updatedAt")]
    UpdatedAt,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Raw listing request. Every field is optional.
#[derive(Clone, Debug, Default)]
pub struct StoreFilter {
    pub name: Option<String>,
    pub status: Option<StoreStatus>,
    pub prefecture_code: Option<String>,
    pub region_code: Option<String>,
    pub sort_by: Option<StoreSortField>,
    pub sort_order: Option<SortDirection>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Conditions on the store's prefecture relation. Both codes live on the
/// same node so a single join satisfies them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefectureRelationFilter {
    /// Exact prefecture code.
    pub code: Option<String>,
    /// Exact code of the prefecture's region.
    pub region_code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorePredicate {
    /// Case-preserving substring of the store name.
    pub name_contains: Option<String>,
    pub status: Option<StoreStatus>,
    pub prefecture: Option<PrefectureRelationFilter>,
}

impl StorePredicate {
    /// `true` when the predicate places no restriction on the rows.
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.status.is_none() && self.prefecture.is_none()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoreOrder {
    pub field: StoreSortField,
    pub direction: SortDirection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreListQuery {
    pub predicate: StorePredicate,
    pub order: StoreOrder,
    pub window: PageWindow,
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl StoreListQuery {
    pub fn from_filter(filter: StoreFilter) -> Self {
        let prefecture_code = present(filter.prefecture_code);
        let region_code = present(filter.region_code);

        let prefecture = if prefecture_code.is_some() || region_code.is_some() {
            Some(PrefectureRelationFilter {
                code: prefecture_code,
                region_code,
            })
        } else {
            None
        };

        Self {
            predicate: StorePredicate {
                name_contains: filter.name.filter(|s| !s.trim().is_empty()),
                status: filter.status,
                prefecture,
            },
            order: StoreOrder {
                field: filter.sort_by.unwrap_or_default(),
                direction: filter.sort_order.unwrap_or_default(),
            },
            window: PageWindow::new(filter.page, filter.size),
        }
    }
}

/// Escapes `LIKE` wildcards so `value` matches literally, using `\` as the
/// escape character.
pub fn like_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
