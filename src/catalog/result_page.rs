use serde_derive::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Pagination details of a result page. Backends disagree on the key names and on whether the
/// numbers are sent as strings, every field is optional.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(
        default,
        alias = "currentPage",
        alias = "current_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(
        default,
        alias = "totalPages",
        alias = "total_pages",
        alias = "lastPage",
        skip_serializing_if = "Option::is_none"
    )]
    pub pages: Option<u64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(
        default,
        alias = "totalItems",
        alias = "total_items",
        alias = "count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<u64>,
}

/// A page of catalog listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage<T> {
    #[serde(alias = "data", alias = "results")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> ResultPage<T> {
    /// Well-formed page without any items, returned when the listing can't be retrieved at all.
    pub fn empty() -> Self {
        Self {
            items: vec![],
            meta: Some(PageMeta {
                page: Some(1),
                pages: Some(1),
                total: None,
            }),
        }
    }
}
