use crate::catalog::{
    CatalogDomain, MAX_PER_PAGE, MAX_PRICE_PARAM, MIN_PER_PAGE, MIN_PRICE_PARAM, PER_PAGE_PARAM,
    QUERY_PARAM, SortOrder,
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::HashMap;

/// Flat, already decoded query-string parameters as delivered by the routing layer.
pub type QueryParams = HashMap<String, String>;

/// Typed and validated selection of everything the user filters, sorts and pages the catalog
/// listing by. Every field is either a valid value or absent, absent meaning "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub domain: CatalogDomain,
    /// Trimmed free-text search term, empty string means no search.
    pub q: String,
    /// Category slug for products, level for courses.
    pub taxonomy: Option<String>,
    /// Brand slug for products, tag for courses.
    pub secondary: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub sort: SortOrder,
    /// 1-based page number, always greater than one when present.
    pub page: Option<u32>,
    /// Page size within `[1, 100]`, absent means the configured default.
    pub per_page: Option<u32>,
}

impl FilterState {
    /// Creates a filter state without any active filters.
    pub fn new(domain: CatalogDomain) -> Self {
        Self {
            domain,
            q: String::new(),
            taxonomy: None,
            secondary: None,
            min_price: None,
            max_price: None,
            sort: SortOrder::default(),
            page: None,
            per_page: None,
        }
    }

    pub fn with_query<Q: AsRef<str>>(self, q: Q) -> Self {
        Self {
            q: q.as_ref().trim().to_string(),
            ..self
        }
    }

    pub fn with_taxonomy<V: Into<String>>(self, taxonomy: V) -> Self {
        Self {
            taxonomy: Some(taxonomy.into()),
            ..self
        }
    }

    pub fn with_secondary<V: Into<String>>(self, secondary: V) -> Self {
        Self {
            secondary: Some(secondary.into()),
            ..self
        }
    }

    pub fn with_price_range(self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        Self {
            min_price,
            max_price,
            ..self
        }
    }

    pub fn with_sort(self, sort: SortOrder) -> Self {
        Self { sort, ..self }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: Some(page).filter(|page| *page > 1),
            ..self
        }
    }

    pub fn with_per_page(self, per_page: u32) -> Self {
        Self {
            per_page: Some(per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE)),
            ..self
        }
    }

    /// Effective 1-based page number.
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1)
    }

    /// Parameters of the backend listing and facets requests.
    pub fn backend_params(&self, default_per_page: u32) -> Vec<(&'static str, String)> {
        let schema = self.domain.schema();
        let mut params = vec![];
        if !self.q.is_empty() {
            params.push((QUERY_PARAM, self.q.clone()));
        }
        if let Some(ref taxonomy) = self.taxonomy {
            params.push((schema.taxonomy.param, taxonomy.clone()));
        }
        if let Some(ref secondary) = self.secondary {
            params.push((schema.secondary.param, secondary.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push((MIN_PRICE_PARAM, min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push((MAX_PRICE_PARAM, max_price.to_string()));
        }
        if !self.sort.is_default() {
            params.push(("sort", self.sort.as_str().to_string()));
        }
        params.push(("page", self.page_number().to_string()));
        params.push((
            PER_PAGE_PARAM,
            self.per_page
                .unwrap_or(default_per_page)
                .clamp(MIN_PER_PAGE, MAX_PER_PAGE)
                .to_string(),
        ));

        params
    }
}

impl Serialize for FilterState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let schema = self.domain.schema();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(QUERY_PARAM, &self.q)?;
        if let Some(ref taxonomy) = self.taxonomy {
            map.serialize_entry(schema.taxonomy.param, taxonomy)?;
        }
        if let Some(ref secondary) = self.secondary {
            map.serialize_entry(schema.secondary.param, secondary)?;
        }
        if let Some(min_price) = self.min_price {
            map.serialize_entry(MIN_PRICE_PARAM, &min_price)?;
        }
        if let Some(max_price) = self.max_price {
            map.serialize_entry(MAX_PRICE_PARAM, &max_price)?;
        }
        map.serialize_entry("sort", &self.sort)?;
        map.serialize_entry("page", &self.page_number())?;
        if let Some(per_page) = self.per_page {
            map.serialize_entry(PER_PAGE_PARAM, &per_page)?;
        }
        map.end()
    }
}

/// Parses untrusted numeric input. Only finite numbers are accepted.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// Parses a price bound: floored, negative values are treated as absent.
pub fn parse_price(raw: &str) -> Option<u64> {
    parse_number(raw)
        .map(f64::floor)
        .filter(|price| *price >= 0.0)
        .map(|price| price as u64)
}

/// Parses a page number: floored and clamped to be at least one.
pub fn parse_page(raw: &str) -> Option<u32> {
    parse_number(raw).map(|page| page.floor().max(1.0) as u32)
}

/// Parses a page size: floored and clamped to `[1, 100]`.
pub fn parse_per_page(raw: &str) -> Option<u32> {
    parse_number(raw).map(|per_page| {
        per_page
            .floor()
            .clamp(f64::from(MIN_PER_PAGE), f64::from(MAX_PER_PAGE)) as u32
    })
}
