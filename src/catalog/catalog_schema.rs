/// Prefix of the canonical path segment that carries a non-default sort order.
pub const SORT_SEGMENT_PREFIX: &str = "orden-";
/// Prefix of the canonical path segment that carries a page number greater than one.
pub const PAGE_SEGMENT_PREFIX: &str = "pagina-";

/// Query parameters that always stay in the query string of a canonical URL.
pub const QUERY_PARAM: &str = "q";
pub const MIN_PRICE_PARAM: &str = "minPrice";
pub const MAX_PRICE_PARAM: &str = "maxPrice";
pub const PER_PAGE_PARAM: &str = "perPage";
/// All of the above, in the order they appear in a canonical URL.
pub const CANONICAL_QUERY_PARAMS: [&str; 4] =
    [QUERY_PARAM, MIN_PRICE_PARAM, MAX_PRICE_PARAM, PER_PAGE_PARAM];

/// Query parameters that used to carry sort and page before they moved into path segments.
pub const LEGACY_SORT_PARAMS: [&str; 2] = ["sort", "orden"];
pub const LEGACY_PAGE_PARAMS: [&str; 2] = ["page", "pagina"];

/// Page size bounds.
pub const MIN_PER_PAGE: u32 = 1;
pub const MAX_PER_PAGE: u32 = 100;

/// Fixed set of course levels.
pub const COURSE_LEVELS: [&str; 3] = ["basico", "intermedio", "avanzado"];

/// Describes a single-select facet dimension of a catalog (e.g. product brand or course level).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetDimension {
    /// Prefix of the path segment that carries the selected value, e.g. `categoria-`.
    pub segment_prefix: &'static str,
    /// Name of the parameter used by the backend and by legacy query-string URLs.
    pub param: &'static str,
    /// Key of the facet list in the backend facets response and in the rendered facets.
    pub facets_key: &'static str,
    /// Keys of the catalog item fields that hold values of this dimension.
    pub item_keys: &'static [&'static str],
    /// Closed set of allowed values, if the dimension isn't free-form.
    pub allowed_values: Option<&'static [&'static str]>,
}

impl FacetDimension {
    /// Validates untrusted value: trims it and checks it against the allowed values, if any.
    pub fn normalize_value(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        match self.allowed_values {
            Some(allowed_values) if !allowed_values.contains(&value) => None,
            _ => Some(value.to_string()),
        }
    }
}

/// Process-wide immutable description of a catalog domain: where it lives, which segments it
/// understands and how it talks to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSchema {
    /// Base path of the listing route, e.g. `/tienda`.
    pub base_path: &'static str,
    /// Name of the backend resource, e.g. `productos`.
    pub resource: &'static str,
    /// Primary facet (category for products, level for courses).
    pub taxonomy: FacetDimension,
    /// Secondary facet (brand for products, tag for courses).
    pub secondary: FacetDimension,
}

impl CatalogSchema {
    /// Query parameter names that carry filter state that belongs in path segments.
    pub fn legacy_params(&self) -> impl Iterator<Item = &'static str> {
        [self.taxonomy.param, self.secondary.param]
            .into_iter()
            .chain(LEGACY_SORT_PARAMS)
            .chain(LEGACY_PAGE_PARAMS)
    }
}

pub static PRODUCTS_SCHEMA: CatalogSchema = CatalogSchema {
    base_path: "/tienda",
    resource: "productos",
    taxonomy: FacetDimension {
        segment_prefix: "categoria-",
        param: "categoria",
        facets_key: "categorias",
        item_keys: &["categoria", "category"],
        allowed_values: None,
    },
    secondary: FacetDimension {
        segment_prefix: "marca-",
        param: "marca",
        facets_key: "marcas",
        item_keys: &["marca", "brand"],
        allowed_values: None,
    },
};

pub static COURSES_SCHEMA: CatalogSchema = CatalogSchema {
    base_path: "/cursos",
    resource: "cursos",
    taxonomy: FacetDimension {
        segment_prefix: "nivel-",
        param: "nivel",
        facets_key: "niveles",
        item_keys: &["nivel", "level"],
        allowed_values: Some(&COURSE_LEVELS),
    },
    secondary: FacetDimension {
        segment_prefix: "tag-",
        param: "tag",
        facets_key: "tags",
        item_keys: &["tags", "tag"],
        allowed_values: None,
    },
};
