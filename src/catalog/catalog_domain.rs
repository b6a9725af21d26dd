use crate::catalog::{COURSES_SCHEMA, CatalogSchema, PRODUCTS_SCHEMA};
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog surface the filter state belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CatalogDomain {
    #[serde(rename = "tienda")]
    Products,
    #[serde(rename = "cursos")]
    Courses,
}

impl CatalogDomain {
    /// Resolves the domain from the first segment of the listing route.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "tienda" => Some(Self::Products),
            "cursos" => Some(Self::Courses),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "tienda",
            Self::Courses => "cursos",
        }
    }

    pub fn schema(&self) -> &'static CatalogSchema {
        match self {
            Self::Products => &PRODUCTS_SCHEMA,
            Self::Courses => &COURSES_SCHEMA,
        }
    }
}

impl Display for CatalogDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
