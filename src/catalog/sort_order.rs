use serde_derive::{Deserialize, Serialize};

/// Sort order of the catalog listing. `Relevancia` is the implicit default and is never
/// serialized into a canonical URL.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Relevancia,
    Novedades,
    PrecioAsc,
    PrecioDesc,
    RatingDesc,
}

impl SortOrder {
    /// Every sort order, default first.
    pub const ALL: [SortOrder; 5] = [
        Self::Relevancia,
        Self::Novedades,
        Self::PrecioAsc,
        Self::PrecioDesc,
        Self::RatingDesc,
    ];

    /// Parses untrusted sort value. Anything that isn't one of the known values degrades to the
    /// default order.
    pub fn from_param(value: &str) -> Self {
        match value.trim() {
            "novedades" => Self::Novedades,
            "precio_asc" => Self::PrecioAsc,
            "precio_desc" => Self::PrecioDesc,
            "rating_desc" => Self::RatingDesc,
            _ => Self::Relevancia,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevancia => "relevancia",
            Self::Novedades => "novedades",
            Self::PrecioAsc => "precio_asc",
            Self::PrecioDesc => "precio_desc",
            Self::RatingDesc => "rating_desc",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::Relevancia
    }
}
