use crate::catalog::FacetDimension;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// Value of a facet dimension as found on a single catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetValue {
    pub id: String,
    pub slug: Option<String>,
    pub label: String,
}

/// Items of a result page that can contribute to page-local facets.
pub trait FacetedItem {
    /// Returns all values of the specified dimension carried by the item.
    fn facet_values(&self, dimension: &FacetDimension) -> Vec<FacetValue>;
}

/// Catalog listing item (product or course) as returned by the backend. The engine only looks
/// into the facet fields, everything else is passed through to the rendering layer untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItem(pub Value);

impl FacetedItem for CatalogItem {
    fn facet_values(&self, dimension: &FacetDimension) -> Vec<FacetValue> {
        let Some(value) = dimension
            .item_keys
            .iter()
            .find_map(|key| self.0.get(key).filter(|value| !value.is_null()))
        else {
            return vec![];
        };

        match value {
            Value::Array(values) => values.iter().filter_map(to_facet_value).collect(),
            value => to_facet_value(value).into_iter().collect(),
        }
    }
}

/// Accepts plain strings and numbers as well as `{ id, slug, nombre }`-like objects.
fn to_facet_value(value: &Value) -> Option<FacetValue> {
    match value {
        Value::String(name) => {
            let name = name.trim();
            (!name.is_empty()).then(|| FacetValue {
                id: name.to_string(),
                slug: None,
                label: name.to_string(),
            })
        }
        Value::Number(id) => Some(FacetValue {
            id: id.to_string(),
            slug: None,
            label: id.to_string(),
        }),
        Value::Object(object) => {
            let field = |keys: &[&str]| {
                keys.iter().find_map(|key| match object.get(*key) {
                    Some(Value::String(value)) if !value.trim().is_empty() => {
                        Some(value.trim().to_string())
                    }
                    Some(Value::Number(value)) => Some(value.to_string()),
                    _ => None,
                })
            };

            let slug = field(&["slug"]);
            let label = field(&["nombre", "name", "label"]);
            let id = field(&["id"]).or_else(|| slug.clone()).or_else(|| label.clone())?;
            Some(FacetValue {
                label: label.unwrap_or_else(|| id.clone()),
                id,
                slug,
            })
        }
        _ => None,
    }
}
