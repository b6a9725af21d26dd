use crate::catalog::{CatalogDomain, FacetDimension};
use anyhow::{Context, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

/// A selectable value of a facet dimension with the number of matching catalog items.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Facet {
    #[serde(deserialize_with = "deserialize_facet_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "nombre", alias = "label", alias = "name", default)]
    pub label: String,
    #[serde(default)]
    pub count: u64,
}

impl Facet {
    /// Checks whether the facet represents the specified filter value (slug, id or label).
    pub fn matches(&self, value: &str) -> bool {
        self.slug
            .as_deref()
            .is_some_and(|slug| slug.eq_ignore_ascii_case(value))
            || self.id.eq_ignore_ascii_case(value)
            || self.label.eq_ignore_ascii_case(value)
    }
}

/// Backends aren't consistent about identifiers, some use numbers.
fn deserialize_facet_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "facet id must be a string or a number, got {other}"
        ))),
    }
}

/// Facet lists of both dimensions of a catalog domain, in backend-provided order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub domain: CatalogDomain,
    pub taxonomy: Vec<Facet>,
    pub secondary: Vec<Facet>,
}

impl Facets {
    pub fn empty(domain: CatalogDomain) -> Self {
        Self {
            domain,
            taxonomy: vec![],
            secondary: vec![],
        }
    }

    /// Whether no dimension has any facet, i.e. facets are unavailable.
    pub fn is_empty(&self) -> bool {
        self.taxonomy.is_empty() && self.secondary.is_empty()
    }

    /// Reads facets from the backend response shaped as `{ <dimension>: Facet[] }`. Missing
    /// dimensions are treated as empty lists.
    pub fn from_response(domain: CatalogDomain, response: Value) -> anyhow::Result<Self> {
        let Value::Object(mut response) = response else {
            bail!("Facets response must be a JSON object.");
        };

        let schema = domain.schema();
        Ok(Self {
            domain,
            taxonomy: take_dimension(&mut response, &schema.taxonomy)?,
            secondary: take_dimension(&mut response, &schema.secondary)?,
        })
    }
}

fn take_dimension(
    response: &mut serde_json::Map<String, Value>,
    dimension: &FacetDimension,
) -> anyhow::Result<Vec<Facet>> {
    let Some(facets) = response.remove(dimension.facets_key) else {
        return Ok(vec![]);
    };

    let mut facets: Vec<Facet> = serde_json::from_value(facets)
        .with_context(|| format!("Cannot deserialize `{}` facets.", dimension.facets_key))?;
    for facet in facets.iter_mut().filter(|facet| facet.label.is_empty()) {
        facet.label = facet.id.clone();
    }

    Ok(facets)
}

impl Serialize for Facets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let schema = self.domain.schema();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(schema.taxonomy.facets_key, &self.taxonomy)?;
        map.serialize_entry(schema.secondary.facets_key, &self.secondary)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Facet, Facets};
    use crate::catalog::CatalogDomain;
    use insta::{assert_debug_snapshot, assert_json_snapshot};
    use serde_json::json;

    #[test]
    fn deserialization() -> anyhow::Result<()> {
        let facets = Facets::from_response(
            CatalogDomain::Products,
            json!({
                "categorias": [
                    { "id": 7, "slug": "zapatillas", "nombre": "Zapatillas", "count": 12 },
                    { "id": "camisetas", "name": "Camisetas" }
                ],
                "marcas": [{ "id": "acme", "label": "Acme", "count": 3 }, { "id": "globex" }],
                "unrelated": true
            }),
        )?;
        assert_debug_snapshot!(facets, @r###"
        Facets {
            domain: Products,
            taxonomy: [
                Facet {
                    id: "7",
                    slug: Some(
                        "zapatillas",
                    ),
                    label: "Zapatillas",
                    count: 12,
                },
                Facet {
                    id: "camisetas",
                    slug: None,
                    label: "Camisetas",
                    count: 0,
                },
            ],
            secondary: [
                Facet {
                    id: "acme",
                    slug: None,
                    label: "Acme",
                    count: 3,
                },
                Facet {
                    id: "globex",
                    slug: None,
                    label: "globex",
                    count: 0,
                },
            ],
        }
        "###);

        Ok(())
    }

    #[test]
    fn missing_dimensions_are_empty() -> anyhow::Result<()> {
        let facets = Facets::from_response(CatalogDomain::Courses, json!({ "tags": [] }))?;
        assert_eq!(facets, Facets::empty(CatalogDomain::Courses));
        assert!(facets.is_empty());

        Ok(())
    }

    #[test]
    fn fails_for_malformed_responses() {
        assert!(Facets::from_response(CatalogDomain::Products, json!([])).is_err());
        assert!(
            Facets::from_response(CatalogDomain::Products, json!({ "marcas": "acme" })).is_err()
        );
        assert!(
            Facets::from_response(CatalogDomain::Products, json!({ "marcas": [{ "id": null }] }))
                .is_err()
        );
    }

    #[test]
    fn serialization() -> anyhow::Result<()> {
        let facets = Facets {
            domain: CatalogDomain::Courses,
            taxonomy: vec![Facet {
                id: "basico".to_string(),
                slug: Some("basico".to_string()),
                label: "Básico".to_string(),
                count: 4,
            }],
            secondary: vec![],
        };
        assert_json_snapshot!(facets, @r###"
        {
          "niveles": [
            {
              "id": "basico",
              "slug": "basico",
              "nombre": "Básico",
              "count": 4
            }
          ],
          "tags": []
        }
        "###);

        Ok(())
    }

    #[test]
    fn matches_filter_values() {
        let facet = Facet {
            id: "17".to_string(),
            slug: Some("zapatillas-running".to_string()),
            label: "Zapatillas Running".to_string(),
            count: 2,
        };
        assert!(facet.matches("zapatillas-running"));
        assert!(facet.matches("17"));
        assert!(facet.matches("zapatillas running"));
        assert!(!facet.matches("zapatillas"));
    }
}
