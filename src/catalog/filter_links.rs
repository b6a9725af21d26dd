use crate::catalog::{
    CatalogDomain, Facet, FacetDimension, Facets, FilterState, SortOrder, build_path_reset_page,
};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Link that applies a single filter value, or removes it when it's already active. Changing a
/// filter always starts over from the first page.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct FilterLink {
    pub value: String,
    pub path: String,
    pub active: bool,
}

/// Canonical links for every sort order and every available facet value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLinks {
    pub domain: CatalogDomain,
    pub sort: Vec<FilterLink>,
    pub taxonomy: Vec<FilterLink>,
    pub secondary: Vec<FilterLink>,
}

impl FilterLinks {
    pub fn new(filter: &FilterState, facets: &Facets) -> Self {
        let schema = filter.domain.schema();
        Self {
            domain: filter.domain,
            sort: SortOrder::ALL
                .into_iter()
                .map(|sort| FilterLink {
                    value: sort.as_str().to_string(),
                    path: build_path_reset_page(&filter.clone().with_sort(sort)),
                    active: filter.sort == sort,
                })
                .collect(),
            taxonomy: facet_links(
                &schema.taxonomy,
                filter.taxonomy.as_deref(),
                &facets.taxonomy,
                |taxonomy| FilterState {
                    taxonomy,
                    ..filter.clone()
                },
            ),
            secondary: facet_links(
                &schema.secondary,
                filter.secondary.as_deref(),
                &facets.secondary,
                |secondary| FilterState {
                    secondary,
                    ..filter.clone()
                },
            ),
        }
    }
}

/// Facet values that can't be expressed in a URL (e.g. an unknown course level) get no link.
fn facet_links<F>(
    dimension: &FacetDimension,
    selected: Option<&str>,
    facets: &[Facet],
    select: F,
) -> Vec<FilterLink>
where
    F: Fn(Option<String>) -> FilterState,
{
    facets
        .iter()
        .filter_map(|facet| {
            let value = dimension.normalize_value(facet.slug.as_deref().unwrap_or(&facet.id))?;
            let active = selected.is_some_and(|selected| facet.matches(selected));
            let path = build_path_reset_page(&select((!active).then(|| value.clone())));
            Some(FilterLink {
                value,
                path,
                active,
            })
        })
        .collect()
}

impl Serialize for FilterLinks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let schema = self.domain.schema();
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("sort", &self.sort)?;
        map.serialize_entry(schema.taxonomy.facets_key, &self.taxonomy)?;
        map.serialize_entry(schema.secondary.facets_key, &self.secondary)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::FilterLinks;
    use crate::catalog::{CatalogDomain, Facet, Facets, FilterState, SortOrder};
    use insta::assert_json_snapshot;

    fn facet(id: &str, slug: Option<&str>) -> Facet {
        Facet {
            id: id.to_string(),
            slug: slug.map(str::to_string),
            label: id.to_string(),
            count: 1,
        }
    }

    #[test]
    fn builds_sort_links_with_page_reset() {
        let filter = FilterState::new(CatalogDomain::Products)
            .with_secondary("acme")
            .with_sort(SortOrder::PrecioDesc)
            .with_page(4)
            .with_per_page(24);
        let links = FilterLinks::new(&filter, &Facets::empty(CatalogDomain::Products));
        assert_json_snapshot!(links, @r###"
        {
          "sort": [
            {
              "value": "relevancia",
              "path": "/tienda/marca-acme?perPage=24",
              "active": false
            },
            {
              "value": "novedades",
              "path": "/tienda/marca-acme/orden-novedades?perPage=24",
              "active": false
            },
            {
              "value": "precio_asc",
              "path": "/tienda/marca-acme/orden-precio_asc?perPage=24",
              "active": false
            },
            {
              "value": "precio_desc",
              "path": "/tienda/marca-acme/orden-precio_desc?perPage=24",
              "active": true
            },
            {
              "value": "rating_desc",
              "path": "/tienda/marca-acme/orden-rating_desc?perPage=24",
              "active": false
            }
          ],
          "categorias": [],
          "marcas": []
        }
        "###);
    }

    #[test]
    fn builds_facet_links_with_page_reset() {
        let filter = FilterState::new(CatalogDomain::Courses)
            .with_query("rust")
            .with_taxonomy("basico")
            .with_page(2);
        let facets = Facets {
            domain: CatalogDomain::Courses,
            taxonomy: vec![
                facet("1", Some("basico")),
                facet("2", Some("avanzado")),
                facet("3", Some("experto")),
            ],
            secondary: vec![facet("async", None), facet("web dev", None)],
        };
        let links = FilterLinks::new(&filter, &facets);
        assert_json_snapshot!(links, { ".sort" => "[sort]" }, @r###"
        {
          "sort": "[sort]",
          "niveles": [
            {
              "value": "basico",
              "path": "/cursos?q=rust",
              "active": true
            },
            {
              "value": "avanzado",
              "path": "/cursos/nivel-avanzado?q=rust",
              "active": false
            }
          ],
          "tags": [
            {
              "value": "async",
              "path": "/cursos/nivel-basico/tag-async?q=rust",
              "active": false
            },
            {
              "value": "web dev",
              "path": "/cursos/nivel-basico/tag-web%20dev?q=rust",
              "active": false
            }
          ]
        }
        "###);
    }

    #[test]
    fn links_never_carry_page_segment() {
        let filter = FilterState::new(CatalogDomain::Products)
            .with_taxonomy("running")
            .with_page(7);
        let facets = Facets {
            domain: CatalogDomain::Products,
            taxonomy: vec![facet("running", None), facet("trail", None)],
            secondary: vec![facet("acme", None)],
        };
        let links = FilterLinks::new(&filter, &facets);
        for link in links
            .sort
            .iter()
            .chain(&links.taxonomy)
            .chain(&links.secondary)
        {
            assert!(!link.path.contains("pagina-"), "{}", link.path);
        }
    }
}
