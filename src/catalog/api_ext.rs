use crate::{
    api::Api,
    catalog::{
        CatalogBackend, CatalogBrowse, CatalogDomain, CatalogItem, CatalogPage, FACETS_RELAXATIONS,
        Facets, FilterState, LISTING_RELAXATIONS, PageMeta, QueryParams, ResultPage,
        apply_active_filters, legacy_redirect, parse_filter_state, plan_attempts, resolve_facets,
        retrieval::first_success,
    },
};
use tracing::{error, info};

/// API to browse catalog listings. None of its operations fail: malformed input is normalized,
/// rejected filter combinations are relaxed and an unavailable backend yields an empty listing.
pub struct CatalogApi<'a, B: CatalogBackend> {
    api: &'a Api<B>,
}

impl<'a, B: CatalogBackend> CatalogApi<'a, B> {
    /// Creates Catalog API.
    pub fn new(api: &'a Api<B>) -> Self {
        Self { api }
    }

    /// Resolves a listing URL (path segments after the base path plus query parameters) either to
    /// a redirect to its canonical form or to the page it lists.
    pub async fn browse<S: AsRef<str>>(
        &self,
        domain: CatalogDomain,
        segments: &[S],
        query: &QueryParams,
    ) -> CatalogBrowse {
        if let Some(location) = legacy_redirect(domain, segments, query) {
            info!(
                catalog.domain = %domain,
                location = %location,
                "Redirecting legacy catalog URL."
            );
            return CatalogBrowse::Redirect { location };
        }

        let filter = parse_filter_state(domain, segments, query);
        let server_facets = self.facets(&filter).await;
        let applied_filter = apply_active_filters(&filter, &server_facets);
        let result_page = self.list(&applied_filter).await;

        let facets = resolve_facets(server_facets, &result_page.items);
        let meta = result_page.meta.unwrap_or(PageMeta {
            page: Some(u64::from(applied_filter.page_number())),
            pages: None,
            total: None,
        });

        CatalogBrowse::Page(Box::new(CatalogPage::new(
            filter,
            applied_filter,
            result_page.items,
            meta,
            facets,
        )))
    }

    /// Retrieves the listing, relaxing the filter state until the backend accepts it.
    pub async fn list(&self, state: &FilterState) -> ResultPage<CatalogItem> {
        let backend = &self.api.backend;
        let attempts = plan_attempts(state, &LISTING_RELAXATIONS);
        let attempts_count = attempts.len();
        match first_success(
            "listing",
            attempts,
            self.api.config.catalog.attempt_timeout,
            |state| async move { backend.fetch_listing(&state).await },
        )
        .await
        {
            Some((_, result_page)) => result_page,
            None => {
                error!(
                    catalog.query = "listing",
                    attempts = attempts_count,
                    filter = ?state.log_context(),
                    "Catalog listing is unavailable, rendering empty listing."
                );
                ResultPage::empty()
            }
        }
    }

    /// Retrieves the facets, relaxing the filter state until the backend accepts it.
    pub async fn facets(&self, state: &FilterState) -> Facets {
        let backend = &self.api.backend;
        let attempts = plan_attempts(state, &FACETS_RELAXATIONS);
        let attempts_count = attempts.len();
        match first_success(
            "facets",
            attempts,
            self.api.config.catalog.attempt_timeout,
            |state| async move { backend.fetch_facets(&state).await },
        )
        .await
        {
            Some((_, facets)) => facets,
            None => {
                error!(
                    catalog.query = "facets",
                    attempts = attempts_count,
                    filter = ?state.log_context(),
                    "Catalog facets are unavailable."
                );
                Facets::empty(state.domain)
            }
        }
    }
}

impl<B: CatalogBackend> Api<B> {
    /// Returns an API to browse catalog listings.
    pub fn catalog(&self) -> CatalogApi<'_, B> {
        CatalogApi::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{
            CatalogBrowse, CatalogDomain, CatalogItem, Facet, Facets, FilterState, PageMeta,
            ResultPage, SortOrder, build_path, parse_query_string,
        },
        tests::{MockCatalogBackend, mock_api, mock_item},
    };
    use anyhow::anyhow;
    use insta::assert_json_snapshot;
    use serde_json::json;

    fn facet(id: &str, count: u64) -> Facet {
        Facet {
            id: id.to_string(),
            slug: Some(id.to_string()),
            label: id.to_uppercase(),
            count,
        }
    }

    fn page(items: Vec<CatalogItem>, page: u64, pages: u64) -> ResultPage<CatalogItem> {
        ResultPage {
            items,
            meta: Some(PageMeta {
                page: Some(page),
                pages: Some(pages),
                total: None,
            }),
        }
    }

    #[tokio::test]
    async fn stops_at_first_relaxation_that_succeeds() -> anyhow::Result<()> {
        let backend = MockCatalogBackend::new().with_listing(|state| {
            if state.secondary.is_some() {
                Err(anyhow!("Unknown brand."))
            } else {
                Ok(page(vec![mock_item(1, "running", "globex")], 1, 1))
            }
        });
        let api = mock_api(backend)?;

        let state = FilterState::new(CatalogDomain::Products)
            .with_query("zapatillas")
            .with_taxonomy("running")
            .with_secondary("acme")
            .with_price_range(Some(10), Some(90));
        let result_page = api.catalog().list(&state).await;
        assert_eq!(result_page.items.len(), 1);

        let requests = api.backend.listing_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], state);
        assert_eq!(
            requests[1],
            FilterState {
                secondary: None,
                ..state
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn returns_empty_listing_when_backend_is_unavailable() -> anyhow::Result<()> {
        let backend =
            MockCatalogBackend::new().with_listing(|_| Err(anyhow!("Connection refused.")));
        let api = mock_api(backend)?;

        let state = FilterState::new(CatalogDomain::Products)
            .with_query("zapatillas")
            .with_taxonomy("running")
            .with_secondary("acme")
            .with_price_range(Some(10), None)
            .with_sort(SortOrder::Novedades)
            .with_page(3);
        let result_page = api.catalog().list(&state).await;
        assert_json_snapshot!(result_page, @r###"
        {
          "items": [],
          "meta": {
            "page": 1,
            "pages": 1
          }
        }
        "###);
        assert_eq!(api.backend.listing_requests().len(), 6);

        Ok(())
    }

    #[tokio::test]
    async fn stops_facets_at_first_relaxation_that_succeeds() -> anyhow::Result<()> {
        let backend = MockCatalogBackend::new().with_facets(|state| {
            if state.secondary.is_some() {
                Err(anyhow!("Unknown brand."))
            } else {
                Ok(Facets {
                    domain: state.domain,
                    taxonomy: vec![facet("running", 3)],
                    secondary: vec![facet("globex", 3)],
                })
            }
        });
        let api = mock_api(backend)?;

        let state = FilterState::new(CatalogDomain::Products)
            .with_query("zapatillas")
            .with_taxonomy("running")
            .with_secondary("acme")
            .with_price_range(Some(10), Some(90));
        let facets = api.catalog().facets(&state).await;
        assert_eq!(facets.taxonomy, vec![facet("running", 3)]);
        assert_eq!(facets.secondary, vec![facet("globex", 3)]);

        let requests = api.backend.facets_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], state);
        assert_eq!(
            requests[1],
            FilterState {
                secondary: None,
                ..state
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn returns_empty_facets_when_backend_is_unavailable() -> anyhow::Result<()> {
        let backend =
            MockCatalogBackend::new().with_facets(|_| Err(anyhow!("Connection refused.")));
        let api = mock_api(backend)?;

        let state = FilterState::new(CatalogDomain::Courses).with_taxonomy("basico");
        let facets = api.catalog().facets(&state).await;
        assert_eq!(facets, Facets::empty(CatalogDomain::Courses));

        // Taxonomy is the only filter, so dropping the secondary facet or the price bounds
        // doesn't produce new attempts.
        let requests = api.backend.facets_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1], FilterState::new(CatalogDomain::Courses));

        Ok(())
    }

    #[tokio::test]
    async fn redirects_legacy_urls_without_querying_backend() -> anyhow::Result<()> {
        let api = mock_api(MockCatalogBackend::new())?;

        let browse = api
            .catalog()
            .browse(
                CatalogDomain::Products,
                &Vec::<String>::new(),
                &parse_query_string("categoria=running&sort=precio_asc&q=azul"),
            )
            .await;
        assert_eq!(
            browse,
            CatalogBrowse::Redirect {
                location: "/tienda/categoria-running/orden-precio_asc?q=azul".to_string()
            }
        );
        assert!(api.backend.listing_requests().is_empty());
        assert!(api.backend.facets_requests().is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn drops_active_filters_missing_from_facets() -> anyhow::Result<()> {
        let backend = MockCatalogBackend::new()
            .with_facets(|state| {
                Ok(Facets {
                    domain: state.domain,
                    taxonomy: vec![facet("running", 4), facet("trail", 2)],
                    secondary: vec![facet("acme", 6)],
                })
            })
            .with_listing(|_| Ok(page(vec![mock_item(1, "running", "acme")], 1, 1)));
        let api = mock_api(backend)?;

        let CatalogBrowse::Page(page) = api
            .catalog()
            .browse(
                CatalogDomain::Products,
                &["categoria-x", "marca-acme"],
                &parse_query_string(""),
            )
            .await
        else {
            panic!("Expected catalog page.");
        };

        assert_eq!(page.canonical_path, "/tienda/categoria-x/marca-acme");
        assert_eq!(page.filter.taxonomy.as_deref(), Some("x"));
        assert_eq!(page.applied_filter.taxonomy, None);
        assert_eq!(page.applied_filter.secondary.as_deref(), Some("acme"));

        let requests = api.backend.listing_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(build_path(&requests[0]), "/tienda/marca-acme");

        Ok(())
    }

    #[tokio::test]
    async fn derives_facets_from_items_when_backend_has_none() -> anyhow::Result<()> {
        let backend = MockCatalogBackend::new().with_listing(|_| {
            Ok(page(
                vec![
                    mock_item(1, "running", "A"),
                    mock_item(2, "running", "B"),
                    mock_item(3, "trail", "A"),
                    mock_item(4, "running", "B"),
                    mock_item(5, "running", "A"),
                ],
                1,
                2,
            ))
        });
        let api = mock_api(backend)?;

        let CatalogBrowse::Page(page) = api
            .catalog()
            .browse(
                CatalogDomain::Products,
                &Vec::<String>::new(),
                &parse_query_string("q=zapatillas"),
            )
            .await
        else {
            panic!("Expected catalog page.");
        };

        assert_json_snapshot!(page.facets, @r###"
        {
          "categorias": [
            {
              "id": "running",
              "nombre": "running",
              "count": 4
            },
            {
              "id": "trail",
              "nombre": "trail",
              "count": 1
            }
          ],
          "marcas": [
            {
              "id": "A",
              "nombre": "A",
              "count": 3
            },
            {
              "id": "B",
              "nombre": "B",
              "count": 2
            }
          ]
        }
        "###);
        assert_eq!(page.next_page.as_deref(), Some("/tienda/pagina-2?q=zapatillas"));

        Ok(())
    }

    #[tokio::test]
    async fn browses_listing() -> anyhow::Result<()> {
        let backend = MockCatalogBackend::new()
            .with_facets(|state| {
                Ok(Facets {
                    domain: state.domain,
                    taxonomy: vec![facet("basico", 2)],
                    secondary: vec![facet("rust", 1), facet("go", 1)],
                })
            })
            .with_listing(|_| {
                Ok(ResultPage {
                    items: vec![CatalogItem(json!({ "id": 7, "nivel": "basico", "tags": ["rust"] }))],
                    meta: None,
                })
            });
        let api = mock_api(backend)?;

        let CatalogBrowse::Page(page) = api
            .catalog()
            .browse(
                CatalogDomain::Courses,
                &["nivel-basico", "tag-rust", "orden-rating_desc"],
                &parse_query_string("perPage=24"),
            )
            .await
        else {
            panic!("Expected catalog page.");
        };
        assert_json_snapshot!(page, @r###"
        {
          "canonicalPath": "/cursos/nivel-basico/tag-rust/orden-rating_desc?perPage=24",
          "filter": {
            "q": "",
            "nivel": "basico",
            "tag": "rust",
            "sort": "rating_desc",
            "page": 1,
            "perPage": 24
          },
          "appliedFilter": {
            "q": "",
            "nivel": "basico",
            "tag": "rust",
            "sort": "rating_desc",
            "page": 1,
            "perPage": 24
          },
          "items": [
            {
              "id": 7,
              "nivel": "basico",
              "tags": [
                "rust"
              ]
            }
          ],
          "meta": {
            "page": 1
          },
          "facets": {
            "niveles": [
              {
                "id": "basico",
                "slug": "basico",
                "nombre": "BASICO",
                "count": 2
              }
            ],
            "tags": [
              {
                "id": "rust",
                "slug": "rust",
                "nombre": "RUST",
                "count": 1
              },
              {
                "id": "go",
                "slug": "go",
                "nombre": "GO",
                "count": 1
              }
            ]
          },
          "links": {
            "sort": [
              {
                "value": "relevancia",
                "path": "/cursos/nivel-basico/tag-rust?perPage=24",
                "active": false
              },
              {
                "value": "novedades",
                "path": "/cursos/nivel-basico/tag-rust/orden-novedades?perPage=24",
                "active": false
              },
              {
                "value": "precio_asc",
                "path": "/cursos/nivel-basico/tag-rust/orden-precio_asc?perPage=24",
                "active": false
              },
              {
                "value": "precio_desc",
                "path": "/cursos/nivel-basico/tag-rust/orden-precio_desc?perPage=24",
                "active": false
              },
              {
                "value": "rating_desc",
                "path": "/cursos/nivel-basico/tag-rust/orden-rating_desc?perPage=24",
                "active": true
              }
            ],
            "niveles": [
              {
                "value": "basico",
                "path": "/cursos/tag-rust/orden-rating_desc?perPage=24",
                "active": true
              }
            ],
            "tags": [
              {
                "value": "rust",
                "path": "/cursos/nivel-basico/orden-rating_desc?perPage=24",
                "active": true
              },
              {
                "value": "go",
                "path": "/cursos/nivel-basico/tag-go/orden-rating_desc?perPage=24",
                "active": false
              }
            ]
          }
        }
        "###);

        Ok(())
    }
}
