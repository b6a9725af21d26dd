use crate::catalog::{
    CatalogDomain, Facet, FacetDimension, FacetValue, FacetedItem, Facets, FilterState,
};
use tracing::debug;

/// Resolves facets to render: facets reported by the backend are authoritative, but when the
/// backend has none at all they're derived from the items of the current page.
pub fn resolve_facets<T: FacetedItem>(server_facets: Facets, items: &[T]) -> Facets {
    if !server_facets.is_empty() || items.is_empty() {
        return server_facets;
    }

    debug!(
        catalog.domain = %server_facets.domain,
        items = items.len(),
        "Backend facets are unavailable, deriving them from the current page."
    );
    derive_facets(server_facets.domain, items)
}

/// Counts distinct facet values present on the items. Counts are local to the given items and
/// facets are ordered by count, ties keep the order of first appearance.
pub fn derive_facets<T: FacetedItem>(domain: CatalogDomain, items: &[T]) -> Facets {
    let schema = domain.schema();
    Facets {
        domain,
        taxonomy: count_values(&schema.taxonomy, items),
        secondary: count_values(&schema.secondary, items),
    }
}

fn count_values<T: FacetedItem>(dimension: &FacetDimension, items: &[T]) -> Vec<Facet> {
    let mut facets: Vec<Facet> = vec![];
    for item in items {
        let mut item_values: Vec<FacetValue> = vec![];
        for value in item.facet_values(dimension) {
            if !item_values.iter().any(|seen| seen.id == value.id) {
                item_values.push(value);
            }
        }

        for value in item_values {
            match facets.iter_mut().find(|facet| facet.id == value.id) {
                Some(facet) => facet.count += 1,
                None => facets.push(Facet {
                    id: value.id,
                    slug: value.slug,
                    label: value.label,
                    count: 1,
                }),
            }
        }
    }

    facets.sort_by(|a, b| b.count.cmp(&a.count));
    facets
}

/// Computes the filter state that is actually sent to the listing backend: selected facet values
/// that aren't present among the resolved facets are dropped. A dimension without any facets
/// can't be validated and keeps its selection.
pub fn apply_active_filters(state: &FilterState, facets: &Facets) -> FilterState {
    let schema = state.domain.schema();
    FilterState {
        taxonomy: validate_selection(&schema.taxonomy, state.taxonomy.as_deref(), &facets.taxonomy),
        secondary: validate_selection(
            &schema.secondary,
            state.secondary.as_deref(),
            &facets.secondary,
        ),
        ..state.clone()
    }
}

fn validate_selection(
    dimension: &FacetDimension,
    selected: Option<&str>,
    facets: &[Facet],
) -> Option<String> {
    let selected = selected?;
    if facets.is_empty() || facets.iter().any(|facet| facet.matches(selected)) {
        return Some(selected.to_string());
    }

    debug!(
        facet.dimension = dimension.param,
        facet.value = selected,
        "Ignoring selected facet value that isn't among the available facets."
    );
    None
}
