use crate::catalog::FilterState;

/// A named, pure transformation that derives a less specific filter state from the requested one.
#[derive(Clone, Copy)]
pub struct Relaxation {
    pub name: &'static str,
    pub relax: fn(&FilterState) -> FilterState,
}

/// A concrete filter state to try, together with the relaxation that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub name: &'static str,
    pub state: FilterState,
}

/// Relaxation order of the listing query. Query term and sort are kept the longest.
pub const LISTING_RELAXATIONS: [Relaxation; 6] = [
    Relaxation {
        name: "as_requested",
        relax: as_requested,
    },
    Relaxation {
        name: "drop_secondary",
        relax: drop_secondary,
    },
    Relaxation {
        name: "drop_taxonomy",
        relax: drop_taxonomy,
    },
    Relaxation {
        name: "drop_facets",
        relax: drop_facets,
    },
    Relaxation {
        name: "drop_price",
        relax: drop_price,
    },
    Relaxation {
        name: "minimal",
        relax: minimal,
    },
];

/// Relaxation order of the facets query.
pub const FACETS_RELAXATIONS: [Relaxation; 5] = [
    Relaxation {
        name: "as_requested",
        relax: as_requested,
    },
    Relaxation {
        name: "drop_secondary",
        relax: drop_secondary,
    },
    Relaxation {
        name: "drop_taxonomy",
        relax: drop_taxonomy,
    },
    Relaxation {
        name: "drop_price",
        relax: drop_price,
    },
    Relaxation {
        name: "minimal",
        relax: minimal,
    },
];

/// Expands the requested state into the ordered list of attempts. Every relaxation is applied to
/// the requested state, and attempts that would repeat an already listed state are skipped.
pub fn plan_attempts(state: &FilterState, relaxations: &[Relaxation]) -> Vec<Attempt> {
    let mut attempts: Vec<Attempt> = Vec::with_capacity(relaxations.len());
    for relaxation in relaxations {
        let relaxed = (relaxation.relax)(state);
        if !attempts.iter().any(|attempt| attempt.state == relaxed) {
            attempts.push(Attempt {
                name: relaxation.name,
                state: relaxed,
            });
        }
    }

    attempts
}

fn as_requested(state: &FilterState) -> FilterState {
    state.clone()
}

fn drop_secondary(state: &FilterState) -> FilterState {
    FilterState {
        secondary: None,
        ..state.clone()
    }
}

fn drop_taxonomy(state: &FilterState) -> FilterState {
    FilterState {
        taxonomy: None,
        ..state.clone()
    }
}

fn drop_facets(state: &FilterState) -> FilterState {
    FilterState {
        taxonomy: None,
        secondary: None,
        ..state.clone()
    }
}

fn drop_price(state: &FilterState) -> FilterState {
    FilterState {
        min_price: None,
        max_price: None,
        ..state.clone()
    }
}

/// Keeps only the query term, sort and pagination.
fn minimal(state: &FilterState) -> FilterState {
    FilterState {
        q: state.q.clone(),
        sort: state.sort,
        page: state.page,
        per_page: state.per_page,
        ..FilterState::new(state.domain)
    }
}
