//! Substring filtering of lookup candidates.

use std::sync::Arc;

use super::Candidate;

/// Options for [`filter_candidates`].
#[derive(Debug)]
pub struct FilterOptions<'a, C> {
    /// Properties compared against the query.
    pub properties: &'a [String],
    /// Candidates to leave out of the results (compared by identity).
    pub exclude: &'a [Arc<C>],
    /// Stop after this many matches.
    pub limit: Option<usize>,
}

impl<'a, C> FilterOptions<'a, C> {
    /// Search `properties` with no exclusions and no limit.
    pub fn new(properties: &'a [String]) -> Self {
        Self {
            properties,
            exclude: &[],
            limit: None,
        }
    }

    /// Leave these candidates out of the results.
    pub fn excluding(mut self, exclude: &'a [Arc<C>]) -> Self {
        self.exclude = exclude;
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Check whether any of `properties` contains `query_lower`, ignoring case.
///
/// `query_lower` must already be lower-cased.
pub fn is_search_match<C: Candidate + ?Sized>(
    item: &C,
    query_lower: &str,
    properties: &[String],
) -> bool {
    properties.iter().any(|property| {
        item.property(property)
            .is_some_and(|text| text.to_lowercase().contains(query_lower))
    })
}

/// Filter candidates by case-insensitive substring match.
///
/// Results keep the order of `candidates`. Once `limit` matches have been
/// collected the scan stops, so the first matches win; there is no scoring.
///
/// # Example
///
/// ```ignore
/// let properties = vec!["name".to_string()];
/// let matches = filter_candidates(&data, "an", &FilterOptions::new(&properties));
/// // "Banana" matches, "Apple" and "Grape" do not
/// ```
pub fn filter_candidates<C: Candidate>(
    candidates: &[Arc<C>],
    query_lower: &str,
    options: &FilterOptions<'_, C>,
) -> Vec<Arc<C>> {
    let mut results = Vec::new();
    for item in candidates {
        if options.limit.is_some_and(|limit| results.len() >= limit) {
            break;
        }
        let excluded = options.exclude.iter().any(|e| Arc::ptr_eq(e, item));
        if !excluded && is_search_match(item.as_ref(), query_lower, options.properties) {
            results.push(Arc::clone(item));
        }
    }
    results
}
