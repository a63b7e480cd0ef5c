//! Filter selection, predicate, and derived option sets.
//!
//! All functions here are pure: given the same company collection and
//! selection they always produce the same output and never touch shared
//! state. The application layer recomputes them on every relevant state
//! change instead of caching, which keeps the filtering logic trivially
//! testable.

use super::company::Company;
use std::collections::BTreeSet;

/// Synthetic filter value meaning "no constraint on this field".
///
/// Always the first entry of the derived location and industry option lists.
pub const ALL_SENTINEL: &str = "All";

/// The user's current filter inputs.
///
/// `location` and `industry` hold either [`ALL_SENTINEL`] or an exact value
/// observed in the company collection. `search` is matched after trimming,
/// case-insensitively, as a substring of the company name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Free-text name search. Empty means no constraint.
    pub search: String,

    /// Location constraint, [`ALL_SENTINEL`] or an exact match value.
    pub location: String,

    /// Industry constraint, [`ALL_SENTINEL`] or an exact match value.
    pub industry: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: ALL_SENTINEL.to_string(),
            industry: ALL_SENTINEL.to_string(),
        }
    }
}

impl FilterSelection {
    /// Returns true when a company passes every active constraint.
    ///
    /// The search constraint matches the trimmed query case-insensitively as
    /// a substring of the name. Location and industry compare exactly
    /// (case-sensitive) unless set to the sentinel.
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        let query = self.search.trim();
        let passes_search =
            query.is_empty() || company.name.to_lowercase().contains(&query.to_lowercase());

        let passes_location = self.location == ALL_SENTINEL || company.location == self.location;
        let passes_industry = self.industry == ALL_SENTINEL || company.industry == self.industry;

        passes_search && passes_location && passes_industry
    }
}

/// Applies the filter selection to a company collection.
///
/// Returns the ordered subsequence of companies matching every active
/// constraint, preserving the collection's original relative order.
/// Deterministic and idempotent: filtering an already-filtered result with
/// the same selection yields the same sequence.
#[must_use]
pub fn apply(companies: &[Company], selection: &FilterSelection) -> Vec<Company> {
    companies
        .iter()
        .filter(|company| selection.matches(company))
        .cloned()
        .collect()
}

/// Derives the location filter options from a company collection.
///
/// The result is the [`ALL_SENTINEL`] followed by the distinct location
/// values, each exactly once, sorted lexicographically ascending. Empty
/// values are excluded (they are only reachable through the sentinel).
#[must_use]
pub fn location_options(companies: &[Company]) -> Vec<String> {
    options_for(companies, |company| &company.location)
}

/// Derives the industry filter options from a company collection.
///
/// Same shape as [`location_options`]: sentinel first, then the sorted
/// distinct industry values.
#[must_use]
pub fn industry_options(companies: &[Company]) -> Vec<String> {
    options_for(companies, |company| &company.industry)
}

fn options_for<F>(companies: &[Company], field: F) -> Vec<String>
where
    F: Fn(&Company) -> &str,
{
    let distinct: BTreeSet<&str> = companies
        .iter()
        .map(|company| field(company))
        .filter(|value| !value.is_empty())
        .collect();

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(ALL_SENTINEL.to_string());
    options.extend(distinct.into_iter().map(String::from));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Company> {
        vec![
            Company::new(1, "Acme", "NY", "Tech").with_website("https://acme.example"),
            Company::new(2, "Bolt", "SF", "Retail"),
            Company::new(3, "Corex", "NY", "Retail"),
        ]
    }

    fn with_search(search: &str) -> FilterSelection {
        FilterSelection {
            search: search.to_string(),
            ..FilterSelection::default()
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let companies = sample();
        let selection = with_search("o");
        let once = apply(&companies, &selection);
        let twice = apply(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn sentinel_location_applies_only_other_constraints() {
        let companies = sample();
        let sentinel = FilterSelection {
            search: "o".to_string(),
            location: ALL_SENTINEL.to_string(),
            industry: "Retail".to_string(),
        };
        let unconstrained: Vec<Company> = companies
            .iter()
            .filter(|c| c.name.to_lowercase().contains('o') && c.industry == "Retail")
            .cloned()
            .collect();
        assert_eq!(apply(&companies, &sentinel), unconstrained);
    }

    #[test]
    fn search_is_case_insensitive() {
        let companies = vec![Company::new(1, "ACME Corp", "NY", "Tech")];
        let hits = apply(&companies, &with_search("acme"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "ACME Corp");
    }

    #[test]
    fn search_query_is_trimmed() {
        let companies = sample();
        let hits = apply(&companies, &with_search("  bolt "));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bolt");
    }

    #[test]
    fn location_match_is_exact_and_case_sensitive() {
        let companies = sample();
        let selection = FilterSelection {
            location: "ny".to_string(),
            ..FilterSelection::default()
        };
        assert!(apply(&companies, &selection).is_empty());
    }

    #[test]
    fn filter_preserves_original_order() {
        let companies = sample();
        let hits = apply(&companies, &with_search(""));
        let ids: Vec<i64> = hits.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn derived_locations_are_sentinel_plus_sorted_distinct() {
        let companies = sample();
        assert_eq!(location_options(&companies), vec!["All", "NY", "SF"]);
    }

    #[test]
    fn derived_industries_skip_empty_values() {
        let mut companies = sample();
        companies.push(Company::new(4, "Dyno", "LA", ""));
        assert_eq!(industry_options(&companies), vec!["All", "Retail", "Tech"]);
    }

    #[test]
    fn derived_options_on_empty_collection_are_just_the_sentinel() {
        assert_eq!(location_options(&[]), vec![ALL_SENTINEL]);
    }
}
