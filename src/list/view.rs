//! Filtering and pagination of a collection snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::errors::AppError;

/// Filter value meaning "no constraint" on a dropdown.
pub const ALL: &str = "all";

/// Search term, dropdown filters and requested page for one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub field_filters: BTreeMap<String, String>,
    /// 1-based.
    #[serde(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            field_filters: BTreeMap::new(),
            page: first_page(),
        }
    }
}

impl FilterCriteria {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field_filters.insert(field.into(), value.into());
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Fail on filter fields the entity does not expose.
    pub fn check_fields<T: Entity>(&self) -> Result<(), AppError> {
        for field in self.field_filters.keys() {
            if !T::FILTER_FIELDS.contains(&field.as_str()) {
                return Err(AppError::Validation(format!(
                    "Cannot filter {} by {}",
                    T::COLLECTION,
                    field
                )));
            }
        }
        Ok(())
    }

    /// Whether `item` satisfies the search term and every active filter.
    pub fn matches<T: Entity>(&self, item: &T) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if !term.is_empty()
            && !item
                .search_fields()
                .iter()
                .any(|text| text.to_lowercase().contains(&term))
        {
            return false;
        }

        self.field_filters
            .iter()
            .filter(|(_, wanted)| !is_unconstrained(wanted))
            .all(|(field, wanted)| item.filter_value(field).as_deref() == Some(wanted.as_str()))
    }
}

fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View<T> {
    pub items: Vec<T>,
    /// Page actually served after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_matched: usize,
}

/// Derive the page of `all` selected by `criteria`.
///
/// The requested page is clamped into `1..=max(1, total_pages)`, so a page
/// left behind by a narrowing filter serves the last page instead of nothing.
pub fn compute_view<T: Entity>(
    all: &[T],
    criteria: &FilterCriteria,
    page_size: usize,
) -> Result<View<T>, AppError> {
    criteria.check_fields::<T>()?;

    let page_size = page_size.max(1);
    let matched: Vec<&T> = all.iter().filter(|item| criteria.matches(*item)).collect();
    let total_matched = matched.len();
    let total_pages = total_matched.div_ceil(page_size);
    let page = criteria.page.clamp(1, total_pages.max(1));

    let items = matched
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    tracing::debug!(
        collection = T::COLLECTION,
        total_matched,
        page,
        total_pages,
        "derived view"
    );

    Ok(View {
        items,
        page,
        page_size,
        total_pages,
        total_matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::models::{EthnicGroup, Role, Status};

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let groups = fixtures::ethnic_groups();
        let view = compute_view(&groups, &FilterCriteria::search("akan"), 5).unwrap();

        assert_eq!(view.total_matched, 1);
        assert_eq!(view.items[0].name, "Akan");
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn test_search_matches_any_search_field() {
        let groups = fixtures::ethnic_groups();
        // "volta" only appears in a region
        let view = compute_view(&groups, &FilterCriteria::search("VOLTA"), 5).unwrap();

        assert_eq!(view.total_matched, 1);
        assert_eq!(view.items[0].name, "Ewe");
    }

    #[test]
    fn test_twelve_roles_split_into_three_pages() {
        let roles = fixtures::roles();
        assert_eq!(roles.len(), 12);

        let sizes: Vec<usize> = (1..=3)
            .map(|page| {
                let criteria = FilterCriteria::default().with_page(page);
                compute_view(&roles, &criteria, 5).unwrap().items.len()
            })
            .collect();

        assert_eq!(sizes, vec![5, 5, 2]);
        let view = compute_view(&roles, &FilterCriteria::default(), 5).unwrap();
        assert_eq!(view.total_pages, 3);
    }

    #[test]
    fn test_out_of_range_page_is_clamped_to_last() {
        let roles = fixtures::roles();
        let view = compute_view(&roles, &FilterCriteria::default().with_page(9), 5).unwrap();

        assert_eq!(view.page, 3);
        assert_eq!(view.items.len(), 2);

        let view = compute_view(&roles, &FilterCriteria::default().with_page(0), 5).unwrap();
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_empty_match_has_zero_pages() {
        let roles = fixtures::roles();
        let view = compute_view(&roles, &FilterCriteria::search("nobody"), 5).unwrap();

        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_filters_and_search_combine() {
        let mut groups = fixtures::ethnic_groups();
        groups[0].status = Status::Inactive;

        let criteria = FilterCriteria::default().with_filter("status", "active");
        let view = compute_view(&groups, &criteria, 5).unwrap();
        assert_eq!(view.total_matched, 4);
        assert!(view.items.iter().all(|g| g.status == Status::Active));

        let criteria = FilterCriteria::search("a").with_filter("status", "inactive");
        let view = compute_view(&groups, &criteria, 5).unwrap();
        assert_eq!(view.total_matched, 1);
        assert_eq!(view.items[0].id, groups[0].id);
    }

    #[test]
    fn test_all_and_empty_filters_are_unconstrained() {
        let groups = fixtures::ethnic_groups();
        let criteria = FilterCriteria::default()
            .with_filter("status", ALL)
            .with_filter("region", "");

        let view = compute_view(&groups, &criteria, 5).unwrap();
        assert_eq!(view.total_matched, groups.len());
    }

    #[test]
    fn test_unknown_filter_field_rejected() {
        let groups = fixtures::ethnic_groups();
        let criteria = FilterCriteria::default().with_filter("population", "1");

        let err = compute_view(&groups, &criteria, 5).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_view_is_subset_in_order_and_deterministic() {
        let roles: Vec<Role> = fixtures::roles();
        let criteria = FilterCriteria::search("e").with_page(2);

        let first = compute_view(&roles, &criteria, 5).unwrap();
        let second = compute_view(&roles, &criteria, 5).unwrap();
        assert_eq!(first, second);

        assert!(first.items.len() <= 5);
        let positions: Vec<usize> = first
            .items
            .iter()
            .map(|item| roles.iter().position(|r| r.id == item.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(first.items.iter().all(|item| criteria.matches(item)));
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let groups: Vec<EthnicGroup> = fixtures::ethnic_groups();
        let view = compute_view(&groups, &FilterCriteria::default(), 0).unwrap();

        assert_eq!(view.page_size, 1);
        assert_eq!(view.total_pages, groups.len());
    }
}
