use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use urbanfood_core::{CategoryId, ValueObject};

/// Upper bound of the selectable price range.
pub const PRICE_CEILING: f64 = 5000.0;

/// Highest selectable star-rating threshold.
pub const MAX_RATING: u8 = 5;

/// Inclusive price bounds.
///
/// Each bound is clamped into `[0, PRICE_CEILING]` on mutation, but the two
/// bounds are deliberately NOT clamped against each other: the storefront sets
/// them from two independent input fields, so a transiently inverted range is
/// representable. The query executor treats an inverted range as matching
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: PRICE_CEILING,
        }
    }
}

impl PriceRange {
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// The currently active catalog narrowing criteria.
///
/// Immutable per update: [`FilterState::apply`] returns a fresh state and the
/// view replaces its copy wholesale, so no two consumers ever share a mutable
/// set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub categories: BTreeSet<CategoryId>,
    pub price_range: PriceRange,
    pub locations: BTreeSet<String>,
    pub organic_only: bool,
    pub local_only: bool,
    pub fresh_picked_only: bool,
    /// 0 means "any rating", i.e. no rating filter.
    pub min_rating: u8,
}

impl ValueObject for FilterState {}

/// A single filter-change event.
///
/// Closed sum type: each variant carries exactly the data it needs, so
/// malformed change payloads are unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterChange {
    ToggleCategory(CategoryId),
    SetPriceMin(f64),
    SetPriceMax(f64),
    ToggleLocation(String),
    SetOrganic(bool),
    SetLocal(bool),
    SetFreshPicked(bool),
    SetRating(u8),
    ClearAll,
}

impl FilterState {
    /// Pure reducer: map the current state and one change event to the next
    /// state. Never mutates `self`.
    pub fn apply(&self, change: FilterChange) -> FilterState {
        let mut next = self.clone();
        match change {
            FilterChange::ToggleCategory(id) => {
                // Symmetric difference: present -> remove, absent -> insert.
                if !next.categories.remove(&id) {
                    next.categories.insert(id);
                }
            }
            FilterChange::SetPriceMin(value) => {
                next.price_range.min = value.clamp(0.0, PRICE_CEILING);
            }
            FilterChange::SetPriceMax(value) => {
                next.price_range.max = value.clamp(0.0, PRICE_CEILING);
            }
            FilterChange::ToggleLocation(label) => {
                if !next.locations.remove(&label) {
                    next.locations.insert(label);
                }
            }
            FilterChange::SetOrganic(on) => next.organic_only = on,
            FilterChange::SetLocal(on) => next.local_only = on,
            FilterChange::SetFreshPicked(on) => next.fresh_picked_only = on,
            FilterChange::SetRating(level) => {
                next.min_rating = level.min(MAX_RATING);
            }
            FilterChange::ClearAll => next = FilterState::default(),
        }
        next
    }

    /// Number of distinct active filter groups, for the UI badge.
    ///
    /// Each group counts at most once, so the result is in `0..=7`. This is a
    /// display aid only and has no effect on filtering.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.categories.is_empty() {
            count += 1;
        }
        if !self.locations.is_empty() {
            count += 1;
        }
        if self.organic_only {
            count += 1;
        }
        if self.local_only {
            count += 1;
        }
        if self.fresh_picked_only {
            count += 1;
        }
        if self.min_rating > 0 {
            count += 1;
        }
        if self.price_range != PriceRange::default() {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_active_filters() {
        let state = FilterState::default();
        assert!(state.categories.is_empty());
        assert!(state.locations.is_empty());
        assert_eq!(state.price_range, PriceRange::default());
        assert_eq!(state.min_rating, 0);
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let state = FilterState::default();
        let id = CategoryId::new(3);

        let once = state.apply(FilterChange::ToggleCategory(id));
        assert!(once.categories.contains(&id));
        assert_eq!(once.categories.len(), 1);

        let twice = once.apply(FilterChange::ToggleCategory(id));
        assert_eq!(twice.categories, state.categories);
    }

    #[test]
    fn toggle_never_duplicates() {
        let state = FilterState::default()
            .apply(FilterChange::ToggleLocation("Riverbend".into()))
            .apply(FilterChange::ToggleLocation("Hilltop".into()))
            .apply(FilterChange::ToggleLocation("Riverbend".into()))
            .apply(FilterChange::ToggleLocation("Riverbend".into()));
        assert_eq!(state.locations.len(), 2);
        assert!(state.locations.contains("Riverbend"));
        assert!(state.locations.contains("Hilltop"));
    }

    #[test]
    fn price_setters_replace_only_their_own_bound() {
        let state = FilterState::default()
            .apply(FilterChange::SetPriceMin(25.0))
            .apply(FilterChange::SetPriceMax(100.0));
        assert_eq!(state.price_range.min, 25.0);
        assert_eq!(state.price_range.max, 100.0);

        // An inverted range stays inverted; the reducer does not cross-clamp.
        let inverted = state.apply(FilterChange::SetPriceMin(200.0));
        assert_eq!(inverted.price_range.min, 200.0);
        assert_eq!(inverted.price_range.max, 100.0);
        assert!(inverted.price_range.is_inverted());
    }

    #[test]
    fn price_bounds_clamp_into_full_range() {
        let state = FilterState::default()
            .apply(FilterChange::SetPriceMin(-10.0))
            .apply(FilterChange::SetPriceMax(999_999.0));
        assert_eq!(state.price_range.min, 0.0);
        assert_eq!(state.price_range.max, PRICE_CEILING);
    }

    #[test]
    fn rating_zero_clears_the_filter_and_high_values_clamp() {
        let state = FilterState::default().apply(FilterChange::SetRating(9));
        assert_eq!(state.min_rating, MAX_RATING);

        let cleared = state.apply(FilterChange::SetRating(0));
        assert_eq!(cleared.min_rating, 0);
        assert_eq!(cleared.active_filter_count(), 0);
    }

    #[test]
    fn clear_all_restores_defaults() {
        let state = FilterState::default()
            .apply(FilterChange::ToggleCategory(CategoryId::new(1)))
            .apply(FilterChange::ToggleLocation("Riverbend".into()))
            .apply(FilterChange::SetOrganic(true))
            .apply(FilterChange::SetLocal(true))
            .apply(FilterChange::SetFreshPicked(true))
            .apply(FilterChange::SetRating(4))
            .apply(FilterChange::SetPriceMin(10.0));
        assert_eq!(state.active_filter_count(), 7);

        let cleared = state.apply(FilterChange::ClearAll);
        assert_eq!(cleared, FilterState::default());
        assert_eq!(cleared.active_filter_count(), 0);
    }

    #[test]
    fn apply_does_not_mutate_the_input_state() {
        let state = FilterState::default();
        let _ = state.apply(FilterChange::ToggleCategory(CategoryId::new(5)));
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn counter_counts_each_group_once() {
        let state = FilterState::default()
            .apply(FilterChange::ToggleCategory(CategoryId::new(1)))
            .apply(FilterChange::ToggleCategory(CategoryId::new(2)))
            .apply(FilterChange::ToggleCategory(CategoryId::new(3)));
        assert_eq!(state.active_filter_count(), 1);
    }

    #[test]
    fn price_group_counts_only_when_range_differs_from_default() {
        // Setting a bound back to its default leaves the group inactive.
        let state = FilterState::default().apply(FilterChange::SetPriceMin(0.0));
        assert_eq!(state.active_filter_count(), 0);

        let narrowed = state.apply(FilterChange::SetPriceMax(50.0));
        assert_eq!(narrowed.active_filter_count(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Toggling the same category twice is the identity.
            #[test]
            fn toggle_category_is_its_own_inverse(
                id in any::<i64>(),
                preselected in proptest::collection::btree_set(any::<i64>(), 0..8)
            ) {
                let mut state = FilterState::default();
                for pre in preselected {
                    state = state.apply(FilterChange::ToggleCategory(CategoryId::new(pre)));
                }

                let toggled_twice = state
                    .apply(FilterChange::ToggleCategory(CategoryId::new(id)))
                    .apply(FilterChange::ToggleCategory(CategoryId::new(id)));
                prop_assert_eq!(toggled_twice.categories, state.categories);
            }

            /// clear-all always yields a zero badge count.
            #[test]
            fn clear_all_yields_zero_count(
                min in -100.0f64..6000.0,
                max in -100.0f64..6000.0,
                rating in 0u8..10
            ) {
                let state = FilterState::default()
                    .apply(FilterChange::SetPriceMin(min))
                    .apply(FilterChange::SetPriceMax(max))
                    .apply(FilterChange::SetRating(rating))
                    .apply(FilterChange::ClearAll);
                prop_assert_eq!(state.active_filter_count(), 0);
            }

            /// The badge count never exceeds the number of filter groups.
            #[test]
            fn count_is_bounded_by_group_count(
                categories in proptest::collection::btree_set(any::<i64>(), 0..5),
                organic in any::<bool>(),
                local in any::<bool>(),
                fresh in any::<bool>(),
                rating in 0u8..6,
                min in 0.0f64..5000.0
            ) {
                let mut state = FilterState::default();
                for id in categories {
                    state = state.apply(FilterChange::ToggleCategory(CategoryId::new(id)));
                }
                state = state
                    .apply(FilterChange::SetOrganic(organic))
                    .apply(FilterChange::SetLocal(local))
                    .apply(FilterChange::SetFreshPicked(fresh))
                    .apply(FilterChange::SetRating(rating))
                    .apply(FilterChange::SetPriceMin(min));
                prop_assert!(state.active_filter_count() <= 7);
            }

            /// Reducer bounds always land inside the selectable range.
            #[test]
            fn price_bounds_stay_clamped(value in -10_000.0f64..10_000.0) {
                let state = FilterState::default()
                    .apply(FilterChange::SetPriceMin(value))
                    .apply(FilterChange::SetPriceMax(value));
                prop_assert!(state.price_range.min >= 0.0);
                prop_assert!(state.price_range.min <= PRICE_CEILING);
                prop_assert!(state.price_range.max >= 0.0);
                prop_assert!(state.price_range.max <= PRICE_CEILING);
            }
        }
    }
}
