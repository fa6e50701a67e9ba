//! Event-search filter state and its URL query-string codec.
//!
//! The filter lives in memory as [`EventFilter`] and is mirrored into the
//! page URL so searches are shareable and survive back/forward navigation.
//! Everything in this module is pure; the browser half (reading
//! `location.search`, replace-history writes, popstate) lives in
//! [`super::url_sync`].

use std::collections::HashMap;

use chrono::NaiveDate;
use contracts::domain::events::{CategoryId, EventSearchQuery};
use contracts::enums::EventSortBy;

pub const DEFAULT_MIN_PRICE: i64 = 0;
pub const DEFAULT_MAX_PRICE: i64 = 5_000_000;
pub const DEFAULT_PAGE_SIZE: u32 = 12;

const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub query: String,
    /// Deduplicated, insertion order preserved.
    pub categories: Vec<CategoryId>,
    pub city_code: Option<u32>,
    /// VND bounds; `min_price <= max_price` always holds after `normalize`.
    pub min_price: i64,
    pub max_price: i64,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort_by: EventSortBy,
    /// 1-based.
    pub page: u32,
}

impl Default for EventFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            categories: Vec::new(),
            city_code: None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            date_from: None,
            date_to: None,
            sort_by: EventSortBy::default(),
            page: 1,
        }
    }
}

/// A partial update produced by one user interaction. Range fields patch as
/// a pair since the UI always submits both bounds together.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub query: Option<String>,
    pub categories: Option<Vec<CategoryId>>,
    pub city_code: Option<Option<u32>>,
    pub price_range: Option<(i64, i64)>,
    pub date_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    pub sort_by: Option<EventSortBy>,
    pub page: Option<u32>,
}

impl FilterPatch {
    pub fn query(value: impl Into<String>) -> Self {
        Self {
            query: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn page(value: u32) -> Self {
        Self {
            page: Some(value),
            ..Self::default()
        }
    }
}

/// Fields of [`EventFilter`] addressable by [`EventFilter::reset_except`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    Categories,
    City,
    PriceRange,
    DateRange,
    SortBy,
    Page,
}

impl EventFilter {
    /// Parse a URL search string (with or without the leading '?').
    ///
    /// Missing fields take their defaults. Malformed values are treated as
    /// absent, field by field, so a hand-edited or stale URL always yields a
    /// usable filter.
    pub fn from_query_string(qs: &str) -> Self {
        let raw: HashMap<String, String> =
            serde_qs::from_str(qs.trim_start_matches('?')).unwrap_or_default();

        let mut filter = Self::default();
        if let Some(v) = raw.get("query") {
            filter.query = v.clone();
        }
        if let Some(v) = raw.get("category") {
            filter.categories = parse_categories(v);
        }
        filter.city_code = raw.get("city").and_then(|v| v.parse::<u32>().ok());
        if let Some(n) = raw.get("minPrice").and_then(|v| parse_price(v)) {
            filter.min_price = n;
        }
        if let Some(n) = raw.get("maxPrice").and_then(|v| parse_price(v)) {
            filter.max_price = n;
        }
        filter.date_from = raw
            .get("startDate")
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FMT).ok());
        filter.date_to = raw
            .get("endDate")
            .and_then(|v| NaiveDate::parse_from_str(v, DATE_FMT).ok());
        if let Some(sort) = raw.get("sortBy").and_then(|v| EventSortBy::from_str(v)) {
            filter.sort_by = sort;
        }
        if let Some(page) = raw.get("page").and_then(|v| v.parse::<u32>().ok()) {
            if page >= 1 {
                filter.page = page;
            }
        }
        filter.normalize();
        filter
    }

    /// Serialize for the address bar. Fields at their default are omitted so
    /// the pristine filter produces an empty string and URLs stay minimal.
    /// Round-trips through [`Self::from_query_string`].
    pub fn to_query_string(&self) -> String {
        let defaults = Self::default();
        // BTreeMap keeps parameter order deterministic.
        let mut params = std::collections::BTreeMap::new();
        if !self.query.is_empty() {
            params.insert("query", self.query.clone());
        }
        if !self.categories.is_empty() {
            params.insert("category", join_categories(&self.categories));
        }
        if let Some(city) = self.city_code {
            params.insert("city", city.to_string());
        }
        if self.min_price != defaults.min_price {
            params.insert("minPrice", self.min_price.to_string());
        }
        if self.max_price != defaults.max_price {
            params.insert("maxPrice", self.max_price.to_string());
        }
        if let Some(d) = self.date_from {
            params.insert("startDate", d.format(DATE_FMT).to_string());
        }
        if let Some(d) = self.date_to {
            params.insert("endDate", d.format(DATE_FMT).to_string());
        }
        if self.sort_by != defaults.sort_by {
            params.insert("sortBy", self.sort_by.as_str().to_string());
        }
        if self.page != defaults.page {
            params.insert("page", self.page.to_string());
        }
        serde_qs::to_string(&params).unwrap_or_default()
    }

    /// Merge a patch into this filter. Unless the patch moves `page`
    /// explicitly, the result lands on page 1: changing any other filter
    /// while deep in the result set must not leave the user on a page that
    /// may no longer exist.
    pub fn apply_patch(&self, patch: FilterPatch) -> Self {
        let mut next = self.clone();
        if let Some(q) = patch.query {
            next.query = q;
        }
        if let Some(c) = patch.categories {
            next.categories = dedup_categories(c);
        }
        if let Some(c) = patch.city_code {
            next.city_code = c;
        }
        if let Some((min, max)) = patch.price_range {
            next.min_price = min;
            next.max_price = max;
        }
        if let Some((from, to)) = patch.date_range {
            next.date_from = from;
            next.date_to = to;
        }
        if let Some(s) = patch.sort_by {
            next.sort_by = s;
        }
        next.page = match patch.page {
            Some(p) => p.max(1),
            None => 1,
        };
        next.normalize();
        next
    }

    /// Back to defaults except the named fields ("clear filters" keeps the
    /// free-text query).
    pub fn reset_except(&self, preserve: &[FilterField]) -> Self {
        let mut next = Self::default();
        for field in preserve {
            match field {
                FilterField::Query => next.query = self.query.clone(),
                FilterField::Categories => next.categories = self.categories.clone(),
                FilterField::City => next.city_code = self.city_code,
                FilterField::PriceRange => {
                    next.min_price = self.min_price;
                    next.max_price = self.max_price;
                }
                FilterField::DateRange => {
                    next.date_from = self.date_from;
                    next.date_to = self.date_to;
                }
                FilterField::SortBy => next.sort_by = self.sort_by,
                FilterField::Page => next.page = self.page,
            }
        }
        next
    }

    /// Number of active (non-default) constraints, for the filter badge.
    /// Sort and page are presentation, not constraints.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.query.is_empty() {
            count += 1;
        }
        if !self.categories.is_empty() {
            count += 1;
        }
        if self.city_code.is_some() {
            count += 1;
        }
        if self.min_price != DEFAULT_MIN_PRICE || self.max_price != DEFAULT_MAX_PRICE {
            count += 1;
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            count += 1;
        }
        count
    }

    /// Request shape for GET /api/events.
    pub fn to_search_query(&self, page_size: u32) -> EventSearchQuery {
        EventSearchQuery {
            query: (!self.query.is_empty()).then(|| self.query.clone()),
            category: (!self.categories.is_empty()).then(|| join_categories(&self.categories)),
            city: self.city_code,
            min_price: (self.min_price != DEFAULT_MIN_PRICE).then_some(self.min_price),
            max_price: (self.max_price != DEFAULT_MAX_PRICE).then_some(self.max_price),
            start_date: self.date_from,
            end_date: self.date_to,
            sort_by: self.sort_by,
            page: self.page,
            page_size,
        }
    }

    /// Restore the invariants a hand-edited URL or a raw patch can break.
    /// Inverted price bounds are swapped rather than discarded.
    fn normalize(&mut self) {
        if self.min_price < 0 {
            self.min_price = DEFAULT_MIN_PRICE;
        }
        if self.max_price < 0 {
            self.max_price = DEFAULT_MAX_PRICE;
        }
        if self.min_price > self.max_price {
            std::mem::swap(&mut self.min_price, &mut self.max_price);
        }
        if self.page == 0 {
            self.page = 1;
        }
        self.categories = dedup_categories(std::mem::take(&mut self.categories));
    }
}

fn parse_price(value: &str) -> Option<i64> {
    match value.parse::<i64>() {
        Ok(n) if n >= 0 => Some(n),
        _ => {
            log::debug!("ignoring malformed price parameter {:?}", value);
            None
        }
    }
}

fn parse_categories(value: &str) -> Vec<CategoryId> {
    dedup_categories(
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CategoryId::new)
            .collect(),
    )
}

fn join_categories(categories: &[CategoryId]) -> String {
    categories
        .iter()
        .map(CategoryId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn dedup_categories(categories: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut seen = std::collections::HashSet::new();
    categories
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> EventFilter {
        EventFilter {
            query: "rock concert".into(),
            categories: vec![CategoryId::new("music"), CategoryId::new("festival")],
            city_code: Some(79),
            min_price: 100_000,
            max_price: 900_000,
            date_from: NaiveDate::from_ymd_opt(2026, 9, 1),
            date_to: NaiveDate::from_ymd_opt(2026, 9, 30),
            sort_by: EventSortBy::PriceDesc,
            page: 3,
        }
    }

    #[test]
    fn test_default_serializes_to_empty() {
        assert_eq!(EventFilter::default().to_query_string(), "");
    }

    #[test]
    fn test_round_trip_populated() {
        let filter = populated();
        let qs = filter.to_query_string();
        assert_eq!(EventFilter::from_query_string(&qs), filter);
    }

    #[test]
    fn test_round_trip_partial_combinations() {
        let partials = [
            EventFilter {
                query: "hội chợ".into(),
                ..EventFilter::default()
            },
            EventFilter {
                categories: vec![CategoryId::new("theatre")],
                page: 7,
                ..EventFilter::default()
            },
            EventFilter {
                min_price: 50_000,
                ..EventFilter::default()
            },
            EventFilter {
                max_price: 200_000,
                sort_by: EventSortBy::PriceAsc,
                ..EventFilter::default()
            },
            EventFilter {
                date_from: NaiveDate::from_ymd_opt(2026, 1, 15),
                ..EventFilter::default()
            },
        ];
        for filter in partials {
            let qs = filter.to_query_string();
            assert_eq!(EventFilter::from_query_string(&qs), filter, "qs: {qs}");
        }
    }

    #[test]
    fn test_parse_with_leading_question_mark() {
        let parsed = EventFilter::from_query_string("?query=tet&page=2");
        assert_eq!(parsed.query, "tet");
        assert_eq!(parsed.page, 2);
    }

    #[test]
    fn test_malformed_fields_default_individually() {
        let parsed = EventFilter::from_query_string(
            "minPrice=abc&maxPrice=300000&sortBy=upside_down&city=HCM&page=0&startDate=soon",
        );
        assert_eq!(parsed.min_price, DEFAULT_MIN_PRICE);
        assert_eq!(parsed.max_price, 300_000);
        assert_eq!(parsed.sort_by, EventSortBy::DateAsc);
        assert_eq!(parsed.city_code, None);
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.date_from, None);
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let parsed = EventFilter::from_query_string("utm_source=zalo&query=ballet");
        assert_eq!(parsed.query, "ballet");
        assert_eq!(parsed.active_count(), 1);
    }

    #[test]
    fn test_inverted_prices_swapped() {
        let parsed = EventFilter::from_query_string("minPrice=500000&maxPrice=100000");
        assert_eq!(parsed.min_price, 100_000);
        assert_eq!(parsed.max_price, 500_000);
    }

    #[test]
    fn test_categories_deduplicated_in_order() {
        let parsed = EventFilter::from_query_string("category=music,sport,music");
        assert_eq!(
            parsed.categories,
            vec![CategoryId::new("music"), CategoryId::new("sport")]
        );
    }

    #[test]
    fn test_non_page_patch_resets_page() {
        let filter = EventFilter {
            page: 5,
            ..EventFilter::default()
        };
        let next = filter.apply_patch(FilterPatch::query("opera"));
        assert_eq!(next.page, 1);
        assert_eq!(next.query, "opera");
    }

    #[test]
    fn test_page_patch_keeps_other_fields() {
        let filter = populated();
        let next = filter.apply_patch(FilterPatch::page(4));
        assert_eq!(next.page, 4);
        assert_eq!(next.query, filter.query);
        assert_eq!(next.categories, filter.categories);
    }

    #[test]
    fn test_patch_page_zero_snaps_to_one() {
        let next = EventFilter::default().apply_patch(FilterPatch::page(0));
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_reset_except_preserves_query() {
        let filter = populated();
        let next = filter.reset_except(&[FilterField::Query]);
        assert_eq!(next.query, "rock concert");
        assert_eq!(next.categories, Vec::<CategoryId>::new());
        assert_eq!(next.city_code, None);
        assert_eq!(next.page, 1);
        assert_eq!(next.max_price, DEFAULT_MAX_PRICE);
    }

    #[test]
    fn test_query_with_reserved_characters_round_trips() {
        let filter = EventFilter {
            query: "lễ hội & friends? 50%".into(),
            ..EventFilter::default()
        };
        let qs = filter.to_query_string();
        assert_eq!(EventFilter::from_query_string(&qs), filter);
    }

    #[test]
    fn test_search_query_omits_defaults() {
        let query = EventFilter::default().to_search_query(DEFAULT_PAGE_SIZE);
        assert!(query.query.is_none());
        assert!(query.min_price.is_none());
        assert!(query.max_price.is_none());
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }
}
