use serde::{Deserialize, Serialize};

/// Sort order for event search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventSortBy {
    #[default]
    DateAsc,
    DateDesc,
    PriceAsc,
    PriceDesc,
}

impl EventSortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventSortBy::DateAsc => "date_asc",
            EventSortBy::DateDesc => "date_desc",
            EventSortBy::PriceAsc => "price_asc",
            EventSortBy::PriceDesc => "price_desc",
        }
    }

    /// Parse a wire value. Unknown values yield `None` so callers can fall
    /// back to the default instead of failing.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "date_asc" => Some(EventSortBy::DateAsc),
            "date_desc" => Some(EventSortBy::DateDesc),
            "price_asc" => Some(EventSortBy::PriceAsc),
            "price_desc" => Some(EventSortBy::PriceDesc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventSortBy::DateAsc => "Date: soonest first",
            EventSortBy::DateDesc => "Date: latest first",
            EventSortBy::PriceAsc => "Price: low to high",
            EventSortBy::PriceDesc => "Price: high to low",
        }
    }

    pub fn all() -> [EventSortBy; 4] {
        [
            EventSortBy::DateAsc,
            EventSortBy::DateDesc,
            EventSortBy::PriceAsc,
            EventSortBy::PriceDesc,
        ]
    }
}

/// Publication state of an event as seen by its organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Published => "Published",
            EventStatus::Cancelled => "Cancelled",
        }
    }
}
