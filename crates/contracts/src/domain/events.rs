use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{EventSortBy, EventStatus};

// ============================================================================
// Id types
// ============================================================================

/// Category identifier. Categories are addressed by stable slugs
/// ("music", "theatre", ...) so they can travel in URLs unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Reference data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A city selectable in the search filter. `code` follows the provincial
/// numbering used by the backend (e.g. 79 = Ho Chi Minh City, 1 = Hanoi).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRef {
    pub code: u32,
    pub name: String,
}

// ============================================================================
// Listing / detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub category: CategoryId,
    pub city_code: u32,
    pub venue_name: String,
    pub start_time: DateTime<Utc>,
    /// Cheapest ticket price in VND.
    pub min_ticket_price: i64,
    pub cover_image_url: Option<String>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: Uuid,
    pub name: String,
    /// Price in VND.
    pub price: i64,
    pub quantity_total: u32,
    pub quantity_sold: u32,
    pub max_per_order: u32,
}

impl TicketType {
    pub fn remaining(&self) -> u32 {
        self.quantity_total.saturating_sub(self.quantity_sold)
    }

    pub fn sold_out(&self) -> bool {
        self.remaining() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: CategoryId,
    pub city_code: u32,
    pub venue_name: String,
    pub venue_address: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub organizer_name: String,
    pub status: EventStatus,
    pub cover_image_url: Option<String>,
    pub ticket_types: Vec<TicketType>,
}

impl EventDetail {
    pub fn min_ticket_price(&self) -> Option<i64> {
        self.ticket_types.iter().map(|t| t.price).min()
    }
}

// ============================================================================
// Search query (GET /api/events)
// ============================================================================

/// Request shape for the public search endpoint. Optional fields are
/// omitted from the query string entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Comma-joined category slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub sort_by: EventSortBy,
    pub page: u32,
    pub page_size: u32,
}

// ============================================================================
// Organizer forms
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeDto {
    pub id: Option<String>,
    pub name: String,
    pub price: i64,
    pub quantity_total: u32,
    pub max_per_order: u32,
}

/// Create/update form for an organizer's event. `start_time`/`end_time` hold
/// the raw `datetime-local` input value ("2026-09-01T19:30").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventFormDto {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub city_code: Option<u32>,
    pub venue_name: String,
    pub venue_address: String,
    pub start_time: String,
    pub end_time: String,
    pub ticket_types: Vec<TicketTypeDto>,
}

impl EventFormDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        if self.city_code.is_none() {
            return Err("City is required".into());
        }
        if self.venue_name.trim().is_empty() {
            return Err("Venue name is required".into());
        }
        if self.start_time.is_empty() || self.end_time.is_empty() {
            return Err("Start and end time are required".into());
        }
        if self.end_time <= self.start_time {
            return Err("End time must be after start time".into());
        }
        if self.ticket_types.is_empty() {
            return Err("At least one ticket type is required".into());
        }
        for tt in &self.ticket_types {
            if tt.name.trim().is_empty() {
                return Err("Every ticket type needs a name".into());
            }
            if tt.price < 0 {
                return Err("Ticket price cannot be negative".into());
            }
            if tt.quantity_total == 0 {
                return Err("Ticket quantity must be at least 1".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EventFormDto {
        EventFormDto {
            id: None,
            title: "Indie Night".into(),
            description: String::new(),
            category: "music".into(),
            city_code: Some(79),
            venue_name: "Saigon Outcast".into(),
            venue_address: "188 Nguyen Van Huong".into(),
            start_time: "2026-09-01T19:30".into(),
            end_time: "2026-09-01T23:00".into(),
            ticket_types: vec![TicketTypeDto {
                id: None,
                name: "Standard".into(),
                price: 250_000,
                quantity_total: 300,
                max_per_order: 6,
            }],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_times() {
        let mut form = valid_form();
        form.end_time = "2026-09-01T18:00".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_validate_requires_ticket_types() {
        let mut form = valid_form();
        form.ticket_types.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_ticket_type_remaining_saturates() {
        let tt = TicketType {
            id: Uuid::nil(),
            name: "GA".into(),
            price: 100_000,
            quantity_total: 10,
            quantity_sold: 12,
            max_per_order: 4,
        };
        assert_eq!(tt.remaining(), 0);
        assert!(tt.sold_out());
    }
}
