use contracts::domain::events::{
    Category, CityRef, EventDetail, EventFormDto, EventSearchQuery, EventSummary,
};
use contracts::shared::paging::PaginatedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, auth_header};

/// Public search endpoint.
pub async fn search_events(
    query: &EventSearchQuery,
) -> Result<PaginatedResponse<EventSummary>, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    let response = Request::get(&api_url(&format!("/api/events?{}", qs)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to search events: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_event(id: &str) -> Result<EventDetail, String> {
    let response = Request::get(&api_url(&format!("/api/events/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch event: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&api_url("/api/categories"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch categories: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_cities() -> Result<Vec<CityRef>, String> {
    let response = Request::get(&api_url("/api/cities"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch cities: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

// ============================================================================
// Organizer endpoints (authenticated)
// ============================================================================

pub async fn fetch_my_events(search: &str) -> Result<Vec<EventSummary>, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    // Cache buster: publish/cancel actions must show up on the next reload.
    let cache_buster = js_sys::Date::now() as i64;
    let mut url = api_url(&format!("/api/organizer/events?_ts={}", cache_buster));
    if !search.is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }

    let response = Request::get(&url)
        .header("Authorization", &auth)
        .header("Cache-Control", "no-cache, no-store, must-revalidate")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch events: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_my_event(id: &str) -> Result<EventFormDto, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&api_url(&format!("/api/organizer/events/{}", id)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch event: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create (no id) or update (id set). Returns the event id.
pub async fn save_event(form: &EventFormDto) -> Result<String, String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let request = match &form.id {
        Some(id) => Request::put(&api_url(&format!("/api/organizer/events/{}", id))),
        None => Request::post(&api_url("/api/organizer/events")),
    };

    let response = request
        .header("Authorization", &auth)
        .json(form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save event: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

pub async fn publish_event(id: &str) -> Result<(), String> {
    set_event_state(id, "publish").await
}

pub async fn cancel_event(id: &str) -> Result<(), String> {
    set_event_state(id, "cancel").await
}

async fn set_event_state(id: &str, action: &str) -> Result<(), String> {
    let auth = auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&api_url(&format!("/api/organizer/events/{}/{}", id, action)))
        .header("Authorization", &auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to {} event: {}", action, response.status()));
    }

    Ok(())
}
