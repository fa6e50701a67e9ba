use contracts::domain::events::{Category, CityRef, EventSummary};
use leptos::prelude::*;

use crate::shared::state::filter_state::{EventFilter, DEFAULT_PAGE_SIZE};

#[derive(Clone, Debug)]
pub struct EventsListState {
    pub filter: EventFilter,

    // results
    pub items: Vec<EventSummary>,
    pub total_count: usize,
    pub total_pages: u32,
    pub page_size: u32,

    // reference data for the filter form
    pub categories: Vec<Category>,
    pub cities: Vec<CityRef>,

    // load flag
    pub is_loaded: bool,
}

impl Default for EventsListState {
    fn default() -> Self {
        Self {
            filter: EventFilter::default(),
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
            page_size: DEFAULT_PAGE_SIZE,
            categories: Vec::new(),
            cities: Vec::new(),
            is_loaded: false,
        }
    }
}

impl EventsListState {
    pub fn city_name(&self, code: u32) -> Option<String> {
        self.cities
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.clone())
    }
}

pub fn create_state() -> RwSignal<EventsListState> {
    RwSignal::new(EventsListState::default())
}
