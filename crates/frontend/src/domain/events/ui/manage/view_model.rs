use std::rc::Rc;

use contracts::domain::events::{EventFormDto, TicketTypeDto};
use leptos::prelude::*;

use crate::domain::events::api;

/// ViewModel for the organizer's event create/edit form.
#[derive(Clone)]
pub struct EventEditorViewModel {
    pub form: RwSignal<EventFormDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EventEditorViewModel {
    pub fn new() -> Self {
        let mut form = EventFormDto::default();
        // A fresh form starts with one ticket row so the organizer is not
        // greeted by an empty table.
        form.ticket_types.push(TicketTypeDto {
            max_per_order: 4,
            ..TicketTypeDto::default()
        });
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Load form data from the server when editing an existing event.
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_my_event(&existing_id).await {
                Ok(dto) => {
                    let _ = form.try_set(dto);
                }
                Err(e) => {
                    let _ = error.try_set(Some(format!("Failed to load event: {}", e)));
                }
            }
        });
    }

    pub fn add_ticket_row(&self) {
        self.form.update(|f| {
            f.ticket_types.push(TicketTypeDto {
                max_per_order: 4,
                ..TicketTypeDto::default()
            });
        });
    }

    pub fn remove_ticket_row(&self, index: usize) {
        self.form.update(|f| {
            if index < f.ticket_types.len() {
                f.ticket_types.remove(index);
            }
        });
    }

    /// Validate and save; `on_saved` receives the event id on success.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        let current = self.form.get_untracked();

        if let Err(message) = current.validate() {
            self.error.set(Some(message));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let error = self.error;
        let saving = self.saving;
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_event(&current).await {
                Ok(id) => {
                    let _ = saving.try_set(false);
                    on_saved(id);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                    let _ = saving.try_set(false);
                }
            }
        });
    }
}
