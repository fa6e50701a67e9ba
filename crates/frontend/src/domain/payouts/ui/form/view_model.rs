use contracts::domain::payouts::CreatePayoutMethodDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reconciler::PayoutMethodReconciler;
use crate::domain::payouts::api;

/// Reactive shell around [`PayoutMethodReconciler`]: owns the network side
/// and applies results to the pure state.
///
/// All async results land through `try_update`/`try_set`, so responses that
/// arrive after the page is gone are discarded instead of touching disposed
/// state.
#[derive(Clone, Copy)]
pub struct PayoutMethodFormViewModel {
    pub state: RwSignal<PayoutMethodReconciler>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PayoutMethodFormViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PayoutMethodReconciler::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            deleting: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch saved methods and run the one-shot initialization. The guard
    /// lives in the reconciler, so a second load (or a refetch racing a user
    /// edit) cannot override what the user already did.
    pub fn load(&self, existing_payout_id: Option<String>) {
        let state = self.state;
        let loading = self.loading;
        let error = self.error;
        spawn_local(async move {
            loading.set(true);
            match api::fetch_payout_methods().await {
                Ok(methods) => {
                    let _ = state
                        .try_update(|r| r.initialize(existing_payout_id.as_deref(), methods));
                }
                Err(e) => {
                    let _ = state.try_update(|r| r.fetch_failed());
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    }

    /// Submit the draft. On success the stored method joins the saved list
    /// and becomes the selection.
    pub fn save_new_method(&self, set_default: bool) {
        let dto = self
            .state
            .with_untracked(|r| CreatePayoutMethodDto::from_form_value(r.value(), set_default));

        if let Err(message) = dto.validate() {
            self.error.set(Some(message));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let state = self.state;
        let saving = self.saving;
        let error = self.error;
        spawn_local(async move {
            match api::create_payout_method(&dto).await {
                Ok(method) => {
                    let _ = state.try_update(|r| r.method_created(method));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = saving.try_set(false);
        });
    }

    /// Delete a saved method. Local state changes only after the server
    /// confirms; a failed delete leaves the selection exactly as it was.
    pub fn delete_method(&self, id: String) {
        self.error.set(None);
        self.deleting.set(true);
        let state = self.state;
        let deleting = self.deleting;
        let error = self.error;
        spawn_local(async move {
            match api::delete_payout_method(&id).await {
                Ok(()) => {
                    let _ = state.try_update(|r| r.method_deleted(&id));
                }
                Err(e) => {
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = deleting.try_set(false);
        });
    }
}
