use contracts::domain::payouts::PayoutMethodFormValue;
use leptos::prelude::*;

use crate::domain::payouts::ui::form::PayoutMethodForm;

/// Organizer settings page hosting the payout-method form.
///
/// The summary line under the form renders whatever the form reports
/// upward, which is also what an embedding form (e.g. event settlement
/// settings) would submit.
#[component]
pub fn PayoutMethodsPage() -> impl IntoView {
    let current = RwSignal::new(PayoutMethodFormValue::default());

    let summary = move || {
        let value = current.get();
        match value.payout_method_id {
            Some(id) => format!("Saved method {}", id),
            None => format!("New {} (unsaved draft)", value.method_type.label()),
        }
    };

    view! {
        <div class="page page--payout-methods">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Payout methods"</h1>
                </div>
            </div>

            <div class="page__content">
                <p class="page__intro">
                    "Where we send your settlement funds after each event."
                </p>

                <PayoutMethodForm
                    on_change=Callback::new(move |value| current.set(value))
                />

                <div class="payout-method-current">
                    "Selected destination: "
                    <strong>{summary}</strong>
                </div>
            </div>
        </div>
    }
}
