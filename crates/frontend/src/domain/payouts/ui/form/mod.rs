pub mod reconciler;
pub mod view_model;

use contracts::domain::payouts::{MethodType, PayoutMethod, PayoutMethodFormValue};
use leptos::prelude::*;
use thaw::*;

use self::reconciler::PayoutTab;
use self::view_model::PayoutMethodFormViewModel;
use crate::shared::icons::icon;

fn method_summary(method: &PayoutMethod) -> String {
    match method.method_type {
        MethodType::BankAccount => match &method.bank_details {
            Some(d) => format!("{} · {} · {}", d.bank_name, d.account_number, d.account_holder),
            None => "Bank account".to_string(),
        },
        MethodType::Momo => match &method.momo_details {
            Some(d) => format!("MoMo · {} · {}", d.phone_number, d.owner_name),
            None => "MoMo wallet".to_string(),
        },
    }
}

/// Payout-method selection surface: a "saved" tab over the server list and a
/// "create" tab with the new-method draft. Reports the effective method
/// upward via `on_change` on every state change.
#[component]
pub fn PayoutMethodForm(
    #[prop(optional)] existing_payout_id: Option<String>,
    #[prop(optional)] on_change: Option<Callback<PayoutMethodFormValue>>,
) -> impl IntoView {
    let vm = PayoutMethodFormViewModel::new();
    vm.load(existing_payout_id);

    let state = vm.state;

    if let Some(on_change) = on_change {
        Effect::new(move |_| {
            let value = state.with(|r| r.value().clone());
            on_change.run(value);
        });
    }

    let set_default = RwSignal::new(false);

    let tab_class = move |tab: PayoutTab| {
        if state.with(|r| r.active_tab() == tab) {
            "tab-bar__tab tab-bar__tab--active"
        } else {
            "tab-bar__tab"
        }
    };

    view! {
        <div class="payout-method-form">
            {move || {
                vm.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="tab-bar">
                <button
                    class=move || tab_class(PayoutTab::Saved)
                    on:click=move |_| state.update(|r| r.switch_tab(PayoutTab::Saved))
                >
                    "Saved methods"
                </button>
                <button
                    class=move || tab_class(PayoutTab::Create)
                    on:click=move |_| state.update(|r| r.switch_tab(PayoutTab::Create))
                >
                    "New method"
                </button>
            </div>

            <Show when=move || vm.loading.get()>
                <div class="page__loading">"Loading payout methods..."</div>
            </Show>

            <Show when=move || state.with(|r| r.active_tab() == PayoutTab::Saved)>
                <div class="payout-method-form__saved">
                    <Show
                        when=move || state.with(|r| !r.saved_methods().is_empty())
                        fallback=|| view! {
                            <p class="empty-message">
                                "No saved payout methods yet. Create one on the other tab."
                            </p>
                        }
                    >
                        <For
                            each=move || state.with(|r| r.saved_methods().to_vec())
                            key=|method| method.id.clone()
                            children=move |method| {
                                let id = method.id.clone();
                                let id_for_select = id.clone();
                                let id_for_delete = id.clone();
                                let id_for_checked = id.clone();
                                let summary = method_summary(&method);
                                let checked = Signal::derive(move || {
                                    state.with(|r| {
                                        r.selected_saved_id() == Some(id_for_checked.as_str())
                                    })
                                });
                                view! {
                                    <label class="payout-method-row">
                                        <input
                                            type="radio"
                                            name="payout-method"
                                            prop:checked=move || checked.get()
                                            on:change=move |_| {
                                                state.update(|r| {
                                                    r.select_saved_method(&id_for_select);
                                                });
                                            }
                                        />
                                        <span class="payout-method-row__summary">{summary}</span>
                                        {method.is_default.then(|| view! {
                                            <span class="badge badge--success">"Default"</span>
                                        })}
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| vm.delete_method(id_for_delete.clone())
                                            disabled=Signal::derive(move || vm.deleting.get())
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </label>
                                }
                            }
                        />
                    </Show>
                </div>
            </Show>

            <Show when=move || state.with(|r| r.active_tab() == PayoutTab::Create)>
                <div class="payout-method-form__create">
                    <Flex gap=FlexGap::Medium>
                        <label class="radio-option">
                            <input
                                type="radio"
                                name="method-type"
                                prop:checked=move || {
                                    state.with(|r| r.value().method_type == MethodType::BankAccount)
                                }
                                on:change=move |_| {
                                    state.update(|r| r.switch_method_type(MethodType::BankAccount));
                                }
                            />
                            {MethodType::BankAccount.label()}
                        </label>
                        <label class="radio-option">
                            <input
                                type="radio"
                                name="method-type"
                                prop:checked=move || {
                                    state.with(|r| r.value().method_type == MethodType::Momo)
                                }
                                on:change=move |_| {
                                    state.update(|r| r.switch_method_type(MethodType::Momo));
                                }
                            />
                            {MethodType::Momo.label()}
                        </label>
                    </Flex>

                    <Show when=move || {
                        state.with(|r| r.value().method_type == MethodType::BankAccount)
                    }>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Bank name"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || state.with(|r| r.value().bank_details.bank_name.clone())
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    state.update(|r| r.update_bank_details(|d| d.bank_name = v));
                                }
                            />
                            <Label>"Account number"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || {
                                    state.with(|r| r.value().bank_details.account_number.clone())
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    state.update(|r| r.update_bank_details(|d| d.account_number = v));
                                }
                            />
                            <Label>"Account holder"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || {
                                    state.with(|r| r.value().bank_details.account_holder.clone())
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    state.update(|r| r.update_bank_details(|d| d.account_holder = v));
                                }
                            />
                        </Flex>
                    </Show>

                    <Show when=move || state.with(|r| r.value().method_type == MethodType::Momo)>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"MoMo phone number"</Label>
                            <input
                                type="tel"
                                class="form-input"
                                prop:value=move || {
                                    state.with(|r| r.value().momo_details.phone_number.clone())
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    state.update(|r| r.update_momo_details(|d| d.phone_number = v));
                                }
                            />
                            <Label>"Wallet owner"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || {
                                    state.with(|r| r.value().momo_details.owner_name.clone())
                                }
                                on:input=move |ev| {
                                    let v = event_target_value(&ev);
                                    state.update(|r| r.update_momo_details(|d| d.owner_name = v));
                                }
                            />
                        </Flex>
                    </Show>

                    <label class="checkbox-option">
                        <input
                            type="checkbox"
                            prop:checked=move || set_default.get()
                            on:change=move |ev| set_default.set(event_target_checked(&ev))
                        />
                        "Use as default payout method"
                    </label>

                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_new_method(set_default.get_untracked())
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {move || if vm.saving.get() { "Saving..." } else { "Save method" }}
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
