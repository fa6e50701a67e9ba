use std::rc::Rc;

use contracts::domain::events::{Category, CityRef};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

use super::view_model::EventEditorViewModel;
use crate::domain::events::api;

/// Create/edit form for one event. The route decides the mode: no `id`
/// param means create.
#[component]
pub fn EventEditorPage() -> impl IntoView {
    let params = use_params_map();
    let vm = EventEditorViewModel::new();
    let categories = RwSignal::new(Vec::<Category>::new());
    let cities = RwSignal::new(Vec::<CityRef>::new());

    vm.load_if_needed(params.with_untracked(|p| p.get("id")));

    spawn_local(async move {
        if let Ok(list) = api::fetch_categories().await {
            let _ = categories.try_set(list);
        }
        if let Ok(list) = api::fetch_cities().await {
            let _ = cities.try_set(list);
        }
    });

    let form = vm.form;
    let error = vm.error;
    let saving = vm.saving;

    let navigate = use_navigate();
    let on_save = {
        let vm = vm.clone();
        move |_| {
            let navigate = navigate.clone();
            vm.save_command(Rc::new(move |_id| {
                navigate("/organizer/events", Default::default());
            }));
        }
    };

    let vm_for_add = vm.clone();
    let vm_for_remove = vm.clone();

    view! {
        <div class="page page--event-editor">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if form.with(|f| f.id.is_some()) {
                            "Edit event"
                        } else {
                            "New event"
                        }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="form-grid">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Title"</Label>
                        <input
                            type="text"
                            class="form-input"
                            prop:value=move || form.with(|f| f.title.clone())
                            on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                        />
                    </Flex>

                    <Flex gap=FlexGap::Medium>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Category"</Label>
                            <select
                                class="form-input"
                                on:change=move |ev| {
                                    form.update(|f| f.category = event_target_value(&ev))
                                }
                                prop:value=move || form.with(|f| f.category.clone())
                            >
                                <option value="">"Select..."</option>
                                {move || categories.get().iter().map(|c| {
                                    let id = c.id.to_string();
                                    let selected = form.with(|f| f.category == id);
                                    view! {
                                        <option value=id.clone() selected=selected>
                                            {c.name.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </Flex>

                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"City"</Label>
                            <select
                                class="form-input"
                                on:change=move |ev| {
                                    form.update(|f| {
                                        f.city_code = event_target_value(&ev).parse().ok()
                                    })
                                }
                                prop:value=move || {
                                    form.with(|f| f.city_code.map(|c| c.to_string()).unwrap_or_default())
                                }
                            >
                                <option value="">"Select..."</option>
                                {move || cities.get().iter().map(|c| {
                                    let code = c.code;
                                    let selected = form.with(|f| f.city_code == Some(code));
                                    view! {
                                        <option value=code.to_string() selected=selected>
                                            {c.name.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </Flex>
                    </Flex>

                    <Flex gap=FlexGap::Medium>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Venue name"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.with(|f| f.venue_name.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.venue_name = event_target_value(&ev))
                                }
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Venue address"</Label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || form.with(|f| f.venue_address.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.venue_address = event_target_value(&ev))
                                }
                            />
                        </Flex>
                    </Flex>

                    <Flex gap=FlexGap::Medium>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Starts"</Label>
                            <input
                                type="datetime-local"
                                class="form-input"
                                prop:value=move || form.with(|f| f.start_time.clone())
                                on:change=move |ev| {
                                    form.update(|f| f.start_time = event_target_value(&ev))
                                }
                            />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Ends"</Label>
                            <input
                                type="datetime-local"
                                class="form-input"
                                prop:value=move || form.with(|f| f.end_time.clone())
                                on:change=move |ev| {
                                    form.update(|f| f.end_time = event_target_value(&ev))
                                }
                            />
                        </Flex>
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Description"</Label>
                        <textarea
                            class="form-input form-input--textarea"
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                form.update(|f| f.description = event_target_value(&ev))
                            }
                        />
                    </Flex>

                    <h2>"Ticket types"</h2>
                    <table class="ticket-type-editor">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Price (VND)"</th>
                                <th>"Quantity"</th>
                                <th>"Max per order"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = form.with(|f| f.ticket_types.len());
                                (0..rows).map(|i| {
                                    let vm_remove = vm_for_remove.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <input
                                                    type="text"
                                                    prop:value=move || {
                                                        form.with(|f| {
                                                            f.ticket_types.get(i)
                                                                .map(|t| t.name.clone())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| form.update(|f| {
                                                        if let Some(t) = f.ticket_types.get_mut(i) {
                                                            t.name = event_target_value(&ev);
                                                        }
                                                    })
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    prop:value=move || {
                                                        form.with(|f| {
                                                            f.ticket_types.get(i)
                                                                .map(|t| t.price.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| form.update(|f| {
                                                        if let Some(t) = f.ticket_types.get_mut(i) {
                                                            t.price = event_target_value(&ev)
                                                                .parse()
                                                                .unwrap_or(0);
                                                        }
                                                    })
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    prop:value=move || {
                                                        form.with(|f| {
                                                            f.ticket_types.get(i)
                                                                .map(|t| t.quantity_total.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| form.update(|f| {
                                                        if let Some(t) = f.ticket_types.get_mut(i) {
                                                            t.quantity_total = event_target_value(&ev)
                                                                .parse()
                                                                .unwrap_or(0);
                                                        }
                                                    })
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="number"
                                                    prop:value=move || {
                                                        form.with(|f| {
                                                            f.ticket_types.get(i)
                                                                .map(|t| t.max_per_order.to_string())
                                                                .unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| form.update(|f| {
                                                        if let Some(t) = f.ticket_types.get_mut(i) {
                                                            t.max_per_order = event_target_value(&ev)
                                                                .parse()
                                                                .unwrap_or(1);
                                                        }
                                                    })
                                                />
                                            </td>
                                            <td>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm_remove.remove_ticket_row(i)
                                                >
                                                    "Remove"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                    <div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm_for_add.add_ticket_row()
                        >
                            "Add ticket type"
                        </Button>
                    </div>

                    <div class="form-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=on_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            {move || if saving.get() { "Saving..." } else { "Save event" }}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}
