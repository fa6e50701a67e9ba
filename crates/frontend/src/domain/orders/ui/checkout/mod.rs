pub mod draft;

use self::draft::OrderDraft;
use crate::domain::events::api as events_api;
use crate::domain::orders::api;
use crate::shared::money::format_vnd;
use contracts::domain::events::EventDetail;
use contracts::domain::orders::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Ticket selection and order submission for one event.
#[component]
pub fn CheckoutPage() -> impl IntoView {
    let params = use_params_map();
    let event = RwSignal::new(None::<EventDetail>);
    let draft = RwSignal::new(OrderDraft::default());
    let placed_order = RwSignal::new(None::<Order>);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        spawn_local(async move {
            match events_api::fetch_event(&id).await {
                Ok(detail) => {
                    let _ = event.try_set(Some(detail));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    });

    let place_order = move || {
        let Some(detail) = event.get_untracked() else {
            return;
        };
        let dto = draft.get_untracked().to_dto(detail.id);
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);
        spawn_local(async move {
            match api::create_order(&dto).await {
                Ok(order) => {
                    let _ = placed_order.try_set(Some(order));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="page page--checkout">
            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            {move || {
                placed_order.get().map(|order| view! {
                    <div class="checkout-confirmation">
                        <h1>"Order confirmed"</h1>
                        <p>
                            {format!(
                                "Order {} for {} is in. Your tickets are under \"My tickets\".",
                                order.id, order.event_title
                            )}
                        </p>
                        <A href="/tickets".to_string() attr:class="btn btn--primary">
                            "Go to my tickets"
                        </A>
                    </div>
                })
            }}

            <Show when=move || placed_order.with(|o| o.is_none())>
                {move || {
                    event.get().map(|detail| {
                        let ticket_types = detail.ticket_types.clone();
                        let types_for_total = ticket_types.clone();
                        view! {
                            <div class="checkout">
                                <div class="page__header">
                                    <div class="page__header-left">
                                        <h1 class="page__title">
                                            "Tickets for " {detail.title.clone()}
                                        </h1>
                                    </div>
                                </div>

                                <table class="checkout__table">
                                    <thead>
                                        <tr>
                                            <th>"Ticket"</th>
                                            <th>"Price"</th>
                                            <th>"Available"</th>
                                            <th>"Quantity"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {ticket_types.iter().map(|tt| {
                                            let tt = tt.clone();
                                            let tt_for_input = tt.clone();
                                            let qty = Signal::derive({
                                                let id = tt.id;
                                                move || draft.with(|d| d.quantity(id))
                                            });
                                            let cap = tt.max_per_order.min(tt.remaining());
                                            view! {
                                                <tr>
                                                    <td>{tt.name.clone()}</td>
                                                    <td>{format_vnd(tt.price)}</td>
                                                    <td>
                                                        {if tt.sold_out() {
                                                            "Sold out".to_string()
                                                        } else {
                                                            format!("{} left", tt.remaining())
                                                        }}
                                                    </td>
                                                    <td>
                                                        <input
                                                            type="number"
                                                            min="0"
                                                            max=cap.to_string()
                                                            disabled=tt.sold_out()
                                                            prop:value=move || qty.get().to_string()
                                                            on:change=move |ev| {
                                                                let requested = event_target_value(&ev)
                                                                    .parse()
                                                                    .unwrap_or(0);
                                                                draft.update(|d| {
                                                                    d.set_quantity(&tt_for_input, requested)
                                                                });
                                                            }
                                                        />
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>

                                <div class="checkout__summary">
                                    <span>
                                        {move || {
                                            let count = draft.with(|d| d.total_tickets());
                                            format!("{} ticket(s)", count)
                                        }}
                                    </span>
                                    <strong>
                                        {move || {
                                            let total = draft.with(|d| {
                                                d.total_amount(&types_for_total)
                                            });
                                            format_vnd(total)
                                        }}
                                    </strong>
                                </div>

                                <div class="form-actions">
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| place_order()
                                        disabled=Signal::derive(move || {
                                            submitting.get() || draft.with(|d| d.is_empty())
                                        })
                                    >
                                        {move || if submitting.get() {
                                            "Placing order..."
                                        } else {
                                            "Place order"
                                        }}
                                    </Button>
                                </div>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
