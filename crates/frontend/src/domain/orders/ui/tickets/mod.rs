use crate::domain::orders::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::money::format_vnd;
use contracts::domain::orders::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The signed-in user's orders and issued tickets.
#[component]
pub fn MyTicketsPage() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match api::fetch_my_orders().await {
                Ok(list) => {
                    let _ = orders.try_set(list);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <div class="page page--tickets">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My tickets"</h1>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <Show when=move || loading.get()>
                    <div class="page__loading">"Loading orders..."</div>
                </Show>

                <For
                    each=move || orders.get()
                    key=|order| order.id
                    children=move |order| {
                        let created = format_datetime(&order.created_at.to_rfc3339());
                        view! {
                            <div class="order-card">
                                <div class="order-card__header">
                                    <strong>{order.event_title.clone()}</strong>
                                    <span class="badge">{order.status.label()}</span>
                                </div>
                                <div class="order-card__meta">
                                    <span>{created}</span>
                                    <span>{format_vnd(order.total_amount)}</span>
                                </div>
                                <ul class="order-card__tickets">
                                    {order.tickets.iter().map(|ticket| view! {
                                        <li>
                                            {ticket.ticket_type_name.clone()}
                                            <code class="ticket-code">{ticket.code.clone()}</code>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </div>
                        }
                    }
                />

                <Show when=move || !loading.get() && orders.with(|o| o.is_empty())>
                    <div class="empty-state">
                        <p>"No tickets yet. Find an event to attend."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
