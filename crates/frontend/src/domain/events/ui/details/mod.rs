use crate::domain::events::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::money::format_vnd;
use contracts::domain::events::EventDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Public event page: description, schedule, venue and the ticket-type
/// table, with the way into checkout.
#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let (event, set_event) = signal::<Option<EventDetail>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_event(&id).await {
                Ok(detail) => {
                    let _ = set_event.try_set(Some(detail));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <div class="page page--event-detail">
            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <Show when=move || loading.get()>
                <div class="page__loading">"Loading event..."</div>
            </Show>

            {move || {
                event.get().map(|detail| {
                    let checkout_href = format!("/events/{}/checkout", detail.id);
                    let any_available = detail.ticket_types.iter().any(|t| !t.sold_out());
                    let starts = format_datetime(&detail.start_time.to_rfc3339());
                    let ends = format_datetime(&detail.end_time.to_rfc3339());
                    view! {
                        <div class="event-detail">
                            <div class="event-detail__cover">
                                {detail.cover_image_url.clone().map(|url| view! {
                                    <img src=url alt=""/>
                                })}
                            </div>

                            <div class="page__header">
                                <div class="page__header-left">
                                    <h1 class="page__title">{detail.title.clone()}</h1>
                                    <span class="badge">{detail.category.to_string()}</span>
                                </div>
                            </div>

                            <div class="event-detail__meta">
                                <div class="event-detail__meta-row">
                                    {icon("calendar")}
                                    <span>{starts} " – " {ends}</span>
                                </div>
                                <div class="event-detail__meta-row">
                                    {icon("map-pin")}
                                    <span>
                                        {detail.venue_name.clone()}
                                        ", "
                                        {detail.venue_address.clone()}
                                    </span>
                                </div>
                                <div class="event-detail__meta-row">
                                    {icon("users")}
                                    <span>"Organized by " {detail.organizer_name.clone()}</span>
                                </div>
                            </div>

                            <p class="event-detail__description">{detail.description.clone()}</p>

                            <h2>"Tickets"</h2>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Ticket"</TableHeaderCell>
                                        <TableHeaderCell>"Price"</TableHeaderCell>
                                        <TableHeaderCell>"Availability"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {detail.ticket_types.into_iter().map(|tt| {
                                        let availability = if tt.sold_out() {
                                            "Sold out".to_string()
                                        } else {
                                            format!("{} left", tt.remaining())
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{tt.name.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{format_vnd(tt.price)}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{availability}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>

                            <div class="event-detail__actions">
                                <Show
                                    when=move || any_available
                                    fallback=|| view! {
                                        <span class="badge badge--warning">"Sold out"</span>
                                    }
                                >
                                    <A href=checkout_href.clone() attr:class="btn btn--primary">
                                        {icon("ticket")}
                                        " Buy tickets"
                                    </A>
                                </Show>
                            </div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
