pub mod editor;
pub mod view_model;

use crate::domain::events::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::money::format_vnd;
use contracts::domain::events::EventSummary;
use contracts::enums::EventStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

fn status_badge_class(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Draft => "badge",
        EventStatus::Published => "badge badge--success",
        EventStatus::Cancelled => "badge badge--warning",
    }
}

/// Organizer's own events: search, publish/cancel, entry into the editor.
#[component]
pub fn OrganizerEventsPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<EventSummary>::new());
    let search = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_my_events(&search.get_untracked()).await {
                Ok(events) => {
                    let _ = items.try_set(events);
                    let _ = set_loading.try_set(false);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                    let _ = set_loading.try_set(false);
                }
            }
        });
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            load_items();
        }
    });

    let change_status = move |id: String, publish: bool| {
        spawn_local(async move {
            let result = if publish {
                api::publish_event(&id).await
            } else {
                api::cancel_event(&id).await
            };
            match result {
                Ok(()) => load_items(),
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="page page--organizer">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My events"</h1>
                    <span class="badge badge--primary">
                        {move || items.get().len().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <A href="/organizer/events/new".to_string() attr:class="btn btn--primary">
                        {icon("plus")}
                        " New event"
                    </A>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="max-width: 320px;">
                        <Input value=search placeholder="Search my events..."/>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Search" }}
                    </Button>
                </Flex>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Event"</TableHeaderCell>
                            <TableHeaderCell>"Starts"</TableHeaderCell>
                            <TableHeaderCell>"From"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|event| (event.id, event.status)
                            children=move |event| {
                                let edit_href = format!("/organizer/events/{}/edit", event.id);
                                let id_for_publish = event.id.to_string();
                                let id_for_cancel = event.id.to_string();
                                let starts = format_datetime(&event.start_time.to_rfc3339());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <A href=edit_href attr:class="table__link">
                                                    {event.title.clone()}
                                                </A>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{starts}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_vnd(event.min_ticket_price)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_badge_class(event.status)>
                                                    {event.status.label()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {matches!(event.status, EventStatus::Draft).then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        on_click=move |_| {
                                                            change_status(id_for_publish.clone(), true)
                                                        }
                                                    >
                                                        "Publish"
                                                    </Button>
                                                })}
                                                {matches!(event.status, EventStatus::Published).then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| {
                                                            change_status(id_for_cancel.clone(), false)
                                                        }
                                                    >
                                                        "Cancel event"
                                                    </Button>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || !loading.get() && items.with(|i| i.is_empty())>
                    <div class="empty-state">
                        <p>"You have no events yet. Create the first one."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
