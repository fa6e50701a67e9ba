use crate::domain::checkin::api;
use crate::domain::events::api as events_api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::checkin::{AssignStaffDto, StaffAssignment};
use contracts::domain::events::EventSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Per-event check-in staff management: who may scan tickets at the door.
#[component]
pub fn CheckinStaffPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<EventSummary>::new());
    let selected_event = RwSignal::new(None::<String>);
    let assignments = RwSignal::new(Vec::<StaffAssignment>::new());
    let email_input = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let load_assignments = move || {
        let Some(event_id) = selected_event.get_untracked() else {
            assignments.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::fetch_assignments(&event_id).await {
                Ok(list) => {
                    let _ = assignments.try_set(list);
                    let _ = set_error.try_set(None);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    };

    // Load the organizer's events once; the first one becomes the selection.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match events_api::fetch_my_events("").await {
                Ok(list) => {
                    let first = list.first().map(|e| e.id.to_string());
                    let _ = events.try_set(list);
                    // try_set returns the value back when the signal is
                    // already disposed; nothing left to do in that case.
                    if selected_event.try_set(first).is_some() {
                        return;
                    }
                    load_assignments();
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
        });
    });

    let assign = move || {
        let Some(event_id) = selected_event.get_untracked() else {
            return;
        };
        let dto = AssignStaffDto {
            email: email_input.get_untracked().trim().to_string(),
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::assign_staff(&event_id, &dto).await {
                Ok(assignment) => {
                    let _ = assignments.try_update(|list| list.push(assignment));
                    let _ = email_input.try_set(String::new());
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    let revoke = move |assignment_id: String| {
        let Some(event_id) = selected_event.get_untracked() else {
            return;
        };
        set_busy.set(true);
        spawn_local(async move {
            match api::revoke_assignment(&event_id, &assignment_id).await {
                Ok(()) => {
                    let _ = assignments
                        .try_update(|list| list.retain(|a| a.id.to_string() != assignment_id));
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                }
            }
            let _ = set_busy.try_set(false);
        });
    };

    view! {
        <div class="page page--checkin">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Check-in staff"</h1>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Event:"</Label>
                        <select
                            class="form-input"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                selected_event.set((!value.is_empty()).then_some(value));
                                load_assignments();
                            }
                            prop:value=move || selected_event.get().unwrap_or_default()
                        >
                            {move || events.get().iter().map(|event| {
                                let id = event.id.to_string();
                                let selected = Signal::derive({
                                    let id = id.clone();
                                    move || selected_event.get().as_deref() == Some(id.as_str())
                                });
                                view! {
                                    <option value=id.clone() selected=move || selected.get()>
                                        {event.title.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </Flex>
                </Flex>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="checkin-assign">
                    <Input value=email_input placeholder="staff@example.com"/>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| assign()
                        disabled=Signal::derive(move || {
                            busy.get() || selected_event.with(|e| e.is_none())
                        })
                    >
                        {icon("plus")}
                        " Grant access"
                    </Button>
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Staff"</TableHeaderCell>
                            <TableHeaderCell>"Assigned"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || assignments.get()
                            key=|assignment| assignment.id
                            children=move |assignment| {
                                let id = assignment.id.to_string();
                                let who = assignment
                                    .display_name
                                    .clone()
                                    .unwrap_or_else(|| assignment.email.clone());
                                let when = format_datetime(&assignment.assigned_at.to_rfc3339());
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{who}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{when}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| revoke(id.clone())
                                                    disabled=Signal::derive(move || busy.get())
                                                >
                                                    {icon("trash")}
                                                    " Revoke"
                                                </Button>
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || assignments.with(|a| a.is_empty())>
                    <div class="empty-state">
                        <p>"No check-in staff assigned to this event yet."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
