use crate::dashboards::admin::api;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::money::format_vnd;
use contracts::dashboards::admin::AdminSummaryResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Platform-wide analytics for administrators.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary = RwSignal::new(None::<AdminSummaryResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match api::fetch_summary().await {
                Ok(data) => {
                    let _ = summary.try_set(Some(data));
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
            load();
        }
    });

    let revenue = Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.gross_revenue)));
    let tickets =
        Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.tickets_sold as i64)));
    let events =
        Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.events_published as i64)));
    let customers =
        Signal::derive(move || summary.with(|s| s.as_ref().map(|s| s.new_customers as i64)));
    let revenue_change =
        Signal::derive(move || summary.with(|s| s.as_ref().and_then(|s| s.revenue_change_percent)));

    view! {
        <div class="page page--admin-dashboard">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Platform overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="stat-card-grid">
                    <StatCard
                        label="Gross revenue".to_string()
                        icon_name="wallet".to_string()
                        value=revenue
                        format=StatFormat::Money
                        change_percent=revenue_change
                    />
                    <StatCard
                        label="Tickets sold".to_string()
                        icon_name="ticket".to_string()
                        value=tickets
                        format=StatFormat::Count
                    />
                    <StatCard
                        label="Published events".to_string()
                        icon_name="calendar".to_string()
                        value=events
                        format=StatFormat::Count
                    />
                    <StatCard
                        label="New customers".to_string()
                        icon_name="users".to_string()
                        value=customers
                        format=StatFormat::Count
                    />
                </div>

                {move || {
                    summary.get().map(|data| view! {
                        <div class="dashboard-tables">
                            <div class="dashboard-table">
                                <h2>"Revenue by month"</h2>
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Month"</TableHeaderCell>
                                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                                            <TableHeaderCell>"Tickets"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {data.revenue_by_month.into_iter().map(|point| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{point.month.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_vnd(point.revenue)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {point.tickets.to_string()}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>

                            <div class="dashboard-table">
                                <h2>"Top categories"</h2>
                                <Table>
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell>"Category"</TableHeaderCell>
                                            <TableHeaderCell>"Revenue"</TableHeaderCell>
                                            <TableHeaderCell>"Share"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {data.top_categories.into_iter().map(|share| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{share.category.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format_vnd(share.revenue)}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {format!("{:.1}%", share.share_percent)}
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            </div>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}
