use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::admin::ui::dashboard::AdminDashboardPage;
use crate::domain::checkin::ui::staff::CheckinStaffPage;
use crate::domain::events::ui::details::EventDetailsPage;
use crate::domain::events::ui::list::EventsListPage;
use crate::domain::events::ui::manage::editor::EventEditorPage;
use crate::domain::events::ui::manage::OrganizerEventsPage;
use crate::domain::orders::ui::checkout::CheckoutPage;
use crate::domain::orders::ui::tickets::MyTicketsPage;
use crate::domain::payouts::ui::settings::PayoutMethodsPage;
use crate::layout::SiteShell;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteShell>
                <Routes fallback=|| view! {
                    <div class="page">
                        <div class="empty-state">
                            <p>"Page not found."</p>
                        </div>
                    </div>
                }>
                    <Route path=path!("/") view=EventsListPage/>
                    <Route path=path!("/events") view=EventsListPage/>
                    <Route path=path!("/events/:id") view=EventDetailsPage/>
                    <Route path=path!("/events/:id/checkout") view=CheckoutPage/>
                    <Route path=path!("/tickets") view=MyTicketsPage/>
                    <Route path=path!("/organizer/events") view=OrganizerEventsPage/>
                    <Route path=path!("/organizer/events/new") view=EventEditorPage/>
                    <Route path=path!("/organizer/events/:id/edit") view=EventEditorPage/>
                    <Route path=path!("/organizer/payout-methods") view=PayoutMethodsPage/>
                    <Route path=path!("/organizer/checkin") view=CheckinStaffPage/>
                    <Route path=path!("/admin") view=AdminDashboardPage/>
                    <Route path=path!("/login") view=LoginPage/>
                </Routes>
            </SiteShell>
        </Router>
    }
}
