use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

/// Top navigation. Organizer and admin sections appear only for the roles
/// that can use them.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let sign_out = move |_| {
        storage::clear_token();
        set_auth_state.set(AuthState::default());
    };

    view! {
        <header class="site-header">
            <A href="/".to_string() attr:class="site-header__brand">
                {icon("ticket")}
                <span>"VéSáng"</span>
            </A>

            <nav class="site-header__nav">
                <A href="/events".to_string()>"Events"</A>
                <Show when=move || auth_state.get().is_authenticated()>
                    <A href="/tickets".to_string()>"My tickets"</A>
                </Show>
                <Show when=move || auth_state.get().is_organizer()>
                    <A href="/organizer/events".to_string()>"My events"</A>
                    <A href="/organizer/payout-methods".to_string()>"Payouts"</A>
                    <A href="/organizer/checkin".to_string()>"Check-in staff"</A>
                </Show>
                <Show when=move || auth_state.get().is_admin()>
                    <A href="/admin".to_string()>"Dashboard"</A>
                </Show>
            </nav>

            <div class="site-header__account">
                <Show
                    when=move || auth_state.get().is_authenticated()
                    fallback=|| view! {
                        <A href="/login".to_string() attr:class="btn btn--secondary">
                            "Sign in"
                        </A>
                    }
                >
                    <span class="site-header__user">
                        {move || {
                            auth_state.get().user
                                .map(|u| u.display_name)
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="btn btn--subtle" on:click=sign_out>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
