pub mod header;

use leptos::prelude::*;

use self::header::SiteHeader;

/// Page shell: sticky header with navigation, content underneath.
#[component]
pub fn SiteShell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="site-shell">
            <SiteHeader/>
            <main class="site-shell__main">{children()}</main>
        </div>
    }
}
