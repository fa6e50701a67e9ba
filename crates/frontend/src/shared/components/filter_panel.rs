use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel used by search/list pages.
///
/// The header row carries the expand toggle, an active-filter badge and the
/// pagination slot; the collapsible body holds the filter form and the
/// active-filter chips.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,

    /// Number of active filters, shown as a badge when > 0.
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Pagination controls rendered in the header center.
    #[prop(into)]
    pagination_controls: ViewFn,

    /// Filter form fields.
    #[prop(into)]
    filter_content: ViewFn,

    /// Active filter chips, rendered under the form.
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    /// "Clear filters" callback; the button renders only when set.
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
                <div class="filter-panel-header__right">
                    {on_clear.map(|cb| view! {
                        <button
                            class="filter-panel__clear"
                            on:click=move |_| cb.run(())
                        >
                            "Clear filters"
                        </button>
                    })}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </Show>
        </div>
    }
}

/// Removable chip for one active filter.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
