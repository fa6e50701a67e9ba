pub mod state;

use self::state::create_state;
use crate::domain::events::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::money::format_vnd;
use crate::shared::state::filter_state::{
    EventFilter, FilterField, FilterPatch, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE,
};
use crate::shared::state::url_sync;
use chrono::NaiveDate;
use contracts::domain::events::CategoryId;
use contracts::enums::EventSortBy;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const SEARCH_DEBOUNCE_MS: u32 = 350;

/// Public event discovery page.
///
/// The filter state is mirrored into the URL query string on every change
/// (replace-history) and pulled back in on popstate, so search results are
/// shareable and back/forward restores earlier filters.
#[component]
pub fn EventsListPage() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let filter_expanded = RwSignal::new(true);

    // Local buffers behind the text-ish inputs.
    let search_input = RwSignal::new(String::new());
    let min_price_input = RwSignal::new(String::new());
    let max_price_input = RwSignal::new(String::new());

    let sync_inputs = move || {
        let filter = state.with_untracked(|s| s.filter.clone());
        search_input.set(filter.query.clone());
        min_price_input.set(if filter.min_price == DEFAULT_MIN_PRICE {
            String::new()
        } else {
            filter.min_price.to_string()
        });
        max_price_input.set(if filter.max_price == DEFAULT_MAX_PRICE {
            String::new()
        } else {
            filter.max_price.to_string()
        });
    };

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let query = state.with_untracked(|s| s.filter.to_search_query(s.page_size));
            match api::search_events(&query).await {
                Ok(page) => {
                    let _ = state.try_update(|s| {
                        s.items = page.items;
                        s.total_count = page.total;
                        s.total_pages = page.total_pages;
                        s.page_size = page.page_size;
                        s.is_loaded = true;
                    });
                    let _ = set_loading.try_set(false);
                }
                Err(e) => {
                    let _ = set_error.try_set(Some(e));
                    let _ = set_loading.try_set(false);
                }
            }
        });
    };

    // One user interaction = one patch: merge, mirror to URL, reload.
    let apply_patch = move |patch: FilterPatch| {
        state.update(|s| s.filter = s.filter.apply_patch(patch));
        state.with_untracked(|s| url_sync::write_to_location(&s.filter));
        load_items();
    };

    let clear_filters = move || {
        state.update(|s| s.filter = s.filter.reset_except(&[FilterField::Query]));
        state.with_untracked(|s| url_sync::write_to_location(&s.filter));
        sync_inputs();
        load_items();
    };

    // Back/forward navigation: pull the URL back into state. The inequality
    // check is what keeps the two sync directions from looping.
    let _popstate = StoredValue::new_local(url_sync::PopstateListener::attach(move || {
        let from_url = url_sync::read_from_location();
        let changed = state.with_untracked(|s| s.filter != from_url);
        if changed && state.try_update(|s| s.filter = from_url).is_some() {
            sync_inputs();
            load_items();
        }
    }));

    // Initial mount: adopt whatever the address bar says, then load.
    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        state.update(|s| s.filter = url_sync::read_from_location());
        sync_inputs();
        load_items();

        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(categories) => {
                    let _ = state.try_update(|s| s.categories = categories);
                }
                Err(e) => leptos::logging::log!("failed to load categories: {}", e),
            }
            match api::fetch_cities().await {
                Ok(cities) => {
                    let _ = state.try_update(|s| s.cities = cities);
                }
                Err(e) => leptos::logging::log!("failed to load cities: {}", e),
            }
        });
    });

    // Debounced free-text search. The generation counter drops stale timers
    // when the user keeps typing.
    let debounce_generation = StoredValue::new(0u32);
    Effect::new(move |prev: Option<()>| {
        let value = search_input.get();
        if prev.is_none() {
            return;
        }
        let generation = debounce_generation.get_value().wrapping_add(1);
        debounce_generation.set_value(generation);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_generation.try_get_value() != Some(generation) {
                return;
            }
            let applied = state.with_untracked(|s| s.filter.query.clone());
            if applied != value {
                apply_patch(FilterPatch::query(value));
            }
        });
    });

    let toggle_category = move |id: CategoryId, checked: bool| {
        let mut categories = state.with_untracked(|s| s.filter.categories.clone());
        if checked {
            if !categories.contains(&id) {
                categories.push(id);
            }
        } else {
            categories.retain(|c| c != &id);
        }
        apply_patch(FilterPatch {
            categories: Some(categories),
            ..FilterPatch::default()
        });
    };

    let apply_price = move || {
        let min = min_price_input
            .get_untracked()
            .trim()
            .parse()
            .unwrap_or(DEFAULT_MIN_PRICE);
        let max = max_price_input
            .get_untracked()
            .trim()
            .parse()
            .unwrap_or(DEFAULT_MAX_PRICE);
        apply_patch(FilterPatch {
            price_range: Some((min, max)),
            ..FilterPatch::default()
        });
    };

    let active_filters_count = Signal::derive(move || state.get().filter.active_count());

    let filter_tags = move || {
        let s = state.get();
        let mut tags: Vec<(String, FilterPatch)> = Vec::new();
        for category in &s.filter.categories {
            let rest: Vec<CategoryId> = s
                .filter
                .categories
                .iter()
                .filter(|c| *c != category)
                .cloned()
                .collect();
            let name = s
                .categories
                .iter()
                .find(|c| &c.id == category)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| category.to_string());
            tags.push((
                name,
                FilterPatch {
                    categories: Some(rest),
                    ..FilterPatch::default()
                },
            ));
        }
        if let Some(code) = s.filter.city_code {
            let name = s.city_name(code).unwrap_or_else(|| format!("City {}", code));
            tags.push((
                name,
                FilterPatch {
                    city_code: Some(None),
                    ..FilterPatch::default()
                },
            ));
        }
        if s.filter.min_price != DEFAULT_MIN_PRICE || s.filter.max_price != DEFAULT_MAX_PRICE {
            tags.push((
                format!(
                    "{} – {}",
                    format_vnd(s.filter.min_price),
                    format_vnd(s.filter.max_price)
                ),
                FilterPatch {
                    price_range: Some((DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)),
                    ..FilterPatch::default()
                },
            ));
        }
        if s.filter.date_from.is_some() || s.filter.date_to.is_some() {
            tags.push((
                "Date range".to_string(),
                FilterPatch {
                    date_range: Some((None, None)),
                    ..FilterPatch::default()
                },
            ));
        }
        tags
    };

    view! {
        <div class="page page--events">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Discover events"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().total_count.to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Label>"Sort:"</Label>
                        <select
                            class="sort-select"
                            on:change=move |ev| {
                                let sort = EventSortBy::from_str(&event_target_value(&ev))
                                    .unwrap_or_default();
                                apply_patch(FilterPatch {
                                    sort_by: Some(sort),
                                    ..FilterPatch::default()
                                });
                            }
                            prop:value=move || state.get().filter.sort_by.as_str().to_string()
                        >
                            {EventSortBy::all().iter().map(|&sort| {
                                view! {
                                    <option
                                        value={sort.as_str()}
                                        selected=move || state.get().filter.sort_by == sort
                                    >
                                        {sort.label()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                <div class="search-bar">
                    {icon("search")}
                    <Input
                        value=search_input
                        placeholder="Search events, artists, venues..."
                    />
                </div>

                <FilterPanel
                    is_expanded=filter_expanded
                    active_filters_count=active_filters_count
                    on_clear=Callback::new(move |_| clear_filters())
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().filter.page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(move |page| {
                                apply_patch(FilterPatch::page(page));
                            })
                            on_page_size_change=Callback::new(move |size| {
                                state.update(|s| s.page_size = size);
                                apply_patch(FilterPatch::default());
                            })
                        />
                    }.into_any()
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Medium align=FlexAlign::End>
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"City:"</Label>
                                <select
                                    class="city-select"
                                    on:change=move |ev| {
                                        let code = event_target_value(&ev).parse::<u32>().ok();
                                        apply_patch(FilterPatch {
                                            city_code: Some(code),
                                            ..FilterPatch::default()
                                        });
                                    }
                                    prop:value=move || {
                                        state.get().filter.city_code
                                            .map(|c| c.to_string())
                                            .unwrap_or_default()
                                    }
                                >
                                    <option value="">"All cities"</option>
                                    {move || state.get().cities.iter().map(|city| {
                                        let code = city.code;
                                        view! {
                                            <option
                                                value={code.to_string()}
                                                selected=move || state.get().filter.city_code == Some(code)
                                            >
                                                {city.name.clone()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </Flex>

                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Price (VND):"</Label>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <input
                                        type="number"
                                        class="price-input"
                                        placeholder="Min"
                                        prop:value=move || min_price_input.get()
                                        on:input=move |ev| min_price_input.set(event_target_value(&ev))
                                        on:change=move |_| apply_price()
                                    />
                                    <span>"–"</span>
                                    <input
                                        type="number"
                                        class="price-input"
                                        placeholder="Max"
                                        prop:value=move || max_price_input.get()
                                        on:input=move |ev| max_price_input.set(event_target_value(&ev))
                                        on:change=move |_| apply_price()
                                    />
                                </Flex>
                            </Flex>

                            <DateRangePicker
                                date_from=Signal::derive(move || {
                                    state.get().filter.date_from
                                        .map(|d| d.format("%Y-%m-%d").to_string())
                                        .unwrap_or_default()
                                })
                                date_to=Signal::derive(move || {
                                    state.get().filter.date_to
                                        .map(|d| d.format("%Y-%m-%d").to_string())
                                        .unwrap_or_default()
                                })
                                on_change=Callback::new(move |(from, to): (String, String)| {
                                    let parse = |v: &str| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok();
                                    apply_patch(FilterPatch {
                                        date_range: Some((parse(&from), parse(&to))),
                                        ..FilterPatch::default()
                                    });
                                })
                                label="When:".to_string()
                            />
                        </Flex>

                        <div class="category-filter">
                            {move || state.get().categories.iter().map(|category| {
                                let id = category.id.clone();
                                let id_for_toggle = id.clone();
                                let checked = Signal::derive({
                                    let id = id.clone();
                                    move || state.get().filter.categories.contains(&id)
                                });
                                view! {
                                    <label class="category-filter__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || checked.get()
                                            on:change=move |ev| {
                                                toggle_category(
                                                    id_for_toggle.clone(),
                                                    event_target_checked(&ev),
                                                );
                                            }
                                        />
                                        {category.name.clone()}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                    filter_tags=move || view! {
                        {move || filter_tags().into_iter().map(|(label, patch)| {
                            view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| apply_patch(patch.clone()))
                                />
                            }
                        }).collect_view()}
                    }.into_any()
                />

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">
                            {err}
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load_items()
                            >
                                "Retry"
                            </Button>
                        </div>
                    })
                }}

                <Show when=move || loading.get()>
                    <div class="page__loading">"Loading events..."</div>
                </Show>

                <div class="event-grid">
                    <For
                        each=move || state.get().items
                        key=|event| event.id
                        children=move |event| {
                            let href = format!("/events/{}", event.id);
                            let city = Signal::derive({
                                let code = event.city_code;
                                move || {
                                    state.with(|s| s.city_name(code))
                                        .unwrap_or_else(|| "".to_string())
                                }
                            });
                            let when = crate::shared::date_utils::format_datetime(
                                &event.start_time.to_rfc3339(),
                            );
                            view! {
                                <A href=href attr:class="event-card">
                                    <div class="event-card__cover">
                                        {event.cover_image_url.clone().map(|url| view! {
                                            <img src=url alt="" loading="lazy"/>
                                        })}
                                    </div>
                                    <div class="event-card__body">
                                        <span class="badge">{event.category.to_string()}</span>
                                        <h3 class="event-card__title">{event.title.clone()}</h3>
                                        <div class="event-card__meta">
                                            {icon("calendar")}
                                            <span>{when}</span>
                                        </div>
                                        <div class="event-card__meta">
                                            {icon("map-pin")}
                                            <span>{event.venue_name.clone()}</span>
                                            <span class="event-card__city">{city}</span>
                                        </div>
                                        <div class="event-card__price">
                                            "From " {format_vnd(event.min_ticket_price)}
                                        </div>
                                    </div>
                                </A>
                            }
                        }
                    />
                </div>

                <Show when=move || {
                    !loading.get() && state.with(|s| s.is_loaded && s.items.is_empty())
                }>
                    <div class="empty-state">
                        <p>"No events match these filters."</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
