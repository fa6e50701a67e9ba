use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use leptos::prelude::*;
use thaw::*;

/// From/to date inputs with quick ranges an event-goer actually uses.
///
/// Values travel as "yyyy-mm-dd" strings (empty = unset), matching both the
/// native date input and the URL parameter format.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    /// Called with (from, to) on every change.
    on_change: Callback<(String, String)>,
    #[prop(optional)] label: Option<String>,
) -> impl IntoView {
    let on_from_input = move |ev| {
        let new_from = event_target_value(&ev);
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_input = move |ev| {
        let new_to = event_target_value(&ev);
        on_change.run((date_from.get_untracked(), new_to));
    };

    let set_range = move |from: NaiveDate, to: NaiveDate| {
        on_change.run((
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ));
    };

    let on_today = move |_| {
        let today = Utc::now().date_naive();
        set_range(today, today);
    };

    let on_weekend = move |_| {
        let today = Utc::now().date_naive();
        let days_to_saturday = (Weekday::Sat.num_days_from_monday() + 7
            - today.weekday().num_days_from_monday())
            % 7;
        let saturday = today + Days::new(days_to_saturday as u64);
        let sunday = saturday + Days::new(1);
        set_range(saturday, sunday);
    };

    let on_this_month = move |_| {
        let today = Utc::now().date_naive();
        let first = today.with_day(1).unwrap_or(today);
        let last = if today.month() == 12 {
            NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
        }
        .map(|d| d - Days::new(1))
        .unwrap_or(today);
        set_range(first, last);
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|text| view! { <Label>{text}</Label> })}
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_from.get()
                    on:change=on_from_input
                />
                <span class="date-range__separator">"–"</span>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_to.get()
                    on:change=on_to_input
                />
                <Button appearance=ButtonAppearance::Subtle on_click=on_today>
                    "Today"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_weekend>
                    "This weekend"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=on_this_month>
                    "This month"
                </Button>
            </Flex>
        </Flex>
    }
}
