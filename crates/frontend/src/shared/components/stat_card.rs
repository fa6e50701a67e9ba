use crate::shared::icons::icon;
use crate::shared::money::{format_vnd_compact, group_thousands};
use leptos::prelude::*;

/// How a [`StatCard`] renders its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    /// Compact VND ("1,25B ₫").
    Money,
    /// Thousands-grouped integer.
    Count,
}

/// Dashboard headline figure with an optional change-vs-previous-period
/// arrow.
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    /// None renders a placeholder while loading or after an error.
    #[prop(into)]
    value: Signal<Option<i64>>,
    format: StatFormat,
    #[prop(into, optional)] change_percent: Signal<Option<f64>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => match format {
            StatFormat::Money => format_vnd_compact(v),
            StatFormat::Count => group_thousands(v),
        },
        None => "–".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
