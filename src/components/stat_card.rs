//! Dashboard metric tile.

use leptos::prelude::*;

/// One stat card: label, formatted value, optional delta line.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    /// Secondary line under the value, e.g. a period-over-period note.
    #[prop(into)]
    delta: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {delta.map(|delta| view! { <span class="stat-card__delta">{delta}</span> })}
        </div>
    }
}
