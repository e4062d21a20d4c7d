use leptos::prelude::*;

/// Single labelled value in the statistics block.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
