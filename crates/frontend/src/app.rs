use leptos::prelude::*;

use crate::dashboard::SalesDashboard;

/// Application root. The dashboard is the whole app.
#[component]
pub fn App() -> impl IntoView {
    view! { <SalesDashboard /> }
}
