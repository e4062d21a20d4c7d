//! Sales dashboard page: filter controls, paginated table, statistics and
//! price-bucket chart, all derived from one fetched report.

pub mod api;
pub mod data_source;
pub mod state;

use contracts::shared::Month;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::bar_chart::SalesBarChart;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::transactions_table::TransactionsTable;
use crate::shared::number_format::{format_money, format_number_int};
use self::state::{create_filter, create_state};

#[component]
pub fn SalesDashboard() -> impl IntoView {
    let filter = create_filter();
    let state = create_state();
    let (loading, set_loading) = signal(false);

    // One fetch cycle per filter mutation, the initial load included. The
    // effect tracks the filter signal only; settles write into `state`,
    // which the effect never reads. The token issued here makes stale
    // settles no-ops, so the last filter change always wins.
    Effect::new(move |_| {
        let current = filter.get();
        let Some(token) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_sales(current.month, &current.search_text).await {
                Ok(report) => {
                    if state.try_update(|s| s.apply_success(token, report)) == Some(true) {
                        set_loading.set(false);
                    }
                }
                Err(err) => {
                    log::error!("failed to load sales report: {err}");
                    if state.try_update(|s| s.apply_failure(token)) == Some(true) {
                        set_loading.set(false);
                    }
                }
            }
        });
    });

    let month = Signal::derive(move || filter.with(|f| f.month));
    let search_text = Signal::derive(move || filter.with(|f| f.search_text.clone()));
    let visible = Signal::derive(move || state.with(|s| s.visible_page().to_vec()));
    let statistics = Signal::derive(move || state.with(|s| s.statistics.clone()));
    let chart_data = Signal::derive(move || state.with(|s| s.chart_data.clone()));
    let current_page = Signal::derive(move || state.with(|s| s.current_page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages));
    let error = Signal::derive(move || state.with(|s| s.error.clone()));
    let month_name = move || month.get().name();

    view! {
        <div class="container">
            <header class="header">
                <div class="header__circle">"Transaction Dashboard"</div>
            </header>

            <div class="controls">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search transactions..."
                    aria-label="Search transactions"
                    prop:value=search_text
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search_text = value);
                    }
                />
                <select
                    class="month-dropdown"
                    aria-label="Select month"
                    prop:value=move || month.get().code().to_string()
                    on:change=move |ev| {
                        if let Some(selected) = Month::from_code(&event_target_value(&ev)) {
                            filter.update(|f| f.month = selected);
                        }
                    }
                >
                    {Month::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.code()>{m.name()}</option> })
                        .collect_view()}
                </select>
                {move || {
                    loading
                        .get()
                        .then(|| view! { <span class="loading-note">"Loading..."</span> })
                }}
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-message">{message}</div> })
            }}

            <TransactionsTable transactions=visible />

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                on_prev=Callback::new(move |_| state.update(|s| s.prev_page()))
                on_next=Callback::new(move |_| state.update(|s| s.next_page()))
            />

            <div class="statistics-card">
                <h3>{move || format!("Transactions Statistics - {}", month_name())}</h3>
                <div class="statistics-card__grid">
                    <StatCard
                        label="Total Amount of Sales"
                        value=Signal::derive(move || format_money(statistics.get().total_sales))
                    />
                    <StatCard
                        label="Total Sold Items"
                        value=Signal::derive(move || {
                            format_number_int(statistics.get().sold_items as f64)
                        })
                    />
                    <StatCard
                        label="Total Not Sold Items"
                        value=Signal::derive(move || {
                            format_number_int(statistics.get().not_sold_items as f64)
                        })
                    />
                </div>
            </div>

            <div class="chart-card">
                <SalesBarChart
                    chart_data=chart_data
                    title=Signal::derive(move || format!("Bar Chart Stats - {}", month_name()))
                />
            </div>
        </div>
    }
}
