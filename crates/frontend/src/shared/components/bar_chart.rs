use contracts::dashboards::sales_overview::ChartData;
use leptos::prelude::*;

const CHART_WIDTH: f64 = 560.0;
const CHART_HEIGHT: f64 = 260.0;
const BASELINE: f64 = 220.0;
const TOP_MARGIN: f64 = 24.0;

/// Inline-SVG bar chart over the price buckets of the current report.
///
/// Redraws reactively from the same report replacement that drives the
/// table and statistics.
#[component]
pub fn SalesBarChart(
    #[prop(into)] chart_data: Signal<ChartData>,
    #[prop(into)] title: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bar-chart">
            <h3>{move || title.get()}</h3>
            {move || {
                let data = chart_data.get();
                if data.labels.is_empty() {
                    return view! { <p class="bar-chart__placeholder">"Loading chart..."</p> }
                        .into_any();
                }

                let max_count = data.data.iter().copied().max().unwrap_or(0).max(1) as f64;
                let slot = CHART_WIDTH / data.labels.len() as f64;
                let bar_width = slot * 0.6;
                let bars = data
                    .labels
                    .iter()
                    .zip(&data.data)
                    .enumerate()
                    .map(|(i, (label, &count))| {
                        let height = (count as f64 / max_count) * (BASELINE - TOP_MARGIN);
                        let x = i as f64 * slot + (slot - bar_width) / 2.0;
                        let y = BASELINE - height;
                        view! {
                            <g>
                                <rect
                                    x=format!("{x}")
                                    y=format!("{y}")
                                    width=format!("{bar_width}")
                                    height=format!("{height}")
                                    class="bar-chart__bar"
                                />
                                <text
                                    x=format!("{}", x + bar_width / 2.0)
                                    y=format!("{}", y - 6.0)
                                    text-anchor="middle"
                                    class="bar-chart__count"
                                >
                                    {count}
                                </text>
                                <text
                                    x=format!("{}", x + bar_width / 2.0)
                                    y=format!("{}", BASELINE + 18.0)
                                    text-anchor="middle"
                                    class="bar-chart__label"
                                >
                                    {label.clone()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view();

                view! {
                    <svg
                        viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                        class="bar-chart__svg"
                        role="img"
                    >
                        <line
                            x1="0"
                            y1=format!("{BASELINE}")
                            x2=format!("{CHART_WIDTH}")
                            y2=format!("{BASELINE}")
                            class="bar-chart__axis"
                        />
                        {bars}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}
