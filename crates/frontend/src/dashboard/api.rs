//! Async boundary to the data source.

use contracts::dashboards::sales_overview::SalesReportResponse;
use contracts::shared::Month;
use gloo_timers::future::TimeoutFuture;

use super::data_source;

/// Simulated round-trip latency, milliseconds.
const LATENCY_MS: u32 = 150;

/// Fetch the full filtered report for one (month, search) pair.
///
/// No pagination parameters cross this boundary: the whole matching set
/// comes back at once and is sliced client-side.
pub async fn fetch_sales(month: Month, search_text: &str) -> Result<SalesReportResponse, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(data_source::query(month, search_text))
}
