use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sale transaction as returned by the data source.
///
/// Immutable once received; `id` is the identity key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sold: bool,
    pub image_url: String,
    /// Drives the month filter inside the data source; not a table column.
    pub date_of_sale: NaiveDate,
}

/// Summary statistics over the filtered transaction set.
///
/// `total_sales` sums the prices of sold transactions only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_sales: f64,
    pub sold_items: usize,
    pub not_sold_items: usize,
}

/// Price-bucket counts for the bar chart.
///
/// `labels` and `data` are aligned by index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<usize>,
}

/// Full result bundle for one (month, search) filter.
///
/// Replaced wholesale on every successful fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportResponse {
    pub transactions: Vec<Transaction>,
    pub statistics: Statistics,
    pub chart_data: ChartData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uses_camel_case_wire_names() {
        let raw = r#"{
            "id": 7,
            "title": "Mechanical Keyboard",
            "description": "Hot-swappable tenkeyless keyboard",
            "price": 145.0,
            "category": "electronics",
            "sold": true,
            "imageUrl": "https://img.dashboard.example/products/7.jpg",
            "dateOfSale": "2024-09-02"
        }"#;

        let tx: Transaction = serde_json::from_str(raw).expect("valid transaction JSON");
        assert_eq!(tx.id, 7);
        assert!(tx.sold);
        assert_eq!(tx.image_url, "https://img.dashboard.example/products/7.jpg");
        assert_eq!(
            tx.date_of_sale,
            NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date")
        );
    }

    #[test]
    fn statistics_use_camel_case_wire_names() {
        let raw = r#"{"totalSales": 1278.98, "soldItems": 3, "notSoldItems": 2}"#;
        let stats: Statistics = serde_json::from_str(raw).expect("valid statistics JSON");
        assert_eq!(stats.sold_items, 3);
        assert_eq!(stats.not_sold_items, 2);
    }
}
