//! In-process stand-in for the transactions backend.
//!
//! Filtering and aggregation live here, behind the same contract a remote
//! service would have: the dashboard only ever receives the full filtered
//! set plus precomputed statistics and chart buckets, and paginates
//! client-side.

use chrono::{Datelike, NaiveDate};
use contracts::dashboards::sales_overview::{
    ChartData, SalesReportResponse, Statistics, Transaction,
};
use contracts::shared::Month;
use once_cell::sync::Lazy;

/// Price buckets for the bar chart; the last bucket is open-ended.
const PRICE_BUCKETS: [(&str, f64, f64); 5] = [
    ("0-100", 0.0, 100.0),
    ("100-200", 100.0, 200.0),
    ("200-300", 200.0, 300.0),
    ("300-400", 300.0, 400.0),
    ("400+", 400.0, f64::INFINITY),
];

static CATALOG: Lazy<Vec<Transaction>> = Lazy::new(seed_catalog);

/// Full matching set, statistics and chart buckets for one filter.
pub fn query(month: Month, search_text: &str) -> SalesReportResponse {
    let needle = search_text.trim().to_lowercase();
    let transactions: Vec<Transaction> = CATALOG
        .iter()
        .filter(|tx| tx.date_of_sale.month() == month.number())
        .filter(|tx| matches_search(tx, &needle))
        .cloned()
        .collect();

    let statistics = compute_statistics(&transactions);
    let chart_data = compute_chart_data(&transactions);

    SalesReportResponse {
        transactions,
        statistics,
        chart_data,
    }
}

/// Free-text match over title, description and the price rendered as text.
fn matches_search(tx: &Transaction, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    tx.title.to_lowercase().contains(needle)
        || tx.description.to_lowercase().contains(needle)
        || tx.price.to_string().contains(needle)
}

fn compute_statistics(transactions: &[Transaction]) -> Statistics {
    let sold_items = transactions.iter().filter(|tx| tx.sold).count();
    Statistics {
        total_sales: transactions
            .iter()
            .filter(|tx| tx.sold)
            .map(|tx| tx.price)
            .sum(),
        sold_items,
        not_sold_items: transactions.len() - sold_items,
    }
}

fn compute_chart_data(transactions: &[Transaction]) -> ChartData {
    let mut data = vec![0usize; PRICE_BUCKETS.len()];
    for tx in transactions {
        for (slot, (_, lo, hi)) in data.iter_mut().zip(PRICE_BUCKETS) {
            if tx.price >= lo && tx.price < hi {
                *slot += 1;
                break;
            }
        }
    }
    ChartData {
        labels: PRICE_BUCKETS
            .iter()
            .map(|(label, _, _)| label.to_string())
            .collect(),
        data,
    }
}

fn tx(
    id: u32,
    title: &str,
    description: &str,
    price: f64,
    category: &str,
    sold: bool,
    month: u32,
    day: u32,
) -> Transaction {
    Transaction {
        id,
        title: title.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        sold,
        image_url: format!("https://img.dashboard.example/products/{id}.jpg"),
        date_of_sale: NaiveDate::from_ymd_opt(2024, month, day)
            .expect("seed catalog dates are static and valid"),
    }
}

/// Sixty transactions, five per calendar month of 2024, with prices
/// spanning every chart bucket and a mix of sold flags.
fn seed_catalog() -> Vec<Transaction> {
    vec![
        tx(1, "Wool Scarf", "Hand-knitted merino scarf", 45.0, "clothing", true, 1, 4),
        tx(2, "Smart Speaker", "Voice-controlled speaker with mesh finish", 129.99, "electronics", false, 1, 9),
        tx(3, "Cast Iron Skillet", "Pre-seasoned twelve-inch skillet", 39.5, "home", true, 1, 14),
        tx(4, "Trail Running Shoes", "Waterproof shoes with deep lugs", 149.95, "sports", true, 1, 19),
        tx(5, "Graphic Novel Box Set", "Collected edition, volumes one to five", 89.0, "books", false, 1, 25),
        tx(6, "Noise Cancelling Headphones", "Over-ear, thirty-hour battery", 279.99, "electronics", true, 2, 2),
        tx(7, "Ceramic Vase", "Hand-thrown stoneware vase", 54.0, "home", false, 2, 8),
        tx(8, "Denim Jacket", "Stonewashed jacket with brass buttons", 98.5, "clothing", true, 2, 13),
        tx(9, "Chess Set", "Weighted pieces on a walnut board", 119.0, "toys", false, 2, 17),
        tx(10, "Electric Kettle", "Gooseneck kettle with temperature hold", 64.99, "home", true, 2, 24),
        tx(11, "Gaming Laptop", "Fifteen-inch laptop with dedicated graphics", 899.99, "electronics", true, 3, 3),
        tx(12, "Wireless Mouse", "Ergonomic wireless mouse with silent clicks", 49.99, "electronics", true, 3, 7),
        tx(13, "Cotton T-Shirt", "Organic cotton crew neck tee", 24.5, "clothing", false, 3, 12),
        tx(14, "Espresso Machine", "Semi-automatic machine with steam wand", 329.0, "home", true, 3, 18),
        tx(15, "Yoga Mat", "Non-slip mat, six millimetres thick", 75.25, "sports", false, 3, 23),
        tx(16, "Road Bike Helmet", "Ventilated helmet with magnetic buckle", 139.99, "sports", true, 4, 5),
        tx(17, "Linen Curtains", "Two floor-length linen panels", 85.0, "home", false, 4, 10),
        tx(18, "Mystery Paperback", "Small-town detective mystery", 14.99, "books", true, 4, 15),
        tx(19, "Bluetooth Turntable", "Belt-drive turntable with built-in preamp", 249.0, "electronics", false, 4, 20),
        tx(20, "Rain Jacket", "Packable shell with taped seams", 110.75, "clothing", true, 4, 27),
        tx(21, "Air Fryer", "Five-litre basket, dishwasher safe", 159.99, "home", true, 5, 2),
        tx(22, "Building Blocks Set", "Five hundred interlocking bricks", 59.95, "toys", true, 5, 9),
        tx(23, "Leather Belt", "Full-grain belt with steel buckle", 35.0, "clothing", false, 5, 14),
        tx(24, "Cookbook", "Weeknight recipes in thirty minutes", 28.5, "books", true, 5, 19),
        tx(25, "Fitness Tracker", "Heart-rate and sleep tracking band", 199.99, "electronics", false, 5, 26),
        tx(26, "Camping Tent", "Three-person dome tent", 289.0, "sports", true, 6, 4),
        tx(27, "Scented Candle Trio", "Cedar, fig and sea-salt candles", 42.25, "home", true, 6, 8),
        tx(28, "Summer Dress", "Sleeveless midi dress in printed viscose", 68.0, "clothing", false, 6, 13),
        tx(29, "Portable Projector", "Short-throw projector with built-in speaker", 459.99, "electronics", false, 6, 18),
        tx(30, "Science Fiction Anthology", "Twenty short stories from new authors", 22.0, "books", true, 6, 24),
        tx(31, "Paddle Board", "Inflatable board with pump and leash", 549.0, "sports", false, 7, 3),
        tx(32, "Sunglasses", "Polarised lenses in acetate frames", 89.99, "clothing", true, 7, 9),
        tx(33, "Ice Cream Maker", "Compressor machine, no pre-freezing", 129.5, "home", true, 7, 14),
        tx(34, "Drone With Camera", "Foldable drone with stabilised camera", 799.0, "electronics", false, 7, 20),
        tx(35, "Thousand Piece Puzzle", "Panoramic mountain landscape", 19.95, "toys", true, 7, 27),
        tx(36, "Standing Desk", "Dual-motor sit-stand desk", 479.5, "home", true, 8, 5),
        tx(37, "Running Shorts", "Lightweight shorts with zip pocket", 32.0, "clothing", true, 8, 11),
        tx(38, "E-Reader", "Six-inch glare-free touchscreen", 139.99, "electronics", false, 8, 16),
        tx(39, "Travel Guide", "City walks and day trips", 18.75, "books", true, 8, 21),
        tx(40, "Badminton Set", "Four racquets, net and shuttles", 46.5, "sports", false, 8, 26),
        tx(41, "Mechanical Keyboard", "Hot-swappable tenkeyless keyboard", 145.0, "electronics", true, 9, 2),
        tx(42, "Wool Blanket", "Lambswool throw in herringbone weave", 95.5, "home", false, 9, 8),
        tx(43, "Hiking Backpack", "Forty-litre pack with rain cover", 169.99, "sports", true, 9, 13),
        tx(44, "Poetry Collection", "Selected poems, annotated edition", 16.0, "books", false, 9, 19),
        tx(45, "Model Train Starter Set", "Oval track with two locomotives", 229.0, "toys", true, 9, 25),
        tx(46, "Smart Thermostat", "Learning thermostat with remote sensor", 189.99, "electronics", true, 10, 3),
        tx(47, "Halloween Costume", "Pirate costume with hat and cutlass", 49.5, "toys", true, 10, 10),
        tx(48, "Flannel Shirt", "Brushed cotton shirt in buffalo check", 58.0, "clothing", false, 10, 15),
        tx(49, "Dutch Oven", "Enamelled five-litre dutch oven", 215.0, "home", true, 10, 21),
        tx(50, "History Biography", "Life of a nineteenth-century engineer", 34.25, "books", false, 10, 28),
        tx(51, "Gaming Console", "Next-generation console, one-terabyte", 499.99, "electronics", true, 11, 4),
        tx(52, "Winter Coat", "Down parka rated to minus twenty", 320.0, "clothing", true, 11, 9),
        tx(53, "Knife Sharpener", "Two-stage ceramic sharpener", 27.5, "home", false, 11, 14),
        tx(54, "Board Game Night Bundle", "Three party games for large groups", 84.0, "toys", true, 11, 19),
        tx(55, "Resistance Bands", "Five bands with door anchor", 23.99, "sports", false, 11, 24),
        tx(56, "Smartwatch", "Always-on display, five-day battery", 349.99, "electronics", false, 12, 2),
        tx(57, "Holiday Lights", "Two hundred warm-white LEDs", 39.95, "home", true, 12, 8),
        tx(58, "Cashmere Sweater", "Two-ply cashmere crew neck", 189.5, "clothing", true, 12, 13),
        tx(59, "Picture Book", "Bedtime story about a lighthouse keeper", 12.99, "books", true, 12, 18),
        tx(60, "Table Tennis Paddle Set", "Two paddles and six balls", 55.0, "sports", false, 12, 23),
    ]
}
