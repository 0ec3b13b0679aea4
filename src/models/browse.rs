use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters of the browse page load. All optional, empty string
/// when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    /// Free-text search term matched against item titles
    #[serde(default)]
    pub q: String,
    /// Exact category filter
    #[serde(default)]
    pub category: String,
    /// External store id for the single-item detail lookup
    #[serde(default)]
    pub item: String,
}

/// Ranking policy for the grouped item search.
///
/// Selected by the presence of a category filter: category browsing returns
/// a catalog page ordered by the cheapest per-unit price in each group,
/// pure text search returns a short best-seller list ordered by the lowest
/// sales rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRanking {
    /// Ascending MIN(sales_rank), most popular first
    BestSelling,
    /// Ascending MIN(price_per_unit), cheapest per unit first
    CheapestPerUnit,
}

impl SearchRanking {
    pub fn for_request(category: &str) -> Self {
        if category.is_empty() {
            Self::BestSelling
        } else {
            Self::CheapestPerUnit
        }
    }

    /// Row cap applied to the grouped search.
    pub fn result_limit(self) -> u64 {
        match self {
            Self::BestSelling => 20,
            Self::CheapestPerUnit => 1000,
        }
    }
}

/// One search result with its full price history.
///
/// Dates and prices are typed parallel arrays; availability, price-per-unit
/// and unit display stay comma-joined strings to match the page contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseItem {
    pub id: String,
    pub title: String,
    pub dates: Vec<DateTime<Utc>>,
    pub prices: Vec<f64>,
    pub image: Option<String>,
    pub availability: String,
    pub price_per_unit: String,
    pub category: Option<String>,
    pub unit_display: String,
}

/// Single-item detail record built from the most recent price observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    pub id: String,
    pub title: String,
    pub date: Option<i64>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub availability: Option<String>,
    pub price_per_unit: Option<f64>,
    pub category: Option<String>,
    pub unit_display: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub items: Vec<BrowseItem>,
    /// Up to 10 fuzzy-matched category suggestions, best first
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_val: Option<ItemDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
