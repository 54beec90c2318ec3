// Query result records
// One named type per output shape. They all derive Serialize so the
// workshop can hand them to the renderer as field-name/value mappings.

use chrono::NaiveDate;
use serde::Serialize;

/// Exercise 1: a customer and the sum of all their orders
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerTurnover {
    pub id: String,
    pub company_name: String,
    pub total_sum: f64,
}

/// Exercise 2: a customer and a supplier located in the same city
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerSupplier {
    pub customer: String,
    pub country: String,
    pub city: String,
    pub supplier: String,
    pub supplier_country: String,
    pub supplier_city: String,
}

/// Exercise 3: a single order above the threshold
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LargeOrder {
    pub customer: String,
    pub order_total: f64,
}

/// Exercise 4: when a customer placed their first order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerSince {
    pub customer: String,
    pub from: NaiveDate,
}

/// Exercise 5: first order date plus turnover
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerSinceTurnover {
    pub customer: String,
    pub from: NaiveDate,
    pub total: f64,
}

/// Exercise 6: a customer failing at least one contact check
/// The three flags say which checks failed; more than one can be set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactIssue {
    pub customer: String,
    pub postal_code: Option<String>,
    pub region: Option<String>,
    pub phone: String,
    pub invalid_postal_code: bool,
    pub missing_region: bool,
    pub missing_operator_code: bool,
}

/// Exercise 7: top level, one entry per category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub stock_groups: Vec<StockGroup>,
}

/// Exercise 7: products of one category that are (or aren't) in stock,
/// cheapest first
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockGroup {
    pub in_stock: bool,
    pub status: String,
    pub products: Vec<StockedProduct>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StockedProduct {
    pub product: String,
    pub count: u32,
    pub price: f64,
}

/// Exercise 8 price categories
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PriceBand {
    Cheap,
    Average,
    Expensive,
    /// Priced exactly at the expensive limit, which neither Average nor
    /// Expensive covers
    Unknown,
}

impl PriceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Cheap => "Cheap",
            PriceBand::Average => "Average",
            PriceBand::Expensive => "Expensive",
            PriceBand::Unknown => "Unknown",
        }
    }
}

/// Exercise 8: all products in one price band, in dataset order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceBandGroup {
    pub band: PriceBand,
    pub products: Vec<PricedProduct>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricedProduct {
    pub product: String,
    pub price: f64,
}

/// Exercise 9: per-city averages over the customers living there
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityStatistics {
    pub city: String,
    /// Mean of each customer's order total sum
    pub average_profit: f64,
    /// Mean of each customer's order count
    pub average_intensity: f64,
}

/// Exercise 10: a customer's orders counted by month, by year and by both
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CustomerOrderStatistics {
    pub customer: String,
    pub monthly: Vec<MonthCount>,
    pub annual: Vec<YearCount>,
    pub year_month: Vec<YearMonthCount>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthCount {
    pub month: u32,
    pub orders: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearCount {
    pub year: i32,
    pub orders: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearMonthCount {
    pub year: i32,
    pub month: u32,
    pub orders: usize,
}
