// Data module - the sample data model
// Customers (each owning its orders), suppliers and products. Everything is
// built once by the loader and only read afterwards.

pub mod loader;

#[cfg(test)]
pub(crate) mod fixtures;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use loader::DataLoader;

/// A customer and the orders they placed
/// The orders keep the order they had in the source data; nothing sorts them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    /// Not every country uses regions, so this is often missing
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    pub phone: String,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Customer {
    /// Sum of all order totals (0 for a customer without orders)
    pub fn turnover(&self) -> f64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Date of the first order, or None if the customer never ordered
    pub fn first_order_date(&self) -> Option<NaiveDate> {
        self.orders.iter().map(|o| o.order_date).min()
    }

    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }
}

/// A single order. It belongs to exactly one customer: the one whose
/// `orders` list contains it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: u32,
    pub order_date: NaiveDate,
    pub total: f64,
}

/// A supplier. Suppliers aren't linked to customers; queries match them up
/// by country and city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub supplier_name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: u32,
    pub product_name: String,
    pub category: String,
    pub unit_price: f64,
    pub units_in_stock: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

/// The whole sample dataset
/// Queries take a shared reference to this and never modify it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl DataSource {
    /// Every order paired with the customer it belongs to,
    /// customers in dataset order and each customer's orders in their own order
    pub fn orders(&self) -> impl Iterator<Item = (&Customer, &Order)> + '_ {
        self.customers
            .iter()
            .flat_map(|c| c.orders.iter().map(move |o| (c, o)))
    }

    pub fn order_count(&self) -> usize {
        self.customers.iter().map(|c| c.orders.len()).sum()
    }
}
