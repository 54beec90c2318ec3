// Test fixtures - small hand-built datasets for edge cases the sample data
// doesn't cover

use super::{Customer, Order, Product, Supplier};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn order(order_id: u32, order_date: NaiveDate, total: f64) -> Order {
    Order {
        order_id,
        order_date,
        total,
    }
}

/// A customer with a valid postal code, a region and an operator code,
/// i.e. one that passes every contact check
pub fn customer(id: &str, name: &str, city: &str) -> Customer {
    Customer {
        customer_id: id.to_string(),
        company_name: name.to_string(),
        address: None,
        city: city.to_string(),
        region: Some("Region".to_string()),
        postal_code: Some("1234567890".to_string()),
        country: "Germany".to_string(),
        phone: "(030) 0074321".to_string(),
        orders: Vec::new(),
    }
}

pub fn supplier(name: &str, country: &str, city: &str) -> Supplier {
    Supplier {
        supplier_name: name.to_string(),
        address: None,
        city: city.to_string(),
        country: country.to_string(),
    }
}

pub fn product(id: u32, name: &str, category: &str, unit_price: f64, units_in_stock: u32) -> Product {
    Product {
        product_id: id,
        product_name: name.to_string(),
        category: category.to_string(),
        unit_price,
        units_in_stock,
    }
}

impl Customer {
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    pub fn in_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    pub fn with_region(mut self, region: Option<&str>) -> Self {
        self.region = region.map(str::to_string);
        self
    }

    pub fn with_postal_code(mut self, postal_code: Option<&str>) -> Self {
        self.postal_code = postal_code.map(str::to_string);
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }
}
