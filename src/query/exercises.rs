// The ten workshop queries
// Each one is a pure function over a borrowed DataSource: it reads, derives
// and returns a fresh result. Nothing here prints or mutates.

use super::grouping::{count_by, group_by};
use super::results::*;
use crate::data::{Customer, DataSource, Product};
use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Default amount exercises 1 and 3 compare against
pub const DEFAULT_THRESHOLD: f64 = 1000.0;

/// Highest price still considered cheap (inclusive)
pub const CHEAP_LIMIT: f64 = 10.0;

/// Prices above this are expensive; prices exactly here are Unknown
pub const EXPENSIVE_LIMIT: f64 = 50.0;

/// A valid postal code is exactly ten ASCII digits
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("postal code pattern compiles"));

/// Exercise 1: customers whose orders add up to more than `threshold`,
/// smallest sum first
pub fn customers_with_turnover_above(data: &DataSource, threshold: f64) -> Vec<CustomerTurnover> {
    let mut rows: Vec<CustomerTurnover> = data
        .customers
        .iter()
        .map(|c| CustomerTurnover {
            id: c.customer_id.clone(),
            company_name: c.company_name.clone(),
            total_sum: c.turnover(),
        })
        .filter(|row| row.total_sum > threshold)
        .collect();

    rows.sort_by(|a, b| a.total_sum.total_cmp(&b.total_sum));

    debug!(threshold, rows = rows.len(), "customers_with_turnover_above");
    rows
}

/// Exercise 2: every customer/supplier pair sharing both country and city
pub fn customers_with_local_suppliers(data: &DataSource) -> Vec<CustomerSupplier> {
    let rows: Vec<CustomerSupplier> = data
        .customers
        .iter()
        .flat_map(|customer| {
            data.suppliers
                .iter()
                .filter(move |s| s.country == customer.country && s.city == customer.city)
                .map(move |supplier| CustomerSupplier {
                    customer: customer.company_name.clone(),
                    country: customer.country.clone(),
                    city: customer.city.clone(),
                    supplier: supplier.supplier_name.clone(),
                    supplier_country: supplier.country.clone(),
                    supplier_city: supplier.city.clone(),
                })
        })
        .collect();

    debug!(rows = rows.len(), "customers_with_local_suppliers");
    rows
}

/// Exercise 3: individual orders bigger than `threshold`, smallest first
pub fn orders_above(data: &DataSource, threshold: f64) -> Vec<LargeOrder> {
    let mut rows: Vec<LargeOrder> = data
        .orders()
        .filter(|(_, order)| order.total > threshold)
        .map(|(customer, order)| LargeOrder {
            customer: customer.company_name.clone(),
            order_total: order.total,
        })
        .collect();

    rows.sort_by(|a, b| a.order_total.total_cmp(&b.order_total));

    debug!(threshold, rows = rows.len(), "orders_above");
    rows
}

/// Exercise 4: the date each customer placed their first order
/// Customers who never ordered are left out.
pub fn customer_since(data: &DataSource) -> Vec<CustomerSince> {
    let rows: Vec<CustomerSince> = data
        .customers
        .iter()
        .filter_map(|c| {
            c.first_order_date().map(|from| CustomerSince {
                customer: c.company_name.clone(),
                from,
            })
        })
        .collect();

    debug!(rows = rows.len(), "customer_since");
    rows
}

/// Exercise 5: like exercise 4 with turnover, ordered by first order year,
/// then month, then turnover (largest first), then name
pub fn customer_since_by_turnover(data: &DataSource) -> Vec<CustomerSinceTurnover> {
    let mut rows: Vec<CustomerSinceTurnover> = data
        .customers
        .iter()
        .filter_map(|c| {
            c.first_order_date().map(|from| CustomerSinceTurnover {
                customer: c.company_name.clone(),
                from,
                total: c.turnover(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        a.from
            .year()
            .cmp(&b.from.year())
            .then(a.from.month().cmp(&b.from.month()))
            .then(b.total.total_cmp(&a.total))
            .then_with(|| a.customer.cmp(&b.customer))
    });

    debug!(rows = rows.len(), "customer_since_by_turnover");
    rows
}

/// True when the postal code is present and made of exactly ten digits
pub fn is_valid_postal_code(postal_code: Option<&str>) -> bool {
    match postal_code {
        Some(code) => POSTAL_CODE.is_match(code),
        None => false,
    }
}

/// Exercise 6: customers with an invalid postal code, no region, or a
/// phone number without an operator code in parentheses
pub fn customers_with_incomplete_contacts(data: &DataSource) -> Vec<ContactIssue> {
    let rows: Vec<ContactIssue> = data
        .customers
        .iter()
        .map(check_contacts)
        .filter(|issue| {
            issue.invalid_postal_code || issue.missing_region || issue.missing_operator_code
        })
        .collect();

    debug!(rows = rows.len(), "customers_with_incomplete_contacts");
    rows
}

fn check_contacts(customer: &Customer) -> ContactIssue {
    ContactIssue {
        customer: customer.company_name.clone(),
        postal_code: customer.postal_code.clone(),
        region: customer.region.clone(),
        phone: customer.phone.clone(),
        invalid_postal_code: !is_valid_postal_code(customer.postal_code.as_deref()),
        missing_region: customer.region.is_none(),
        missing_operator_code: !customer.phone.starts_with('('),
    }
}

/// Exercise 7: products grouped by category, then by whether they're in
/// stock, each stock group sorted by price
pub fn products_by_category_and_stock(data: &DataSource) -> Vec<CategoryGroup> {
    let groups: Vec<CategoryGroup> = group_by(&data.products, |p| p.category.clone())
        .into_iter()
        .map(|(category, products)| CategoryGroup {
            category,
            stock_groups: group_by(products, |p| p.in_stock())
                .into_iter()
                .map(|(in_stock, products)| stock_group(in_stock, products))
                .collect(),
        })
        .collect();

    debug!(categories = groups.len(), "products_by_category_and_stock");
    groups
}

fn stock_group(in_stock: bool, mut products: Vec<&Product>) -> StockGroup {
    products.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));

    StockGroup {
        in_stock,
        status: if in_stock { "Available" } else { "Not available" }.to_string(),
        products: products
            .into_iter()
            .map(|p| StockedProduct {
                product: p.product_name.clone(),
                count: p.units_in_stock,
                price: p.unit_price,
            })
            .collect(),
    }
}

/// Which price band a unit price falls into
pub fn classify_price(price: f64) -> PriceBand {
    if price <= CHEAP_LIMIT {
        PriceBand::Cheap
    } else if price < EXPENSIVE_LIMIT {
        PriceBand::Average
    } else if price > EXPENSIVE_LIMIT {
        PriceBand::Expensive
    } else {
        PriceBand::Unknown
    }
}

/// Exercise 8: products grouped into price bands, bands sorted by name
pub fn products_by_price_band(data: &DataSource) -> Vec<PriceBandGroup> {
    let mut groups: Vec<PriceBandGroup> = group_by(&data.products, |p| classify_price(p.unit_price))
        .into_iter()
        .map(|(band, products)| PriceBandGroup {
            band,
            products: products
                .into_iter()
                .map(|p| PricedProduct {
                    product: p.product_name.clone(),
                    price: p.unit_price,
                })
                .collect(),
        })
        .collect();

    groups.sort_by_key(|g| g.band.as_str());

    debug!(bands = groups.len(), "products_by_price_band");
    groups
}

/// Exercise 9: per city, the average customer turnover and the average
/// number of orders per customer
///
/// A customer without orders still counts: it adds 0 to both sums and one
/// to the number of customers.
pub fn city_statistics(data: &DataSource) -> Vec<CityStatistics> {
    let rows: Vec<CityStatistics> = group_by(&data.customers, |c| c.city.clone())
        .into_iter()
        .map(|(city, customers)| {
            let n = customers.len() as f64;
            let profit: f64 = customers.iter().map(|c| c.turnover()).sum();
            let intensity: usize = customers.iter().map(|c| c.orders.len()).sum();

            CityStatistics {
                city,
                average_profit: profit / n,
                average_intensity: intensity as f64 / n,
            }
        })
        .collect();

    debug!(rows = rows.len(), "city_statistics");
    rows
}

/// Exercise 10: for every customer, order counts per month (any year), per
/// year, and per year-month pair
pub fn order_statistics(data: &DataSource) -> Vec<CustomerOrderStatistics> {
    let rows: Vec<CustomerOrderStatistics> = data
        .customers
        .iter()
        .map(|c| CustomerOrderStatistics {
            customer: c.company_name.clone(),
            monthly: count_by(&c.orders, |o| o.order_date.month())
                .into_iter()
                .map(|(month, orders)| MonthCount { month, orders })
                .collect(),
            annual: count_by(&c.orders, |o| o.order_date.year())
                .into_iter()
                .map(|(year, orders)| YearCount { year, orders })
                .collect(),
            year_month: count_by(&c.orders, |o| (o.order_date.year(), o.order_date.month()))
                .into_iter()
                .map(|((year, month), orders)| YearMonthCount {
                    year,
                    month,
                    orders,
                })
                .collect(),
        })
        .collect();

    debug!(rows = rows.len(), "order_statistics");
    rows
}
