// Query module - the workshop queries and the shapes they return
pub mod exercises;
pub mod grouping;
pub mod results;

pub use exercises::{
    city_statistics, classify_price, customer_since, customer_since_by_turnover,
    customers_with_incomplete_contacts, customers_with_local_suppliers,
    customers_with_turnover_above, is_valid_postal_code, order_statistics, orders_above,
    products_by_category_and_stock, products_by_price_band, DEFAULT_THRESHOLD,
};
pub use results::PriceBand;
