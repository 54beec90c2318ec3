// Dataset loader
// Reads the sample dataset from JSON and checks it against the data model
// rules before any query gets to see it.

use super::DataSource;
use crate::error::{Result, WorkshopError};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The dataset bundled with the binary
const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

/// Builds a validated DataSource from JSON
pub struct DataLoader;

impl DataLoader {
    /// Load the bundled sample dataset
    pub fn sample() -> Result<DataSource> {
        debug!("Loading embedded sample dataset");
        Self::from_json(SAMPLE_DATA)
    }

    /// Load a dataset from a JSON file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<DataSource> {
        let path = path.as_ref();
        debug!("Loading dataset from {}", path.display());

        let json = fs::read_to_string(path).map_err(|source| WorkshopError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json)
    }

    /// Parse and validate a dataset from a JSON string
    pub fn from_json(json: &str) -> Result<DataSource> {
        let data: DataSource = serde_json::from_str(json).map_err(WorkshopError::Parse)?;
        Self::validate(&data)?;

        info!(
            customers = data.customers.len(),
            orders = data.order_count(),
            suppliers = data.suppliers.len(),
            products = data.products.len(),
            "Dataset loaded"
        );

        Ok(data)
    }

    /// Check the rules serde can't express: identifiers present and
    /// amounts non-negative. Units in stock are unsigned already.
    fn validate(data: &DataSource) -> Result<()> {
        for customer in &data.customers {
            if customer.customer_id.trim().is_empty() {
                return Err(WorkshopError::InvalidData(format!(
                    "customer '{}' has an empty id",
                    customer.company_name
                )));
            }

            for order in &customer.orders {
                if order.total < 0.0 {
                    return Err(WorkshopError::InvalidData(format!(
                        "order {} of customer '{}' has a negative total: {}",
                        order.order_id, customer.customer_id, order.total
                    )));
                }
            }
        }

        for supplier in &data.suppliers {
            if supplier.supplier_name.trim().is_empty() {
                return Err(WorkshopError::InvalidData(
                    "supplier with an empty name".to_string(),
                ));
            }
        }

        for product in &data.products {
            if product.product_name.trim().is_empty() {
                return Err(WorkshopError::InvalidData(format!(
                    "product {} has an empty name",
                    product.product_id
                )));
            }
            if product.unit_price < 0.0 {
                return Err(WorkshopError::InvalidData(format!(
                    "product '{}' has a negative unit price: {}",
                    product.product_name, product.unit_price
                )));
            }
        }

        Ok(())
    }
}
