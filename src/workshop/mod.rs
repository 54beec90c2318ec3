// Workshop module - the exercise registry
// Maps a stable exercise id to its title, description and query, and runs
// exercises against a loaded dataset.

pub mod render;

use crate::data::DataSource;
use crate::error::{Result, WorkshopError};
use crate::query::{self, DEFAULT_THRESHOLD};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Knobs the exercises read at run time
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Amount exercises 1 and 3 compare order totals against
    pub threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A query wrapped so every exercise has the same signature
/// The result is the query's records as a JSON array
pub type QueryFn = fn(&DataSource, &Settings) -> Result<Value>;

/// One registered exercise
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    run: QueryFn,
}

impl Exercise {
    /// Run this exercise's query
    pub fn run(&self, data: &DataSource, settings: &Settings) -> Result<ExerciseOutput> {
        info!(exercise = self.id, "Running exercise");
        let rows = (self.run)(data, settings)?;

        Ok(ExerciseOutput {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            rows,
        })
    }
}

/// The result of running an exercise, ready for printing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExerciseOutput {
    pub id: String,
    pub title: String,
    pub description: String,
    pub rows: Value,
}

impl ExerciseOutput {
    /// Heading plus the rows as a table or nested listing
    pub fn format(&self) -> String {
        format!(
            "[{}] {}\n{}\n\n{}",
            self.id,
            self.title,
            self.description,
            render::render_text(&self.rows)
        )
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(WorkshopError::Serialize)
    }
}

/// Convert a query's records into the JSON array the renderer consumes
fn rows<T: Serialize>(records: Vec<T>) -> Result<Value> {
    serde_json::to_value(records).map_err(WorkshopError::Serialize)
}

/// The registry of all exercises, in presentation order
pub struct Workshop {
    exercises: Vec<Exercise>,
}

impl Workshop {
    /// Build the registry with all ten exercises
    pub fn new() -> Self {
        let exercises = vec![
            Exercise {
                id: "linq1",
                title: "Task 1",
                description: "Customers whose orders add up to more than the threshold, smallest sum first",
                run: |data, settings| {
                    rows(query::customers_with_turnover_above(data, settings.threshold))
                },
            },
            Exercise {
                id: "linq2",
                title: "Task 2",
                description: "Suppliers located in the same country and city as each customer",
                run: |data, _| rows(query::customers_with_local_suppliers(data)),
            },
            Exercise {
                id: "linq3",
                title: "Task 3",
                description: "Customers with single orders above the threshold, smallest order first",
                run: |data, settings| rows(query::orders_above(data, settings.threshold)),
            },
            Exercise {
                id: "linq4",
                title: "Task 4",
                description: "Customers with the date they became customers (first order)",
                run: |data, _| rows(query::customer_since(data)),
            },
            Exercise {
                id: "linq5",
                title: "Task 5",
                description: "Customers with the date they became customers, sorted by year, month, turnover (max to min) and name",
                run: |data, _| rows(query::customer_since_by_turnover(data)),
            },
            Exercise {
                id: "linq6",
                title: "Task 6",
                description: "Customers with a non-digit postal code, no region, or a phone number without an operator code",
                run: |data, _| rows(query::customers_with_incomplete_contacts(data)),
            },
            Exercise {
                id: "linq7",
                title: "Task 7",
                description: "Products grouped by category, then by availability in stock, sorted by price",
                run: |data, _| rows(query::products_by_category_and_stock(data)),
            },
            Exercise {
                id: "linq8",
                title: "Task 8",
                description: "Products grouped into cheap, average and expensive",
                run: |data, _| rows(query::products_by_price_band(data)),
            },
            Exercise {
                id: "linq9",
                title: "Task 9",
                description: "Average profitability and average order intensity of each city",
                run: |data, _| rows(query::city_statistics(data)),
            },
            Exercise {
                id: "linq10",
                title: "Task 10",
                description: "Monthly, annual and year-month order statistics per customer",
                run: |data, _| rows(query::order_statistics(data)),
            },
        ];

        Self { exercises }
    }

    /// All exercises in registry order
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    /// Look up an exercise by id
    /// Ids are case-insensitive and the "linq" prefix is optional,
    /// so "linq5", "LINQ5" and "5" all find the same exercise.
    pub fn find(&self, id: &str) -> Result<&Exercise> {
        let wanted = id.trim().to_ascii_lowercase();
        let prefixed = format!("linq{}", wanted);

        self.exercises
            .iter()
            .find(|e| e.id == wanted || e.id == prefixed)
            .ok_or_else(|| WorkshopError::UnknownExercise(id.trim().to_string()))
    }

    /// Run a single exercise by id
    pub fn run(&self, id: &str, data: &DataSource, settings: &Settings) -> Result<ExerciseOutput> {
        self.find(id)?.run(data, settings)
    }

    /// Run every exercise in order
    pub fn run_all(&self, data: &DataSource, settings: &Settings) -> Result<Vec<ExerciseOutput>> {
        self.exercises
            .iter()
            .map(|e| e.run(data, settings))
            .collect()
    }

    /// One line per exercise: id, title and description
    pub fn format_list(&self) -> String {
        let width = self.exercises.iter().map(|e| e.id.len()).max().unwrap_or(0);

        self.exercises
            .iter()
            .map(|e| format!("  {:<width$}  {:<8} {}", e.id, e.title, e.description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new()
    }
}
