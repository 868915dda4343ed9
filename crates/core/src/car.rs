//! Car catalog record type

use serde::{Deserialize, Serialize};

/// A single car in the static catalog.
///
/// Loaded verbatim from the catalog JSON file. Every field carries a serde
/// default so partial or hand-edited records still load; a malformed entry
/// must not take the whole catalog down with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarRecord {
    /// Display name, e.g. "Maruti Alto"
    #[serde(default)]
    pub name: String,
    /// On-road price in rupees
    #[serde(default)]
    pub price: f64,
    /// Fuel type ("Petrol", "Diesel", "Electric", ...)
    #[serde(default)]
    pub fuel_type: String,
    /// Number of seats
    #[serde(default)]
    pub seating_capacity: u32,
    /// Safety rating label, e.g. "4 Star"
    #[serde(default)]
    pub safety_rating: String,
    /// Model year
    #[serde(default)]
    pub model_year: i32,
}
