//! Domain tools for the car advisor backend
//!
//! Three independent concerns:
//! - `emi`: loan installment math
//! - `catalog`: the in-memory car catalog and its lookups
//! - `rules`: the income-based affordability rule

pub mod catalog;
pub mod emi;
pub mod rules;

pub use catalog::CarCatalog;
pub use emi::calculate_emi;
pub use rules::check_affordability;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read catalog file {path}: {source}")]
    CatalogRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path}: {source}")]
    CatalogParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
