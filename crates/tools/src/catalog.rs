//! In-memory car catalog
//!
//! The catalog is loaded once at startup from a JSON array and never
//! mutated afterwards; handlers share it behind an `Arc`.

use std::path::Path;

use car_advisor_core::CarRecord;

use crate::ToolError;

/// Immutable collection of catalog cars, in file order.
#[derive(Debug, Clone, Default)]
pub struct CarCatalog {
    cars: Vec<CarRecord>,
}

impl CarCatalog {
    pub fn new(cars: Vec<CarRecord>) -> Self {
        Self { cars }
    }

    /// Load the catalog from a JSON file containing a bare array of records.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ToolError::CatalogRead {
            path: path.display().to_string(),
            source,
        })?;
        let cars: Vec<CarRecord> =
            serde_json::from_str(&contents).map_err(|source| ToolError::CatalogParse {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self { cars })
    }

    /// Load the catalog, falling back to an empty one if the file is
    /// missing or unreadable. The service must start either way.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    cars = catalog.len(),
                    "Loaded car catalog"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Could not load car catalog, starting with an empty one"
                );
                Self::default()
            }
        }
    }

    pub fn all(&self) -> &[CarRecord] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    /// Case-insensitive name lookup.
    ///
    /// First tries the whole needle as a substring of a car name; if that
    /// finds nothing, retries with each whitespace-separated token so a
    /// phrase like "find alto" still resolves to "Maruti Alto". Returns
    /// the first catalog match.
    pub fn find_by_name(&self, needle: &str) -> Option<&CarRecord> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let whole = self
            .cars
            .iter()
            .find(|car| car.name.to_lowercase().contains(&needle));
        if whole.is_some() {
            return whole;
        }

        needle.split_whitespace().find_map(|token| {
            self.cars
                .iter()
                .find(|car| car.name.to_lowercase().contains(token))
        })
    }

    /// Cars priced at or below `max_price`, preserving catalog order.
    pub fn cars_within_budget(&self, max_price: f64) -> Vec<CarRecord> {
        self.cars
            .iter()
            .filter(|car| car.price <= max_price)
            .cloned()
            .collect()
    }
}
