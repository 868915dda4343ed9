//! Core types for the car advisor backend
//!
//! This crate provides the domain types shared across all other crates:
//! - Car catalog records
//! - Query request/response types
//! - EMI and affordability result types
//! - The intent taxonomy and the per-intent tool output union

pub mod car;
pub mod query;

pub use car::CarRecord;
pub use query::{
    AffordabilityVerdict, EmiBreakdown, QueryIntent, QueryResult, ToolOutput, UserQuery,
};
