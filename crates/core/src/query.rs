//! Query request and response types
//!
//! The `tool_output` shape of the composite `QueryResult` varies with the
//! detected intent, so it is modelled as a sum type and serialized
//! untagged. Callers branch on `intent` to interpret it.

use serde::{Deserialize, Serialize};

use crate::car::CarRecord;

/// A free-text user query with optional financial context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    /// Raw query text; an empty string is accepted
    pub query: String,
    /// Annual income in rupees
    #[serde(default)]
    pub user_income: Option<f64>,
    /// Maximum budget in rupees
    #[serde(default)]
    pub max_budget: Option<f64>,
}

impl UserQuery {
    /// Convenience constructor for a bare query with no financial context.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            user_income: None,
            max_budget: None,
        }
    }
}

/// Loan installment breakdown, all amounts rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    /// Monthly installment
    pub emi_amount: f64,
    /// Installment times tenure months
    pub total_payment: f64,
    /// Total payment minus principal
    pub total_interest: f64,
}

/// Verdict of the affordability rule (or a static approval stub for
/// intents that do not evaluate it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityVerdict {
    pub approved: bool,
    pub message: String,
}

impl AffordabilityVerdict {
    /// Static approval used by intents that skip the affordability rule.
    pub fn approved(message: impl Into<String>) -> Self {
        Self {
            approved: true,
            message: message.into(),
        }
    }
}

/// The five query intents, in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    EmiCalculation,
    BudgetSearch,
    CarComparison,
    CarSearch,
    GeneralInfo,
}

impl QueryIntent {
    /// Wire identifier, e.g. `emi_calculation`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmiCalculation => "emi_calculation",
            Self::BudgetSearch => "budget_search",
            Self::CarComparison => "car_comparison",
            Self::CarSearch => "car_search",
            Self::GeneralInfo => "general_info",
        }
    }

    /// Human-readable label used in status messages, e.g. "emi calculation".
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::EmiCalculation => "emi calculation",
            Self::BudgetSearch => "budget search",
            Self::CarComparison => "car comparison",
            Self::CarSearch => "car search",
            Self::GeneralInfo => "general info",
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-intent tool output.
///
/// Serialized untagged so the wire shape is the bare payload: an EMI
/// object, a car array, a car-or-null, a message object, or a
/// catalog-size object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// `emi_calculation`
    Emi(EmiBreakdown),
    /// `budget_search`
    Cars(Vec<CarRecord>),
    /// `car_search`; `None` serializes as JSON null
    Car(Option<CarRecord>),
    /// `car_comparison` (stubbed feature)
    Stub { message: String },
    /// `general_info`
    CatalogSize { cars_count: usize },
}

/// Composite result of processing a user query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub intent: QueryIntent,
    /// Echo of the raw query text
    pub user_query: String,
    pub tool_output: ToolOutput,
    pub safety_check: AffordabilityVerdict,
    pub recommended_action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_wire_names() {
        assert_eq!(QueryIntent::EmiCalculation.as_str(), "emi_calculation");
        assert_eq!(
            serde_json::to_value(QueryIntent::BudgetSearch).unwrap(),
            serde_json::json!("budget_search")
        );
    }

    #[test]
    fn test_tool_output_untagged_shapes() {
        let missing = serde_json::to_value(ToolOutput::Car(None)).unwrap();
        assert!(missing.is_null());

        let size = serde_json::to_value(ToolOutput::CatalogSize { cars_count: 7 }).unwrap();
        assert_eq!(size, serde_json::json!({"cars_count": 7}));

        let emi = serde_json::to_value(ToolOutput::Emi(EmiBreakdown {
            emi_amount: 100.0,
            total_payment: 1200.0,
            total_interest: 200.0,
        }))
        .unwrap();
        assert_eq!(emi["emi_amount"], 100.0);
    }

    #[test]
    fn test_user_query_optional_fields_default() {
        let query: UserQuery = serde_json::from_str(r#"{"query": ""}"#).unwrap();
        assert_eq!(query.query, "");
        assert!(query.user_income.is_none());
        assert!(query.max_budget.is_none());
    }
}
