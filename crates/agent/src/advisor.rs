//! Intent dispatch
//!
//! One pure tool call per intent; no tool is consulted for an intent it
//! does not own. Failures inside a tool degrade to an empty-but-valid
//! result rather than failing the whole query.

use std::sync::Arc;

use car_advisor_config::LoanConfig;
use car_advisor_core::{AffordabilityVerdict, QueryIntent, QueryResult, ToolOutput, UserQuery};
use car_advisor_tools::{calculate_emi, check_affordability, CarCatalog};

use crate::intent::detect_intent;

/// The query processor. Holds the shared catalog and the loan defaults
/// applied when a query carries no financial context.
#[derive(Debug, Clone)]
pub struct CarAdvisor {
    catalog: Arc<CarCatalog>,
    loan: LoanConfig,
}

impl CarAdvisor {
    pub fn new(catalog: Arc<CarCatalog>, loan: LoanConfig) -> Self {
        Self { catalog, loan }
    }

    pub fn catalog(&self) -> &CarCatalog {
        &self.catalog
    }

    /// Classify the query and run the matching tool.
    pub fn process(&self, request: &UserQuery) -> QueryResult {
        let intent = detect_intent(&request.query);
        tracing::debug!(intent = %intent, query = %request.query, "Dispatching query");

        let (tool_output, safety_check) = match intent {
            QueryIntent::EmiCalculation => {
                let principal = request.max_budget.unwrap_or(self.loan.default_principal);
                match calculate_emi(
                    principal,
                    self.loan.annual_rate_percent,
                    self.loan.tenure_years,
                ) {
                    Ok(breakdown) => {
                        let verdict = check_affordability(
                            breakdown.emi_amount,
                            request.user_income,
                            self.loan.affordable_income_share,
                        );
                        (ToolOutput::Emi(breakdown), verdict)
                    }
                    // Only reachable with a misconfigured tenure; answer
                    // with a stub instead of failing the request.
                    Err(err) => (
                        ToolOutput::Stub {
                            message: err.to_string(),
                        },
                        AffordabilityVerdict {
                            approved: false,
                            message: "EMI could not be calculated".to_string(),
                        },
                    ),
                }
            }
            QueryIntent::BudgetSearch => {
                let budget = request.max_budget.unwrap_or(self.loan.default_budget);
                (
                    ToolOutput::Cars(self.catalog.cars_within_budget(budget)),
                    AffordabilityVerdict::approved("Budget search completed"),
                )
            }
            QueryIntent::CarComparison => (
                ToolOutput::Stub {
                    message: "Comparison feature not yet available".to_string(),
                },
                AffordabilityVerdict::approved("Comparison ready"),
            ),
            QueryIntent::CarSearch => (
                ToolOutput::Car(self.catalog.find_by_name(&request.query).cloned()),
                AffordabilityVerdict::approved("Car found"),
            ),
            QueryIntent::GeneralInfo => (
                ToolOutput::CatalogSize {
                    cars_count: self.catalog.len(),
                },
                AffordabilityVerdict::approved("General info"),
            ),
        };

        QueryResult {
            intent,
            user_query: request.query.clone(),
            tool_output,
            safety_check,
            recommended_action: format!("Processed {} successfully", intent.display_name()),
        }
    }
}
