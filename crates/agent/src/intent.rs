//! Keyword-based intent classification
//!
//! Matching is ordered: the keyword groups are checked top to bottom and
//! the first hit wins, so "compare emi of two cars" is an EMI query, not
//! a comparison. That ordering is part of the behavioral contract.

use car_advisor_core::QueryIntent;

const EMI_KEYWORDS: &[&str] = &["emi", "loan", "finance", "monthly"];
const BUDGET_KEYWORDS: &[&str] = &["budget", "lakhs", "crore", "price under"];
const COMPARISON_KEYWORDS: &[&str] = &["compare", "vs", "versus"];
const SEARCH_KEYWORDS: &[&str] = &["find", "show", "which"];

/// Classify a raw query string. Case-insensitive substring matching;
/// anything that matches no keyword group falls through to `GeneralInfo`.
pub fn detect_intent(query: &str) -> QueryIntent {
    let query = query.to_lowercase();

    let matches_any = |keywords: &[&str]| keywords.iter().any(|kw| query.contains(kw));

    if matches_any(EMI_KEYWORDS) {
        QueryIntent::EmiCalculation
    } else if matches_any(BUDGET_KEYWORDS) {
        QueryIntent::BudgetSearch
    } else if matches_any(COMPARISON_KEYWORDS) {
        QueryIntent::CarComparison
    } else if matches_any(SEARCH_KEYWORDS) {
        QueryIntent::CarSearch
    } else {
        QueryIntent::GeneralInfo
    }
}
