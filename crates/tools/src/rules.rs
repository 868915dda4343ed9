//! Income-based affordability rule

use car_advisor_core::AffordabilityVerdict;

/// Check whether a monthly installment is affordable on a given annual
/// income: the installment must not exceed `income_share` of the monthly
/// income. The boundary counts as affordable.
///
/// Without an income the check is skipped and the installment approved.
pub fn check_affordability(
    emi_amount: f64,
    annual_income: Option<f64>,
    income_share: f64,
) -> AffordabilityVerdict {
    let Some(income) = annual_income else {
        return AffordabilityVerdict::approved("Income not provided - Skipping safety check");
    };

    let max_emi = (income / 12.0) * income_share;
    if emi_amount <= max_emi {
        AffordabilityVerdict {
            approved: true,
            message: format!("Safe EMI (₹{:.2} ≤ ₹{:.0})", emi_amount, max_emi),
        }
    } else {
        AffordabilityVerdict {
            approved: false,
            message: format!("Risky EMI (₹{:.2} > ₹{:.0})", emi_amount, max_emi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_income_skips_check() {
        let verdict = check_affordability(50_000.0, None, 0.3);
        assert!(verdict.approved);
        assert!(verdict.message.contains("Skipping"));
    }

    #[test]
    fn test_safe_emi_approved() {
        // 12 lakh a year is 1 lakh a month; 30% of that is 30k
        let verdict = check_affordability(25_000.0, Some(1_200_000.0), 0.3);
        assert!(verdict.approved);
        assert!(verdict.message.starts_with("Safe EMI"));
    }

    #[test]
    fn test_risky_emi_rejected() {
        let verdict = check_affordability(40_000.0, Some(1_200_000.0), 0.3);
        assert!(!verdict.approved);
        assert!(verdict.message.starts_with("Risky EMI"));
    }

    #[test]
    fn test_boundary_is_approved() {
        let verdict = check_affordability(30_000.0, Some(1_200_000.0), 0.3);
        assert!(verdict.approved);
    }
}
