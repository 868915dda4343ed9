//! Loan installment (EMI) math

use car_advisor_core::EmiBreakdown;

use crate::ToolError;

/// Calculate the equated monthly installment for a loan.
///
/// `principal` is in rupees, `annual_rate` in percent, `tenure_years` in
/// years (fractional years are allowed; the month count is truncated).
/// A zero rate degenerates to straight division of the principal.
///
/// Errors when the tenure works out to zero months.
pub fn calculate_emi(
    principal: f64,
    annual_rate: f64,
    tenure_years: f64,
) -> Result<EmiBreakdown, ToolError> {
    let tenure_months = (tenure_years * 12.0) as i64;
    if tenure_months <= 0 {
        return Err(ToolError::InvalidInput(format!(
            "Tenure must cover at least one month, got {} years",
            tenure_years
        )));
    }

    let monthly_rate = annual_rate / (12.0 * 100.0);
    let n = tenure_months as f64;

    let emi = if monthly_rate == 0.0 {
        principal / n
    } else {
        let factor = (1.0 + monthly_rate).powf(n);
        principal * monthly_rate * factor / (factor - 1.0)
    };

    let total_payment = emi * n;

    Ok(EmiBreakdown {
        emi_amount: round2(emi),
        total_payment: round2(total_payment),
        total_interest: round2(total_payment - principal),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
