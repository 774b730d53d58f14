// src/session/engine.rs
//
// Derivation engine: form snapshot → displayed/exported values.
//
// Every function is pure and total. Numeric inputs pass through
// `finite_or_zero`, so a NaN never reaches a currency display.
// The presentation layer decides *when* to recompute (see session::store);
// these functions only decide *what*.

use crate::config::options::{ EligibilityThresholds, EngineConfig };
use super::form::{ finite_or_zero, PathwayLength, ResidencyStatus, SessionForm };

/// Both flags are computed independently; with edited thresholds
/// they can be true at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EligibilityWindow {
    pub gap_year_usable: bool,
    pub redshirt_triggered: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedFinancials {
    pub fafsa_reduction: f64,
    pub work_reduction_total: f64,
    pub net_remaining_balance: f64,
}

/// Everything derived from one form snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedView {
    pub fafsa_eligible: bool,
    pub total_fee: f64,
    pub financials: DerivedFinancials,
    pub eligibility: EligibilityWindow,
}

pub fn compute_fafsa_eligibility(residency: ResidencyStatus) -> bool {
    matches!(residency, ResidencyStatus::Citizen | ResidencyStatus::PermanentResident)
}

pub fn compute_work_reduction_total(reduction_per_semester: f64, plan_length: PathwayLength) -> f64 {
    let semesters = match plan_length {
        PathwayLength::ThreeSemester => 3.0,
        PathwayLength::TwoSemester => 2.0,
    };
    finite_or_zero(reduction_per_semester) * semesters
}

/// Masks the estimate at read time; the stored estimate is left alone.
pub fn compute_fafsa_reduction_applied(fafsa_eligible: bool, estimate: f64) -> f64 {
    if fafsa_eligible { finite_or_zero(estimate) } else { 0.0 }
}

/// Clamped at zero: overpayment is not represented.
pub fn compute_net_remaining_balance(
    total_fee: f64,
    down_payment: f64,
    fafsa_reduction_applied: f64,
    work_reduction_total: f64,
) -> f64 {
    let base = finite_or_zero(total_fee)
        - finite_or_zero(down_payment)
        - finite_or_zero(fafsa_reduction_applied)
        - finite_or_zero(work_reduction_total);
    base.max(0.0)
}

/// Default thresholds: GAP year usable at ≤ 22 credits, redshirt at ≥ 24.
/// 23 credits sets neither flag.
pub fn classify_eligibility_window(credits_taken: u32) -> EligibilityWindow {
    classify_eligibility_window_with(credits_taken, &EligibilityThresholds::default())
}

pub fn classify_eligibility_window_with(
    credits_taken: u32,
    thresholds: &EligibilityThresholds,
) -> EligibilityWindow {
    EligibilityWindow {
        gap_year_usable: credits_taken <= thresholds.gap_year_max,
        redshirt_triggered: credits_taken >= thresholds.redshirt_min,
    }
}

/// Recompute every derived value from scratch.
pub fn derive(form: &SessionForm, config: &EngineConfig) -> DerivedView {
    let fin = &form.financial;

    let fafsa_eligible = compute_fafsa_eligibility(form.residency);
    let fafsa_reduction = compute_fafsa_reduction_applied(fafsa_eligible, fin.fafsa_reduction_estimate);
    let work_reduction_total = compute_work_reduction_total(fin.reduction_per_semester, fin.plan_length);
    let net_remaining_balance = compute_net_remaining_balance(
        config.fees.total_fee,
        fin.down_payment,
        fafsa_reduction,
        work_reduction_total,
    );

    DerivedView {
        fafsa_eligible,
        total_fee: finite_or_zero(config.fees.total_fee),
        financials: DerivedFinancials {
            fafsa_reduction,
            work_reduction_total,
            net_remaining_balance,
        },
        eligibility: classify_eligibility_window_with(form.credits_taken, &config.thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_inputs_never_reach_the_balance() {
        let net = compute_net_remaining_balance(31_750.0, f64::NAN, f64::INFINITY, 0.0);
        assert_eq!(net, 31_750.0);
        assert_eq!(compute_work_reduction_total(f64::NAN, PathwayLength::ThreeSemester), 0.0);
        assert_eq!(compute_fafsa_reduction_applied(true, f64::NAN), 0.0);
    }

    #[test]
    fn derive_reports_configured_fee() {
        let config = EngineConfig::default();
        let view = derive(&SessionForm::default(), &config);
        assert_eq!(view.total_fee, 31_750.0);
        assert_eq!(view.financials.net_remaining_balance, 31_750.0);
    }
}
