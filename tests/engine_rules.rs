// tests/engine_rules.rs
//
// Derivation rules: FAFSA, eligibility window, work reduction, net balance.

use pcda_presenter::config::options::{ EligibilityThresholds, EngineConfig, FeeSchedule };
use pcda_presenter::session::engine::*;
use pcda_presenter::session::form::{ PathwayLength, ResidencyStatus, SessionForm };

#[test]
fn fafsa_follows_residency() {
    assert!(compute_fafsa_eligibility(ResidencyStatus::Citizen));
    assert!(compute_fafsa_eligibility(ResidencyStatus::PermanentResident));
    assert!(!compute_fafsa_eligibility(ResidencyStatus::VisaHolder));
    assert!(!compute_fafsa_eligibility(ResidencyStatus::Other));
}

#[test]
fn fresh_session_is_fafsa_eligible() {
    // Residency starts at Citizen, so eligibility is on until changed.
    let view = derive(&SessionForm::default(), &EngineConfig::default());
    assert!(view.fafsa_eligible);
}

#[test]
fn eligibility_window_thresholds() {
    for credits in 0..=22 {
        let w = classify_eligibility_window(credits);
        assert!(w.gap_year_usable, "credits={credits}");
        assert!(!w.redshirt_triggered, "credits={credits}");
    }
    for credits in [24, 25, 40, 120] {
        let w = classify_eligibility_window(credits);
        assert!(w.redshirt_triggered, "credits={credits}");
        assert!(!w.gap_year_usable, "credits={credits}");
    }
}

#[test]
fn twenty_three_credits_sets_neither_flag() {
    // Documented boundary: 23 falls between the two ranges.
    let w = classify_eligibility_window(23);
    assert!(!w.gap_year_usable);
    assert!(!w.redshirt_triggered);
}

#[test]
fn edited_thresholds_can_set_both_flags() {
    let t = EligibilityThresholds { gap_year_max: 30, redshirt_min: 20 };
    let w = classify_eligibility_window_with(25, &t);
    assert!(w.gap_year_usable);
    assert!(w.redshirt_triggered);
}

#[test]
fn work_reduction_scales_with_semesters() {
    assert_eq!(compute_work_reduction_total(500.0, PathwayLength::ThreeSemester), 1500.0);
    assert_eq!(compute_work_reduction_total(500.0, PathwayLength::TwoSemester), 1000.0);
    assert_eq!(compute_work_reduction_total(f64::NAN, PathwayLength::TwoSemester), 0.0);
}

#[test]
fn hours_per_week_changes_nothing() {
    let config = EngineConfig::default();
    let mut form = SessionForm::default();
    form.financial.reduction_per_semester = 400.0;
    let before = derive(&form, &config);
    form.financial.hours_per_week = 20.0;
    assert_eq!(derive(&form, &config), before);
}

#[test]
fn ineligible_residency_masks_estimate() {
    let config = EngineConfig::default();
    let mut form = SessionForm::default();
    form.residency = ResidencyStatus::VisaHolder;
    form.financial.fafsa_reduction_estimate = 2000.0;

    let view = derive(&form, &config);
    assert_eq!(view.financials.fafsa_reduction, 0.0);
    assert_eq!(form.financial.fafsa_reduction_estimate, 2000.0);
    assert_eq!(compute_fafsa_reduction_applied(false, 2000.0), 0.0);

    // Switching back brings the stored estimate into play again.
    form.residency = ResidencyStatus::PermanentResident;
    assert_eq!(derive(&form, &config).financials.fafsa_reduction, 2000.0);
}

#[test]
fn net_balance_clamps_at_zero() {
    assert_eq!(compute_net_remaining_balance(31_750.0, 40_000.0, 0.0, 0.0), 0.0);
    assert_eq!(compute_net_remaining_balance(31_750.0, 5_000.0, 2_000.0, 1_000.0), 23_750.0);
}

#[test]
fn net_balance_is_non_increasing() {
    let steps = [0.0, 100.0, 5_000.0, 20_000.0, 31_750.0, 50_000.0];
    for w in steps.windows(2) {
        let (lo, hi) = (w[0], w[1]);
        assert!(compute_net_remaining_balance(31_750.0, hi, 0.0, 0.0) <= compute_net_remaining_balance(31_750.0, lo, 0.0, 0.0));
        assert!(compute_net_remaining_balance(31_750.0, 0.0, hi, 0.0) <= compute_net_remaining_balance(31_750.0, 0.0, lo, 0.0));
        assert!(compute_net_remaining_balance(31_750.0, 0.0, 0.0, hi) <= compute_net_remaining_balance(31_750.0, 0.0, 0.0, lo));
        assert!(compute_net_remaining_balance(31_750.0, hi, hi, hi) >= 0.0);
    }
}

#[test]
fn non_finite_inputs_count_as_zero() {
    assert_eq!(compute_net_remaining_balance(31_750.0, f64::NAN, f64::INFINITY, 0.0), 31_750.0);
}

#[test]
fn derive_is_idempotent() {
    let config = EngineConfig::default();
    let mut form = SessionForm::default();
    form.residency = ResidencyStatus::PermanentResident;
    form.credits_taken = 30;
    form.financial.down_payment = 3_000.0;
    form.financial.fafsa_reduction_estimate = 1_200.0;
    form.financial.reduction_per_semester = 750.0;
    form.financial.plan_length = PathwayLength::ThreeSemester;

    assert_eq!(derive(&form, &config), derive(&form, &config));
}

#[test]
fn fee_schedule_can_be_overridden() {
    let config = EngineConfig { fees: FeeSchedule { total_fee: 10_000.0 }, ..EngineConfig::default() };
    let mut form = SessionForm::default();
    form.financial.down_payment = 2_500.0;

    let view = derive(&form, &config);
    assert_eq!(view.total_fee, 10_000.0);
    assert_eq!(view.financials.net_remaining_balance, 7_500.0);
}
