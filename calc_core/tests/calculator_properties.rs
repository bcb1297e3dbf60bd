//! End-to-end checks of the public API: text in, summary out, plus the
//! algebraic properties every calculator must keep for arbitrary inputs.

use calc_core::calculations::{
    balance, conversion, electricity, evaluate, percentage, BalanceForm, BalanceInput, CalculationForm,
    ConversionCategory, ConversionForm, ConversionInput, ElectricityForm, ElectricityInput, PercentageForm,
    PercentageInput, PercentageOperation, TariffSchedule,
};
use calc_core::{CalcError, Calculator, INPUT_ERROR_TITLE};
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn every_form(bad: &str) -> Vec<CalculationForm> {
    vec![
        CalculationForm::Balance(BalanceForm::new(bad, "10")),
        CalculationForm::Balance(BalanceForm::new("10", bad)),
        CalculationForm::UnitConversion(ConversionForm::new(ConversionCategory::Temperature, bad)),
        CalculationForm::Percentage(PercentageForm::new(PercentageOperation::Increase, bad, "5")),
        CalculationForm::Percentage(PercentageForm::new(PercentageOperation::Decrease, "5", bad)),
        CalculationForm::Percentage(PercentageForm::new(PercentageOperation::PercentOf, bad, "5")),
        CalculationForm::Percentage(PercentageForm::new(PercentageOperation::WhatPercent, "5", bad)),
        CalculationForm::Electricity(ElectricityForm::new(bad, "75", "5")),
        CalculationForm::Electricity(ElectricityForm::new("10", bad, "5")),
        CalculationForm::Electricity(ElectricityForm::new("10", "75", bad)),
    ]
}

#[test]
fn non_numeric_text_is_an_input_error_for_every_field() {
    let tariff = TariffSchedule::default();
    for bad in ["abc", "", "12 kg", "NaN"] {
        for form in every_form(bad) {
            let err = evaluate(&form, &tariff).unwrap_err();
            assert!(err.is_input_error(), "{:?} gave {:?}", form, err);
        }
    }
}

#[test]
fn input_error_carries_calculator_guidance() {
    let err = evaluate(
        &CalculationForm::Balance(BalanceForm::new("abc", "1")),
        &TariffSchedule::default(),
    )
    .unwrap_err();
    assert_eq!(INPUT_ERROR_TITLE, "Input Error");
    assert_eq!(err.user_message(), "Please enter valid numeric values.");
    assert!(matches!(err, CalcError::InputError { calculator: Calculator::Balance, .. }));
}

#[test]
fn documented_examples() {
    let tariff = TariffSchedule::default();
    let summary = |form: CalculationForm| evaluate(&form, &tariff).unwrap().summary();

    assert_eq!(
        summary(CalculationForm::Balance(BalanceForm::new("5000", "3765.5"))),
        "Balance: 1,234.50 | Savings: 24.69%"
    );
    assert_eq!(
        summary(CalculationForm::UnitConversion(ConversionForm::new(ConversionCategory::Length, "1"))),
        "1 m = 3.281 ft"
    );
    assert_eq!(
        summary(CalculationForm::UnitConversion(ConversionForm::new(ConversionCategory::Weight, "2"))),
        "2 kg = 4.409 lb"
    );
    assert_eq!(
        summary(CalculationForm::Percentage(PercentageForm::new(
            PercentageOperation::WhatPercent,
            "50",
            "200"
        ))),
        "50.00 is 25% of 200.00"
    );
    assert_eq!(
        summary(CalculationForm::Electricity(ElectricityForm::new("100", "75", "5"))),
        "Energy: 150.00 | Tax: 11.25 | Total: 236.25"
    );
}

#[test]
fn tiered_charge_reference_points() {
    let tariff = TariffSchedule::default();
    assert_eq!(tariff.energy_charge(0.0), 0.0);
    assert_eq!(tariff.energy_charge(100.0), 150.0);
    assert_eq!(tariff.energy_charge(300.0), 150.0 + 200.0 * 2.5);
    assert_eq!(tariff.energy_charge(350.0), 650.0 + 50.0 * 3.75);
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_balance_is_difference(income in -1.0e9f64..1.0e9, expenses in -1.0e9f64..1.0e9) {
        let result = balance::calculate(&BalanceInput { income, expenses });
        prop_assert_eq!(result.balance, income - expenses);
        let zero = balance::calculate(&BalanceInput { income: 0.0, expenses });
        prop_assert_eq!(zero.savings_percent, 0.0);
    }

    #[test]
    fn prop_conversions_follow_formulas(value in -1.0e6f64..1.0e6) {
        let convert = |category| conversion::calculate(&ConversionInput { category, value }).converted;
        prop_assert_eq!(convert(ConversionCategory::Length), value * 3.28084);
        prop_assert_eq!(convert(ConversionCategory::Weight), value * 2.20462);
        prop_assert_eq!(convert(ConversionCategory::Temperature), value * 9.0 / 5.0 + 32.0);
    }

    #[test]
    fn prop_increase_and_decrease(base in -1.0e6f64..1.0e6, percent in -500.0f64..500.0) {
        let run = |operation| percentage::calculate(&PercentageInput { operation, base, secondary: percent });
        let up = run(PercentageOperation::Increase);
        let down = run(PercentageOperation::Decrease);
        prop_assert_eq!(up.value, base + base * percent / 100.0);
        prop_assert_eq!(down.value, base - base * percent / 100.0);
        prop_assert_eq!(up.delta, down.delta);
        prop_assert!(close(up.value + down.value, 2.0 * base));
    }

    #[test]
    fn prop_what_percent_of_zero_whole_is_zero(part in -1.0e6f64..1.0e6) {
        prop_assert_eq!(percentage::what_percent(part, 0.0), 0.0);
    }

    #[test]
    fn prop_energy_charge_is_monotonic_and_non_negative(a in -1000.0f64..5000.0, b in -1000.0f64..5000.0) {
        let tariff = TariffSchedule::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let charge_lo = tariff.energy_charge(lo);
        prop_assert!(charge_lo >= 0.0);
        prop_assert!(charge_lo <= tariff.energy_charge(hi) + 1e-9);
    }

    #[test]
    fn prop_breakdown_units_sum_to_reading(units in 0.0f64..10_000.0) {
        let tiers = TariffSchedule::default().breakdown(units);
        let billed: f64 = tiers.iter().map(|t| t.units).sum();
        prop_assert!(close(billed, units));
    }

    #[test]
    fn prop_bill_totals_add_up(units in 0.0f64..5000.0, fixed in 0.0f64..500.0, tax in 0.0f64..30.0) {
        let result = electricity::calculate(&ElectricityInput { units, fixed_charge: fixed, tax_percent: tax });
        prop_assert_eq!(result.subtotal, result.energy_charge + fixed);
        prop_assert_eq!(result.total, result.subtotal + result.tax);
        prop_assert!(close(result.tax, result.subtotal * tax / 100.0));
    }

    #[test]
    fn prop_evaluation_is_idempotent(income in -1.0e6f64..1.0e6, expenses in -1.0e6f64..1.0e6) {
        let form = CalculationForm::Balance(BalanceForm::new(income.to_string(), expenses.to_string()));
        let tariff = TariffSchedule::default();
        prop_assert_eq!(evaluate(&form, &tariff).unwrap(), evaluate(&form, &tariff).unwrap());
    }
}
