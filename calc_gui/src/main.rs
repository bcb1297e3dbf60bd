//! # Multicalc GUI Application
//!
//! Tabbed window with the four calculators. Built with Iced.
//!
//! Each tab keeps its own field text and its last successful result.
//! Pressing an action button parses the tab's fields, runs the calculator
//! on the event loop and either replaces that tab's result or opens the
//! "Input Error" modal. A rejected input never touches any result.

mod ui;

use std::collections::HashMap;

use iced::widget::{column, container, stack};
use iced::{Element, Length, Size, Task};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use calc_core::calculations::{
    evaluate, BalanceForm, CalculationForm, CalculationResult, Calculator, ConversionCategory, ConversionForm,
    ElectricityForm, ElectricityResult, PercentageForm, PercentageOperation, TariffSchedule,
};
use calc_core::{Settings, INPUT_ERROR_TITLE};

use ui::modal::ErrorDialog;

/// Window title
const WINDOW_TITLE: &str = "Multi-Functional Calculator";

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::load_or_default(None) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "falling back to built-in settings");
            Settings::default()
        }
    };

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(WINDOW_TITLE)
        .window_size(Size::new(640.0, 520.0))
        .centered()
        .run()
}

/// Application state
pub struct App {
    /// Tab currently shown
    pub active_tab: Calculator,

    /// Tariff used by the electricity tab
    pub tariff: TariffSchedule,

    // Field text, one form per tab
    pub balance: BalanceForm,
    pub conversion: ConversionForm,
    pub percentage: PercentageForm,
    pub electricity: ElectricityForm,

    /// Last successful result per tab
    pub results: HashMap<Calculator, CalculationResult>,

    /// Open input-error modal, if any
    pub error: Option<ErrorDialog>,

    /// Status bar text
    pub status: String,
}

/// Messages for the application
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Calculator),

    // Income & Expense
    IncomeChanged(String),
    ExpensesChanged(String),
    CalculateBalance,

    // Unit Conversion
    CategorySelected(ConversionCategory),
    ConversionValueChanged(String),
    Convert,

    // Percentage Toolkit
    PercentBaseChanged(String),
    PercentSecondaryChanged(String),
    RunPercentage(PercentageOperation),

    // Electricity Bill
    UnitsChanged(String),
    FixedChargeChanged(String),
    TaxChanged(String),
    EstimateBill,

    // Modal
    BackdropPressed,
    DismissError,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            active_tab: Calculator::Balance,
            balance: BalanceForm::default(),
            conversion: ConversionForm::new(settings.defaults.category, ""),
            percentage: PercentageForm::default(),
            electricity: settings.defaults.electricity_form(),
            tariff: settings.tariff,
            results: HashMap::new(),
            error: None,
            status: "Ready".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }

            Message::IncomeChanged(text) => self.balance.income = text,
            Message::ExpensesChanged(text) => self.balance.expenses = text,
            Message::CalculateBalance => {
                self.run(CalculationForm::Balance(self.balance.clone()));
            }

            Message::CategorySelected(category) => self.conversion.category = category,
            Message::ConversionValueChanged(text) => self.conversion.value = text,
            Message::Convert => {
                self.run(CalculationForm::UnitConversion(self.conversion.clone()));
            }

            Message::PercentBaseChanged(text) => self.percentage.base = text,
            Message::PercentSecondaryChanged(text) => self.percentage.secondary = text,
            Message::RunPercentage(operation) => {
                self.percentage.operation = operation;
                self.run(CalculationForm::Percentage(self.percentage.clone()));
            }

            Message::UnitsChanged(text) => self.electricity.units = text,
            Message::FixedChargeChanged(text) => self.electricity.fixed_charge = text,
            Message::TaxChanged(text) => self.electricity.tax_percent = text,
            Message::EstimateBill => {
                self.run(CalculationForm::Electricity(self.electricity.clone()));
            }

            Message::BackdropPressed => {}

            Message::DismissError => {
                self.error = None;
            }
        }
        Task::none()
    }

    /// Parse and run one tab's form, storing the result or opening the modal.
    fn run(&mut self, form: CalculationForm) {
        match evaluate(&form, &self.tariff) {
            Ok(result) => {
                let calculator = result.calculator();
                info!(%calculator, summary = %result.summary(), "calculated");
                self.status = format!("{} updated", calculator);
                self.results.insert(calculator, result);
            }
            Err(e) => {
                warn!(error = %e, "rejected input");
                self.status = format!("{}: {}", INPUT_ERROR_TITLE, e.user_message());
                self.error = Some(ErrorDialog::from_error(&e));
            }
        }
    }

    /// Result label for a tab, or its placeholder before the first success
    pub fn result_text(&self, tab: Calculator) -> String {
        self.results
            .get(&tab)
            .map(CalculationResult::summary)
            .unwrap_or_else(|| ui::placeholder(tab).to_string())
    }

    /// Last electricity result, for the tier breakdown
    pub fn electricity_result(&self) -> Option<&ElectricityResult> {
        match self.results.get(&Calculator::Electricity) {
            Some(CalculationResult::Electricity(result)) => Some(result),
            _ => None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tab_content = match self.active_tab {
            Calculator::Balance => ui::balance_tab::view(self),
            Calculator::UnitConversion => ui::conversion_tab::view(self),
            Calculator::Percentage => ui::percentage_tab::view(self),
            Calculator::Electricity => ui::electricity_tab::view(self),
        };

        let main_content = column![
            ui::tab_bar::view_tab_bar(self.active_tab),
            container(tab_content.padding(12))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(container::bordered_box),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .padding(8)
        .spacing(4);

        match &self.error {
            Some(dialog) => stack![main_content, ui::modal::view_backdrop(), ui::modal::view_modal(dialog)].into(),
            None => main_content.into(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send(app: &mut App, messages: impl IntoIterator<Item = Message>) {
        for message in messages {
            let _ = app.update(message);
        }
    }

    #[test]
    fn test_initial_state() {
        let app = App::default();
        assert_eq!(app.active_tab, Calculator::Balance);
        assert_eq!(app.electricity.fixed_charge, "75");
        assert_eq!(app.electricity.tax_percent, "5");
        assert_eq!(app.conversion.category, ConversionCategory::Length);
        assert_eq!(app.result_text(Calculator::Balance), "Enter values and press Calculate.");
        assert!(app.error.is_none());
    }

    #[test]
    fn test_balance_calculation() {
        let mut app = App::default();
        send(
            &mut app,
            [
                Message::IncomeChanged("4000".into()),
                Message::ExpensesChanged("3000".into()),
                Message::CalculateBalance,
            ],
        );
        assert_eq!(app.result_text(Calculator::Balance), "Balance: 1,000.00 | Savings: 25%");
        assert!(app.error.is_none());
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut app = App::default();
        send(
            &mut app,
            [Message::ConversionValueChanged("10".into()), Message::Convert],
        );
        let before = app.result_text(Calculator::UnitConversion);
        assert_eq!(before, "10 m = 32.808 ft");

        send(
            &mut app,
            [Message::ConversionValueChanged("ten".into()), Message::Convert],
        );
        let dialog = app.error.as_ref().expect("modal should be open");
        assert_eq!(dialog.title, INPUT_ERROR_TITLE);
        assert_eq!(dialog.message, "Please enter a valid numeric input.");
        assert_eq!(app.result_text(Calculator::UnitConversion), before);

        send(&mut app, [Message::BackdropPressed]);
        assert!(app.error.is_some());

        send(&mut app, [Message::DismissError]);
        assert!(app.error.is_none());
        assert_eq!(app.result_text(Calculator::UnitConversion), before);
    }

    #[test]
    fn test_error_in_one_tab_leaves_others_alone() {
        let mut app = App::default();
        send(
            &mut app,
            [Message::UnitsChanged("100".into()), Message::EstimateBill],
        );
        let bill = app.result_text(Calculator::Electricity);
        assert_eq!(bill, "Energy: 150.00 | Tax: 11.25 | Total: 236.25");

        send(
            &mut app,
            [Message::PercentBaseChanged("abc".into()), Message::RunPercentage(PercentageOperation::Increase)],
        );
        assert_eq!(
            app.error.as_ref().map(|d| d.message.as_str()),
            Some("Enter valid numbers for both fields.")
        );
        assert_eq!(app.result_text(Calculator::Electricity), bill);
        assert!(!app.results.contains_key(&Calculator::Percentage));
    }

    #[test]
    fn test_percentage_operations_share_fields() {
        let mut app = App::default();
        send(
            &mut app,
            [
                Message::PercentBaseChanged("50".into()),
                Message::PercentSecondaryChanged("200".into()),
                Message::RunPercentage(PercentageOperation::WhatPercent),
            ],
        );
        assert_eq!(app.result_text(Calculator::Percentage), "50.00 is 25% of 200.00");

        send(&mut app, [Message::RunPercentage(PercentageOperation::Increase)]);
        assert_eq!(app.result_text(Calculator::Percentage), "Increase result: 150.00 (Δ=100.00)");
    }

    #[test]
    fn test_electricity_breakdown_available() {
        let mut app = App::default();
        send(
            &mut app,
            [Message::UnitsChanged("350".into()), Message::EstimateBill],
        );
        let result = app.electricity_result().expect("bill should be stored");
        assert_eq!(result.energy_charge, 837.5);
        assert_eq!(result.tiers.len(), 3);
    }

    #[test]
    fn test_settings_prefill_forms() {
        let settings = Settings::from_toml("[defaults]\nfixed_charge = 90.0\ncategory = \"weight\"\n").unwrap();
        let app = App::new(settings);
        assert_eq!(app.electricity.fixed_charge, "90");
        assert_eq!(app.conversion.category, ConversionCategory::Weight);
    }

    #[test]
    fn test_configured_defaults_estimate_without_edits() {
        let settings = Settings::from_toml("[defaults]\nfixed_charge = 1500.0\ntax_percent = 10.0\n").unwrap();
        let mut app = App::new(settings);
        send(
            &mut app,
            [Message::UnitsChanged("100".into()), Message::EstimateBill],
        );
        assert!(app.error.is_none());
        assert_eq!(app.result_text(Calculator::Electricity), "Energy: 150.00 | Tax: 165.00 | Total: 1,815.00");
    }

    #[test]
    fn test_tab_switch_keeps_fields() {
        let mut app = App::default();
        send(
            &mut app,
            [
                Message::IncomeChanged("123".into()),
                Message::TabSelected(Calculator::Electricity),
                Message::TabSelected(Calculator::Balance),
            ],
        );
        assert_eq!(app.balance.income, "123");
        assert_eq!(app.active_tab, Calculator::Balance);
    }
}
