//! UI module for the Multicalc GUI
//!
//! # Layout
//! - `tab_bar` - Row of tab buttons, one per calculator
//! - `*_tab` - Body of each calculator tab
//! - `status_bar` - Bottom status message
//! - `modal` - "Input Error" dialog drawn over everything else
//!
//! # Shared Components
//! - `shared` - Labeled inputs, action buttons, result label

// Top-level panels
pub mod modal;
pub mod status_bar;
pub mod tab_bar;

// Calculator tabs
pub mod balance_tab;
pub mod conversion_tab;
pub mod electricity_tab;
pub mod percentage_tab;

// Shared components
pub mod shared;

use calc_core::calculations::Calculator;

/// Text in a tab's result area before its first successful calculation
pub fn placeholder(tab: Calculator) -> &'static str {
    match tab {
        Calculator::Balance => "Enter values and press Calculate.",
        Calculator::UnitConversion => "Result will appear here.",
        Calculator::Percentage => "Choose an action.",
        Calculator::Electricity => "Enter usage details.",
    }
}
