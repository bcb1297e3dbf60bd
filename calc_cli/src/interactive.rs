//! Interactive menu, used when no subcommand is given.
//!
//! Reads from stdin until `q` or end of input. A rejected field prints the
//! calculator's guidance and returns to the menu.

use std::io::{self, BufRead, Write};

use calc_core::calculations::{
    evaluate, BalanceForm, CalculationForm, Calculator, ConversionCategory, ConversionForm, PercentageForm,
    PercentageOperation,
};
use calc_core::{format_number, Settings};

use crate::{print_result, report_error};

/// Run the menu loop on stdin/stdout
pub fn run(settings: &Settings, json: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Multi-Functional Calculator")?;
    writeln!(output, "===========================")?;

    loop {
        writeln!(output)?;
        for (i, calculator) in Calculator::ALL.iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, calculator)?;
        }
        writeln!(output, "  q. Quit")?;

        let Some(choice) = prompt(&mut input, &mut output, "Choose a calculator: ")? else {
            return Ok(());
        };
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Some(calculator) = menu_pick(Calculator::ALL, choice) else {
            writeln!(output, "Unknown choice: {}", choice)?;
            continue;
        };

        let Some(form) = read_form(&mut input, &mut output, calculator, settings)? else {
            return Ok(());
        };

        match evaluate(&form, &settings.tariff) {
            Ok(result) => print_result(&result, json),
            Err(e) => report_error(&e, json),
        }
    }
}

/// Prompt for every field of one calculator. `None` means input ended.
fn read_form(
    input: &mut impl BufRead,
    output: &mut impl Write,
    calculator: Calculator,
    settings: &Settings,
) -> io::Result<Option<CalculationForm>> {
    let form = match calculator {
        Calculator::Balance => {
            let Some(income) = prompt(input, output, "Monthly Income: ")? else {
                return Ok(None);
            };
            let Some(expenses) = prompt(input, output, "Monthly Expenses: ")? else {
                return Ok(None);
            };
            CalculationForm::Balance(BalanceForm::new(income, expenses))
        }

        Calculator::UnitConversion => {
            let default = settings.defaults.category;
            let category = loop {
                for (i, category) in ConversionCategory::ALL.iter().enumerate() {
                    writeln!(output, "  {}. {}", i + 1, category)?;
                }
                let Some(choice) = prompt(input, output, &format!("Category [{}]: ", default))? else {
                    return Ok(None);
                };
                if choice.trim().is_empty() {
                    break default;
                }
                let picked = menu_pick(ConversionCategory::ALL, &choice).or_else(|| choice.parse().ok());
                match picked {
                    Some(category) => break category,
                    None => writeln!(output, "Unknown category: {}", choice.trim())?,
                }
            };
            let Some(value) = prompt(input, output, "Value: ")? else {
                return Ok(None);
            };
            CalculationForm::UnitConversion(ConversionForm::new(category, value))
        }

        Calculator::Percentage => {
            let operation = loop {
                for (i, operation) in PercentageOperation::ALL.iter().enumerate() {
                    writeln!(output, "  {}. {}", i + 1, operation.display_name())?;
                }
                let Some(choice) = prompt(input, output, "Action: ")? else {
                    return Ok(None);
                };
                match menu_pick(PercentageOperation::ALL, &choice) {
                    Some(operation) => break operation,
                    None => writeln!(output, "Unknown action: {}", choice.trim())?,
                }
            };
            let Some(base) = prompt(input, output, "Base / Part: ")? else {
                return Ok(None);
            };
            let Some(secondary) = prompt(input, output, "Percent / Whole: ")? else {
                return Ok(None);
            };
            CalculationForm::Percentage(PercentageForm::new(operation, base, secondary))
        }

        Calculator::Electricity => {
            let mut form = settings.defaults.electricity_form();
            let Some(units) = prompt(input, output, "Units Consumed (kWh): ")? else {
                return Ok(None);
            };
            form.units = units;

            let fixed_label = format!("Fixed Charges [{}]: ", format_number(settings.defaults.fixed_charge));
            let Some(fixed_charge) = prompt(input, output, &fixed_label)? else {
                return Ok(None);
            };
            if !fixed_charge.trim().is_empty() {
                form.fixed_charge = fixed_charge;
            }

            let tax_label = format!("Tax (%) [{}]: ", format_number(settings.defaults.tax_percent));
            let Some(tax) = prompt(input, output, &tax_label)? else {
                return Ok(None);
            };
            if !tax.trim().is_empty() {
                form.tax_percent = tax;
            }
            CalculationForm::Electricity(form)
        }
    };
    Ok(Some(form))
}

/// 1-based menu selection
fn menu_pick<T: Copy>(items: &[T], choice: &str) -> Option<T> {
    let index: usize = choice.trim().parse().ok()?;
    index.checked_sub(1).and_then(|i| items.get(i)).copied()
}

/// Print a prompt and read one line, without its line ending.
/// `None` at end of input.
fn prompt(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
