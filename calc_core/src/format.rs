//! # Display Formatting
//!
//! Pure helpers that turn calculator outputs into display text. Both group
//! the integer part in thousands with `,` and use `.` as the decimal point.
//!
//! - [`format_money`] - exactly two decimals (`1234.5` -> `"1,234.50"`)
//! - [`format_number`] - up to three decimals, trailing zeros dropped
//!   (`3.100` -> `"3.1"`, `2.0` -> `"2"`)
//!
//! Rounding works on the exact binary value of the `f64` with ties going to
//! the even digit, so `2.675` (stored as `2.67499...`) renders as `"2.67"`.

/// Format a monetary amount: grouped thousands, two decimals.
///
/// ```rust
/// use calc_core::format::format_money;
///
/// assert_eq!(format_money(1234.5), "1,234.50");
/// assert_eq!(format_money(-75.0), "-75.00");
/// ```
pub fn format_money(value: f64) -> String {
    format_decimal(value, 2, false)
}

/// Format a plain number: grouped thousands, at most three decimals.
///
/// ```rust
/// use calc_core::format::format_number;
///
/// assert_eq!(format_number(3.100), "3.1");
/// assert_eq!(format_number(3.28084), "3.281");
/// assert_eq!(format_number(1500.0), "1,500");
/// ```
pub fn format_number(value: f64) -> String {
    format_decimal(value, 3, true)
}

fn format_decimal(value: f64, decimals: usize, trim_zeros: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = if trim_zeros {
        frac_part.trim_end_matches('0')
    } else {
        frac_part
    };

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Insert `,` every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
