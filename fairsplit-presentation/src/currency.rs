use fairsplit_domain::Money;
use rust_decimal::RoundingStrategy;

pub const DEFAULT_CURRENCY: &str = "NPR";

/// `"NPR 1,234.5"`: comma-grouped, at most two fraction digits, rounded half
/// away from zero, trailing zeros dropped.
pub fn format_currency(amount: Money, currency: &str) -> String {
    format!("{currency} {}", format_amount(amount, false))
}

/// Like [`format_currency`] but positive amounts carry a `+`.
pub fn format_signed_currency(amount: Money, currency: &str) -> String {
    format!("{currency} {}", format_amount(amount, true))
}

fn format_amount(amount: Money, explicit_plus: bool) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else if explicit_plus && !rounded.is_zero() {
        "+"
    } else {
        ""
    };

    let mut text = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    text.push_str(sign);
    text.push_str(&group_thousands(whole));
    if let Some(fraction) = fraction {
        text.push('.');
        text.push_str(fraction);
    }
    text
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
