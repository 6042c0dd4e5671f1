//! Display formatting for reward amounts.
//!
//! Mirrors the web client's number formats: token amounts render with 2–4
//! significant figures, fiat values as USD with at most 6 significant
//! figures and at least 2 fraction digits. Both use thousands grouping.
//! Midpoints round away from zero, matching the evaluator's policy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a token amount with 2–4 significant figures: `1234.5` → `"1,235"`,
/// `0.5` → `"0.50"`, `0.123456` → `"0.1235"`.
pub fn format_token_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_sf_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
        .unwrap_or(amount);
    let mut out = rounded.normalize();

    let digits = significant_digits(&out);
    if digits < 2 {
        out.rescale(out.scale() + (2 - digits));
    }

    group_decimal(&out)
}

/// Format a USD value: `1234.567` → `"$1,234.57"`, `0.123456789` →
/// `"$0.123457"`, `-12.5` → `"-$12.50"`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount
        .round_sf_with_strategy(6, RoundingStrategy::MidpointAwayFromZero)
        .unwrap_or(amount);
    let mut out = rounded.normalize();

    if out.scale() < 2 {
        out.rescale(2);
    }

    if out.is_sign_negative() {
        format!("-${}", group_decimal(&out.abs()))
    } else {
        format!("${}", group_decimal(&out))
    }
}

/// Count of significant digits in the mantissa. Zero counts as one digit.
fn significant_digits(value: &Decimal) -> u32 {
    let mut mantissa = value.mantissa().unsigned_abs();
    if mantissa == 0 {
        return 1;
    }
    let mut digits = 0u32;
    while mantissa > 0 {
        digits += 1;
        mantissa /= 10;
    }
    digits
}

/// Render a non-negative-or-signed decimal with thousands grouping in the
/// integer part. The fractional part is kept exactly as scaled.
fn group_decimal(value: &Decimal) -> String {
    let text = value.to_string();
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    let grouped = group_thousands(int_part);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
