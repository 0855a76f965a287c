use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::symbol_for;
use super::profile::{profile_for, FormatProfile};

/// Formats `amount` for read-only display: profile grouping plus the
/// currency symbol.
///
/// Deterministic - the same input always produces the same string, with no
/// locale or environment drift.
pub fn format_display(amount: Decimal, currency_code: &str) -> String {
    let body = render(amount.abs(), profile_for(currency_code));
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let symbol = symbol_for(currency_code);
    if symbol == currency_code {
        // Unrecognized code: the code stands in for a symbol, set off by a space
        format!("{}{} {}", sign, symbol, body)
    } else {
        format!("{}{}{}", sign, symbol, body)
    }
}

/// Formats a known numeric value the way an editable field shows it: the
/// same grouping as display formatting, without the symbol (symbols are
/// rendered as separate UI adornments).
pub fn format_amount_input(value: Decimal, currency_code: &str) -> String {
    render(value, profile_for(currency_code))
}

/// Formats raw text (pasted or mid-edit) for an editable field.
///
/// Everything except digits and the decimal point is stripped; extra
/// decimal points fold into the fraction, so "1.2.3" is read as 1.23. Text
/// with no digits left after stripping maps to the empty string, as does
/// empty input.
pub fn format_raw_input(raw: &str, currency_code: &str) -> String {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    match parse_plain_decimal(&fold_decimal_points(&numeric)) {
        Some(value) => format_amount_input(value, currency_code),
        None => String::new(),
    }
}

/// Parses field text back to a number: the exact left inverse of
/// [`format_amount_input`] for the currency's profile.
///
/// Strips the profile's thousands separator, then reads the longest leading
/// decimal-number prefix, so a stray trailing fragment does not zero the
/// whole field. Empty or unparseable text parses to zero - this never fails.
pub fn parse_amount_input(text: &str, currency_code: &str) -> Decimal {
    let profile = profile_for(currency_code);
    let mut cleaned: String = text
        .chars()
        .filter(|c| *c != profile.group_separator())
        .collect();
    if let Some(separator) = profile.decimal_separator() {
        if separator != '.' {
            cleaned = cleaned.replace(separator, ".");
        }
    }
    parse_plain_decimal(&cleaned).unwrap_or(Decimal::ZERO)
}

/// Reformats an editable field on every keystroke.
///
/// Empty input clears the field immediately. Otherwise characters the
/// profile disallows are dropped, the remainder is parsed, and the
/// re-grouped text is emitted. Synchronous and single-shot per keystroke -
/// no debouncing.
pub fn on_input_change(raw: &str, currency_code: &str, emit: impl FnOnce(String)) {
    if raw.is_empty() {
        emit(String::new());
        return;
    }
    let profile = profile_for(currency_code);
    let cleaned: String = raw
        .chars()
        .filter(|c| profile.allows_input_char(*c))
        .collect();
    let value = parse_amount_input(&cleaned, currency_code);
    emit(format_amount_input(value, currency_code));
}

/// Rounds to the profile's decimals and renders grouping and fraction.
fn render(value: Decimal, profile: FormatProfile) -> String {
    let mut rounded =
        value.round_dp_with_strategy(profile.decimals(), RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(profile.decimals());
    let text = rounded.to_string();

    let (int_part, fraction) = match text.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (text.as_str(), None),
    };
    let mut out = group_digits(int_part, profile.group_separator());
    if let (Some(separator), Some(fraction)) = (profile.decimal_separator(), fraction) {
        out.push(separator);
        out.push_str(fraction);
    }
    out
}

/// Thousands-groups a plain digit run, preserving a leading sign.
fn group_digits(int_part: &str, separator: char) -> String {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    format!("{}{}", sign, grouped)
}

/// Collapses extra decimal points: the first stays the separator, the rest
/// are dropped so their digits fold into the fraction ("1.2.3" -> "1.23").
fn fold_decimal_points(text: &str) -> String {
    match text.split_once('.') {
        Some((head, tail)) if tail.contains('.') => {
            let mut folded = String::with_capacity(text.len());
            folded.push_str(head);
            folded.push('.');
            folded.extend(tail.chars().filter(|c| *c != '.'));
            folded
        }
        _ => text.to_string(),
    }
}

/// `parseFloat`-style prefix parse: an optional sign, digits, and at most
/// one decimal point, stopping at the first character that fits neither.
/// Returns `None` when no digit was read.
fn parse_plain_decimal(text: &str) -> Option<Decimal> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (index, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = index + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = index + 1;
            }
            '-' if index == 0 => {
                end = 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let prefix = text[..end].trim_end_matches('.');
    let normalized = match prefix.strip_prefix('.') {
        Some(rest) => format!("0.{}", rest),
        None => prefix.to_string(),
    };
    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn keystroke(raw: &str, currency_code: &str) -> String {
        let mut out = String::new();
        on_input_change(raw, currency_code, |formatted| out = formatted);
        out
    }

    #[test]
    fn integer_profile_groups_with_dots() {
        assert_eq!(keystroke("1", "IDR"), "1");
        assert_eq!(keystroke("1000", "IDR"), "1.000");
        assert_eq!(keystroke("1000000", "IDR"), "1.000.000");
        assert_eq!(parse_amount_input("1.000.000", "IDR"), dec!(1000000));
    }

    #[test]
    fn fractional_profile_groups_with_commas() {
        assert_eq!(format_amount_input(dec!(1234.5), "USD"), "1,234.50");
        assert_eq!(parse_amount_input("1,234.50", "USD"), dec!(1234.5));
    }

    #[test]
    fn empty_keystroke_clears_the_field() {
        assert_eq!(keystroke("", "IDR"), "");
        assert_eq!(keystroke("", "USD"), "");
    }

    #[test]
    fn keystroke_strips_disallowed_characters() {
        assert_eq!(keystroke("Rp 1.500", "IDR"), "1.500");
        assert_eq!(keystroke("$1,234.5", "USD"), "1,234.50");
    }

    #[test]
    fn regrouping_follows_the_caret() {
        // "1.000" plus a typed trailing 5 regroups to "10.005"
        assert_eq!(keystroke("1.0005", "IDR"), "10.005");
    }

    #[test]
    fn extra_decimal_points_fold_into_the_fraction() {
        assert_eq!(format_raw_input("1.2.3", "USD"), "1.23");
    }

    #[test]
    fn unparseable_raw_input_becomes_empty() {
        assert_eq!(format_raw_input("", "USD"), "");
        assert_eq!(format_raw_input("abc", "USD"), "");
        assert_eq!(format_raw_input(".", "USD"), "");
    }

    #[test]
    fn unparseable_field_text_parses_to_zero() {
        assert_eq!(parse_amount_input("", "USD"), Decimal::ZERO);
        assert_eq!(parse_amount_input("abc", "USD"), Decimal::ZERO);
    }

    #[test]
    fn parse_reads_the_leading_number_prefix() {
        // parseFloat semantics: a stray second point ends the number
        assert_eq!(parse_amount_input("1.2.3", "USD"), dec!(1.2));
        assert_eq!(parse_amount_input(".5", "USD"), dec!(0.5));
        assert_eq!(parse_amount_input("12.", "USD"), dec!(12));
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_amount_input(dec!(0.005), "USD"), "0.01");
        assert_eq!(format_amount_input(dec!(2.5), "IDR"), "3");
    }

    #[test]
    fn display_includes_symbol_and_sign() {
        assert_eq!(format_display(dec!(1000000), "IDR"), "Rp1.000.000");
        assert_eq!(format_display(dec!(1234.5), "USD"), "$1,234.50");
        assert_eq!(format_display(dec!(-42), "USD"), "-$42.00");
        assert_eq!(format_display(dec!(100), "JPY"), "¥100");
        assert_eq!(format_display(dec!(12), "ZZZ"), "ZZZ 12.00");
    }

    proptest! {
        // Format-then-parse returns the value rounded to the profile's
        // decimals, for amounts up to 10^12, across all three profiles.
        #[test]
        fn format_then_parse_round_trips(raw in 0i64..=10_000_000_000_000_000i64) {
            let value = Decimal::new(raw, 4);
            for code in ["IDR", "USD", "JPY"] {
                let profile = profile_for(code);
                let expected = value
                    .round_dp_with_strategy(profile.decimals(), RoundingStrategy::MidpointAwayFromZero);
                let parsed = parse_amount_input(&format_amount_input(value, code), code);
                prop_assert_eq!(parsed, expected);
            }
        }
    }
}
