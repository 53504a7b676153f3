//! Number formatting matching the browser table the feed was built for.
//!
//! Prices print the way `Number.prototype.toString` prints a double, and the
//! change column the way `Number.prototype.toFixed` does.

use rust_decimal::{Decimal, RoundingStrategy};

/// Magnitude from which `toFixed` falls back to the plain string form.
const FIXED_LIMIT: f64 = 1e21;

/// Formats `value` as the shortest round-trip decimal string.
///
/// Fixed notation is used while the decimal exponent stays within
/// `1e-7 < |value| < 1e21`; outside that window the exponent form is used
/// (`1e+30`, `1.5e-7`).
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = shortest_digits(value.abs());
    format!("{sign}{}", place_point(&digits, exponent))
}

/// Formats `value` with exactly `fraction_digits` decimals.
///
/// Rounds the exact binary value, so `1.005` (stored just below the tie)
/// gives `1.00`. Exact ties round away from zero. A negative value keeps its
/// sign even when it rounds to zero (`-0.001` gives `-0.00`).
pub fn to_fixed(value: f64, fraction_digits: u32) -> String {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return to_js_string(value);
    }

    // Conversion only fails for magnitudes far below the last kept digit.
    let exact = Decimal::from_f64_retain(value.abs()).unwrap_or(Decimal::ZERO);
    let mut rounded =
        exact.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(fraction_digits);

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded}")
}

/// Splits a positive finite `value` into its shortest significant digits and
/// the exponent `n` with `value = 0.DIGITS * 10^n`.
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` prints the shortest digits that read back as the same double.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent = exponent.parse::<i32>().unwrap_or(0) + 1;
    (digits, exponent)
}

fn place_point(digits: &str, n: i32) -> String {
    let k = i32::try_from(digits.len()).unwrap_or(i32::MAX);

    if k <= n && n <= 21 {
        format!("{digits}{}", zeros(n - k))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(usize::try_from(n).unwrap_or(0));
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", zeros(-n))
    } else {
        let exponent = n - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        format!("{first}{point}{rest}e{sign}{}", exponent.unsigned_abs())
    }
}

fn zeros(count: i32) -> String {
    "0".repeat(usize::try_from(count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimals_print_as_written() {
        assert_eq!(to_js_string(150.2), "150.2");
        assert_eq!(to_js_string(1688.5), "1688.5");
        assert_eq!(to_js_string(0.1), "0.1");
        assert_eq!(to_js_string(-8.75), "-8.75");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(to_js_string(150.0), "150");
        assert_eq!(to_js_string(100.00), "100");
        assert_eq!(to_js_string(-0.0), "0");
        assert_eq!(to_js_string(123_456_789_012_345_680_000.0), "123456789012345680000");
    }

    #[test]
    fn small_magnitudes_switch_to_exponent_below_one_millionth() {
        assert_eq!(to_js_string(0.000001), "0.000001");
        assert_eq!(to_js_string(0.0000015), "0.0000015");
        assert_eq!(to_js_string(1e-7), "1e-7");
        assert_eq!(to_js_string(1.5e-7), "1.5e-7");
    }

    #[test]
    fn large_magnitudes_switch_to_exponent_from_1e21() {
        assert_eq!(to_js_string(1e21), "1e+21");
        assert_eq!(to_js_string(1e30), "1e+30");
        assert_eq!(to_js_string(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn to_fixed_pads_and_rounds() {
        assert_eq!(to_fixed(3.0, 2), "3.00");
        assert_eq!(to_fixed(-1.5, 2), "-1.50");
        assert_eq!(to_fixed(1.234, 2), "1.23");
    }

    #[test]
    fn to_fixed_rounds_the_stored_double() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(-2.005, 2), "-2.00");
    }

    #[test]
    fn to_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn to_fixed_keeps_sign_of_negative_rounding_to_zero() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-1e-30, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(0.001, 2), "0.00");
    }

    #[test]
    fn to_fixed_falls_back_to_string_form_for_huge_values() {
        assert_eq!(to_fixed(1e21, 2), "1e+21");
        assert_eq!(to_fixed(-1e25, 2), "-1e+25");
        assert_eq!(to_fixed(999_999_999_999_999_900_000.0, 2), "999999999999999868928.00");
    }
}
