/// Rounds to two decimal places, ties to even.
///
/// The tie rule applies to the exact binary value of `value`, not to its
/// shortest decimal spelling: `2.675` is stored just below the half-cent and
/// rounds to `2.67`, while `0.125` is an exact tie and rounds to `0.12`.
/// This is what `format!("{:.2}")` produces, so the rounded value always
/// agrees with the two-decimal text written to reports.
///
/// Non-finite values pass through unchanged.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}
