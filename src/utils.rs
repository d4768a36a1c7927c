/// Above this the scaled value has no fractional digits left to round.
const MAX_ROUNDABLE: f64 = 1e16;

/// Rounds `value` to `digits` decimal places, ties to even.
///
/// Scales by 10^digits, rounds, and scales back, so results carry the usual
/// binary representation error (1.005 rounds to 1.0, not 1.01).
pub fn round_half_even(value: f64, digits: i32) -> f64 {
    let power = 10f64.powi(digits);
    let scaled = value * power;
    if !scaled.is_finite() || scaled.abs() >= MAX_ROUNDABLE {
        return value;
    }
    scaled.round_ties_even() / power
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_half_even(1.0009765625, 2), 1.0);
        assert_eq!(round_half_even(1.23456, 2), 1.23);
        assert_eq!(round_half_even(9.999, 2), 10.0);
    }

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_half_even(0.125, 2), 0.12);
        assert_eq!(round_half_even(0.375, 2), 0.38);
        assert_eq!(round_half_even(2.5, 0), 2.0);
        assert_eq!(round_half_even(3.5, 0), 4.0);
    }

    #[test]
    fn representation_error_is_kept() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_half_even(1.005, 2), 1.0);
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round_half_even(1e20, 2), 1e20);
        assert_eq!(round_half_even(f64::INFINITY, 2), f64::INFINITY);
    }
}
