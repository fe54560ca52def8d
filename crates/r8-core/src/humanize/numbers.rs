use crate::errors::{R8Error, Result};

/// Round up to the next whole number.
///
/// Page counts and similar "how many buckets" values are computed as
/// `ceil(total / size)`; the result must fit an `i32`.
///
/// # Errors
///
/// `RoundingOverflow` when the value is NaN or its ceiling falls outside
/// the `i32` range.
pub fn round_up(value: f64) -> Result<i32> {
    let ceiled = value.ceil();
    if ceiled.is_nan() || ceiled < f64::from(i32::MIN) || ceiled > f64::from(i32::MAX) {
        return Err(R8Error::RoundingOverflow { value });
    }
    Ok(ceiled as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_fractions() {
        assert_eq!(round_up(2.1).unwrap(), 3);
        assert_eq!(round_up(2.0).unwrap(), 2);
        assert_eq!(round_up(-2.5).unwrap(), -2);
        assert_eq!(round_up(0.0001).unwrap(), 1);
    }

    #[test]
    fn test_round_up_out_of_range() {
        assert!(matches!(
            round_up(f64::from(i32::MAX) + 0.5),
            Err(R8Error::RoundingOverflow { .. })
        ));
        assert!(round_up(f64::NAN).is_err());
        assert!(round_up(f64::INFINITY).is_err());
    }
}
