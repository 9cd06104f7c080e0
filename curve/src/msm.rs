use curve25519_dalek::edwards::EdwardsPoint;

use crate::{Point, Scalar};

/// Compute a * P + b * G with the variable-time Straus method over the
/// precomputed basepoint table.
///
/// Timing depends on the scalars. Every operand in a proof verification is
/// public, so this is the verification fast path; never pass a secret here.
pub fn double_scalar_mul_basepoint(a: &Scalar, point: &Point, b: &Scalar) -> Point {
    Point(EdwardsPoint::vartime_double_scalar_mul_basepoint(
        &a.0, &point.0, &b.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_matches_constant_time_path() {
        let p = Point::mul_generator(&Scalar::from(77u64));
        let a = Scalar::from(7u64);
        let b = Scalar::from(11u64);

        let result = double_scalar_mul_basepoint(&a, &p, &b);
        let expected = p.scalar_mul(&a) + Point::mul_generator(&b);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_zero_scalars() {
        let p = Point::mul_generator(&Scalar::from(3u64));
        let result = double_scalar_mul_basepoint(&Scalar::ZERO, &p, &Scalar::ZERO);
        assert!(result.is_identity());
    }
}
