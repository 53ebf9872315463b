//! Number classification
//!
//! Pure predicates over [`Number`]. Every predicate is total: fractional
//! input simply yields `false` (or `None` for the digit sum), and negative
//! integers are handled through their absolute value where digits matter.

use serde::Serialize;

use crate::types::{Number, Property};

/// Mathematical properties of a number, without the fun fact
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NumberProperties {
    pub number: Number,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: Option<u64>,
}

/// Run every classifier over `number`
pub fn classify(number: Number) -> NumberProperties {
    NumberProperties {
        number,
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        properties: properties(number),
        digit_sum: digit_sum(number),
    }
}

/// Trial division up to floor(sqrt(n))
pub fn is_prime(number: Number) -> bool {
    let Some(n) = number.as_integer() else {
        return false;
    };
    if n < 2 {
        return false;
    }

    let mut i = 2;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// True when the proper divisors of `n` sum to exactly `n`
pub fn is_perfect(number: Number) -> bool {
    let Some(n) = number.as_integer() else {
        return false;
    };
    if n < 2 {
        return false;
    }

    let target = n as i128;
    let mut sum: i128 = 1;
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            let paired = n / i;
            sum += i as i128;
            if paired != i {
                sum += paired as i128;
            }
            if sum > target {
                return false;
            }
        }
        i += 1;
    }
    sum == target
}

pub fn is_armstrong(number: Number) -> bool {
    let Some(n) = number.as_integer() else {
        return false;
    };
    if n < 0 {
        return false;
    }

    let digits = digits(n);
    let power = digits.len() as u32;
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == n as u128
}

pub fn digit_sum(number: Number) -> Option<u64> {
    number
        .as_integer()
        .map(|n| digits(n).iter().map(|&d| u64::from(d)).sum())
}

/// Parity (or floating-point) tag first, armstrong second
pub fn properties(number: Number) -> Vec<Property> {
    let Some(n) = number.as_integer() else {
        return vec![Property::FloatingPoint];
    };

    let mut tags = Vec::with_capacity(2);
    tags.push(if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    });
    if is_armstrong(number) {
        tags.push(Property::Armstrong);
    }
    tags
}

/// Decimal digits of |n|, most significant first
pub fn digits(n: i64) -> Vec<u8> {
    n.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Number {
        Number::Integer(n)
    }

    fn naive_is_prime(n: i64) -> bool {
        n >= 2 && (2..n).all(|i| n % i != 0)
    }

    #[test]
    fn test_is_prime_matches_naive_trial_division() {
        for n in -10..500 {
            assert_eq!(is_prime(int(n)), naive_is_prime(n), "n = {}", n);
        }
    }

    #[test]
    fn test_is_prime_edges() {
        assert!(!is_prime(int(0)));
        assert!(!is_prime(int(1)));
        assert!(is_prime(int(2)));
        assert!(!is_prime(int(-7)));
        assert!(!is_prime(Number::Float(7.5)));
        assert!(is_prime(int(2_147_483_647)));
        assert!(!is_prime(int(i64::MIN)));
    }

    #[test]
    fn test_is_perfect() {
        assert!(is_perfect(int(6)));
        assert!(is_perfect(int(28)));
        assert!(is_perfect(int(496)));
        assert!(is_perfect(int(8128)));
        assert!(!is_perfect(int(12)));
        assert!(!is_perfect(int(1)));
        assert!(!is_perfect(int(-6)));
        assert!(!is_perfect(Number::Float(6.5)));
    }

    #[test]
    fn test_is_perfect_matches_naive_divisor_sum() {
        for n in 2..2000i64 {
            let naive = (1..n).filter(|i| n % i == 0).sum::<i64>() == n;
            assert_eq!(is_perfect(int(n)), naive, "n = {}", n);
        }
    }

    #[test]
    fn test_is_armstrong() {
        assert!(is_armstrong(int(153)));
        assert!(is_armstrong(int(370)));
        assert!(is_armstrong(int(9474)));
        assert!(is_armstrong(int(0)));
        assert!(is_armstrong(int(7)));
        assert!(!is_armstrong(int(154)));
        assert!(!is_armstrong(int(10)));
        assert!(!is_armstrong(int(-153)));
        assert!(!is_armstrong(Number::Float(153.5)));
    }

    #[test]
    fn test_is_armstrong_does_not_overflow() {
        assert!(!is_armstrong(int(i64::MAX)));
        assert!(!is_armstrong(int(i64::MIN)));
        assert!(!is_armstrong(int(999_999_999_999_999_999)));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(int(12345)), Some(15));
        assert_eq!(digit_sum(int(0)), Some(0));
        assert_eq!(digit_sum(int(-12345)), Some(15));
        assert_eq!(digit_sum(int(i64::MIN)), Some(89));
        assert_eq!(digit_sum(Number::Float(4.5)), None);
    }

    #[test]
    fn test_properties_order() {
        assert_eq!(properties(int(4)), vec![Property::Even]);
        assert_eq!(properties(int(153)), vec![Property::Odd, Property::Armstrong]);
        assert_eq!(properties(int(-3)), vec![Property::Odd]);
        assert_eq!(properties(Number::Float(4.5)), vec![Property::FloatingPoint]);
    }

    #[test]
    fn test_classify() {
        let result = classify(int(28));
        assert!(!result.is_prime);
        assert!(result.is_perfect);
        assert_eq!(result.properties, vec![Property::Even]);
        assert_eq!(result.digit_sum, Some(10));

        let result = classify(Number::Float(4.5));
        assert!(!result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec![Property::FloatingPoint]);
        assert_eq!(result.digit_sum, None);
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(153), vec![1, 5, 3]);
        assert_eq!(digits(-40), vec![4, 0]);
        assert_eq!(digits(0), vec![0]);
    }
}
