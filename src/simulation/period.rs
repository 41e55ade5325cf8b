//! Combining per-axis periods into the period of the whole system.
//!
//! Axes are independent, so the system repeats exactly when all three axes
//! repeat together: at the least common multiple of their periods. The
//! product inside `lcm` can exceed `u64` for large periods; that surfaces as
//! [`SimError::ArithmeticOverflow`] instead of wrapping.

use std::fmt;

use crate::error::{Result, SimError};

/// Greatest common divisor, `gcd(0, b) == b`
pub fn gcd(a: u64, b: u64) -> u64 {
    if a == 0 {
        b
    } else {
        gcd(b % a, a)
    }
}

/// Least common multiple. Zero if either argument is zero.
pub fn lcm(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    a.checked_mul(b)
        .map(|product| product / gcd(a, b))
        .ok_or(SimError::ArithmeticOverflow { a, b })
}

/// Period of the full system from its x, y and z periods
pub fn system_period(periods: [u64; 3]) -> Result<u64> {
    let [x, y, z] = periods;
    lcm(lcm(x, y)?, z)
}

/// Per-axis periods and their combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodReport {
    pub periods: [u64; 3],
    pub system_period: u64,
}

impl PeriodReport {
    pub fn from_periods(periods: [u64; 3]) -> Result<Self> {
        Ok(Self {
            periods,
            system_period: system_period(periods)?,
        })
    }
}

impl fmt::Display for PeriodReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.periods;
        write!(f, "lcm({x}, {y}, {z}) = {}", self.system_period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gcd_edge_cases() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn lcm_of_example_periods() {
        assert_eq!(system_period([18, 28, 44]), Ok(2772));
        assert_eq!(system_period([2028, 5898, 4702]), Ok(4_686_774_924));
    }

    #[test]
    fn lcm_overflow_is_reported() {
        let big = u64::MAX / 2;
        assert_eq!(
            lcm(big, 3),
            Err(SimError::ArithmeticOverflow { a: big, b: 3 })
        );
    }

    #[test]
    fn lcm_with_zero() {
        assert_eq!(lcm(0, 9), Ok(0));
        assert_eq!(lcm(9, 0), Ok(0));
    }

    #[test]
    fn report_renders_single_line() {
        let report = PeriodReport::from_periods([18, 28, 44]).unwrap();
        assert_eq!(report.to_string(), "lcm(18, 28, 44) = 2772");
    }

    proptest! {
        #[test]
        fn gcd_is_symmetric(a in 0u64..1_000_000, b in 0u64..1_000_000) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn gcd_with_zero_is_identity(a in 0u64..u64::MAX) {
            prop_assert_eq!(gcd(a, 0), a);
            prop_assert_eq!(gcd(0, a), a);
        }

        #[test]
        fn lcm_times_gcd_is_product(a in 1u64..1_000_000, b in 1u64..1_000_000) {
            let l = lcm(a, b).unwrap();
            prop_assert_eq!(l as u128 * gcd(a, b) as u128, a as u128 * b as u128);
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
        }
    }
}
