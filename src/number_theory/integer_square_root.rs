use num::traits::{PrimInt, Unsigned};

use crate::number_theory::newton_square_root::NewtonSquareRoot;
use crate::number_theory::square_root_engine_trait::IntegerSquareRootEngine;

/// Computes the floor of the square root of a nonnegative 32-bit integer.
///
/// # Contract
///
/// Precondition (caller obligation):
///
/// ```text
/// x >= 0
/// ```
///
/// Postconditions (callee guarantee, evaluated in `i64` so that the checks
/// themselves cannot overflow):
///
/// ```text
/// r >= 0
/// r * r <= x
/// (r + 1) * (r + 1) > x
/// ```
///
/// The algorithm behind this function is not part of the contract. Callers
/// that need a specific one should pick an engine through
/// [`SquareRootAlgorithm`](crate::number_theory::square_root_engine_trait::SquareRootAlgorithm).
///
/// # Precondition violations
///
/// A negative `x` trips a `debug_assert!` in debug builds. Release builds
/// return `0`. Use
/// [`checked_integer_square_root`](crate::number_theory::square_root_contract::checked_integer_square_root)
/// to get an error instead.
///
/// # Examples
///
/// ```
/// use lib_isqrt::integer_square_root;
/// assert_eq!(integer_square_root(24), 4);
/// assert_eq!(integer_square_root(i32::MAX), 46_340);
/// ```
pub fn integer_square_root(x: i32) -> i32 {
    debug_assert!(x >= 0, "integer_square_root requires x >= 0, got {x}");
    NewtonSquareRoot::new().square_root(x)
}

/// Computes the integer square root of any unsigned primitive using binary search (efficient, but slower)
///
/// The integer square root of `n` is defined as the largest integer `x`
/// such that:
///
/// ```text
/// x * x <= n
/// ```
///
/// This function:
/// - Works for the entire domain of `T` (`u8` through `u128`)
/// - Does not use floating-point arithmetic
/// - Avoids overflow by using division-based comparisons
/// - Runs in `O(log n)` time using binary search
pub fn integer_square_root_binary_search<T: PrimInt + Unsigned>(n: T) -> T {
    let two = T::one() + T::one();
    if n < two {
        return n;
    }

    // sqrt(n) <= n / 2 for n >= 2
    let mut low = T::one();
    let mut high = n / two;
    let mut result = T::one();

    while low <= high {
        let mid = low + (high - low) / two;

        // mid * mid <= n without overflow
        if mid <= n / mid {
            result = mid;
            low = mid + T::one();
        } else {
            high = mid - T::one();
        }
    }

    result
}

/// Computes the integer square root of any unsigned primitive using the
/// Newton–Raphson method (faster)
///
/// This function:
/// - Uses the Newton–Raphson iteration:
///   x_{k+1} = (x_k + n / x_k) / 2
/// - Seeds with `2^ceil(bits(n) / 2)`, which is never below `sqrt(n)`, so
///   the iterates decrease monotonically onto `floor(sqrt(n))`
/// - Avoids overflow by computing `n / x_k`
/// - Converges in `O(log log n)` iterations
pub fn integer_square_root_newton<T: PrimInt + Unsigned>(n: T) -> T {
    let two = T::one() + T::one();
    if n < two {
        return n;
    }

    let width = T::zero().count_zeros();
    let shift = (width - n.leading_zeros() + 1) / 2;
    let mut x = T::one() << shift as usize;

    loop {
        let next = (x + n / x) / two;
        if next >= x {
            return x;
        }
        x = next;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer_square_root_known_values() {
        let cases = [
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 2),
            (8, 2),
            (9, 3),
            (15, 3),
            (16, 4),
            (24, 4),
            (25, 5),
            (2_147_483_647, 46_340),
        ];
        for (x, expected) in cases {
            assert_eq!(integer_square_root(x), expected, "x = {x}");
        }
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_integer_square_root_negative_panics_in_debug() {
        integer_square_root(-1);
    }

    #[test]
    fn test_integer_square_root_binary_search() {
        for i in 0u128..100_000 {
            let sq = i * i;
            assert_eq!(integer_square_root_binary_search(sq), i);
            if i > 0 {
                assert_eq!(integer_square_root_binary_search(sq - 1), i - 1);
            }
        }
    }

    #[test]
    fn test_integer_square_root_newton() {
        for i in 0u64..100_000 {
            let sq = i * i;
            assert_eq!(integer_square_root_newton(sq), i);
            assert_eq!(integer_square_root_newton(sq + 2 * i), i);
        }
    }

    #[test]
    fn test_integer_square_root_extremes() {
        assert_eq!(integer_square_root_newton(u32::MAX), 65_535);
        assert_eq!(integer_square_root_binary_search(u32::MAX), 65_535);
        assert_eq!(integer_square_root_newton(u64::MAX), 0xffff_ffff);
        assert_eq!(integer_square_root_binary_search(u64::MAX), 0xffff_ffff);
        assert_eq!(integer_square_root_newton(u128::MAX), u64::MAX as u128);
        assert_eq!(integer_square_root_binary_search(u128::MAX), u64::MAX as u128);
        assert_eq!(integer_square_root_newton(u8::MAX), 15);
    }
}
