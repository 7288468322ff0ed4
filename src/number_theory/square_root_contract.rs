use crate::number_theory::newton_square_root::NewtonSquareRoot;
use crate::number_theory::square_root_engine_trait::IntegerSquareRootEngine;
use crate::prelude::ErrorsISR;

/// Caller obligation of every square root engine.
pub fn precondition_holds(x: i32) -> bool {
    x >= 0
}

/// Checks the engine guarantee for a given input/result pair:
///
/// ```text
/// r >= 0
/// r * r <= x
/// (r + 1) * (r + 1) > x
/// ```
///
/// All products are formed in `i64`; `(46340 + 1)²` does not fit in an `i32`.
/// Returns `false` whenever the precondition on `x` does not hold.
pub fn postcondition_holds(x: i32, r: i32) -> bool {
    if !precondition_holds(x) || r < 0 {
        return false;
    }
    let x = i64::from(x);
    let r = i64::from(r);
    r * r <= x && (r + 1) * (r + 1) > x
}

/// Runs `engine` with both halves of the contract enforced at runtime.
///
/// # Errors
///
/// * `InvalidInputRange` if `x < 0`; the engine is not called.
/// * `ContractViolation` if the engine returns a value that fails
///   [`postcondition_holds`].
pub fn checked_square_root(engine: &dyn IntegerSquareRootEngine, x: i32) -> Result<i32, ErrorsISR> {
    if !precondition_holds(x) {
        log::debug!("{}: rejected negative input {x}", engine.name());
        return Err(ErrorsISR::InvalidInputRange("x must be nonnegative"));
    }
    let r = engine.square_root(x);
    if !postcondition_holds(x, r) {
        log::warn!("{}: returned {r} for {x}, which is not floor(sqrt(x))", engine.name());
        return Err(ErrorsISR::ContractViolation("engine result is not the floor of the square root"));
    }
    Ok(r)
}

/// Hardened counterpart of [`integer_square_root`](crate::integer_square_root):
/// reports a negative input as an error instead of leaving it unspecified.
///
/// ```
/// use lib_isqrt::checked_integer_square_root;
/// assert_eq!(checked_integer_square_root(25), Ok(5));
/// assert!(checked_integer_square_root(-1).is_err());
/// ```
pub fn checked_integer_square_root(x: i32) -> Result<i32, ErrorsISR> {
    checked_square_root(&NewtonSquareRoot::new(), x)
}

#[cfg(test)]
mod test {
    use super::*;

    struct OffByOne;
    impl IntegerSquareRootEngine for OffByOne {
        fn name(&self) -> &'static str {
            "off-by-one"
        }
        fn square_root(&self, x: i32) -> i32 {
            NewtonSquareRoot::new().square_root(x) + 1
        }
    }

    #[test]
    fn test_postcondition_holds() {
        assert!(postcondition_holds(0, 0));
        assert!(postcondition_holds(24, 4));
        assert!(!postcondition_holds(24, 5));
        assert!(!postcondition_holds(25, 4));
        assert!(postcondition_holds(i32::MAX, 46_340));
        assert!(!postcondition_holds(i32::MAX, 46_341));
        assert!(!postcondition_holds(-4, 0));
        assert!(!postcondition_holds(4, -2));
    }

    #[test]
    fn test_checked_integer_square_root() {
        assert_eq!(checked_integer_square_root(0), Ok(0));
        assert_eq!(checked_integer_square_root(24), Ok(4));
        assert_eq!(checked_integer_square_root(i32::MAX), Ok(46_340));
        assert_eq!(
            checked_integer_square_root(-1),
            Err(ErrorsISR::InvalidInputRange("x must be nonnegative"))
        );
        assert!(matches!(checked_integer_square_root(i32::MIN), Err(ErrorsISR::InvalidInputRange(_))));
    }

    #[test]
    fn test_checked_square_root_catches_broken_engine() {
        let result = checked_square_root(&OffByOne, 16);
        assert!(matches!(result, Err(ErrorsISR::ContractViolation(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "contract violation: engine result is not the floor of the square root"
        );
    }
}
