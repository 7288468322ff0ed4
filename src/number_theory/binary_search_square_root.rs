use crate::number_theory::integer_square_root::integer_square_root_binary_search;
use crate::number_theory::square_root_engine_trait::IntegerSquareRootEngine;
use crate::prelude::I32_SQRT_MAX;

/// Bisection engine. Widens `x` to `u32` and defers to
/// [`integer_square_root_binary_search`], which compares `mid <= x / mid`
/// rather than squaring.
#[derive(Clone, Copy, Debug, Default)]
pub struct BinarySearchSquareRoot;

impl BinarySearchSquareRoot {
    pub fn new() -> Self {
        BinarySearchSquareRoot
    }
}

impl IntegerSquareRootEngine for BinarySearchSquareRoot {
    fn name(&self) -> &'static str {
        "binary-search"
    }

    fn square_root(&self, x: i32) -> i32 {
        if x < 0 {
            return 0;
        }
        let root = integer_square_root_binary_search(x as u32);
        debug_assert!(root <= I32_SQRT_MAX as u32);
        let result = root as i32;
        log::trace!("{}: isqrt({x}) = {result}", self.name());
        result
    }
}
