use crate::number_theory::square_root_engine_trait::IntegerSquareRootEngine;

/// Reference engine: walks a candidate up from zero until its square first
/// exceeds `x`, then steps back by one.
///
/// The candidate is squared in `i64`, so the walk terminates correctly even
/// at `x = i32::MAX`, where `46341²` does not fit in an `i32`.
///
/// Runs in `O(sqrt(x))`; at most 46341 iterations over the whole `i32` domain.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearSearchSquareRoot;

impl LinearSearchSquareRoot {
    pub fn new() -> Self {
        LinearSearchSquareRoot
    }
}

impl IntegerSquareRootEngine for LinearSearchSquareRoot {
    fn name(&self) -> &'static str {
        "linear-search"
    }

    fn square_root(&self, x: i32) -> i32 {
        let target = i64::from(x);
        let mut candidate: i64 = 0;
        while candidate * candidate <= target {
            candidate += 1;
        }
        // candidate - 1 <= 46340, or -1 when x < 0
        let result = (candidate - 1).max(0) as i32;
        log::trace!("{}: isqrt({x}) = {result}", self.name());
        result
    }
}
