use crate::number_theory::integer_square_root::integer_square_root_newton;
use crate::number_theory::square_root_engine_trait::IntegerSquareRootEngine;

/// Integer Newton–Raphson engine, the library default.
///
/// Widens `x` to `u32` and defers to [`integer_square_root_newton`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NewtonSquareRoot;

impl NewtonSquareRoot {
    pub fn new() -> Self {
        NewtonSquareRoot
    }
}

impl IntegerSquareRootEngine for NewtonSquareRoot {
    fn name(&self) -> &'static str {
        "newton"
    }

    fn square_root(&self, x: i32) -> i32 {
        if x < 0 {
            return 0;
        }
        let result = integer_square_root_newton(x as u32) as i32;
        log::trace!("{}: isqrt({x}) = {result}", self.name());
        result
    }
}
