/// Defines the trait shared by every integer square root engine, and the
/// enum that selects one of them.
/// All engines honour the same contract (see `integer_square_root`), so any of them can stand in for another.
use std::fmt;
use std::str::FromStr;

use crate::number_theory::binary_search_square_root::BinarySearchSquareRoot;
use crate::number_theory::linear_search_square_root::LinearSearchSquareRoot;
use crate::number_theory::newton_square_root::NewtonSquareRoot;
use crate::prelude::ErrorsISR;

pub trait IntegerSquareRootEngine {
    /// Short stable identifier, used in logs and benchmark ids.
    fn name(&self) -> &'static str;
    /// Returns `floor(sqrt(x))` for `x >= 0`. Negative input yields `0`.
    fn square_root(&self, x: i32) -> i32;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SquareRootAlgorithm {
    LinearSearch,
    BinarySearch,
    #[default]
    Newton,
}

impl SquareRootAlgorithm {
    pub const ALL: [SquareRootAlgorithm; 3] = [
        SquareRootAlgorithm::LinearSearch,
        SquareRootAlgorithm::BinarySearch,
        SquareRootAlgorithm::Newton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SquareRootAlgorithm::LinearSearch => "linear-search",
            SquareRootAlgorithm::BinarySearch => "binary-search",
            SquareRootAlgorithm::Newton => "newton",
        }
    }

    pub fn engine(&self) -> Box<dyn IntegerSquareRootEngine> {
        match self {
            SquareRootAlgorithm::LinearSearch => Box::new(LinearSearchSquareRoot::new()),
            SquareRootAlgorithm::BinarySearch => Box::new(BinarySearchSquareRoot::new()),
            SquareRootAlgorithm::Newton => Box::new(NewtonSquareRoot::new()),
        }
    }
}

impl fmt::Display for SquareRootAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SquareRootAlgorithm {
    type Err = ErrorsISR;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear-search" => Ok(SquareRootAlgorithm::LinearSearch),
            "binary" | "binary-search" => Ok(SquareRootAlgorithm::BinarySearch),
            "newton" => Ok(SquareRootAlgorithm::Newton),
            other => {
                log::debug!("unknown square root algorithm {other:?}");
                Err(ErrorsISR::Misconfiguration(
                    "unknown square root algorithm; expected linear-search, binary-search or newton",
                ))
            }
        }
    }
}
