pub mod prelude;
pub mod number_theory{
    pub mod integer_square_root;
    pub mod square_root_engine_trait;
    pub mod linear_search_square_root;
    pub mod binary_search_square_root;
    pub mod newton_square_root;
    pub mod square_root_contract;
}

pub use number_theory::integer_square_root::integer_square_root;
pub use number_theory::square_root_contract::checked_integer_square_root;
