pub mod u256_value;

pub use u256_value::*;
