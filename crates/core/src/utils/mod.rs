pub mod decimal_utils;


pub use decimal_utils::{percent_of, product, total};
