pub mod basic;
pub mod print;

pub use basic::*;
pub use print::{dump_expr, print_expr_to_string};
