#![doc = include_str!("../../../README.md")]

pub mod ast;
pub mod debruijn;
pub mod parser;
pub mod pretty;
pub mod source;

pub use ast::{Expr, ExprKind, Program};
pub use parser::{parse_program, SyntaxError};
pub use pretty::canonical;
