//! Union-find type inference for the lambda-calculus toy language.
//!
//! [`infer::Engine`] walks a De Bruijn-converted program and grows a [`tv::TvArena`] of type
//! variables; [`print::print_types`] renders the named ones back out.

pub mod infer;
pub mod print;
pub mod tv;
pub mod unify;

pub use infer::Engine;
pub use print::print_types;
pub use tv::{TvArena, TvId};
