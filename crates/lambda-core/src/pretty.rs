//! Canonical textual form for a De Bruijn-converted expression.
//!
//! Output always round-trips through the parser: `[]1` re-parses to the identical tree, and
//! applications are always fully parenthesised (`(f x)`), so there's no precedence ambiguity to
//! resolve on the way back in.

use std::fmt;

use crate::ast::{Expr, ExprKind};

/// Wraps an [`Expr`] for [`std::fmt::Display`], producing the canonical form.
pub struct Canonical<'a>(pub &'a Expr);

impl fmt::Display for Canonical<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.0)
    }
}

pub fn canonical(expr: &Expr) -> String {
    Canonical(expr).to_string()
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match &expr.kind {
        ExprKind::Var(name) => write!(f, "{}", *name as char),
        ExprKind::BoundVar(index) => write!(f, "{index}"),
        ExprKind::Lam(body) => {
            write!(f, "[]")?;
            write_expr(f, body)
        }
        // Shouldn't reach the printer — debruijn::convert runs first on every real path — but
        // printing it as an anonymous binder is more useful than panicking.
        ExprKind::NamedLam(_, body) => {
            write!(f, "[]")?;
            write_expr(f, body)
        }
        ExprKind::App(func, arg) => {
            write!(f, "(")?;
            write_expr(f, func)?;
            write!(f, " ")?;
            write_expr(f, arg)?;
            write!(f, ")")
        }
    }
}
