//! Rewrites named binders into De Bruijn indices.
//!
//! The parser hands back a tree full of [`ExprKind::NamedLam`] nodes; nothing downstream (the
//! pretty-printer, the type engine) understands parameter names. This pass walks each top-level
//! expression with an explicit scope stack of in-scope parameter bytes, turning every `Var` that
//! resolves to an enclosing binder into a `BoundVar` and every `NamedLam` into a `Lam`.
//!
//! Numeric indices the user wrote directly (`BoundVar` nodes straight out of the parser) are
//! left untouched — they already name a binder by position and don't shift just because an
//! enclosing name happens to match.

use crate::ast::{Expr, ExprKind, Program};

/// A parameter byte that can never equal a real variable name (those are always ASCII
/// alphabetic), used as the scope-stack placeholder for `[]body` (unnamed parameter).
const UNNAMED: u8 = 0;

pub fn convert_program(program: &Program) -> Program {
    program.iter().map(convert).collect()
}

pub fn convert(expr: &Expr) -> Expr {
    let mut scope = Vec::new();
    convert_with_scope(expr, &mut scope)
}

fn convert_with_scope(expr: &Expr, scope: &mut Vec<u8>) -> Expr {
    match &expr.kind {
        ExprKind::Var(name) => match depth_of(scope, *name) {
            Some(depth) => Expr::bound_var(depth, expr.offset),
            None => Expr::var(*name, expr.offset),
        },
        ExprKind::BoundVar(index) => Expr::bound_var(*index, expr.offset),
        ExprKind::App(func, arg) => Expr::app(
            convert_with_scope(func, scope),
            convert_with_scope(arg, scope),
        ),
        ExprKind::Lam(body) => {
            scope.push(UNNAMED);
            let body = convert_with_scope(body, scope);
            scope.pop();
            Expr::lam(body, expr.offset)
        }
        ExprKind::NamedLam(param, body) => {
            scope.push(param.unwrap_or(UNNAMED));
            let body = convert_with_scope(body, scope);
            scope.pop();
            Expr::lam(body, expr.offset)
        }
    }
}

/// Finds the nearest (innermost) enclosing binder named `name`, returning its 1-based distance.
fn depth_of(scope: &[u8], name: u8) -> Option<u32> {
    scope
        .iter()
        .rev()
        .position(|&bound| bound == name)
        .map(|i| i as u32 + 1)
}
