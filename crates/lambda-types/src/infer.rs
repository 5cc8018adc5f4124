//! The allocation pass: walks a De Bruijn-converted program and grows the TV arena.
//!
//! One [`Engine`] is shared across every top-level expression in a run, because free-variable
//! (and free-index) identities are shared across them — see the module docs on
//! [`crate::print`] for what that sharing does to the printed output.

use std::collections::HashMap;

use lambda_core::ast::{Expr, ExprKind};

use crate::tv::{TvArena, TvId};
use crate::unify::unify_apply;

pub struct Engine {
    arena: TvArena,
    free_vars: HashMap<u8, TvId>,
    free_indices: HashMap<u32, TvId>,
    bound_counter: u32,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            arena: TvArena::new(),
            free_vars: HashMap::new(),
            free_indices: HashMap::new(),
            bound_counter: 0,
        }
    }

    pub fn arena(&self) -> &TvArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut TvArena {
        &mut self.arena
    }

    /// Infers a type for every top-level expression in `program`, in order, sharing this
    /// engine's free-variable environment across all of them.
    pub fn infer_program(&mut self, program: &[Expr]) -> Vec<TvId> {
        program.iter().map(|expr| self.infer(expr)).collect()
    }

    pub fn infer(&mut self, expr: &Expr) -> TvId {
        let mut binders = Vec::new();
        self.infer_expr(expr, &mut binders)
    }

    fn infer_expr(&mut self, expr: &Expr, binders: &mut Vec<TvId>) -> TvId {
        match &expr.kind {
            ExprKind::Var(name) => *self
                .free_vars
                .entry(*name)
                .or_insert_with(|| self.arena.alloc_unbound((*name as char).to_ascii_uppercase().to_string())),
            ExprKind::BoundVar(index) => self.bound_var_tv(*index, binders),
            ExprKind::Lam(body) => {
                let param_name = self.next_bound_name();
                let param = self.arena.alloc_unbound(param_name.clone());
                binders.push(param);
                let body_tv = self.infer_expr(body, binders);
                binders.pop();
                self.arena.alloc_fn(format!("{param_name}f"), param, body_tv)
            }
            ExprKind::NamedLam(..) => {
                unreachable!("NamedLam reaches the type engine; debruijn conversion must run first")
            }
            ExprKind::App(func, arg) => {
                let func_tv = self.infer_expr(func, binders);
                let arg_tv = self.infer_expr(arg, binders);
                let result_name = format!("{}r", self.arena.own_name(func_tv));
                let result_tv = self.arena.alloc_unbound(result_name);
                unify_apply(&mut self.arena, func_tv, arg_tv, result_tv);
                result_tv
            }
        }
    }

    /// A `BoundVar(k)` resolves to the k-th enclosing binder (1 = nearest) when one exists;
    /// otherwise it's an index with no binder to pair it with, and is treated as a free slot
    /// named after its own decimal value, shared across the whole run just like free variables.
    fn bound_var_tv(&mut self, index: u32, binders: &[TvId]) -> TvId {
        let depth = index as usize;
        if depth >= 1 && depth <= binders.len() {
            binders[binders.len() - depth]
        } else {
            *self
                .free_indices
                .entry(index)
                .or_insert_with(|| self.arena.alloc_unbound(index.to_string()))
        }
    }

    fn next_bound_name(&mut self) -> String {
        self.bound_counter += 1;
        if self.bound_counter == 1 {
            "@".to_owned()
        } else {
            format!("@{}", self.bound_counter)
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
