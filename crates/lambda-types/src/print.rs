//! Renders the named type variables of an [`Engine`](crate::infer::Engine) as one line each.
//!
//! Two passes are involved: the outer enumeration below decides which TVs get their own line
//! (the first name to reach a given root, in allocation order — later aliases of an
//! already-printed root are suppressed), and the inner recursive printer expands a root's shape,
//! collapsing back-edges within that single line so a recursive type prints as `A=(A Ar)` instead
//! of looping forever.

use std::collections::HashSet;

use crate::tv::{TvArena, TvId};

/// Prints one line per distinct named type, in allocation order.
pub fn print_types(arena: &mut TvArena) -> Vec<String> {
    let mut printed_roots = HashSet::new();
    let mut lines = Vec::new();

    for id in arena.allocations().collect::<Vec<_>>() {
        let root = arena.find(id);
        if !printed_roots.insert(root) {
            continue;
        }
        let mut stack = vec![root];
        let line = match arena.shape(root) {
            None => arena.own_name(root).to_owned(),
            Some((dom, cod)) => {
                let name = arena.own_name(root).to_owned();
                format!(
                    "{}=({} {})",
                    name,
                    render(arena, dom, &mut stack),
                    render(arena, cod, &mut stack),
                )
            }
        };
        lines.push(line);
    }

    lines
}

/// Renders a reference to `t` encountered while expanding some other TV's shape.
fn render(arena: &mut TvArena, t: TvId, stack: &mut Vec<TvId>) -> String {
    let root = arena.find(t);

    if stack.contains(&root) {
        return arena.own_name(root).to_owned();
    }

    // `t` was unified away into `root` under a different name: don't re-expand root's shape
    // here, just point at it by the root's own (primary) name.
    if t != root && arena.own_name(t) != arena.own_name(root) {
        return arena.own_name(root).to_owned();
    }

    stack.push(root);
    let rendered = match arena.shape(root) {
        None => arena.own_name(root).to_owned(),
        Some((dom, cod)) => {
            let name = arena.own_name(root).to_owned();
            format!(
                "{}=({} {})",
                name,
                render(arena, dom, stack),
                render(arena, cod, stack),
            )
        }
    };
    stack.pop();
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unbound_tv_prints_bare() {
        let mut arena = TvArena::new();
        arena.alloc_unbound("X");
        assert_eq!(print_types(&mut arena), vec!["X".to_owned()]);
    }

    #[test]
    fn function_shape_prints_inline() {
        let mut arena = TvArena::new();
        let dom = arena.alloc_unbound("X");
        let cod = arena.alloc_unbound("Xr");
        arena.alloc_fn("Xf", dom, cod);
        assert_eq!(print_types(&mut arena), vec!["X".to_owned(), "Xr".to_owned(), "Xf=(X Xr)".to_owned()]);
    }

    #[test]
    fn merged_alias_is_suppressed_from_the_listing() {
        let mut arena = TvArena::new();
        let a = arena.alloc_unbound("A");
        let b = arena.alloc_unbound("B");
        crate::unify::unify(&mut arena, b, a);
        let lines = print_types(&mut arena);
        assert_eq!(lines, vec!["A".to_owned()]);
    }

    #[test]
    fn one_step_recursive_type_collapses_the_back_edge() {
        let mut arena = TvArena::new();
        let a = arena.alloc_unbound("A");
        let ar = arena.alloc_unbound("Ar");
        // A = (A Ar): a function from itself to Ar.
        crate::unify::unify_apply(&mut arena, a, a, ar);
        let lines = print_types(&mut arena);
        assert_eq!(lines[0], "A=(A Ar)");
    }
}
