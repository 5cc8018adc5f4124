//! Union-find unification over [`TvArena`] slots.
//!
//! No occurs-check: the types here are equi-recursive, so a cycle created by unifying a TV with
//! a shape that (transitively) contains itself is legal and simply denotes a recursive type,
//! detected later at print time rather than rejected here.

use crate::tv::{TvArena, TvId};

/// Unifies two existing TVs. The older of the two roots (lower allocation id) survives and
/// keeps its name; the newer one is forwarded to it.
pub fn unify(arena: &mut TvArena, a: TvId, b: TvId) {
    let root_a = arena.find(a);
    let root_b = arena.find(b);
    if root_a == root_b {
        return;
    }

    match (arena.shape(root_a), arena.shape(root_b)) {
        (None, None) => link(arena, root_a, root_b),
        (Some(_), None) => arena.set_forward(root_b, root_a),
        (None, Some(_)) => arena.set_forward(root_a, root_b),
        (Some((d1, c1)), Some((d2, c2))) => {
            link(arena, root_a, root_b);
            unify(arena, d1, d2);
            unify(arena, c1, c2);
        }
    }
}

/// Links two unbound (or, for the function/function case, already-shaped) roots, the older one
/// surviving.
fn link(arena: &mut TvArena, root_a: TvId, root_b: TvId) {
    let (survivor, loser) = if root_a < root_b {
        (root_a, root_b)
    } else {
        (root_b, root_a)
    };
    arena.set_forward(loser, survivor);
}

/// The application rule: unifies `callee`'s root against the shape `(arg -> result)`, growing a
/// fresh shape in place if `callee` was still unbound, or recursing structurally if it was
/// already function-shaped.
pub fn unify_apply(arena: &mut TvArena, callee: TvId, arg: TvId, result: TvId) {
    let root = arena.find(callee);
    match arena.shape(root) {
        None => arena.set_shape(root, arg, result),
        Some((dom, cod)) => {
            unify(arena, dom, arg);
            unify(arena, cod, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unifying_two_unbound_tvs_keeps_the_older_name() {
        let mut arena = TvArena::new();
        let x = arena.alloc_unbound("X");
        let y = arena.alloc_unbound("Y");
        unify(&mut arena, y, x);
        assert_eq!(arena.find(x), arena.find(y));
        let root = arena.find(x);
        assert_eq!(arena.own_name(root), "X");
    }

    #[test]
    fn unification_is_symmetric() {
        let mut arena1 = TvArena::new();
        let x1 = arena1.alloc_unbound("X");
        let y1 = arena1.alloc_unbound("Y");
        unify(&mut arena1, x1, y1);

        let mut arena2 = TvArena::new();
        let x2 = arena2.alloc_unbound("X");
        let y2 = arena2.alloc_unbound("Y");
        unify(&mut arena2, y2, x2);

        assert_eq!(arena1.find(x1), arena1.find(y1));
        assert_eq!(arena2.find(x2), arena2.find(y2));
    }

    #[test]
    fn unify_apply_grows_a_shape_on_an_unbound_callee() {
        let mut arena = TvArena::new();
        let callee = arena.alloc_unbound("F");
        let arg = arena.alloc_unbound("A");
        let result = arena.alloc_unbound("Fr");
        unify_apply(&mut arena, callee, arg, result);
        let root = arena.find(callee);
        assert_eq!(arena.shape(root), Some((arg, result)));
    }

    #[test]
    fn unify_apply_recurses_into_an_existing_shape() {
        let mut arena = TvArena::new();
        let d1 = arena.alloc_unbound("D1");
        let c1 = arena.alloc_unbound("C1");
        let f = arena.alloc_fn("F", d1, c1);

        let d2 = arena.alloc_unbound("D2");
        let c2 = arena.alloc_unbound("C2");
        unify_apply(&mut arena, f, d2, c2);

        assert_eq!(arena.find(d1), arena.find(d2));
        assert_eq!(arena.find(c1), arena.find(c2));
    }

    #[test]
    fn self_referential_shape_does_not_loop_forever() {
        // unify a TV with a function shape whose domain is itself: legal, equi-recursive.
        let mut arena = TvArena::new();
        let a = arena.alloc_unbound("A");
        let cod = arena.alloc_unbound("Ar");
        unify_apply(&mut arena, a, a, cod);
        let root = arena.find(a);
        let (dom, _) = arena.shape(root).expect("a should now be function-shaped");
        assert_eq!(arena.find(dom), root);
    }
}
