//! The type-variable arena: a union-find store over function-shaped or unbound slots.
//!
//! Every slot is created with a name at allocation time and that name never changes — unifying
//! two slots only ever changes which one is the *root*, never what either was originally called.
//! This is what makes the naming rules in the printer fall out of allocation order rather than
//! needing to be recomputed after the fact.

/// A handle into the [`TvArena`]. Cheap to copy; equality means "the very same slot", not "the
/// same type" — use [`TvArena::find`] to compare underlying types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TvId(u32);

impl TvId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Unbound,
    Forward(TvId),
    Fn(TvId, TvId),
}

#[derive(Debug, Default)]
pub struct TvArena {
    slots: Vec<Slot>,
    names: Vec<String>,
}

impl TvArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_unbound(&mut self, name: impl Into<String>) -> TvId {
        self.push(Slot::Unbound, name)
    }

    /// Allocates a brand-new function-shaped TV — used for a lambda's own type, which is never
    /// unified into existence, only created fresh with its shape already known.
    pub fn alloc_fn(&mut self, name: impl Into<String>, dom: TvId, cod: TvId) -> TvId {
        self.push(Slot::Fn(dom, cod), name)
    }

    fn push(&mut self, slot: Slot, name: impl Into<String>) -> TvId {
        let id = TvId(self.slots.len() as u32);
        self.slots.push(slot);
        self.names.push(name.into());
        id
    }

    /// The name this exact id was allocated with, regardless of whether it's still a root.
    pub fn own_name(&self, id: TvId) -> &str {
        &self.names[id.index()]
    }

    /// Finds the representative of `id`'s equivalence class, compressing the path as it goes.
    pub fn find(&mut self, id: TvId) -> TvId {
        match self.slots[id.index()] {
            Slot::Forward(next) => {
                let root = self.find(next);
                if root != next {
                    self.slots[id.index()] = Slot::Forward(root);
                }
                root
            }
            _ => id,
        }
    }

    /// The function shape of `id`'s root, if it has one. Does not itself path-compress.
    pub fn shape(&self, id: TvId) -> Option<(TvId, TvId)> {
        match self.slots[id.index()] {
            Slot::Fn(dom, cod) => Some((dom, cod)),
            _ => None,
        }
    }

    /// Unifies `a` and `b`. See [`crate::unify::unify`] for the algorithm; this just exposes the
    /// primitive `from` must currently be a root.
    pub(crate) fn set_forward(&mut self, from: TvId, to: TvId) {
        self.slots[from.index()] = Slot::Forward(to);
    }

    pub(crate) fn set_shape(&mut self, id: TvId, dom: TvId, cod: TvId) {
        self.slots[id.index()] = Slot::Fn(dom, cod);
    }

    /// All ids in allocation order, paired with their own (possibly now-aliased) name.
    pub fn allocations(&self) -> impl Iterator<Item = TvId> + '_ {
        (0..self.slots.len() as u32).map(TvId)
    }
}
