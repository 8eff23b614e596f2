/// One structural or content edit against a displayed list.
///
/// Indices are relative to the list state produced by the ops before this
/// one. `Move` removes the item at `from`, then inserts it at `to` in the
/// shrunk list. `Rebind` positions are in final-list coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert { pos: usize },
    Remove { pos: usize },
    Move { from: usize, to: usize },
    Rebind { pos: usize },
}

/// Ordered edits transforming one list snapshot into the next.
///
/// Structural ops come first (removals in descending position, then moves
/// and inserts in target order), rebinds last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    pub ops: Vec<EditOp>,
}

/// Rendering-surface capability the script is replayed against.
pub trait ListUpdateTarget {
    fn apply_insert(&mut self, pos: usize);
    fn apply_remove(&mut self, pos: usize);
    fn apply_move(&mut self, from: usize, to: usize);
    fn apply_rebind(&mut self, pos: usize);
}

impl EditScript {
    /// True when the script changes no structure, only rebinds content.
    pub fn is_identity(&self) -> bool {
        self.ops
            .iter()
            .all(|op| matches!(op, EditOp::Rebind { .. }))
    }

    pub fn inserts(&self) -> usize {
        self.count(|op| matches!(op, EditOp::Insert { .. }))
    }

    pub fn removes(&self) -> usize {
        self.count(|op| matches!(op, EditOp::Remove { .. }))
    }

    pub fn moves(&self) -> usize {
        self.count(|op| matches!(op, EditOp::Move { .. }))
    }

    pub fn rebinds(&self) -> usize {
        self.count(|op| matches!(op, EditOp::Rebind { .. }))
    }

    pub fn dispatch_to(&self, target: &mut impl ListUpdateTarget) {
        for op in &self.ops {
            match *op {
                EditOp::Insert { pos } => target.apply_insert(pos),
                EditOp::Remove { pos } => target.apply_remove(pos),
                EditOp::Move { from, to } => target.apply_move(from, to),
                EditOp::Rebind { pos } => target.apply_rebind(pos),
            }
        }
    }

    fn count(&self, pred: impl Fn(&EditOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}
