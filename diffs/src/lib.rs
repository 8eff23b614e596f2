pub mod script;

mod myers;

pub use script::{EditOp, EditScript, ListUpdateTarget};

/// Position-based comparison contract between two list snapshots.
///
/// `items_same` decides identity (the same logical row, wherever it sits),
/// `contents_same` decides whether an identical row still has to rebind its
/// displayed fields. The callback must answer consistently for the whole
/// computation; neither list may change while a diff runs.
pub trait DiffCallback {
    fn old_len(&self) -> usize;
    fn new_len(&self) -> usize;
    fn items_same(&self, old_pos: usize, new_pos: usize) -> bool;
    fn contents_same(&self, old_pos: usize, new_pos: usize) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Old(usize),
    New(usize),
}

/// Computes the edit script turning the old snapshot into the new one,
/// with move detection enabled.
pub fn calculate_diff(cb: &impl DiffCallback) -> EditScript {
    calculate_diff_with_moves(cb, true)
}

/// Same as [`calculate_diff`], but move detection can be switched off.
/// Without it an item that changed position dispatches as a remove plus
/// an insert.
pub fn calculate_diff_with_moves(cb: &impl DiffCallback, detect_moves: bool) -> EditScript {
    let old_len = cb.old_len();
    let new_len = cb.new_len();
    let matched = myers::match_table(cb);

    // pair_of_new[j] = (old position, reached j through a move)
    let mut pair_of_new: Vec<Option<(usize, bool)>> = vec![None; new_len];
    let mut pair_of_old: Vec<Option<usize>> = vec![None; old_len];

    for (i, m) in matched.iter().enumerate() {
        if let Some(j) = *m {
            pair_of_new[j] = Some((i, false));
            pair_of_old[i] = Some(j);
        }
    }

    if detect_moves {
        // pair leftover removals with leftover additions of the same identity
        let removed: Vec<usize> = (0..old_len).filter(|&i| pair_of_old[i].is_none()).collect();
        let mut added: Vec<usize> = (0..new_len).filter(|&j| pair_of_new[j].is_none()).collect();

        for i in removed {
            if let Some(slot) = added.iter().position(|&j| cb.items_same(i, j)) {
                let j = added.remove(slot);
                pair_of_new[j] = Some((i, true));
                pair_of_old[i] = Some(j);
            }
        }
    }

    let mut ops = Vec::new();
    let mut work: Vec<Tag> = (0..old_len).map(Tag::Old).collect();

    // removals first, in descending position so earlier indices stay valid
    for i in (0..old_len).rev() {
        if pair_of_old[i].is_none() {
            work.remove(i);
            ops.push(EditOp::Remove { pos: i });
        }
    }

    // then moves and inserts, walking the new list in order; matched items
    // stay where they are and movers slot in right behind their predecessor
    for (j, pair) in pair_of_new.iter().enumerate() {
        match *pair {
            Some((_, false)) => {}
            Some((i, true)) => {
                let from = position_of(&work, Tag::Old(i));
                work.remove(from);
                let to = insert_slot(&work, &pair_of_new, j);
                work.insert(to, Tag::Old(i));
                ops.push(EditOp::Move { from, to });
            }
            None => {
                let pos = insert_slot(&work, &pair_of_new, j);
                work.insert(pos, Tag::New(j));
                ops.push(EditOp::Insert { pos });
            }
        }
    }

    // every surviving row with stale content rebinds, in final coordinates
    for (j, pair) in pair_of_new.iter().enumerate() {
        if let Some((i, _)) = *pair {
            if !cb.contents_same(i, j) {
                ops.push(EditOp::Rebind { pos: j });
            }
        }
    }

    EditScript { ops }
}

fn position_of(work: &[Tag], tag: Tag) -> usize {
    // survivors are placed into the working copy before any lookup
    work.iter()
        .position(|&t| t == tag)
        .expect("survivor missing from working copy")
}

fn insert_slot(work: &[Tag], pair_of_new: &[Option<(usize, bool)>], j: usize) -> usize {
    if j == 0 {
        return 0;
    }

    let prev = match pair_of_new[j - 1] {
        Some((i, _)) => Tag::Old(i),
        None => Tag::New(j - 1),
    };

    position_of(work, prev) + 1
}
