//! The per-side bucket list: an ordered map from gain to the head of a
//! doubly-linked list of unlocked cells with that gain, backed by the intrusive
//! `ListNode` each cell owns in `PartitionState`.

use std::collections::BTreeMap;

use crate::hypergraph::{CellId, Side};
use crate::partition::state::PartitionState;

#[derive(Default)]
pub struct BucketList {
    /// gain -> head of the doubly-linked list of unlocked cells at that gain.
    heads: BTreeMap<i32, CellId>,
}

impl BucketList {
    /// Prepends `cell` to the list at `gain` (LIFO within a bucket, per the
    /// documented tie-break policy).
    pub fn insert(&mut self, state: &mut PartitionState, cell: CellId, gain: i32) {
        let old_head = self.heads.insert(gain, cell);
        state.nodes[cell].prev = None;
        state.nodes[cell].next = old_head;
        if let Some(head) = old_head {
            state.nodes[head].prev = Some(cell);
        }
    }

    /// Splices `cell` out of the list at `gain`, erasing the gain entry if the
    /// bucket becomes empty.
    pub fn remove(&mut self, state: &mut PartitionState, cell: CellId, gain: i32) {
        let prev = state.nodes[cell].prev;
        let next = state.nodes[cell].next;

        match prev {
            Some(p) => state.nodes[p].next = next,
            None => match next {
                Some(n) => {
                    self.heads.insert(gain, n);
                }
                None => {
                    self.heads.remove(&gain);
                }
            },
        }
        if let Some(n) = next {
            state.nodes[n].prev = prev;
        }

        state.nodes[cell].prev = None;
        state.nodes[cell].next = None;
    }

    /// The head cell under the largest gain key, if any.
    pub fn peek_max(&self) -> Option<(i32, CellId)> {
        self.heads.iter().next_back().map(|(&g, &c)| (g, c))
    }

    pub fn is_empty(&self) -> bool {
        self.heads.is_empty()
    }
}

/// Both sides' bucket lists, plus the merged, balance-constrained max-gain
/// search used by the pass driver (§4.5).
#[derive(Default)]
pub struct BucketSet {
    a: BucketList,
    b: BucketList,
}

impl BucketSet {
    pub fn side(&self, side: Side) -> &BucketList {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut BucketList {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }

    /// Walks bucket heads in descending gain order, merging both sides, and
    /// returns the first one whose side still satisfies the balance predicate.
    ///
    /// Only bucket *heads* are examined: the balance predicate depends solely
    /// on which side a candidate occupies, so every cell sharing a
    /// `(side, gain)` bucket is balance-equivalent, and the head is as good a
    /// representative as any other member of that bucket. On a cross-side gain
    /// tie, side A is preferred (documented tie-break policy).
    pub fn find_balanced_move(
        &self,
        is_balanced: impl Fn(Side) -> bool,
    ) -> Option<CellId> {
        let mut iter_a = self.a.heads.iter().rev().peekable();
        let mut iter_b = self.b.heads.iter().rev().peekable();

        loop {
            let take_a = match (iter_a.peek(), iter_b.peek()) {
                (None, None) => return None,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (Some(&(&ga, _)), Some(&(&gb, _))) => ga >= gb,
            };

            let (side, cell) = if take_a {
                let (_, &cell) = iter_a.next().unwrap();
                (Side::A, cell)
            } else {
                let (_, &cell) = iter_b.next().unwrap();
                (Side::B, cell)
            };

            if is_balanced(side) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_then_remove_empties_the_bucket() {
        let mut state = PartitionState {
            part: vec![Side::A],
            locked: vec![false],
            gain: vec![0],
            nodes: vec![Default::default()],
            net_part_count: vec![],
            part_size: [1, 0],
            unlocked: [1, 0],
            max_pin: 0,
        };
        let mut list = BucketList::default();
        list.insert(&mut state, 0, 3);
        assert_eq!(list.peek_max(), Some((3, 0)));
        list.remove(&mut state, 0, 3);
        assert!(list.is_empty());
        assert_eq!(list.peek_max(), None);
    }

    #[test]
    fn lifo_within_a_bucket() {
        let mut state = PartitionState {
            part: vec![Side::A, Side::A],
            locked: vec![false, false],
            gain: vec![0, 0],
            nodes: vec![Default::default(), Default::default()],
            net_part_count: vec![],
            part_size: [2, 0],
            unlocked: [2, 0],
            max_pin: 0,
        };
        let mut list = BucketList::default();
        list.insert(&mut state, 0, 1);
        list.insert(&mut state, 1, 1);
        // cell 1 was inserted last, so it is the new head.
        assert_eq!(list.peek_max(), Some((1, 1)));
        list.remove(&mut state, 1, 1);
        assert_eq!(list.peek_max(), Some((1, 0)));
    }

    #[test]
    fn merged_search_prefers_larger_gain_then_side_a_on_ties() {
        let mut state = PartitionState {
            part: vec![Side::A, Side::B, Side::A],
            locked: vec![false, false, false],
            gain: vec![2, 2, 5],
            nodes: vec![Default::default(); 3],
            net_part_count: vec![],
            part_size: [2, 1],
            unlocked: [2, 1],
            max_pin: 5,
        };
        let mut set = BucketSet::default();
        set.side_mut(Side::A).insert(&mut state, 0, 2);
        set.side_mut(Side::B).insert(&mut state, 1, 2);
        set.side_mut(Side::A).insert(&mut state, 2, 5);

        // Highest gain wins outright.
        let chosen = set.find_balanced_move(|_| true);
        assert_eq!(chosen, Some(2));

        // On a tie, side A is preferred.
        set.side_mut(Side::A).remove(&mut state, 2, 5);
        let chosen = set.find_balanced_move(|_| true);
        assert_eq!(chosen, Some(0));
    }
}
