use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A candidate cell in the open set, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f64,
    h: f64,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first. Equal f
        // prefers the smaller h, then the earlier insertion.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of `(f, cell index)` candidates.
///
/// There is no decrease-key: a cell whose `f` improves is pushed again and
/// the older, worse entry stays in the heap until popped. The search
/// discards such entries by checking the cell's closed flag.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Insert the cell at `idx` with total estimate `f` and heuristic `h`.
    pub(crate) fn push(&mut self, idx: usize, f: f64, h: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { f, h, seq, idx });
    }

    /// Remove and return the index of the minimum-`f` candidate.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_f_order() {
        let mut fr = Frontier::default();
        fr.push(1, 5.0, 1.0);
        fr.push(2, 2.5, 1.0);
        fr.push(3, 9.0, 0.0);
        fr.push(4, 0.0, 0.0);
        assert_eq!(fr.len(), 4);
        assert_eq!(fr.pop(), Some(4));
        assert_eq!(fr.pop(), Some(2));
        assert_eq!(fr.pop(), Some(1));
        assert_eq!(fr.pop(), Some(3));
        assert_eq!(fr.pop(), None);
        assert!(fr.is_empty());
    }

    #[test]
    fn ties_prefer_lower_h_then_insertion_order() {
        let mut fr = Frontier::with_capacity(4);
        fr.push(10, 4.0, 2.0);
        fr.push(11, 4.0, 1.0);
        fr.push(12, 4.0, 2.0);
        assert_eq!(fr.pop(), Some(11));
        assert_eq!(fr.pop(), Some(10));
        assert_eq!(fr.pop(), Some(12));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut fr = Frontier::default();
        fr.push(7, 6.0, 3.0);
        fr.push(7, 4.0, 3.0);
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.pop(), Some(7));
        assert_eq!(fr.pop(), Some(7));
        assert!(fr.is_empty());
    }
}
