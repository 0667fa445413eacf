//! `TopK`: bounded retention of the best-scoring combinations.
//!
//! # Ranking
//!
//! Candidates are ranked by `(score, −discovery_index)`: a higher score wins,
//! and on equal scores the earlier-discovered combination wins.  Since every
//! discovery index is unique the order is total, so the retained set and its
//! sorted output are deterministic regardless of the order candidates were
//! offered in.  That is what lets per-shard sets be merged in any order.
//!
//! # Memory
//!
//! A `BinaryHeap<Reverse<Candidate>>` keeps the current worst candidate at
//! the top.  Offers are O(log K); the heap never holds more than `capacity`
//! entries.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

// ── Candidate ─────────────────────────────────────────────────────────────────

/// A retained combination: its score, discovery index, and option choice.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub score:           f64,
    pub discovery_index: u64,
    /// Option index per course.
    pub choice:          Vec<usize>,
}

/// Greater means better.
#[inline]
fn rank(score_a: f64, index_a: u64, score_b: f64, index_b: u64) -> Ordering {
    score_a.total_cmp(&score_b).then_with(|| index_b.cmp(&index_a))
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        rank(self.score, self.discovery_index, other.score, other.discovery_index)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

// ── TopK ──────────────────────────────────────────────────────────────────────

/// Fixed-capacity min-structure over [`Candidate`]s.
#[derive(Clone, Debug)]
pub struct TopK {
    capacity: usize,
    /// Min-heap: `Reverse` puts the worst retained candidate on top.
    heap:     BinaryHeap<Reverse<Candidate>>,
}

impl TopK {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, heap: BinaryHeap::with_capacity(capacity) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The worst retained candidate, if any.
    pub fn worst(&self) -> Option<&Candidate> {
        self.heap.peek().map(|Reverse(c)| c)
    }

    /// `true` if a candidate with this key would be retained by [`offer`].
    ///
    /// [`offer`]: TopK::offer
    #[inline]
    pub fn would_accept(&self, score: f64, discovery_index: u64) -> bool {
        if self.capacity == 0 {
            return false;
        }
        match self.worst() {
            Some(worst) if self.heap.len() >= self.capacity => {
                rank(score, discovery_index, worst.score, worst.discovery_index)
                    == Ordering::Greater
            }
            _ => true,
        }
    }

    /// Offer a combination.  Returns `true` if it was retained.
    ///
    /// `choice` is only copied when the candidate is accepted, so rejected
    /// offers cost no allocation.
    pub fn offer(&mut self, score: f64, discovery_index: u64, choice: &[usize]) -> bool {
        if !self.would_accept(score, discovery_index) {
            return false;
        }
        self.push(Candidate { score, discovery_index, choice: choice.to_vec() });
        true
    }

    /// Fold another set into this one.  The result is the best `capacity`
    /// candidates of the union.
    pub fn merge(&mut self, other: TopK) {
        for Reverse(c) in other.heap {
            if self.would_accept(c.score, c.discovery_index) {
                self.push(c);
            }
        }
    }

    /// Drain into a vector sorted best-first.
    pub fn into_sorted_vec(self) -> Vec<Candidate> {
        // Ascending over Reverse<_> is descending over Candidate.
        self.heap.into_sorted_vec().into_iter().map(|Reverse(c)| c).collect()
    }

    fn push(&mut self, candidate: Candidate) {
        if self.heap.len() >= self.capacity {
            self.heap.pop();
        }
        self.heap.push(Reverse(candidate));
    }
}
