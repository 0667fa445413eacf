//! `CombinationCursor`: lazy mixed-radix walk over the cartesian product.
//!
//! # Ordering
//!
//! Each course contributes one digit whose radix is its option count.  The
//! cursor counts through the digits like an odometer with the *last* course
//! varying fastest, which is lexicographic order over (course index, option
//! index):
//!
//! ```text
//! radices [2, 3]:  0:[0,0] 1:[0,1] 2:[0,2] 3:[1,0] 4:[1,1] 5:[1,2]
//! ```
//!
//! The cursor never materializes the product; it holds one digit vector and
//! the current linear index.  [`CombinationCursor::starting_at`] decodes any
//! linear index directly, which lets parallel shards begin mid-sequence.

/// Size of the cartesian product of `radices`, saturating at `u64::MAX`.
///
/// An empty radix list has no combinations.
pub fn total_combinations(radices: &[usize]) -> u64 {
    if radices.is_empty() {
        return 0;
    }
    radices
        .iter()
        .try_fold(1u64, |acc, &r| acc.checked_mul(r as u64))
        .unwrap_or(u64::MAX)
}

/// Odometer over option indices, one digit per course.
#[derive(Clone, Debug)]
pub struct CombinationCursor {
    radices:   Vec<usize>,
    digits:    Vec<usize>,
    index:     u64,
    exhausted: bool,
}

impl CombinationCursor {
    /// A cursor positioned at the first combination.
    pub fn new(radices: Vec<usize>) -> Self {
        Self::starting_at(radices, 0)
    }

    /// A cursor positioned at linear index `start`.
    ///
    /// Exhausted immediately if `start` is past the end, if `radices` is
    /// empty, or if any radix is zero.
    pub fn starting_at(radices: Vec<usize>, start: u64) -> Self {
        let total = total_combinations(&radices);
        let mut digits = vec![0; radices.len()];
        let exhausted = start >= total || radices.contains(&0);

        if !exhausted {
            let mut rest = start;
            for (digit, &radix) in digits.iter_mut().zip(&radices).rev() {
                let radix = radix as u64;
                *digit = (rest % radix) as usize;
                rest /= radix;
            }
        }

        Self { radices, digits, index: start, exhausted }
    }

    /// `(linear index, option index per course)` of the current position, or
    /// `None` once the product is exhausted.
    #[inline]
    pub fn current(&self) -> Option<(u64, &[usize])> {
        (!self.exhausted).then_some((self.index, self.digits.as_slice()))
    }

    /// Step to the next combination.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        self.index += 1;
        for (digit, &radix) in self.digits.iter_mut().zip(&self.radices).rev() {
            *digit += 1;
            if *digit < radix {
                return;
            }
            *digit = 0;
        }
        // Carried out of the most significant digit.
        self.exhausted = true;
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
