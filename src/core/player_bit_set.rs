/// A set of seat indices, used for the winners of a showdown.
///
/// Seats iterate in ascending order, which is also seating order.
///
/// ```
/// use showdown::core::PlayerBitSet;
///
/// let mut winners = PlayerBitSet::default();
/// winners.enable(3);
/// winners.enable(1);
/// assert_eq!(vec![1, 3], winners.ones().collect::<Vec<_>>());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerBitSet {
    set: u32,
}

impl PlayerBitSet {
    pub fn count(&self) -> usize {
        self.set.count_ones() as usize
    }
    pub fn empty(&self) -> bool {
        self.set == 0
    }
    pub fn enable(&mut self, idx: usize) {
        self.set |= 1 << idx;
    }
    pub fn clear(&mut self) {
        self.set = 0;
    }
    pub fn ones(self) -> ActivePlayerBitSetIter {
        ActivePlayerBitSetIter { set: self.set }
    }
}

impl FromIterator<usize> for PlayerBitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut s = Self::default();
        for idx in iter {
            s.enable(idx);
        }
        s
    }
}

pub struct ActivePlayerBitSetIter {
    set: u32,
}

impl Iterator for ActivePlayerBitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.set == 0 {
            None
        } else {
            // Find the index of the first non-zero
            let idx = self.set.trailing_zeros() as usize;
            // Then set the first non-zero to zero
            self.set &= !(1 << idx);
            // Then emit the next one
            Some(idx)
        }
    }
}
