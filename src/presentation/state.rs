use std::num::NonZeroUsize;

/// Snapshot of one presentation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub current_index: usize,
    pub is_auto_play: bool,
    pub is_full_screen: bool,
}

/// Position within a deck of `total` slides. The index is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    total: NonZeroUsize,
}

impl Cursor {
    pub fn new(total: NonZeroUsize) -> Self {
        Self { index: 0, total }
    }

    /// Cursor at `index`, or at the first slide when `index` is out of range.
    pub fn at(total: NonZeroUsize, index: usize) -> Self {
        let mut cursor = Self::new(total);
        cursor.jump_to(index);
        cursor
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> NonZeroUsize {
        self.total
    }

    pub fn next(&mut self) {
        self.index = next_index(self.index, self.total);
    }

    pub fn previous(&mut self) {
        self.index = previous_index(self.index, self.total);
    }

    /// Out-of-range targets are ignored. Returns whether the index moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.total.get() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.total.get() - 1;
    }

    pub fn percent(&self) -> u8 {
        progress_percent(self.index, self.total)
    }
}

pub fn next_index(index: usize, total: NonZeroUsize) -> usize {
    (index + 1) % total.get()
}

pub fn previous_index(index: usize, total: NonZeroUsize) -> usize {
    (index + total.get() - 1) % total.get()
}

/// `round((index + 1) / total * 100)`, halves rounding up.
pub fn progress_percent(index: usize, total: NonZeroUsize) -> u8 {
    let total = total.get();
    let position = (index + 1).min(total);
    let scaled = (position * 200 + total) / (2 * total);
    scaled as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(total: usize) -> NonZeroUsize {
        NonZeroUsize::new(total).unwrap()
    }

    #[test]
    fn next_cycles_back_to_start() {
        for total in 1..=12 {
            let mut cursor = Cursor::new(n(total));
            for _ in 0..total {
                cursor.next();
            }
            assert_eq!(cursor.index(), 0, "total = {total}");
        }
    }

    #[test]
    fn previous_wraps_to_last() {
        for total in 1..=12 {
            let mut cursor = Cursor::new(n(total));
            cursor.previous();
            assert_eq!(cursor.index(), total - 1);
        }
    }

    #[test]
    fn three_slides_sequence() {
        let mut cursor = Cursor::new(n(3));
        let mut seen = Vec::new();
        for _ in 0..3 {
            cursor.next();
            seen.push(cursor.index());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut cursor = Cursor::new(n(5));
        cursor.jump_to(2);
        assert!(!cursor.jump_to(5));
        assert!(!cursor.jump_to(usize::MAX));
        assert_eq!(cursor.index(), 2);
        assert!(!cursor.jump_to(2));
        assert!(cursor.jump_to(4));
        assert_eq!(cursor.index(), 4);
    }

    #[test]
    fn first_and_last() {
        let mut cursor = Cursor::at(n(7), 3);
        cursor.last();
        assert_eq!(cursor.index(), 6);
        cursor.first();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn at_clamps_to_start() {
        assert_eq!(Cursor::at(n(4), 9).index(), 0);
        assert_eq!(Cursor::at(n(4), 3).index(), 3);
    }

    #[test]
    fn percent_matches_rounding() {
        assert_eq!(progress_percent(0, n(30)), 3);
        assert_eq!(progress_percent(29, n(30)), 100);
        assert_eq!(progress_percent(0, n(8)), 13);
        assert_eq!(progress_percent(0, n(3)), 33);
        assert_eq!(progress_percent(1, n(3)), 67);
        assert_eq!(progress_percent(0, n(1)), 100);
        assert_eq!(progress_percent(0, n(40)), 3);
        assert_eq!(progress_percent(2, n(8)), 38);
    }
}
