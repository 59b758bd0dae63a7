/// Cursor into a fixed cyclic sequence of `len` positions.
///
/// Each `advance` moves one step; after the last position it wraps to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCursor {
    position: usize,
    len: usize,
    ticks: u64,
}

impl AnimationCursor {
    pub const fn new(len: usize) -> Self {
        Self {
            position: 0,
            len,
            ticks: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of ticks seen since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Moves to the next position and returns it. An empty cursor stays at 0.
    pub fn advance(&mut self) -> usize {
        self.ticks = self.ticks.wrapping_add(1);
        if self.len > 0 {
            self.position = (self.position + 1) % self.len;
        }
        self.position
    }

    /// The element of `sequence` under the cursor.
    pub fn current<T: Copy>(&self, sequence: &[T]) -> Option<T> {
        sequence.get(self.position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    const DOUBLING: [u8; 7] = [1, 2, 4, 8, 7, 5, 1];

    #[test]
    fn test_cursor_walks_sequence_and_wraps() {
        let mut cursor = AnimationCursor::new(DOUBLING.len());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(&DOUBLING), Some(1));

        let mut seen = Vec::new();
        for _ in 0..DOUBLING.len() {
            seen.push(cursor.current(&DOUBLING).unwrap());
            cursor.advance();
        }
        assert_eq!(seen, DOUBLING.to_vec());
        assert_eq!(cursor.position(), 0, "wraps to index 0 after the last element");
        assert_eq!(cursor.ticks(), 7);
    }

    #[test]
    fn test_advance_returns_new_position() {
        let mut cursor = AnimationCursor::new(3);
        assert_eq!(cursor.advance(), 1);
        assert_eq!(cursor.advance(), 2);
        assert_eq!(cursor.advance(), 0);
    }

    #[test]
    fn test_empty_cursor_stays_put() {
        let mut cursor = AnimationCursor::new(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.advance(), 0);
        assert_eq!(cursor.current::<u8>(&[]), None);
    }
}
