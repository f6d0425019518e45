/// Position of the next free bit on the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Bit column, always in `0..bits_per_row`.
    pub column: u32,
    pub row: u32,
}

impl Cursor {
    /// Move past a field's distribution, wrapping at each row end.
    pub fn advance(&mut self, distribution: &[u32], bits_per_row: u32) {
        for &bits in distribution {
            self.column += bits;
            if self.column == bits_per_row {
                self.column = 0;
                self.row += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_row() {
        let mut cur = Cursor::default();
        cur.advance(&[8], 32);
        assert_eq!(cur, Cursor { column: 8, row: 0 });
    }

    #[test]
    fn wraps_at_row_end() {
        let mut cur = Cursor { column: 24, row: 0 };
        cur.advance(&[8], 32);
        assert_eq!(cur, Cursor { column: 0, row: 1 });
    }

    #[test]
    fn crosses_several_rows() {
        let mut cur = Cursor { column: 24, row: 2 };
        cur.advance(&[8, 32, 32, 8], 32);
        assert_eq!(cur, Cursor { column: 8, row: 5 });
    }
}
