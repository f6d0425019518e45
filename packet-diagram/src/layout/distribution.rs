use smallvec::{smallvec, SmallVec};

/// Bits of one field per row touched, in row order.
pub type BitDistribution = SmallVec<[u32; 4]>;

/// Split `bits` across rows, starting at `column` of a row `bits_per_row` wide.
///
/// The first entry fills the starting row, the middle entries are full rows,
/// and the last entry holds the remainder. A field that ends exactly on a row
/// boundary ends with a full-row entry, never an empty one.
pub fn bit_distribution(bits_per_row: u32, column: u32, bits: u32) -> BitDistribution {
    debug_assert!(column < bits_per_row, "column {column} outside row of {bits_per_row}");
    let room = bits_per_row - column;
    if room >= bits {
        return smallvec![bits];
    }

    let mut result: BitDistribution = smallvec![room];
    let mut remaining = bits - room;
    while remaining > 0 {
        if remaining < bits_per_row {
            result.push(remaining);
            break;
        }
        result.push(bits_per_row);
        remaining -= bits_per_row;
    }
    result
}
