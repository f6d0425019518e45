/// Width of a single field, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// A fixed number of bits.
    Fixed(u32),
    /// A variable-length field drawn at its maximum width, with break marks.
    Variable { max_bits: u32 },
}

impl FieldWidth {
    /// Number of bit columns the field occupies on the grid.
    pub fn bits(self) -> u32 {
        match self {
            FieldWidth::Fixed(n) => n,
            FieldWidth::Variable { max_bits } => max_bits,
        }
    }

    pub fn is_variable(self) -> bool {
        matches!(self, FieldWidth::Variable { .. })
    }
}

/// One labeled bit range of the packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub width: FieldWidth,
}

impl Field {
    pub fn fixed(label: impl Into<String>, bits: u32) -> Field {
        Field {
            label: label.into(),
            width: FieldWidth::Fixed(bits),
        }
    }

    pub fn variable(label: impl Into<String>, max_bits: u32) -> Field {
        Field {
            label: label.into(),
            width: FieldWidth::Variable { max_bits },
        }
    }

    pub fn bits(&self) -> u32 {
        self.width.bits()
    }
}

/// Sum of all field widths, counting variable fields at their maximum.
pub fn total_bits(fields: &[Field]) -> u64 {
    fields.iter().map(|f| u64::from(f.bits())).sum()
}

/// Number of grid rows needed to hold `total_bits`.
///
/// A layout that ends exactly on a row boundary does not get a trailing
/// empty row.
pub fn total_rows(total_bits: u64, bits_per_row: u32) -> u64 {
    total_bits.div_ceil(u64::from(bits_per_row))
}
