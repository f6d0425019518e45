pub mod breakmark;
pub mod cursor;
pub mod distribution;
pub mod polygon;

use crate::field::Field;
use crate::observe::LayoutObserver;

pub use breakmark::{break_marks, Cubic};
pub use cursor::Cursor;
pub use distribution::{bit_distribution, BitDistribution};
pub use polygon::{field_polygons, BoundingBox, Grid, Point, Polygon, ShapeKind};

/// A field with its position on the grid and its outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedField<'a> {
    pub field: &'a Field,
    /// Cursor position where the field starts.
    pub start: Cursor,
    pub distribution: BitDistribution,
    pub kind: ShapeKind,
    pub polygons: Vec<Polygon>,
}

/// Place every field in order on a row-wrapping grid.
pub fn layout_fields<'a>(
    fields: &'a [Field],
    grid: &Grid,
    observer: &mut dyn LayoutObserver,
) -> Vec<PlacedField<'a>> {
    let mut cursor = Cursor::default();
    let mut placed = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let distribution = bit_distribution(grid.bits_per_row, cursor.column, field.bits());
        let (kind, polygons) = field_polygons(grid, cursor, &distribution);
        let p = PlacedField {
            field,
            start: cursor,
            distribution,
            kind,
            polygons,
        };
        cursor.advance(&p.distribution, grid.bits_per_row);
        observer.field_placed(index, &p);
        placed.push(p);
    }

    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::NoopObserver;

    fn grid() -> Grid {
        Grid {
            left: 0,
            top: 0,
            cell_width: 10,
            cell_height: 10,
            bits_per_row: 32,
        }
    }

    #[test]
    fn ipv4_first_row() {
        let fields = vec![
            Field::fixed("Version", 4),
            Field::fixed("IHL", 4),
            Field::fixed("DSCP", 6),
            Field::fixed("ECN", 2),
            Field::fixed("Total Length", 16),
            Field::fixed("Identification", 16),
        ];
        let placed = layout_fields(&fields, &grid(), &mut NoopObserver);
        let starts: Vec<(u32, u32)> = placed.iter().map(|p| (p.start.column, p.start.row)).collect();
        assert_eq!(starts, vec![(0, 0), (4, 0), (8, 0), (14, 0), (16, 0), (0, 1)]);
        assert!(placed.iter().all(|p| p.kind == ShapeKind::Single));
    }

    #[test]
    fn shapes_follow_cursor() {
        let fields = vec![
            Field::fixed("pad", 28),
            Field::fixed("split", 8),
            Field::variable("hook", 60),
        ];
        let placed = layout_fields(&fields, &grid(), &mut NoopObserver);
        assert_eq!(placed[1].kind, ShapeKind::Split);
        assert_eq!(placed[1].distribution.as_slice(), &[4, 4]);
        assert_eq!(placed[2].start, Cursor { column: 4, row: 1 });
        assert_eq!(placed[2].distribution.as_slice(), &[28, 32]);
        assert_eq!(placed[2].kind, ShapeKind::Hook { flush: true });
    }

    struct Recorder(Vec<(usize, String)>);

    impl LayoutObserver for Recorder {
        fn field_placed(&mut self, index: usize, placed: &PlacedField<'_>) {
            self.0.push((index, placed.field.label.clone()));
        }
    }

    #[test]
    fn observer_sees_every_field_in_order() {
        let fields = vec![Field::fixed("a", 8), Field::fixed("b", 40)];
        let mut rec = Recorder(Vec::new());
        layout_fields(&fields, &grid(), &mut rec);
        assert_eq!(rec.0, vec![(0, "a".to_string()), (1, "b".to_string())]);
    }
}
