use serde::Serialize;

use super::cursor::Cursor;
use crate::dimension::{span, Dimensions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

/// Axis-aligned box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.left..=self.right).contains(&p.x) && (self.top..=self.bottom).contains(&p.y)
    }
}

/// A closed outline; the first vertex is repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn rectangle(left: i32, top: i32, right: i32, bottom: i32) -> Polygon {
        Polygon {
            points: vec![
                Point::new(left, top),
                Point::new(right, top),
                Point::new(right, bottom),
                Point::new(left, bottom),
                Point::new(left, top),
            ],
        }
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.points.first().copied().unwrap_or_default();
        self.points.iter().fold(
            BoundingBox {
                left: first.x,
                top: first.y,
                right: first.x,
                bottom: first.y,
            },
            |b, p| BoundingBox {
                left: b.left.min(p.x),
                top: b.top.min(p.y),
                right: b.right.max(p.x),
                bottom: b.bottom.max(p.y),
            },
        )
    }

    /// Where the field label goes: the box center, nudged down toward the
    /// text baseline.
    pub fn label_anchor(&self, cell_height: i32) -> Point {
        let c = self.bounding_box().center();
        Point::new(c.x, c.y + cell_height / 6)
    }
}

/// Which outline rule produced a field's polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// One rectangle inside a single row.
    Single,
    /// Two unconnected rectangles: tail of one row, head of the next.
    Split,
    /// One outline joining every touched row.
    Hook { flush: bool },
}

/// Pixel geometry of the bit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub left: i32,
    pub top: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    pub bits_per_row: u32,
}

impl Grid {
    pub fn from_dimensions(dim: &Dimensions) -> Grid {
        Grid {
            left: dim.grid_left(),
            top: dim.grid_top(),
            cell_width: dim.cell.width,
            cell_height: dim.cell.height,
            bits_per_row: dim.bits_per_row,
        }
    }

    fn x(&self, column: u32) -> i32 {
        self.left + span(column, self.cell_width)
    }

    fn y(&self, row: u32) -> i32 {
        self.top + span(row, self.cell_height)
    }
}

/// Build the outline(s) of a field from its distribution and the cursor
/// position before the field was placed.
pub fn field_polygons(grid: &Grid, cursor: Cursor, distribution: &[u32]) -> (ShapeKind, Vec<Polygon>) {
    let total: u32 = distribution.iter().sum();
    let ch = grid.cell_height;

    match distribution {
        [] => (ShapeKind::Single, Vec::new()),
        [bits] => {
            let top = grid.y(cursor.row);
            let rect = Polygon::rectangle(
                grid.x(cursor.column),
                top,
                grid.x(cursor.column + bits),
                top + ch,
            );
            (ShapeKind::Single, vec![rect])
        }
        [tail, head] if total <= grid.bits_per_row => {
            /*
                          ┌──────────┐
                          │   tail   │
                ┌───────┐ └──────────┘
                │ head  │
                └───────┘
            */
            let top1 = grid.y(cursor.row);
            let first = Polygon::rectangle(
                grid.x(cursor.column),
                top1,
                grid.x(cursor.column + tail),
                top1 + ch,
            );
            let top2 = grid.y(cursor.row + 1);
            let second = Polygon::rectangle(grid.x(0), top2, grid.x(*head), top2 + ch);
            (ShapeKind::Split, vec![first, second])
        }
        _ => {
            let polygon = hook_polygon(grid, cursor, distribution);
            let flush = distribution.last() == Some(&grid.bits_per_row);
            (ShapeKind::Hook { flush }, vec![polygon])
        }
    }
}

fn hook_polygon(grid: &Grid, cursor: Cursor, distribution: &[u32]) -> Polygon {
    let ch = grid.cell_height;
    let start = Point::new(grid.x(cursor.column), grid.y(cursor.row));
    let last_row = cursor
        .row
        .saturating_add(u32::try_from(distribution.len() - 1).unwrap_or(u32::MAX));
    let right = grid.x(grid.bits_per_row);
    let left = grid.left;
    let last = distribution.last().copied().unwrap_or(0);

    if last == grid.bits_per_row {
        /*
                  ┌───────────┐
                  │           │
            ┌─────┘           │
            │                 │
            └─────────────────┘
        */
        let bottom = grid.y(last_row) + ch;
        return Polygon {
            points: vec![
                start,
                Point::new(right, start.y),
                Point::new(right, bottom),
                Point::new(left, bottom),
                Point::new(left, start.y + ch),
                Point::new(start.x, start.y + ch),
                start,
            ],
        };
    }

    /*
              ┌───────────┐
              │           │
        ┌─────┘           │
        │           ┌─────┘
        └───────────┘
    */
    let step = grid.y(last_row);
    let end_x = grid.x(last);
    Polygon {
        points: vec![
            start,
            Point::new(right, start.y),
            Point::new(right, step),
            Point::new(end_x, step),
            Point::new(end_x, step + ch),
            Point::new(left, step + ch),
            Point::new(left, start.y + ch),
            Point::new(start.x, start.y + ch),
            start,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::distribution::bit_distribution;

    fn grid() -> Grid {
        Grid {
            left: 50,
            top: 40,
            cell_width: 30,
            cell_height: 30,
            bits_per_row: 32,
        }
    }

    fn place(column: u32, row: u32, bits: u32) -> (ShapeKind, Vec<Polygon>) {
        let g = grid();
        let cursor = Cursor { column, row };
        field_polygons(&g, cursor, &bit_distribution(g.bits_per_row, column, bits))
    }

    #[test]
    fn single_row_rectangle() {
        let (kind, polys) = place(0, 0, 16);
        assert_eq!(kind, ShapeKind::Single);
        assert_eq!(polys, vec![Polygon::rectangle(50, 40, 530, 70)]);
    }

    #[test]
    fn short_field_straddling_a_wrap_is_split() {
        let (kind, polys) = place(28, 1, 8);
        assert_eq!(kind, ShapeKind::Split);
        assert_eq!(
            polys,
            vec![
                Polygon::rectangle(50 + 28 * 30, 70, 50 + 32 * 30, 100),
                Polygon::rectangle(50, 100, 50 + 4 * 30, 130),
            ]
        );
    }

    #[test]
    fn wide_field_over_two_rows_is_a_hook() {
        let (kind, polys) = place(20, 0, 40);
        assert_eq!(kind, ShapeKind::Hook { flush: false });
        assert_eq!(polys.len(), 1);
        let xs: Vec<i32> = polys[0].points.iter().map(|p| p.x).collect();
        let ys: Vec<i32> = polys[0].points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![650, 1010, 1010, 890, 890, 50, 50, 650, 650]);
        assert_eq!(ys, vec![40, 40, 70, 70, 100, 100, 70, 70, 40]);
    }

    #[test]
    fn flush_hook_has_seven_vertices() {
        let (kind, polys) = place(16, 0, 80);
        assert_eq!(kind, ShapeKind::Hook { flush: true });
        let p = &polys[0];
        assert_eq!(p.points.len(), 7);
        assert!(p.is_closed());
        assert_eq!(p.points[2], Point::new(1010, 40 + 3 * 30));
        assert_eq!(p.points[4], Point::new(50, 70));
    }

    #[test]
    fn multi_row_hook_steps_in_at_last_row() {
        let (kind, polys) = place(24, 0, 80);
        assert_eq!(kind, ShapeKind::Hook { flush: false });
        let p = &polys[0];
        assert_eq!(p.points.len(), 9);
        // Last row holds 8 bits.
        assert_eq!(p.points[3], Point::new(50 + 8 * 30, 40 + 3 * 30));
        assert_eq!(p.points[5], Point::new(50, 40 + 4 * 30));
    }

    #[test]
    fn bounding_box_and_label_anchor() {
        let (_, polys) = place(20, 0, 40);
        let b = polys[0].bounding_box();
        assert_eq!(
            b,
            BoundingBox {
                left: 50,
                top: 40,
                right: 1010,
                bottom: 100
            }
        );
        let anchor = polys[0].label_anchor(30);
        assert_eq!(anchor, Point::new(530, 75));
        assert!(b.contains(anchor));
    }
}
