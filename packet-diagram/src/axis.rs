use serde::Serialize;

use crate::definition::{BitDirection, DiagramConfig, XBitsAxis, YAxisColumn};
use crate::dimension::{span, Dimensions, LABEL_PAD};
use crate::layout::Point;

/// Length of the short tick rules on the bit axes.
const RULE_LEN: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisKind {
    XBits,
    XOctets,
    YBits,
    YOctets,
}

impl AxisKind {
    /// CSS class shared by the axis' text and lines.
    pub fn class(self) -> &'static str {
        match self {
            AxisKind::XBits => "x-bit",
            AxisKind::XOctets => "x-octet",
            AxisKind::YBits => "y-bit",
            AxisKind::YOctets => "y-octet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub position: Point,
    pub label: String,
}

impl AxisTick {
    fn new(x: i32, y: i32, label: impl Into<String>) -> AxisTick {
        AxisTick {
            position: Point::new(x, y),
            label: label.into(),
        }
    }
}

/// A tick line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub kind: AxisKind,
    pub ticks: Vec<AxisTick>,
    /// Trailing "bit" / "octet" label.
    pub title: AxisTick,
    pub rules: Vec<Rule>,
}

fn x_bit_label(axis: &XBitsAxis, index: u32) -> String {
    let i = index % axis.unit;
    let n = match axis.direction {
        BitDirection::LeftToRight => u64::from(axis.origin) + u64::from(i),
        BitDirection::RightToLeft => u64::from(axis.origin) + u64::from(axis.unit - i),
    };
    n.to_string()
}

/// One label per bit column, in the band below the octet band.
pub fn x_bits_axis(axis: &XBitsAxis, dim: &Dimensions) -> Axis {
    let cw = dim.cell.width;
    let band_top = dim.x_bits_top();
    let band_bottom = band_top + dim.x_bits_height;
    let y = band_top + dim.cell.height - LABEL_PAD;

    let ticks: Vec<AxisTick> = (0..dim.bits_per_row)
        .map(|i| AxisTick::new(dim.grid_left() + span(i, cw) + cw / 2, y, x_bit_label(axis, i)))
        .collect();
    let title_x = ticks.last().map_or(dim.grid_left(), |t| t.position.x) + cw;

    let rules = (0..=dim.bits_per_row)
        .map(|i| {
            let x = dim.grid_left() + span(i, cw);
            Rule {
                from: Point::new(x, band_bottom - RULE_LEN),
                to: Point::new(x, band_bottom),
            }
        })
        .collect();

    Axis {
        kind: AxisKind::XBits,
        ticks,
        title: AxisTick::new(title_x, y, "bit"),
        rules,
    }
}

/// One label per byte column, centered over its eight bits.
pub fn x_octets_axis(dim: &Dimensions) -> Axis {
    let byte_width = span(8, dim.cell.width);
    let octets = dim.bits_per_row / 8;
    let top = dim.x_octets_top();
    let y = top + dim.x_octets_height * 3 / 4;

    let ticks = (0..octets)
        .map(|i| AxisTick::new(dim.grid_left() + span(i, byte_width) + byte_width / 2, y, i.to_string()))
        .collect();
    let rules = (0..=octets)
        .map(|i| {
            let x = dim.grid_left() + span(i, byte_width);
            Rule {
                from: Point::new(x, top),
                to: Point::new(x, top + dim.x_octets_height),
            }
        })
        .collect();

    Axis {
        kind: AxisKind::XOctets,
        ticks,
        title: AxisTick::new(dim.grid_right() + dim.cell.width / 2, y, "octet"),
        rules,
    }
}

/// One label per row, right-aligned against the right edge of the column
/// spanning `column_left..column_right`.
fn y_axis(
    kind: AxisKind,
    column: &YAxisColumn,
    per_row: u32,
    (column_left, column_right): (i32, i32),
    dim: &Dimensions,
) -> Axis {
    let ch = dim.cell.height;
    let x = (column_right - LABEL_PAD).max(column_left);

    let ticks = (0..dim.rows)
        .map(|row| {
            let top = dim.grid_top() + span(row, ch);
            let label = u64::from(column.origin) + u64::from(row) * u64::from(per_row);
            AxisTick::new(x, top + ch / 2 + ch / 6, label.to_string())
        })
        .collect();
    let rules = (0..=dim.rows)
        .map(|row| {
            let y = dim.grid_top() + span(row, ch);
            Rule {
                from: Point::new(column_right - RULE_LEN, y),
                to: Point::new(column_right, y),
            }
        })
        .collect();
    let title = match kind {
        AxisKind::YOctets => "octet",
        _ => "bit",
    };

    Axis {
        kind,
        ticks,
        title: AxisTick::new(x, dim.grid_top() - LABEL_PAD, title),
        rules,
    }
}

/// Row labels counting bits from the top of the packet.
pub fn y_bits_axis(column: &YAxisColumn, dim: &Dimensions) -> Axis {
    let columns = (dim.y_octets_width, dim.y_axis.width);
    y_axis(AxisKind::YBits, column, dim.bits_per_row, columns, dim)
}

/// Row labels counting octets from the top of the packet.
pub fn y_octets_axis(column: &YAxisColumn, dim: &Dimensions) -> Axis {
    y_axis(AxisKind::YOctets, column, dim.bits_per_row / 8, (0, dim.y_octets_width), dim)
}

/// Every visible axis, in drawing order.
pub fn axes(config: &DiagramConfig, dim: &Dimensions) -> Vec<Axis> {
    let mut out = Vec::with_capacity(4);
    if config.x_octets.is_some() {
        out.push(x_octets_axis(dim));
    }
    if let Some(bits) = &config.x_bits {
        out.push(x_bits_axis(bits, dim));
    }
    if let Some(octets) = &config.y_octets {
        out.push(y_octets_axis(octets, dim));
    }
    if let Some(bits) = &config.y_bits {
        out.push(y_bits_axis(bits, dim));
    }
    out
}
