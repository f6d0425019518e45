use crate::definition::{DiagramConfig, YAxisColumn};
use crate::error::UnitError;
use crate::units::text_size_to_pixels;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub fn new(width: i32, height: i32) -> Extent {
        Extent { width, height }
    }
}

/// Largest length, in pixels, a resolved definition may ask for. Canvas
/// sums add a handful of these, so they always fit `i32`.
pub const MAX_PIXELS: u32 = 1 << 24;

/// Gap between a label's baseline and the edge it sits against.
pub const LABEL_PAD: i32 = 4;

/// `count` cells of `size` pixels each.
///
/// Counts are unsigned everywhere; this is the one place they become
/// signed pixel coordinates. Out-of-range results saturate rather than wrap.
pub fn span(count: u32, size: i32) -> i32 {
    let px = i64::from(count) * i64::from(size);
    i32::try_from(px).unwrap_or(if px < 0 { i32::MIN } else { i32::MAX })
}

/// A configured length in pixels.
pub fn px(value: u32) -> i32 {
    span(value, 1)
}

/// Pixel geometry of a whole diagram, fixed before any field is placed.
///
/// The grid's top-left corner sits at `(y_axis.width, x_axis.height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub canvas: Extent,
    pub x_axis: Extent,
    pub y_axis: Extent,
    pub cell: Extent,
    pub break_mark: Extent,
    /// Extra room above the X axis for the Y axis titles (0 when the X axis
    /// is already tall enough).
    pub title_band: i32,
    /// Height of the octet band at the top of the X axis (0 when hidden).
    pub x_octets_height: i32,
    /// Height of the bit band below the octet band (0 when hidden).
    pub x_bits_height: i32,
    /// Width of the outer Y column (0 when hidden).
    pub y_octets_width: i32,
    /// Width of the Y column next to the grid (0 when hidden).
    pub y_bits_width: i32,
    pub text_px: i32,
    pub axis_title_px: i32,
    pub bits_per_row: u32,
    pub rows: u32,
}

impl Dimensions {
    /// Left edge of the grid.
    pub fn grid_left(&self) -> i32 {
        self.y_axis.width
    }

    /// Top edge of the grid.
    pub fn grid_top(&self) -> i32 {
        self.x_axis.height
    }

    /// Right edge of the last bit column.
    pub fn grid_right(&self) -> i32 {
        self.grid_left() + span(self.bits_per_row, self.cell.width)
    }

    /// Top edge of the X octet band.
    pub fn x_octets_top(&self) -> i32 {
        self.title_band
    }

    /// Top edge of the X bit band.
    pub fn x_bits_top(&self) -> i32 {
        self.title_band + self.x_octets_height
    }
}

fn decimal_digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}

fn y_column_width(column: Option<YAxisColumn>, total: u64, text_px: i32, title_width: i32) -> i32 {
    match column {
        None => 0,
        Some(YAxisColumn { width: Some(w), .. }) => px(w),
        Some(YAxisColumn { width: None, .. }) => span(decimal_digits(total), text_px).max(title_width),
    }
}

/// Derive the canvas, axis and cell geometry for a diagram.
pub fn calculate_dimensions(config: &DiagramConfig) -> Result<Dimensions, UnitError> {
    let text_px = px(text_size_to_pixels(&config.theme.text_size)?);
    let axis_title_px = px(text_size_to_pixels(&config.theme.axis_title_size)?);

    let cell = Extent::new(px(config.cell.width), px(config.cell.height));
    let break_mark = Extent::new(px(config.break_mark.width), px(config.break_mark.height));
    let bits_per_row = config.bits_per_row();
    let rows = config.total_rows();

    let x_octets_height = config.x_octets.map_or(0, |a| px(a.height));
    let x_bits_height = config.x_bits.map_or(0, |a| px(a.height));
    let x_shown = config.x_bits.is_some() || config.x_octets.is_some();
    let y_shown = config.y_bits.is_some() || config.y_octets.is_some();

    // Title widths leave room for "bit" and "octet" plus padding.
    let y_bits_width = y_column_width(config.y_bits, config.total_bits(), text_px, span(5, axis_title_px));
    let y_octets_width =
        y_column_width(config.y_octets, config.total_octets(), text_px, span(7, axis_title_px));

    // Y titles sit above the grid; make sure there is a band to hold them.
    let title_band = if y_shown {
        (axis_title_px + LABEL_PAD - x_octets_height - x_bits_height).max(0)
    } else {
        0
    };

    let grid = Extent::new(
        span(bits_per_row, cell.width) + break_mark.width / 2,
        span(rows, cell.height),
    );
    let x_axis = Extent::new(grid.width, title_band + x_octets_height + x_bits_height);
    let y_axis = Extent::new(y_bits_width + y_octets_width, grid.height);

    // X titles are anchored half a cell past the grid.
    let title_margin = if x_shown {
        cell.width / 2 + span(5, axis_title_px) + LABEL_PAD
    } else {
        0
    };

    Ok(Dimensions {
        canvas: Extent::new(
            y_axis.width + grid.width + title_margin,
            x_axis.height + grid.height,
        ),
        x_axis,
        y_axis,
        cell,
        break_mark,
        title_band,
        x_octets_height,
        x_bits_height,
        y_octets_width,
        y_bits_width,
        text_px,
        axis_title_px,
        bits_per_row,
        rows,
    })
}
