use serde::Serialize;

use crate::axis::{self, Axis, AxisKind};
use crate::definition::DiagramConfig;
use crate::dimension::{calculate_dimensions, Dimensions};
use crate::error::RenderError;
use crate::layout::{self, break_marks, Cubic, Grid, PlacedField, Point};
use crate::observe::{LayoutObserver, NoopObserver};
use crate::style;

/// One drawing command for a vector backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Primitive {
    Rect {
        id: &'static str,
        origin: Point,
        width: i32,
        height: i32,
        fill: String,
    },
    Text {
        position: Point,
        text: String,
        class: &'static str,
    },
    Line {
        from: Point,
        to: Point,
        class: &'static str,
    },
    Polygon {
        points: Vec<Point>,
        class: &'static str,
    },
    Cubic {
        curve: Cubic,
        class: &'static str,
    },
}

/// A complete diagram as an ordered list of primitives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    /// CSS for the classes used by the primitives.
    pub style: String,
    pub primitives: Vec<Primitive>,
}

fn title_class(kind: AxisKind) -> &'static str {
    match kind {
        AxisKind::XBits => "x-bit title",
        AxisKind::XOctets => "x-octet title",
        AxisKind::YBits => "y-bit title",
        AxisKind::YOctets => "y-octet title",
    }
}

fn push_axis(out: &mut Vec<Primitive>, axis: Axis) {
    let class = axis.kind.class();
    out.extend(axis.rules.iter().map(|r| Primitive::Line {
        from: r.from,
        to: r.to,
        class,
    }));
    out.extend(axis.ticks.into_iter().map(|t| Primitive::Text {
        position: t.position,
        text: t.label,
        class,
    }));
    out.push(Primitive::Text {
        position: axis.title.position,
        text: axis.title.label,
        class: title_class(axis.kind),
    });
}

fn push_placement(out: &mut Vec<Primitive>, placed: &PlacedField<'_>, dim: &Dimensions) {
    for polygon in &placed.polygons {
        out.push(Primitive::Polygon {
            points: polygon.points.clone(),
            class: "placement",
        });
        if placed.field.width.is_variable() {
            out.extend(
                break_marks(&polygon.bounding_box(), dim.break_mark)
                    .into_iter()
                    .map(|curve| Primitive::Cubic {
                        curve,
                        class: "breakmark",
                    }),
            );
        }
        out.push(Primitive::Text {
            position: polygon.label_anchor(dim.cell.height),
            text: placed.field.label.clone(),
            class: "placement",
        });
    }
}

/// Lay out and draw a diagram without observing placements.
pub fn render(config: &DiagramConfig) -> Result<Scene, RenderError> {
    render_with(config, &mut NoopObserver)
}

/// Lay out and draw a diagram: background, X axis, Y axis, then fields.
pub fn render_with(config: &DiagramConfig, observer: &mut dyn LayoutObserver) -> Result<Scene, RenderError> {
    let dim = calculate_dimensions(config)?;
    let mut primitives = vec![Primitive::Rect {
        id: "background",
        origin: Point::new(0, 0),
        width: dim.canvas.width,
        height: dim.canvas.height,
        fill: config.theme.background_color.clone(),
    }];

    for axis in axis::axes(config, &dim) {
        push_axis(&mut primitives, axis);
    }

    let grid = Grid::from_dimensions(&dim);
    for placed in layout::layout_fields(&config.fields, &grid, observer) {
        push_placement(&mut primitives, &placed, &dim);
    }

    Ok(Scene {
        width: dim.canvas.width,
        height: dim.canvas.height,
        style: style::stylesheet(&config.theme),
        primitives,
    })
}

/// Lay out a diagram and serialize it as SVG.
pub fn render_svg(config: &DiagramConfig) -> Result<String, RenderError> {
    Ok(render(config)?.to_svg()?)
}
