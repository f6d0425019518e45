//! SVG serialization of a [`Scene`].

use std::fmt::{self, Write};

use crate::layout::Point;
use crate::render::{Primitive, Scene};

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_primitive<W: Write>(out: &mut W, primitive: &Primitive) -> fmt::Result {
    match primitive {
        Primitive::Rect {
            id,
            origin,
            width,
            height,
            fill,
        } => writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{width}" height="{height}" id="{id}" style="fill:{};stroke:none" />"#,
            origin.x,
            origin.y,
            escape_xml(fill)
        ),
        Primitive::Text {
            position,
            text,
            class,
        } => writeln!(
            out,
            r#"<text x="{}" y="{}" class="{class}">{}</text>"#,
            position.x,
            position.y,
            escape_xml(text)
        ),
        Primitive::Line { from, to, class } => writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="{class}" />"#,
            from.x, from.y, to.x, to.y
        ),
        Primitive::Polygon { points, class } => writeln!(
            out,
            r#"<polygon points="{}" class="{class}" />"#,
            points_attr(points)
        ),
        Primitive::Cubic { curve, class } => writeln!(
            out,
            r#"<path d="M{},{} C{},{} {},{} {},{}" class="{class}" />"#,
            curve.start.x,
            curve.start.y,
            curve.control1.x,
            curve.control1.y,
            curve.control2.x,
            curve.control2.y,
            curve.end.x,
            curve.end.y
        ),
    }
}

/// Write `scene` as a standalone SVG document.
pub fn write_svg<W: Write>(scene: &Scene, out: &mut W) -> fmt::Result {
    writeln!(out, r#"<?xml version="1.0"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = scene.width,
        h = scene.height
    )?;
    writeln!(out, r#"<style type="text/css"><![CDATA[{}]]></style>"#, scene.style)?;
    for primitive in &scene.primitives {
        write_primitive(out, primitive)?;
    }
    writeln!(out, "</svg>")
}

impl Scene {
    pub fn to_svg(&self) -> Result<String, fmt::Error> {
        let mut s = String::new();
        write_svg(self, &mut s)?;
        Ok(s)
    }
}
