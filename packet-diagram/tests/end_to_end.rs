/// End-to-end tests: load a definition → lay out → render SVG.
use packet_diagram::layout::ShapeKind;
use packet_diagram::observe::LayoutObserver;
use packet_diagram::render::Primitive;
use packet_diagram::{render, render_svg, render_with, DiagramConfig};
use pretty_assertions::assert_eq;

const IPV4: &str = include_str!("../../demos/ipv4.yaml");
const TCP: &str = include_str!("../../demos/tcp.toml");

fn count(primitives: &[Primitive], f: impl Fn(&Primitive) -> bool) -> usize {
    primitives.iter().filter(|p| f(p)).count()
}

#[test]
fn ipv4_header_scene() {
    let config = DiagramConfig::from_yaml_str(IPV4).unwrap();
    assert_eq!(config.total_bits(), 480);
    assert_eq!(config.total_rows(), 15);

    let scene = render(&config).unwrap();
    let polygons = count(&scene.primitives, |p| matches!(p, Primitive::Polygon { .. }));
    let curves = count(&scene.primitives, |p| matches!(p, Primitive::Cubic { .. }));
    assert_eq!(polygons, 14);
    assert_eq!(curves, 4);

    let y_labels: Vec<&str> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, class: "y-octet", .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(y_labels.len(), 15);
    assert_eq!(y_labels[0], "0");
    assert_eq!(y_labels[14], "56");
}

#[test]
fn ipv4_svg_document() {
    let config = DiagramConfig::from_yaml_str(IPV4).unwrap();
    let svg = render_svg(&config).unwrap();
    assert!(svg.contains(r#"id="background""#));
    assert!(svg.contains(">Destination Address</text>"));
    assert!(svg.contains(r#"class="x-octet title">octet</text>"#));
    assert_eq!(svg.matches("<polygon").count(), 14);
}

#[test]
fn tcp_header_from_toml() {
    let config = DiagramConfig::from_toml_str(TCP).unwrap();
    assert_eq!(config.total_bits(), 232);
    assert_eq!(config.total_rows(), 8);

    let svg = render_svg(&config).unwrap();
    assert!(svg.contains(">Options &amp; Padding</text>"));
    assert!(svg.contains("font-size:12px"));
    assert!(svg.contains("text.title{font-size:9px;}"));
}

struct Shapes(Vec<ShapeKind>);

impl LayoutObserver for Shapes {
    fn field_placed(&mut self, _index: usize, placed: &packet_diagram::layout::PlacedField<'_>) {
        self.0.push(placed.kind);
    }
}

#[test]
fn tcp_options_form_a_hook() {
    let config = DiagramConfig::from_toml_str(TCP).unwrap();
    let mut shapes = Shapes(Vec::new());
    render_with(&config, &mut shapes).unwrap();
    assert_eq!(shapes.0.len(), 11);
    assert_eq!(shapes.0[10], ShapeKind::Hook { flush: false });
    assert!(shapes.0[..10].iter().all(|k| *k == ShapeKind::Single));
}

#[test]
fn scene_serializes_to_json() {
    let config = DiagramConfig::from_yaml_str("placements:\n  - {label: a, bits: 8}\n").unwrap();
    let scene = render(&config).unwrap();
    let json = serde_json::to_value(&scene).unwrap();
    assert_eq!(json["primitives"][0]["type"], "rect");
    assert_eq!(json["primitives"][1]["type"], "polygon");
    assert_eq!(json["primitives"][2]["text"], "a");
}

#[test]
fn every_label_anchor_lies_in_its_polygon_box() {
    let config = DiagramConfig::from_yaml_str(IPV4).unwrap();
    let scene = render(&config).unwrap();
    let mut polygons = Vec::new();
    let mut anchors = Vec::new();
    for p in &scene.primitives {
        match p {
            Primitive::Polygon { points, .. } => polygons.push(points.clone()),
            Primitive::Text { position, class: "placement", .. } => anchors.push(*position),
            _ => {}
        }
    }
    assert_eq!(polygons.len(), anchors.len());
    for (points, anchor) in polygons.iter().zip(&anchors) {
        let min_x = points.iter().map(|p| p.x).min().unwrap();
        let max_x = points.iter().map(|p| p.x).max().unwrap();
        let min_y = points.iter().map(|p| p.y).min().unwrap();
        let max_y = points.iter().map(|p| p.y).max().unwrap();
        assert!((min_x..=max_x).contains(&anchor.x));
        assert!((min_y..=max_y).contains(&anchor.y));
        assert_eq!(points.first(), points.last());
    }
}
