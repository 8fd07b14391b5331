//! SVG drawing for cantilever diagrams
//!
//! Renders the loaded beam schematic and the shear, moment and deflection
//! diagrams as standalone SVG documents.

use std::fmt::Write as _;

use cantilever_core::calculations::{CantileverInput, CantileverResult};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const GRID_DIVISIONS: usize = 5;

/// RGB color, components in 0..=1
#[derive(Debug, Clone, Copy)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
}

impl Color {
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    fn css(self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

pub const BEAM_COLOR: Color = Color::from_rgb(0.3, 0.3, 0.3);
pub const LOAD_COLOR: Color = Color::from_rgb(0.7, 0.2, 0.2);
pub const SHEAR_COLOR: Color = Color::from_rgb(0.2, 0.5, 0.8);
pub const MOMENT_COLOR: Color = Color::from_rgb(0.8, 0.4, 0.2);
pub const DEFLECTION_COLOR: Color = Color::from_rgb(0.2, 0.7, 0.3);
const AXIS_COLOR: Color = Color::from_rgb(0.1, 0.1, 0.1);
const GRID_COLOR: Color = Color::from_rgb(0.85, 0.85, 0.85);

/// Accumulates SVG elements for one document
struct Frame {
    body: String,
}

impl Frame {
    fn new() -> Self {
        let mut body = String::with_capacity(16_384);
        let _ = writeln!(
            body,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = WIDTH,
            h = HEIGHT
        );
        let _ = writeln!(body, r#"<rect width="100%" height="100%" fill="white"/>"#);
        Frame { body }
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            color.css(),
            width
        );
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: Color, width: f64) {
        let _ = writeln!(
            self.body,
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            point_list(points),
            color.css(),
            width
        );
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: Color, opacity: f64) {
        let _ = writeln!(
            self.body,
            r#"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            point_list(points),
            color.css(),
            opacity
        );
    }

    fn text(&mut self, content: &str, at: (f64, f64), size: f64, anchor: &str, color: Color) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
            at.0,
            at.1,
            size,
            anchor,
            color.css(),
            escape(content)
        );
    }

    fn vertical_text(&mut self, content: &str, at: (f64, f64), size: f64) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">{text}</text>"#,
            x = at.0,
            y = at.1,
            size = size,
            text = escape(content)
        );
    }

    fn finish(mut self) -> String {
        self.body.push_str("</svg>\n");
        self.body
    }
}

fn point_list(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Maps beam coordinates onto the plot area
struct PlotArea {
    length_m: f64,
    y_min: f64,
    y_max: f64,
}

impl PlotArea {
    /// The value range always includes zero and is padded by 10%.
    fn new(length_m: f64, values: &[f64]) -> Self {
        let (lo, hi) = values
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = hi - lo;
        let pad = if span > 0.0 { span * 0.1 } else { 1.0 };
        PlotArea {
            length_m,
            y_min: lo - pad,
            y_max: hi + pad,
        }
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN_LEFT + x / self.length_m * (WIDTH - MARGIN_LEFT - MARGIN_RIGHT)
    }

    fn py(&self, v: f64) -> f64 {
        let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (self.y_max - v) / (self.y_max - self.y_min) * plot_h
    }
}

/// One response field to plot against x
pub struct FieldPlot<'a> {
    pub title: &'a str,
    pub y_label: &'a str,
    pub positions_m: &'a [f64],
    pub values: &'a [f64],
    pub color: Color,
}

/// Line plot of a field with grid, zero axis, title and axis labels.
pub fn render_field(plot: &FieldPlot) -> String {
    let length = plot.positions_m.last().copied().unwrap_or(1.0);
    let area = PlotArea::new(length, plot.values);
    let mut frame = Frame::new();

    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    // Grid and tick labels
    for k in 0..=GRID_DIVISIONS {
        let t = k as f64 / GRID_DIVISIONS as f64;

        let x = length * t;
        let gx = area.px(x);
        frame.line((gx, top), (gx, bottom), GRID_COLOR, 1.0);
        frame.text(&format!("{:.2}", x), (gx, bottom + 18.0), 11.0, "middle", AXIS_COLOR);

        let v = area.y_min + (area.y_max - area.y_min) * t;
        let gy = area.py(v);
        frame.line((left, gy), (right, gy), GRID_COLOR, 1.0);
        frame.text(&format!("{:.3e}", v), (left - 6.0, gy + 4.0), 11.0, "end", AXIS_COLOR);
    }

    // Zero axis
    let zero = area.py(0.0);
    frame.line((left, zero), (right, zero), AXIS_COLOR, 1.0);

    let curve: Vec<(f64, f64)> = plot
        .positions_m
        .iter()
        .zip(plot.values)
        .map(|(&x, &v)| (area.px(x), area.py(v)))
        .collect();

    if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
        let mut fill = Vec::with_capacity(curve.len() + 2);
        fill.push((first.0, zero));
        fill.extend_from_slice(&curve);
        fill.push((last.0, zero));
        frame.polygon(&fill, plot.color, 0.25);
    }
    frame.polyline(&curve, plot.color, 2.0);

    frame.text(plot.title, (WIDTH / 2.0, 28.0), 16.0, "middle", AXIS_COLOR);
    frame.text("x [m]", ((left + right) / 2.0, HEIGHT - 15.0), 13.0, "middle", AXIS_COLOR);
    frame.vertical_text(plot.y_label, (18.0, (top + bottom) / 2.0), 13.0);

    frame.finish()
}

/// Beam schematic: fixed wall, beam line, load arrow with its magnitude.
pub fn render_load(input: &CantileverInput) -> String {
    let length = input.beam.length_m;
    let area = PlotArea::new(length, &[]);
    let mut frame = Frame::new();

    let beam_y = HEIGHT * 0.55;
    let x0 = area.px(0.0);
    let x_end = area.px(length);

    // Fixed support with hatching
    let wall_half = 50.0;
    frame.line((x0, beam_y - wall_half), (x0, beam_y + wall_half), BEAM_COLOR, 4.0);
    let mut y = beam_y - wall_half;
    while y < beam_y + wall_half {
        frame.line((x0, y), (x0 - 12.0, y + 12.0), BEAM_COLOR, 1.0);
        y += 10.0;
    }

    frame.line((x0, beam_y), (x_end, beam_y), BEAM_COLOR, 6.0);

    // Load arrow, pointing in the load direction
    let f = input.load.magnitude_n;
    let xa = area.px(input.load.position_m);
    let arrow_len = 90.0;
    let head = 10.0;
    let (tail_y, tip_y) = if f >= 0.0 {
        (beam_y - arrow_len, beam_y - 4.0)
    } else {
        (beam_y + arrow_len, beam_y + 4.0)
    };
    let dir = if f >= 0.0 { 1.0 } else { -1.0 };
    frame.line((xa, tail_y), (xa, tip_y), LOAD_COLOR, 2.5);
    frame.polygon(
        &[
            (xa, tip_y),
            (xa - head * 0.6, tip_y - dir * head),
            (xa + head * 0.6, tip_y - dir * head),
        ],
        LOAD_COLOR,
        1.0,
    );
    frame.text(
        &format!("F = {:.1} N", f),
        (xa, tail_y - dir * 8.0),
        14.0,
        "middle",
        LOAD_COLOR,
    );

    // Load position dimension
    let dim_y = beam_y + 70.0;
    frame.line((x0, dim_y), (xa, dim_y), AXIS_COLOR, 1.0);
    frame.line((x0, dim_y - 5.0), (x0, dim_y + 5.0), AXIS_COLOR, 1.0);
    frame.line((xa, dim_y - 5.0), (xa, dim_y + 5.0), AXIS_COLOR, 1.0);
    frame.text(
        &format!("a = {:.3} m", input.load.position_m),
        ((x0 + xa) / 2.0, dim_y + 18.0),
        12.0,
        "middle",
        AXIS_COLOR,
    );
    frame.text(
        &format!("L = {:.3} m", length),
        (x_end, beam_y + 30.0),
        12.0,
        "end",
        AXIS_COLOR,
    );

    frame.text("Load", (WIDTH / 2.0, 28.0), 16.0, "middle", AXIS_COLOR);
    frame.finish()
}

/// Rendered SVG documents keyed by file name
pub fn render_all(
    input: &CantileverInput,
    result: &CantileverResult,
) -> Vec<(&'static str, String)> {
    let x = result.axis.positions();
    let fields = &result.fields;

    vec![
        ("load.svg", render_load(input)),
        (
            "shear.svg",
            render_field(&FieldPlot {
                title: "Shear Force",
                y_label: "V [N]",
                positions_m: x,
                values: &fields.shear_n,
                color: SHEAR_COLOR,
            }),
        ),
        (
            "moment.svg",
            render_field(&FieldPlot {
                title: "Bending Moment",
                y_label: "M [N·m]",
                positions_m: x,
                values: &fields.moment_nm,
                color: MOMENT_COLOR,
            }),
        ),
        (
            "deflection.svg",
            render_field(&FieldPlot {
                title: "Deflection",
                y_label: "y [m]",
                positions_m: x,
                values: &fields.deflection_m,
                color: DEFLECTION_COLOR,
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantilever_core::calculations::analyze;
    use cantilever_core::model::LoadCase;

    #[test]
    fn test_color_css() {
        assert_eq!(Color::from_rgb(1.0, 0.0, 0.0).css(), "#ff0000");
        assert_eq!(SHEAR_COLOR.css(), "#3380cc");
    }

    #[test]
    fn test_plot_area_includes_zero() {
        let area = PlotArea::new(2.0, &[-5.0, -1.0]);
        assert!(area.y_max > 0.0);
        assert!(area.y_min < -5.0);
        assert_eq!(area.px(0.0), MARGIN_LEFT);
        assert_eq!(area.px(2.0), WIDTH - MARGIN_RIGHT);
        assert!(area.py(0.0) < area.py(-5.0));
    }

    #[test]
    fn test_flat_field_still_renders() {
        let svg = render_field(&FieldPlot {
            title: "Zero",
            y_label: "V [N]",
            positions_m: &[0.0, 1.0],
            values: &[0.0, 0.0],
            color: SHEAR_COLOR,
        });
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_load_label() {
        let input = CantileverInput::default();
        let svg = render_load(&input);
        assert!(svg.contains("F = 1000.0 N"));
        assert!(svg.contains("a = 0.700 m"));
    }

    #[test]
    fn test_upward_load_arrow() {
        let input = CantileverInput {
            load: LoadCase::new(-250.0, 0.5),
            ..CantileverInput::default()
        };
        assert!(render_load(&input).contains("F = -250.0 N"));
    }

    #[test]
    fn test_render_all_files() {
        let input = CantileverInput::default();
        let result = analyze(&input).unwrap();
        let docs = render_all(&input, &result);

        let names: Vec<_> = docs.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["load.svg", "shear.svg", "moment.svg", "deflection.svg"]);
        assert!(docs[1].1.contains("V [N]"));
        assert!(docs[2].1.contains("M [N·m]"));
        assert!(docs[3].1.contains("y [m]"));
        assert!(docs[3].1.contains("x [m]"));
        for (name, svg) in &docs {
            assert!(!svg.contains("NaN"), "{} contains NaN", name);
        }
    }
}
