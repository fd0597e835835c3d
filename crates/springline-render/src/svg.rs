//! Node-link SVG output for a graph plus its computed layout.

use std::fmt::Write as _;

use springline_core::Graph;

use crate::geom::Point;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Fixed canvas size in pixels. Not computed from the layout extents;
    /// callers that need autoscaling must post-process.
    pub width: f64,
    pub height: f64,
    /// Radius of the vertex circles. The index label sits this far to the
    /// right of the circle center.
    pub node_radius: f64,
    /// Shift applied to every coordinate so shapes at (0, 0) are not
    /// clipped at the canvas edge. Not a fit algorithm.
    pub margin: f64,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            width: 440.0,
            height: 440.0,
            node_radius: 5.0,
            margin: 20.0,
        }
    }
}

/// Renders `graph` at the positions in `layout` as an SVG 1.1 document.
///
/// Vertices become a circle plus a red index label; edges become line
/// segments between circle centers, drawn in input order. `layout` is
/// indexed by vertex, so it must cover every vertex exactly once, and every
/// edge endpoint must name a covered vertex — an out-of-range endpoint is
/// an error here, never a silently dropped edge.
pub fn render_svg(graph: &Graph, layout: &[Point], options: &SvgRenderOptions) -> Result<String> {
    if layout.len() != graph.vertex_count {
        return Err(Error::CoordinateCountMismatch {
            expected: graph.vertex_count,
            got: layout.len(),
        });
    }
    for (index, edge) in graph.edges.iter().enumerate() {
        for vertex in [edge.source, edge.target] {
            if vertex >= layout.len() {
                return Err(Error::EdgeEndpointOutOfRange {
                    edge: index,
                    vertex,
                    vertex_count: graph.vertex_count,
                });
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}px" height="{}px">"#,
        fmt(options.width),
        fmt(options.height)
    );

    for (index, position) in layout.iter().enumerate() {
        let cx = position.x + options.margin;
        let cy = position.y + options.margin;
        let _ = writeln!(
            &mut out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
            fmt(cx),
            fmt(cy),
            fmt(options.node_radius)
        );
        let _ = writeln!(
            &mut out,
            r#"<text x="{}" y="{}" fill="red">{index}</text>"#,
            fmt(cx + options.node_radius),
            fmt(cy)
        );
    }

    for edge in &graph.edges {
        let from = layout[edge.source];
        let to = layout[edge.target];
        let _ = writeln!(
            &mut out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black"/>"#,
            fmt(from.x + options.margin),
            fmt(from.y + options.margin),
            fmt(to.x + options.margin),
            fmt(to.y + options.margin)
        );
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form for SVG attributes, avoiding `-0` and
    // tiny float noise from the margin addition.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}
