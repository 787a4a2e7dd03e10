//! Shape generation for 2D primitives
//!
//! Vertices are produced in screen pixels (origin top-left, y down); the
//! pipeline maps them to clip space.

use super::vertex::Vertex;
use crate::sim::Rect;
use crate::ui::DrawCommand;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Triangle list for every rectangle in the frame; text is drawn elsewhere
pub fn frame_vertices(frame: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(frame.len() * 6);
    for cmd in frame {
        if let DrawCommand::Rect { rect: r, color } = cmd {
            vertices.extend_from_slice(&rect(r, *color));
        }
    }
    vertices
}
