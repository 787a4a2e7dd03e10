//! WebGPU rendering module
//!
//! Draws the rectangles of a frame as flat-colored triangles. Text runs go
//! to the overlay canvas instead.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
