//! Rendering module
//!
//! Builds a backend-agnostic draw list from the simulation and turns its
//! shapes into clip-space vertex uploads for a GPU backend.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, DrawList, build_draw_list};
pub use shapes::{screen_to_ndc, tessellate};
pub use vertex::{Vertex, VertexUpload};
