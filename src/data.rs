mod edge;
pub mod planar_graph;
pub(crate) mod point;
pub mod vertex;

pub use edge::*;
pub use planar_graph::PlanarGraph;
pub use point::Point;
pub use vertex::{Vertex, VertexId};
