pub mod legalize;
pub mod picking;

#[doc(inline)]
pub use picking::{nearest_edge, nearest_vertex, pick, Pick};
