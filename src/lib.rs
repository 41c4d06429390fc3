// Public library interface for palette-layout
// Pure computation only: the renderer that turns rects into SVG/PNG lives elsewhere

pub mod error;
pub mod fit;
pub mod geometry;
pub mod layout;

pub use error::{LayoutError, Result};
