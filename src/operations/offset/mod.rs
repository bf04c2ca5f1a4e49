mod join;
mod polyline_offset_2d;

pub use join::{join_segments, JoinBias};
pub use polyline_offset_2d::{Offset, PolylineOffset2D};
