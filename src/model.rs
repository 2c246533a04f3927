mod coord;
mod error;
mod mask;
mod matrix;


pub use coord::{CoordKey, GridCoord, GridDims, decode, encode};
pub use error::{CoreError, Result};
pub use mask::{Mask, MaskChange, MaskDiff, MaskOp};
pub use matrix::DataMatrix;
