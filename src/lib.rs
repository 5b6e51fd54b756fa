pub mod number;
pub mod error;
pub mod range;
pub mod grid;
pub mod mesh;

pub use number::*;
pub use error::*;
pub use range::{arange, sample_count, MAX_POINTS};
pub use grid::*;
pub use mesh::*;
