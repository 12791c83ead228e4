//! Geometry and cost model.
//!
//! Dense Euclidean distance matrix plus route/solution length evaluation.

mod length;
mod matrix;

pub use length::{route_length, total_length};
pub use matrix::DistanceMatrix;
