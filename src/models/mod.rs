//! Domain model types.
//!
//! Customers with demands and time windows, the homogeneous-fleet instance,
//! depot-to-depot routes, and the route-set solution candidate.

mod customer;
mod instance;
mod route;
mod solution;

pub use customer::{Customer, TimeWindow};
pub use instance::Instance;
pub use route::Route;
pub use solution::Solution;
